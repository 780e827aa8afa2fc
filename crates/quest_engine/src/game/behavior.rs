//! Actor behavior (script) seam.
//!
//! Behaviors run first in the per-actor update and may drive the motion model
//! through its transitions (`goto`, `set_angle`, `stop`). A failing behavior
//! is reported once and skipped for the frame; it never aborts the scene
//! pass.

use crate::foundation::time::Time;
use crate::game::actor::Actor;
use thiserror::Error;

/// Errors raised by actor behaviors.
#[derive(Error, Debug)]
pub enum BehaviorError {
    /// The behavior hit an unrecoverable script condition.
    #[error("script failure: {0}")]
    Script(String),

    /// The behavior referenced a scene resource that is not available.
    #[error("missing resource: {0}")]
    MissingResource(String),
}

/// Per-actor script hook, run once per frame before animation and motion.
///
/// Side effects must stay confined to the actor passed in; cross-actor
/// effects go through the physics pass or the command queue.
pub trait ActorBehavior {
    /// Run one frame of script logic against the owning actor.
    fn run(&mut self, actor: &mut Actor, time: Time) -> Result<(), BehaviorError>;
}

/// Walks a fixed loop of waypoints, re-targeting whenever the current one is
/// reached.
#[derive(Debug, Clone)]
pub struct Patrol {
    waypoints: Vec<crate::foundation::math::Vec3>,
    current: usize,
    arrive_radius: f32,
}

impl Patrol {
    /// Create a patrol over the given waypoints. An empty list is legal and
    /// leaves the actor untouched.
    pub fn new(waypoints: Vec<crate::foundation::math::Vec3>) -> Self {
        Self {
            waypoints,
            current: 0,
            arrive_radius: 0.2,
        }
    }

    /// Index of the waypoint currently targeted.
    pub fn current_waypoint(&self) -> usize {
        self.current
    }
}

impl ActorBehavior for Patrol {
    fn run(&mut self, actor: &mut Actor, _time: Time) -> Result<(), BehaviorError> {
        let Some(target) = self.waypoints.get(self.current).copied() else {
            return Ok(());
        };
        if actor.get_distance(&target) <= self.arrive_radius {
            self.current = (self.current + 1) % self.waypoints.len();
        }
        let next = self.waypoints[self.current];
        actor.goto(next);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::game::actor::{ActorProps, ActorStaticFlags};

    fn test_actor() -> Actor {
        Actor::from_props(ActorProps {
            index: 1,
            pos: [0.0, 0.0, 0.0],
            life: 10,
            static_flags: ActorStaticFlags::empty(),
            entity_index: 0,
            body_index: 0,
            anim_index: 0,
            angle: 0.0,
            speed: 10.0,
        })
    }

    #[test]
    fn test_patrol_targets_first_waypoint() {
        let mut actor = test_actor();
        let mut patrol = Patrol::new(vec![Vec3::new(0.0, 0.0, 5.0), Vec3::new(5.0, 0.0, 5.0)]);
        patrol.run(&mut actor, Time::default()).unwrap();
        assert!(actor.is_walking());
        assert_eq!(actor.physics.destination, Some(Vec3::new(0.0, 0.0, 5.0)));
    }

    #[test]
    fn test_patrol_advances_on_arrival() {
        let mut actor = test_actor();
        let mut patrol = Patrol::new(vec![Vec3::new(0.0, 0.0, 5.0), Vec3::new(5.0, 0.0, 5.0)]);
        actor.physics.position = Vec3::new(0.0, 0.0, 4.95);
        patrol.run(&mut actor, Time::default()).unwrap();
        assert_eq!(patrol.current_waypoint(), 1);
        assert_eq!(actor.physics.destination, Some(Vec3::new(5.0, 0.0, 5.0)));
    }

    #[test]
    fn test_empty_patrol_is_a_no_op() {
        let mut actor = test_actor();
        let mut patrol = Patrol::new(Vec::new());
        patrol.run(&mut actor, Time::default()).unwrap();
        assert!(!actor.is_walking());
        assert!(!actor.is_turning());
    }
}
