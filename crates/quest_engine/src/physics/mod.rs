//! Physics pass.
//!
//! Runs once per scene per frame, after every actor has been individually
//! updated and before the camera. It applies each live actor's pending
//! motion step to its position, then resolves actor-actor overlap and marks
//! hit state. Transient hit markers are reset at the start of the scene
//! pass, before any actor update, so stale results never leak across frames.

use crate::foundation::math::Vec3;
use crate::foundation::time::Time;
use crate::game::actor::{Actor, ActorStaticFlags};

/// Planar collision radius of one actor. Scene data carries no per-actor
/// bounds in this excerpt of the format, so a uniform capsule footprint is
/// used.
pub const ACTOR_COLLISION_RADIUS: f32 = 0.5;

/// A colliding actor pair, smaller index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionPair {
    /// Lower actor index.
    pub first: usize,
    /// Higher actor index.
    pub second: usize,
}

impl CollisionPair {
    /// Create a pair in canonical (sorted) order.
    pub fn new(a: usize, b: usize) -> Self {
        if a < b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }
}

/// Clear per-frame transient hit markers. Must run before any actor update.
pub fn reset_hit_state(actors: &mut [Actor]) {
    for actor in actors {
        actor.was_hit_by = None;
    }
}

fn collides(actor: &Actor) -> bool {
    !actor.is_killed
        && !actor.is_sprite
        && actor
            .props
            .static_flags
            .contains(ActorStaticFlags::COLLIDE_WITH_OBJ)
}

/// Apply pending motion steps and resolve actor-actor overlap.
///
/// Response model: overlapping pairs are pushed apart symmetrically along
/// the planar separation axis by half the penetration each, and both sides
/// get `was_hit_by` set to the other's index. Coincident actors separate
/// along +X so the outcome stays deterministic. Returns the pairs that
/// collided this frame.
pub fn process_physics_frame(actors: &mut [Actor], _time: Time) -> Vec<CollisionPair> {
    // Integrate the steps computed by the motion model.
    for actor in actors.iter_mut() {
        if actor.is_killed {
            continue;
        }
        let step = actor.physics.step;
        actor.physics.position += step;
    }

    // Narrow phase over every pair. Actor counts per scene are small enough
    // that a broad phase would cost more than it saves.
    let mut pairs = Vec::new();
    let count = actors.len();
    for i in 0..count {
        for j in (i + 1)..count {
            let (left, right) = actors.split_at_mut(j);
            let a = &mut left[i];
            let b = &mut right[0];
            if !collides(a) || !collides(b) {
                continue;
            }

            let mut axis = Vec3::new(
                b.physics.position.x - a.physics.position.x,
                0.0,
                b.physics.position.z - a.physics.position.z,
            );
            let distance = axis.norm();
            let min_distance = 2.0 * ACTOR_COLLISION_RADIUS;
            if distance >= min_distance {
                continue;
            }
            if distance <= f32::EPSILON {
                axis = Vec3::x();
            } else {
                axis /= distance;
            }

            let push = (min_distance - distance) * 0.5;
            a.physics.position -= axis * push;
            b.physics.position += axis * push;
            a.was_hit_by = Some(b.index);
            b.was_hit_by = Some(a.index);
            pairs.push(CollisionPair::new(a.index, b.index));
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::actor::ActorProps;
    use approx::assert_relative_eq;

    fn collider(index: usize, pos: [f32; 3]) -> Actor {
        Actor::from_props(ActorProps {
            index,
            pos,
            life: 10,
            static_flags: ActorStaticFlags::COLLIDE_WITH_OBJ,
            entity_index: 0,
            body_index: 0,
            anim_index: 0,
            angle: 0.0,
            speed: 10.0,
        })
    }

    fn time() -> Time {
        Time {
            delta: 0.016,
            elapsed: 1.0,
        }
    }

    #[test]
    fn test_pair_order_is_canonical() {
        assert_eq!(CollisionPair::new(3, 1), CollisionPair::new(1, 3));
    }

    #[test]
    fn test_steps_are_applied_to_positions() {
        let mut actors = vec![collider(0, [0.0, 0.0, 0.0])];
        actors[0].physics.step = Vec3::new(0.0, 0.0, 0.25);
        process_physics_frame(&mut actors, time());
        assert_relative_eq!(actors[0].physics.position.z, 0.25, epsilon = 1e-6);
    }

    #[test]
    fn test_overlap_pushes_both_apart_symmetrically() {
        let mut actors = vec![collider(0, [0.0, 0.0, 0.0]), collider(1, [0.5, 0.0, 0.0])];
        let pairs = process_physics_frame(&mut actors, time());
        assert_eq!(pairs, vec![CollisionPair::new(0, 1)]);
        // Pushed to exactly touching: one radius each side of the midpoint.
        assert_relative_eq!(actors[0].physics.position.x, -0.25, epsilon = 1e-5);
        assert_relative_eq!(actors[1].physics.position.x, 0.75, epsilon = 1e-5);
        assert_eq!(actors[0].was_hit_by, Some(1));
        assert_eq!(actors[1].was_hit_by, Some(0));
    }

    #[test]
    fn test_coincident_actors_separate_deterministically() {
        let mut actors = vec![collider(0, [1.0, 0.0, 1.0]), collider(1, [1.0, 0.0, 1.0])];
        process_physics_frame(&mut actors, time());
        assert!(actors[0].physics.position.x < actors[1].physics.position.x);
        assert_relative_eq!(
            actors[1].physics.position.x - actors[0].physics.position.x,
            2.0 * ACTOR_COLLISION_RADIUS,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_killed_actors_are_ignored() {
        let mut actors = vec![collider(0, [0.0, 0.0, 0.0]), collider(1, [0.1, 0.0, 0.0])];
        actors[1].kill();
        actors[1].physics.step = Vec3::new(1.0, 0.0, 0.0);
        let before = actors[1].physics.position;
        let pairs = process_physics_frame(&mut actors, time());
        assert!(pairs.is_empty());
        assert_eq!(actors[0].was_hit_by, None);
        // Killed actors neither move nor block.
        assert_eq!(actors[1].physics.position, before);
    }

    #[test]
    fn test_non_colliding_flags_pass_through() {
        let mut a = collider(0, [0.0, 0.0, 0.0]);
        a.props.static_flags = ActorStaticFlags::empty();
        let mut actors = vec![a, collider(1, [0.1, 0.0, 0.0])];
        let pairs = process_physics_frame(&mut actors, time());
        assert!(pairs.is_empty());
        assert_eq!(actors[1].was_hit_by, None);
    }

    #[test]
    fn test_reset_clears_hit_markers() {
        let mut actors = vec![collider(0, [0.0, 0.0, 0.0]), collider(1, [0.2, 0.0, 0.0])];
        process_physics_frame(&mut actors, time());
        assert!(actors[0].was_hit_by.is_some());
        reset_hit_state(&mut actors);
        assert_eq!(actors[0].was_hit_by, None);
        assert_eq!(actors[1].was_hit_by, None);
    }

    #[test]
    fn test_vertical_separation_does_not_prevent_contact() {
        // Collision footprint is planar; height difference is ignored.
        let mut actors = vec![collider(0, [0.0, 0.0, 0.0]), collider(1, [0.3, 5.0, 0.0])];
        let pairs = process_physics_frame(&mut actors, time());
        assert_eq!(pairs.len(), 1);
    }
}
