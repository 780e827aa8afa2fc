//! Extras: transient, non-scripted world effects (projectiles, particle
//! proxies) updated alongside actors every frame.

use crate::foundation::math::Vec3;
use crate::foundation::time::Time;

/// Default downward acceleration applied to extras, in units per second^2.
pub const EXTRA_GRAVITY: f32 = 9.8;

/// A transient world effect with ballistic motion and a lifetime.
///
/// Expired extras are skipped by updates and removed at the frame-safe sweep
/// point, never mid-iteration.
#[derive(Debug, Clone)]
pub struct Extra {
    /// Current world position.
    pub position: Vec3,
    /// Current velocity in units per second.
    pub velocity: Vec3,
    /// Downward acceleration; zero for drifting particles.
    pub gravity: f32,
    /// Remaining lifetime in seconds.
    pub ttl: f32,
}

impl Extra {
    /// Spawn an extra with the given trajectory and lifetime.
    pub fn new(position: Vec3, velocity: Vec3, ttl: f32) -> Self {
        Self {
            position,
            velocity,
            gravity: EXTRA_GRAVITY,
            ttl,
        }
    }

    /// Spawn an extra unaffected by gravity.
    pub fn new_drifting(position: Vec3, velocity: Vec3, ttl: f32) -> Self {
        Self {
            position,
            velocity,
            gravity: 0.0,
            ttl,
        }
    }

    /// Integrate one frame of ballistic motion and age the lifetime.
    pub fn update(&mut self, time: Time) {
        if self.is_expired() {
            return;
        }
        self.velocity.y -= self.gravity * time.delta;
        self.position += self.velocity * time.delta;
        self.ttl -= time.delta;
    }

    /// Whether this extra's lifetime has run out.
    pub fn is_expired(&self) -> bool {
        self.ttl <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_drifting_extra_moves_linearly() {
        let mut extra = Extra::new_drifting(Vec3::zeros(), Vec3::new(2.0, 0.0, 1.0), 1.0);
        extra.update(Time {
            delta: 0.5,
            elapsed: 0.5,
        });
        assert_relative_eq!(extra.position, Vec3::new(1.0, 0.0, 0.5), epsilon = 1e-6);
    }

    #[test]
    fn test_gravity_bends_trajectory() {
        let mut extra = Extra::new(Vec3::zeros(), Vec3::new(0.0, 5.0, 0.0), 2.0);
        extra.update(Time {
            delta: 0.1,
            elapsed: 0.1,
        });
        assert!(extra.velocity.y < 5.0);
        assert!(extra.position.y > 0.0);
    }

    #[test]
    fn test_expiry_freezes_the_extra() {
        let mut extra = Extra::new_drifting(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0), 0.05);
        extra.update(Time {
            delta: 0.1,
            elapsed: 0.1,
        });
        assert!(extra.is_expired());
        let frozen = extra.position;
        extra.update(Time {
            delta: 0.1,
            elapsed: 0.2,
        });
        assert_eq!(extra.position, frozen);
    }
}
