//! Animation playback state and the model/animation provider seam.

use crate::foundation::math::{Mat4, Quat, Vec3};
use crate::foundation::time::Time;

/// Animation playback cursor for one actor.
///
/// Owned by the actor, reset on respawn or state change, and consumed
/// read-only by rendering. The step vector is the displacement of the
/// current keyframe in model space; the motion model scales it by elapsed
/// time and rotates it into world space.
#[derive(Debug, Clone)]
pub struct AnimState {
    /// Per-keyframe displacement in model space.
    pub step: Vec3,
    /// Duration of one keyframe sample, in milliseconds. Zero means the
    /// provider has not populated this state yet; walking displacement is
    /// skipped until it does.
    pub keyframe_length: f32,
    /// Whether playback is running this frame.
    pub is_playing: bool,
    /// World rotation cache for the renderer, refreshed from the actor's
    /// orientation before the model update each frame.
    pub rotation: Mat4,
}

impl Default for AnimState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimState {
    /// Create an empty playback state awaiting its first model update.
    pub fn new() -> Self {
        Self {
            step: Vec3::zeros(),
            keyframe_length: 0.0,
            is_playing: false,
            rotation: Mat4::identity(),
        }
    }

    /// Reset playback, keeping nothing from the previous animation.
    pub fn reset(&mut self) {
        self.step = Vec3::zeros();
        self.keyframe_length = 0.0;
        self.is_playing = false;
        self.rotation = Mat4::identity();
    }

    /// Refresh the cached rotation matrix from an orientation quaternion.
    pub fn set_rotation_from_orientation(&mut self, orientation: &Quat) {
        self.rotation = orientation.to_homogeneous();
    }
}

/// Model/animation collaborator (opaque to the update unit).
///
/// Given an actor's entity/body/animation indices and the frame time, the
/// provider advances the playback cursor: step vector, keyframe length and
/// playing flag. Asset loading and keyframe decoding live behind this seam.
pub trait ModelProvider {
    /// Advance the animation cursor for one actor for this frame.
    fn update_model(
        &mut self,
        anim: &mut AnimState,
        entity_index: i32,
        body_index: i32,
        anim_index: i32,
        time: Time,
    );
}

/// Provider that supplies no animation data. Actors degrade to "no visual
/// update" without aborting the frame, which is the required behavior for
/// missing model references.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullModelProvider;

impl ModelProvider for NullModelProvider {
    fn update_model(
        &mut self,
        _anim: &mut AnimState,
        _entity_index: i32,
        _body_index: i32,
        _anim_index: i32,
        _time: Time,
    ) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::angles::yaw_quaternion;
    use crate::foundation::math::constants::PI;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_state_is_not_playing() {
        let anim = AnimState::new();
        assert!(!anim.is_playing);
        assert_eq!(anim.step, Vec3::zeros());
        assert_eq!(anim.keyframe_length, 0.0);
    }

    #[test]
    fn test_reset_discards_playback() {
        let mut anim = AnimState::new();
        anim.step = Vec3::new(0.0, 0.0, 1.0);
        anim.keyframe_length = 120.0;
        anim.is_playing = true;
        anim.reset();
        assert!(!anim.is_playing);
        assert_eq!(anim.step, Vec3::zeros());
        assert_eq!(anim.keyframe_length, 0.0);
        assert_eq!(anim.rotation, Mat4::identity());
    }

    #[test]
    fn test_rotation_cache_matches_orientation() {
        let mut anim = AnimState::new();
        let q = yaw_quaternion(PI / 2.0);
        anim.set_rotation_from_orientation(&q);
        let rotated = anim.rotation.transform_vector(&Vec3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(rotated, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-6);
    }
}
