//! Scene cameras.
//!
//! Cameras live behind a trait so render paths can swap implementations
//! (follow camera, iso camera, VR head pose) without touching the scheduler.
//! `init` runs once on a scene's first frame; `update` runs every frame the
//! scene renders, against the game clock normally or the debug clock in
//! free-camera mode.

use crate::foundation::math::Vec3;
use crate::foundation::time::Time;
use crate::input::ControlsState;
use crate::scene::Scene;

/// Minimal camera pose a render target needs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Look-at target in world space.
    pub target: Vec3,
}

/// A camera bound to one scene.
pub trait SceneCamera {
    /// One-time setup against a freshly loaded scene.
    fn init(&mut self, scene: &Scene, controls: &ControlsState);

    /// Per-frame tracking update.
    fn update(&mut self, scene: &Scene, controls: &ControlsState, time: Time);

    /// Snap back onto the scene's subject (hero). Default: no-op.
    fn center_on(&mut self, _scene: &Scene) {}

    /// Current pose handed to the render target.
    fn pose(&self) -> CameraPose;
}

/// Third-person camera trailing the hero at a fixed offset, easing toward
/// its desired position instead of hard-locking to it.
#[derive(Debug, Clone)]
pub struct FollowCamera {
    pose: CameraPose,
    /// Trailing distance behind the hero.
    pub distance: f32,
    /// Height above the hero.
    pub height: f32,
    /// Easing stiffness; higher snaps faster.
    pub stiffness: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl FollowCamera {
    /// Create a follow camera with the default framing.
    pub fn new() -> Self {
        Self {
            pose: CameraPose::default(),
            distance: 4.0,
            height: 2.0,
            stiffness: 5.0,
        }
    }

    fn desired_pose(scene: &Scene, distance: f32, height: f32) -> Option<CameraPose> {
        let hero = scene.hero()?;
        let (sin, cos) = hero.physics.angle.sin_cos();
        let behind = Vec3::new(-sin * distance, height, -cos * distance);
        Some(CameraPose {
            position: hero.physics.position + behind,
            target: hero.physics.position,
        })
    }
}

impl SceneCamera for FollowCamera {
    fn init(&mut self, scene: &Scene, _controls: &ControlsState) {
        if let Some(pose) = Self::desired_pose(scene, self.distance, self.height) {
            self.pose = pose;
        }
    }

    fn update(&mut self, scene: &Scene, _controls: &ControlsState, time: Time) {
        let Some(desired) = Self::desired_pose(scene, self.distance, self.height) else {
            return;
        };
        let t = (time.delta * self.stiffness).min(1.0);
        self.pose.position += (desired.position - self.pose.position) * t;
        self.pose.target = desired.target;
    }

    fn center_on(&mut self, scene: &Scene) {
        if let Some(pose) = Self::desired_pose(scene, self.distance, self.height) {
            self.pose = pose;
        }
    }

    fn pose(&self) -> CameraPose {
        self.pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::actor::{Actor, ActorProps, ActorStaticFlags};
    use approx::assert_relative_eq;

    fn scene_with_hero(pos: [f32; 3]) -> Scene {
        let mut scene = Scene::new(0);
        scene.actors.push(Actor::from_props(ActorProps {
            index: 0,
            pos,
            life: 50,
            static_flags: ActorStaticFlags::empty(),
            entity_index: 0,
            body_index: 0,
            anim_index: 0,
            angle: 0.0,
            speed: 10.0,
        }));
        scene
    }

    #[test]
    fn test_init_snaps_behind_the_hero() {
        let scene = scene_with_hero([1.0, 0.0, 2.0]);
        let mut camera = FollowCamera::new();
        camera.init(&scene, &ControlsState::default());
        let pose = camera.pose();
        // Hero faces +Z, camera trails on -Z.
        assert_relative_eq!(pose.position, Vec3::new(1.0, 2.0, -2.0), epsilon = 1e-5);
        assert_relative_eq!(pose.target, Vec3::new(1.0, 0.0, 2.0), epsilon = 1e-5);
    }

    #[test]
    fn test_update_eases_toward_the_hero() {
        let mut scene = scene_with_hero([0.0, 0.0, 0.0]);
        let mut camera = FollowCamera::new();
        camera.init(&scene, &ControlsState::default());
        let before = camera.pose().position;

        if let Some(hero) = scene.hero_mut() {
            hero.physics.position = Vec3::new(0.0, 0.0, 10.0);
        }
        camera.update(
            &scene,
            &ControlsState::default(),
            Time {
                delta: 0.016,
                elapsed: 0.016,
            },
        );
        let after = camera.pose().position;
        // Moved toward the new desired position, but not all the way.
        assert!(after.z > before.z);
        assert!(after.z < 6.0);
        assert_relative_eq!(camera.pose().target, Vec3::new(0.0, 0.0, 10.0), epsilon = 1e-6);
    }

    #[test]
    fn test_center_on_snaps_instantly() {
        let mut scene = scene_with_hero([0.0, 0.0, 0.0]);
        let mut camera = FollowCamera::new();
        camera.init(&scene, &ControlsState::default());
        if let Some(hero) = scene.hero_mut() {
            hero.physics.position = Vec3::new(8.0, 0.0, 8.0);
        }
        camera.center_on(&scene);
        assert_relative_eq!(camera.pose().target, Vec3::new(8.0, 0.0, 8.0), epsilon = 1e-6);
    }

    #[test]
    fn test_empty_scene_keeps_previous_pose() {
        let scene = Scene::new(0);
        let mut camera = FollowCamera::new();
        camera.update(
            &scene,
            &ControlsState::default(),
            Time {
                delta: 0.016,
                elapsed: 0.016,
            },
        );
        assert_eq!(camera.pose(), CameraPose::default());
    }
}
