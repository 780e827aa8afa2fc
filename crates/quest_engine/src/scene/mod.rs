//! Scene tree: actors, extras, editor points, scenery, camera, VR overlay,
//! and nested side-scenes sharing the same update contract.

pub mod camera;
pub mod point;
pub mod update;

pub use camera::{CameraPose, FollowCamera, SceneCamera};
pub use point::ScenePoint;
pub use update::{update_scene, GameContext};

use crate::foundation::time::Time;
use crate::game::actor::Actor;
use crate::game::extra::Extra;
use crate::input::ControlsState;
use crate::render::SceneView;

/// Scenery/grid provider (external collaborator): world backdrop animation.
/// Runs only for the active scene; side-scene backdrops stay frozen.
pub trait Scenery {
    /// Advance scenery animation for one frame.
    fn update(&mut self, game: &GameContext, scene: &Scene, time: Time);
}

/// In-scene VR overlay GUI. Updated as part of the scene pass so its widgets
/// track simulation time.
#[derive(Debug, Clone, Default)]
pub struct VrGui {
    /// Whether the overlay is currently shown.
    pub visible: bool,
    last_elapsed: f32,
}

impl VrGui {
    /// Create a hidden overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance overlay animation.
    pub fn update(&mut self, _controls: &ControlsState, time: Time) {
        self.last_elapsed = time.elapsed;
    }

    /// Simulation time of the last overlay update.
    pub fn last_elapsed(&self) -> f32 {
        self.last_elapsed
    }
}

/// A scene: one node of the update tree.
///
/// Owns its actors, extras, points and side-scenes exclusively. The lists are
/// stable snapshots during the update pass; additions and removals happen
/// only between frames (see [`Scene::sweep`]). Exactly one scene is active
/// per render target.
pub struct Scene {
    /// Scene identifier (island/section id from scene data).
    pub id: usize,
    /// Whether this scene is the active one for its render target.
    pub is_active: bool,
    /// True only for the first update after load; cleared by the frame
    /// driver after the first pass.
    pub first_frame: bool,
    /// Actor arena; indices are stable, index 0 is the hero.
    pub actors: Vec<Actor>,
    /// Transient world effects.
    pub extras: Vec<Extra>,
    /// Editor gizmo points, updated only in editor mode.
    pub points: Vec<ScenePoint>,
    /// Nested scenes updated strictly after this scene's own pass.
    pub side_scenes: Vec<Scene>,
    /// Optional scenery/grid provider.
    pub scenery: Option<Box<dyn Scenery>>,
    /// Scene camera. Absence degrades camera steps to no-ops.
    pub camera: Option<Box<dyn SceneCamera>>,
    /// Optional VR overlay.
    pub vr_gui: Option<VrGui>,
}

impl Scene {
    /// Create an empty, inactive scene awaiting content.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            is_active: false,
            first_frame: true,
            actors: Vec::new(),
            extras: Vec::new(),
            points: Vec::new(),
            side_scenes: Vec::new(),
            scenery: None,
            camera: None,
            vr_gui: None,
        }
    }

    /// Mark this scene as the active one for its render target.
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    /// Attach a camera.
    pub fn with_camera(mut self, camera: Box<dyn SceneCamera>) -> Self {
        self.camera = Some(camera);
        self
    }

    /// Attach a scenery provider.
    pub fn with_scenery(mut self, scenery: Box<dyn Scenery>) -> Self {
        self.scenery = Some(scenery);
        self
    }

    /// The hero actor, if the scene has any actors.
    pub fn hero(&self) -> Option<&Actor> {
        self.actors.first()
    }

    /// Mutable access to the hero actor.
    pub fn hero_mut(&mut self) -> Option<&mut Actor> {
        self.actors.first_mut()
    }

    /// Drawable view of this scene for a render target.
    pub fn view(&self) -> SceneView {
        SceneView {
            scene_id: Some(self.id),
            camera: self
                .camera
                .as_ref()
                .map(|camera| camera.pose())
                .unwrap_or_default(),
        }
    }

    /// Frame-safe cleanup point: drop expired extras. Killed actors stay in
    /// the arena so indices remain stable.
    pub fn sweep(&mut self) {
        self.extras.retain(|extra| !extra.is_expired());
        for side_scene in &mut self.side_scenes {
            side_scene.sweep();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;

    #[test]
    fn test_new_scene_starts_on_first_frame() {
        let scene = Scene::new(7);
        assert!(scene.first_frame);
        assert!(!scene.is_active);
        assert_eq!(scene.id, 7);
    }

    #[test]
    fn test_sweep_removes_expired_extras_recursively() {
        let mut scene = Scene::new(0);
        scene
            .extras
            .push(Extra::new_drifting(Vec3::zeros(), Vec3::zeros(), -1.0));
        scene
            .extras
            .push(Extra::new_drifting(Vec3::zeros(), Vec3::zeros(), 5.0));
        let mut side = Scene::new(1);
        side.extras
            .push(Extra::new_drifting(Vec3::zeros(), Vec3::zeros(), 0.0));
        scene.side_scenes.push(side);

        scene.sweep();
        assert_eq!(scene.extras.len(), 1);
        assert!(scene.side_scenes[0].extras.is_empty());
    }

    #[test]
    fn test_view_without_camera_uses_default_pose() {
        let scene = Scene::new(3);
        let view = scene.view();
        assert_eq!(view.scene_id, Some(3));
        assert_eq!(view.camera.position, Vec3::zeros());
    }
}
