//! Scene update orchestrator.
//!
//! Walks one scene and, recursively, its side-scenes in a fixed order. The
//! order is load-bearing: the physics pass must observe the post-update
//! positions of every actor in the current scene before side-scenes run, and
//! the camera must observe final positions after this scene's and all
//! side-scenes' updates.

use crate::foundation::time::Time;
use crate::game::anim::ModelProvider;
use crate::game::hero::update_hero;
use crate::input::ControlsState;
use crate::physics;
use crate::scene::Scene;

/// Read-only per-frame game context threaded through the scene walk.
#[derive(Debug, Clone, Default)]
pub struct GameContext {
    /// Snapshot of the controls state for this frame.
    pub controls: ControlsState,
    /// Whether editor features (gizmo points) are enabled.
    pub editor: bool,
}

/// Advance one scene and its side-scenes by one frame.
///
/// Per-actor failures are isolated: they are logged once and the pass
/// continues with the next actor.
pub fn update_scene(
    scene: &mut Scene,
    game: &GameContext,
    provider: &mut dyn ModelProvider,
    time: Time,
) {
    // 1. Scenery/grid animation, active scene only.
    if scene.is_active {
        if let Some(mut scenery) = scene.scenery.take() {
            scenery.update(game, scene, time);
            scene.scenery = Some(scenery);
        }
    }

    // 2. Transient hit state, before any actor update.
    physics::reset_hit_state(&mut scene.actors);

    // 3. Actor updates in list order; the list is a stable snapshot for the
    //    duration of the pass.
    let scene_is_active = scene.is_active;
    for actor in &mut scene.actors {
        if actor.is_killed {
            continue;
        }
        if let Err(err) = actor.update(provider, time) {
            log::warn!(
                "scene {}: actor {} update failed, skipping this frame: {err}",
                scene.id,
                actor.index
            );
        }
        if scene_is_active && actor.index == 0 {
            update_hero(actor, &game.controls, time);
        }
    }

    // 4. Extras.
    for extra in &mut scene.extras {
        extra.update(time);
    }

    // 5. Editor gizmo points, against the active camera.
    if scene.is_active && game.editor {
        if let Some(camera) = &scene.camera {
            let pose = camera.pose();
            for point in &mut scene.points {
                point.update(&pose);
            }
        }
    }

    // 6. VR overlay.
    if let Some(vr_gui) = &mut scene.vr_gui {
        vr_gui.update(&game.controls, time);
    }

    // 7. First-person mode hides the hero's own renderable.
    if scene.is_active && game.controls.first_person {
        if let Some(hero) = scene.actors.first_mut() {
            hero.is_visible = false;
        }
    }

    // 8. Physics, over this scene's final per-actor steps.
    physics::process_physics_frame(&mut scene.actors, time);

    // 9. Side-scenes inherit the parent's first-frame flag and run the same
    //    pass, strictly after the parent's physics.
    let first_frame = scene.first_frame;
    for side_scene in &mut scene.side_scenes {
        side_scene.first_frame = first_frame;
        update_scene(side_scene, game, provider, time);
    }

    // 10. Camera, last, so it sees final positions.
    if scene.is_active {
        if let Some(mut camera) = scene.camera.take() {
            if scene.first_frame {
                camera.init(scene, &game.controls);
            }
            camera.update(scene, &game.controls, time);
            scene.camera = Some(camera);
        }
    }
}
