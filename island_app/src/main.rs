//! Island demo application
//!
//! Drives the runtime headlessly: a hero walking under gamepad input, a
//! patrolling NPC, a nested side-scene, and a pause/single-step sequence.

use quest_engine::game::{Actor, ActorProps, ActorStaticFlags, AnimState, ModelProvider, Patrol};
use quest_engine::config::RuntimeConfig;
use quest_engine::foundation::math::Vec3;
use quest_engine::foundation::time::Time;
use quest_engine::input::{GamepadControls, InputEvent};
use quest_engine::render::{RenderError, RenderTarget, SceneView};
use quest_engine::scene::{FollowCamera, Scene};
use quest_engine::Runtime;

/// Canned animation data: every model walks with the same forward step.
struct DemoModels;

impl ModelProvider for DemoModels {
    fn update_model(
        &mut self,
        anim: &mut AnimState,
        _entity_index: i32,
        _body_index: i32,
        _anim_index: i32,
        _time: Time,
    ) {
        anim.step = Vec3::new(0.0, 0.0, 0.5);
        anim.keyframe_length = 500.0;
        anim.is_playing = true;
    }
}

/// Render target that logs what it would draw.
struct LoggingTarget {
    frames: u64,
}

impl RenderTarget for LoggingTarget {
    fn render(&mut self, view: &SceneView) -> Result<(), RenderError> {
        self.frames += 1;
        if self.frames % 30 == 0 {
            log::info!(
                "frame {}: scene {:?}, camera at ({:.2}, {:.2}, {:.2})",
                self.frames,
                view.scene_id,
                view.camera.position.x,
                view.camera.position.y,
                view.camera.position.z
            );
        }
        Ok(())
    }
}

fn actor(index: usize, pos: [f32; 3]) -> Actor {
    Actor::from_props(ActorProps {
        index,
        pos,
        life: 50,
        static_flags: ActorStaticFlags::COLLIDE_WITH_OBJ,
        entity_index: index as i32,
        body_index: 0,
        anim_index: 0,
        angle: 0.0,
        speed: 10.0,
    })
}

fn build_scene() -> Scene {
    let mut scene = Scene::new(0).with_camera(Box::new(FollowCamera::new()));
    scene.activate();

    // Hero.
    scene.actors.push(actor(0, [0.0, 0.0, 0.0]));

    // NPC patrolling a triangle.
    let patrol = Patrol::new(vec![
        Vec3::new(5.0, 0.0, 5.0),
        Vec3::new(-5.0, 0.0, 5.0),
        Vec3::new(0.0, 0.0, -5.0),
    ]);
    scene
        .actors
        .push(actor(1, [5.0, 0.0, 5.0]).with_behavior(Box::new(patrol)));

    // Neighboring island updated as a side-scene.
    let mut side = Scene::new(1);
    side.actors.push(actor(0, [100.0, 0.0, 100.0]));
    scene.side_scenes.push(side);

    scene
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    quest_engine::foundation::logging::init();
    log::info!("Starting island demo...");

    let mut runtime = Runtime::new(RuntimeConfig::default(), Box::new(DemoModels));
    let (gamepad, input) =
        GamepadControls::new(runtime.controls_state(), runtime.commands());
    runtime.add_control(Box::new(gamepad));

    let mut scene = build_scene();
    let mut target = LoggingTarget { frames: 0 };
    let delta = 1.0 / 60.0;

    // Push the stick forward and let the hero walk for two seconds.
    input.send(InputEvent::DpadChanged { y: 1.0 })?;
    for _ in 0..120 {
        runtime.frame(&mut target, delta, Some(&mut scene), None)?;
    }
    let hero = scene.hero().ok_or("scene lost its hero")?;
    log::info!(
        "hero after walking: ({:.2}, {:.2}, {:.2})",
        hero.physics.position.x,
        hero.physics.position.y,
        hero.physics.position.z
    );

    // Release the stick, pause, and advance two single steps.
    input.send(InputEvent::DpadChanged { y: 0.0 })?;
    runtime.frame_control_mut().paused = true;
    for _ in 0..2 {
        runtime.frame_control_mut().single_step = true;
        runtime.frame(&mut target, delta, Some(&mut scene), None)?;
    }
    log::info!(
        "simulated time after stepping: {:.3}s over {} rendered frames",
        runtime.game_clock().elapsed(),
        target.frames
    );

    log::info!("Island demo finished");
    Ok(())
}
