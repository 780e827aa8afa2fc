//! Frame driver.
//!
//! Owns the clocks, the input stack, and the per-frame render path decision.
//! One [`Runtime::frame`] call is one presented frame: poll inputs, apply
//! queued game commands, pick a path (full scene update, camera-only debug
//! update, or placeholder), and hand the resulting view to the render target.

use thiserror::Error;

use crate::config::RuntimeConfig;
use crate::foundation::time::{DebugClock, GameClock};
use crate::game::anim::ModelProvider;
use crate::game::commands::{CommandQueue, GameCommand};
use crate::input::{shared_controls_state, Control, SharedControlsState};
use crate::render::{RenderError, RenderStats, RenderTarget, SceneView};
use crate::scene::{update_scene, GameContext, Scene};

/// Frame driver errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The render target failed to present.
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}

/// Pause state of the simulation.
///
/// `single_step` only has an effect while paused: the next frame runs one
/// full update at exactly the fixed step, then the flag clears itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameControl {
    /// Simulation is paused.
    pub paused: bool,
    /// Run exactly one fixed-step update on the next frame, then clear.
    pub single_step: bool,
}

/// Outer UI state that blocks the scene paths (menu, video playback).
#[derive(Debug, Clone, Copy, Default)]
pub struct UiState {
    /// A menu is covering the game.
    pub show_menu: bool,
    /// A video is playing.
    pub video: bool,
}

impl UiState {
    fn blocks_scene(self) -> bool {
        self.show_menu || self.video
    }
}

/// The per-frame driver.
pub struct Runtime {
    config: RuntimeConfig,
    game_clock: GameClock,
    debug_clock: DebugClock,
    controls_state: SharedControlsState,
    controls: Vec<Box<dyn Control>>,
    commands: CommandQueue,
    stats: RenderStats,
    frame_control: FrameControl,
    ui: UiState,
    provider: Box<dyn ModelProvider>,
    pending_island_delta: i32,
}

impl Runtime {
    /// Create a driver with the given config and model provider.
    pub fn new(config: RuntimeConfig, provider: Box<dyn ModelProvider>) -> Self {
        Self {
            game_clock: GameClock::new().with_step_delta(config.fixed_step_delta),
            debug_clock: DebugClock::default(),
            controls_state: shared_controls_state(),
            controls: Vec::new(),
            commands: CommandQueue::new(),
            stats: RenderStats::new(),
            frame_control: FrameControl::default(),
            ui: UiState::default(),
            provider,
            pending_island_delta: 0,
            config,
        }
    }

    /// Register an input device on the polling list.
    pub fn add_control(&mut self, control: Box<dyn Control>) {
        self.controls.push(control);
    }

    /// Shared controls state handed to input devices.
    pub fn controls_state(&self) -> SharedControlsState {
        self.controls_state.clone()
    }

    /// Command queue handed to input devices and UI.
    pub fn commands(&self) -> CommandQueue {
        self.commands.clone()
    }

    /// The game clock (simulation time).
    pub fn game_clock(&self) -> &GameClock {
        &self.game_clock
    }

    /// Pause and single-step flags.
    pub fn frame_control_mut(&mut self) -> &mut FrameControl {
        &mut self.frame_control
    }

    /// Menu/video blocking state.
    pub fn ui_mut(&mut self) -> &mut UiState {
        &mut self.ui
    }

    /// Debug stats counters.
    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Net island-switch request since the last call: positive for next,
    /// negative for previous, zero for none. Scene loading is the
    /// application's job.
    pub fn take_island_request(&mut self) -> i32 {
        std::mem::take(&mut self.pending_island_delta)
    }

    /// Drive one frame.
    ///
    /// `scene` is the current scene tree, if one is loaded. `vr_scene` is the
    /// dedicated standby view a VR application shows when the scene paths do
    /// not run.
    pub fn frame(
        &mut self,
        renderer: &mut dyn RenderTarget,
        real_delta: f32,
        mut scene: Option<&mut Scene>,
        vr_scene: Option<&SceneView>,
    ) -> Result<(), RuntimeError> {
        self.stats.begin();

        for control in &mut self.controls {
            control.update();
        }
        self.apply_commands(scene.as_deref_mut());

        // Menu and video cover the scene; the scene paths are skipped but the
        // standby paths below still run.
        let scene = scene.filter(|_| !self.ui.blocks_scene());

        if let Some(scene) = scene {
            let controls = self.controls_state.lock().unwrap().clone();
            let step = self.frame_control.paused && self.frame_control.single_step;

            if !self.frame_control.paused || step {
                let time = if step {
                    self.frame_control.single_step = false;
                    self.game_clock.step()
                } else {
                    self.game_clock.advance(real_delta)
                };
                let context = GameContext {
                    controls,
                    editor: self.config.editor,
                };
                update_scene(scene, &context, self.provider.as_mut(), time);
                renderer.render(&scene.view())?;
            } else if controls.free_camera || scene.first_frame {
                // Paused, but the operator is flying the camera (or the scene
                // just loaded): track the camera on the clamped debug clock
                // and leave the simulation untouched.
                let time = self.debug_clock.advance(real_delta);
                if let Some(mut camera) = scene.camera.take() {
                    if scene.first_frame {
                        camera.init(scene, &controls);
                    }
                    camera.update(scene, &controls, time);
                    scene.camera = Some(camera);
                }
                renderer.render(&scene.view())?;
            } else if renderer.is_vr() {
                // Paused with no camera work left, but VR compositors must
                // still be fed every frame; present the empty view.
                renderer.render(&SceneView::empty())?;
            }

            scene.first_frame = false;
            scene.sweep();
        } else if let Some(view) = vr_scene {
            renderer.render(view)?;
        }

        self.stats.end();
        Ok(())
    }

    fn apply_commands(&mut self, mut scene: Option<&mut Scene>) {
        for command in self.commands.drain() {
            match command {
                GameCommand::RotateHero { angle } => {
                    if let Some(hero) = scene.as_deref_mut().and_then(Scene::hero_mut) {
                        hero.rotate_heading(angle);
                    }
                }
                GameCommand::NextIsland => self.pending_island_delta += 1,
                GameCommand::PreviousIsland => self.pending_island_delta -= 1,
                GameCommand::CenterCamera => {
                    if let Some(scene) = scene.as_deref_mut() {
                        if let Some(mut camera) = scene.camera.take() {
                            camera.center_on(scene);
                            scene.camera = Some(camera);
                        }
                    }
                }
                GameCommand::ToggleDebugStats => self.stats.toggle(),
            }
        }
    }
}
