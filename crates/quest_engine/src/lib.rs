//! # Quest Engine
//!
//! The per-frame runtime of an island-hopping 3D adventure game: clocks,
//! actor motion, scene scheduling, physics, input and the render seam.
//!
//! ## Features
//!
//! - **Dual Clocks**: Pausable simulation clock plus a clamped debug clock
//! - **Actor Motion Model**: Turn-then-walk steering with stable heading
//! - **Scene Scheduler**: Fixed-order scene tree updates with side-scenes
//! - **Physics Pass**: Step integration and actor-actor overlap resolution
//! - **Command Queue**: Deterministic frame-boundary input application
//! - **Render Seam**: Backend-agnostic scene views for desktop and VR
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quest_engine::prelude::*;
//!
//! struct Headless;
//!
//! impl RenderTarget for Headless {
//!     fn render(&mut self, _view: &SceneView) -> Result<(), RenderError> {
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut runtime = Runtime::new(RuntimeConfig::default(), Box::new(NullModelProvider));
//!     let mut scene = Scene::new(0).with_camera(Box::new(FollowCamera::new()));
//!     scene.activate();
//!     let mut target = Headless;
//!     runtime.frame(&mut target, 1.0 / 60.0, Some(&mut scene), None)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod game;
pub mod input;
pub mod physics;
pub mod render;
pub mod scene;

mod runtime;

pub use runtime::{FrameControl, Runtime, RuntimeError, UiState};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, RuntimeConfig},
        foundation::{
            math::{Vec3, Quat},
            time::{GameClock, DebugClock, Time, FIXED_STEP_DELTA},
        },
        game::{
            Actor, ActorBehavior, ActorProps, ActorStaticFlags, AnimState, CommandQueue,
            GameCommand, ModelProvider, MotionState, NullModelProvider, Patrol,
        },
        input::{Control, ControlsState, GamepadControls, InputEvent, GamepadButton},
        render::{RenderError, RenderStats, RenderTarget, SceneView},
        scene::{update_scene, FollowCamera, GameContext, Scene, SceneCamera},
        FrameControl, Runtime, RuntimeError, UiState,
    };
}
