//! Input management: the shared controls state, the control adapter trait,
//! and the gamepad adapter.
//!
//! Adapters are updated once per frame regardless of pause state, so input
//! stays current even while the simulation is frozen. Each adapter owns its
//! own event source and must be safe to update with no new input.

use crate::foundation::math::constants::QUARTER_PI;
use crate::game::commands::{CommandQueue, GameCommand};
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex};

/// Per-frame input snapshot shared between adapters, hero logic and cameras.
#[derive(Debug, Clone, Default)]
pub struct ControlsState {
    /// Normalized forward/back input in -1..1.
    pub forward_speed: f32,
    /// Normalized turn input in -1..1, positive is counter-clockwise.
    pub turn: f32,
    /// Free/debug camera mode. The scene keeps rendering but only the camera
    /// updates, against the debug clock.
    pub free_camera: bool,
    /// First-person mode; the hero's own renderable is hidden.
    pub first_person: bool,
}

/// Shared handle to the controls state, written by adapters and read by the
/// frame driver.
pub type SharedControlsState = Arc<Mutex<ControlsState>>;

/// Create a fresh shared controls state.
pub fn shared_controls_state() -> SharedControlsState {
    Arc::new(Mutex::new(ControlsState::default()))
}

/// A control adapter: polled once per frame, before the scene advances.
pub trait Control {
    /// Drain pending input and fold it into the shared state or the command
    /// queue. Must be idempotent when no input is pending.
    fn update(&mut self);
}

/// Gamepad button identifiers carried by discrete press events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamepadButton {
    /// Left shoulder bumper.
    LeftShoulder,
    /// Right shoulder bumper.
    RightShoulder,
    /// Face button B.
    ButtonB,
    /// Face button X.
    ButtonX,
    /// Face button Y.
    ButtonY,
    /// Left analog trigger.
    LeftTrigger,
    /// Right analog trigger.
    RightTrigger,
}

/// Events produced by the platform input layer (external collaborator).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Directional axis changed; `y` is the normalized forward/back value.
    DpadChanged {
        /// Forward/back axis value in -1..1.
        y: f32,
    },
    /// A button changed state.
    Button {
        /// Which button.
        button: GamepadButton,
        /// Pressed (true) or released (false).
        pressed: bool,
    },
}

/// Gamepad adapter: translates input events into either direct controls
/// mutation (forward speed) or discrete game commands (heading snaps, island
/// switches, stats toggle).
pub struct GamepadControls {
    events: Receiver<InputEvent>,
    controls: SharedControlsState,
    commands: CommandQueue,
}

impl GamepadControls {
    /// Create the adapter and the sender half the platform layer feeds.
    pub fn new(controls: SharedControlsState, commands: CommandQueue) -> (Self, Sender<InputEvent>) {
        let (sender, events) = channel();
        (
            Self {
                events,
                controls,
                commands,
            },
            sender,
        )
    }

    fn handle_button(&self, button: GamepadButton) {
        match button {
            GamepadButton::LeftShoulder => self.commands.push(GameCommand::RotateHero {
                angle: QUARTER_PI,
            }),
            GamepadButton::RightShoulder => self.commands.push(GameCommand::RotateHero {
                angle: -QUARTER_PI,
            }),
            GamepadButton::ButtonB => self.commands.push(GameCommand::PreviousIsland),
            GamepadButton::ButtonX => self.commands.push(GameCommand::NextIsland),
            GamepadButton::ButtonY => self.commands.push(GameCommand::CenterCamera),
            GamepadButton::LeftTrigger => self.commands.push(GameCommand::ToggleDebugStats),
            // Stats display mode cycling belongs to the inspector UI.
            GamepadButton::RightTrigger => {}
        }
    }
}

impl Control for GamepadControls {
    fn update(&mut self) {
        loop {
            match self.events.try_recv() {
                Ok(InputEvent::DpadChanged { y }) => {
                    self.controls.lock().unwrap().forward_speed = y.clamp(-1.0, 1.0);
                }
                Ok(InputEvent::Button {
                    button,
                    pressed: true,
                }) => self.handle_button(button),
                Ok(InputEvent::Button { pressed: false, .. }) => {}
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // Source detached; nothing further will arrive.
                    break;
                }
            }
        }
    }
}
