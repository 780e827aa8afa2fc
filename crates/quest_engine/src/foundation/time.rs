//! Frame timing
//!
//! Two clocks drive the runtime. The game clock advances the simulation and
//! pauses with it; single-stepping while paused advances it by a fixed debug
//! increment instead of wall time. The debug clock backs the free camera and
//! never pauses, but clamps its delta so a long stall (breakpoint, window
//! drag) cannot destabilize camera motion on the next tick.

/// Fixed delta, in seconds, applied when single-stepping a paused simulation.
/// Also the upper bound for one debug-clock tick.
pub const FIXED_STEP_DELTA: f32 = 0.05;

/// Per-frame time sample handed to every update.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Time {
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Seconds accumulated since the clock started.
    pub elapsed: f32,
}

/// Simulation clock.
///
/// The caller decides whether the simulation runs this frame; the clock only
/// accumulates what it is told to. `step` is the single-step override and
/// always advances by the fixed debug increment.
#[derive(Debug, Clone)]
pub struct GameClock {
    elapsed: f32,
    step_delta: f32,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl GameClock {
    /// Create a clock at zero elapsed time.
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            step_delta: FIXED_STEP_DELTA,
        }
    }

    /// Override the single-step increment (configurable for debug builds).
    pub fn with_step_delta(mut self, step_delta: f32) -> Self {
        self.step_delta = step_delta;
        self
    }

    /// Advance by a wall-clock delta and return this frame's time sample.
    pub fn advance(&mut self, real_delta: f32) -> Time {
        self.elapsed += real_delta;
        Time {
            delta: real_delta,
            elapsed: self.elapsed,
        }
    }

    /// Single-step: advance by exactly the fixed debug increment.
    pub fn step(&mut self) -> Time {
        self.elapsed += self.step_delta;
        Time {
            delta: self.step_delta,
            elapsed: self.elapsed,
        }
    }

    /// Total simulated seconds so far.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

/// Debug/free-camera clock. Never pauses; each tick's delta is clamped to
/// [`FIXED_STEP_DELTA`] so stalls don't produce one giant camera jump.
#[derive(Debug, Clone, Default)]
pub struct DebugClock {
    elapsed: f32,
}

impl DebugClock {
    /// Create a clock at zero elapsed time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by a wall-clock delta, clamped to the fixed maximum.
    pub fn advance(&mut self, real_delta: f32) -> Time {
        let delta = real_delta.min(FIXED_STEP_DELTA).max(0.0);
        self.elapsed += delta;
        Time {
            delta,
            elapsed: self.elapsed,
        }
    }

    /// Total debug seconds so far.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
