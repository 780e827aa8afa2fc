//! Render seam.
//!
//! The frame driver never talks to a graphics API. It hands a [`SceneView`]
//! to a [`RenderTarget`] once per frame and lets the backend do whatever that
//! means: a desktop swapchain, a VR compositor, or a test recorder.

use thiserror::Error;

use crate::scene::CameraPose;

/// Errors a render backend can surface to the frame driver.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The backend lost its device or surface and cannot present.
    #[error("render context lost: {0}")]
    ContextLost(String),
    /// The backend rejected the view (e.g. an unknown scene id).
    #[error("invalid scene view: {0}")]
    InvalidView(String),
}

/// What to draw this frame.
///
/// `scene_id: None` is the empty placeholder view used when no scene is
/// loaded yet (VR menu space, loading screens).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneView {
    /// Scene to draw, or `None` for the empty placeholder.
    pub scene_id: Option<usize>,
    /// Camera pose to draw it from.
    pub camera: CameraPose,
}

impl SceneView {
    /// Empty placeholder view for targets with nothing loaded.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// One presentable output (window, headset).
pub trait RenderTarget {
    /// Present one frame of the given view.
    fn render(&mut self, view: &SceneView) -> Result<(), RenderError>;

    /// Whether this target is a VR presenter. VR targets receive a
    /// placeholder view instead of being skipped when no scene is loaded.
    fn is_vr(&self) -> bool {
        false
    }
}

/// Frame counters for the debug stats overlay.
#[derive(Debug, Clone, Default)]
pub struct RenderStats {
    /// Whether the overlay is currently shown.
    pub visible: bool,
    frames: u64,
    frame_start: Option<std::time::Instant>,
    last_frame_ms: f32,
}

impl RenderStats {
    /// Create hidden stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the start of a frame.
    pub fn begin(&mut self) {
        self.frame_start = Some(std::time::Instant::now());
    }

    /// Mark the end of a frame.
    pub fn end(&mut self) {
        self.frames += 1;
        if let Some(start) = self.frame_start.take() {
            self.last_frame_ms = start.elapsed().as_secs_f32() * 1000.0;
        }
    }

    /// Toggle overlay visibility.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Total frames presented.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Wall-clock duration of the last frame, in milliseconds.
    pub fn last_frame_ms(&self) -> f32 {
        self.last_frame_ms
    }
}
