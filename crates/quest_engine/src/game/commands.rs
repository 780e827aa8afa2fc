//! Game command queue.
//!
//! Input adapters enqueue intents; the frame driver drains and applies them
//! at the start of the frame, before the scene advances. This keeps
//! cross-cutting effects (island switches, heading snaps, stats toggles)
//! deterministic instead of firing from ad-hoc event listeners.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Discrete intents produced by input adapters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameCommand {
    /// Rotate the hero's heading instantly by a relative angle in radians.
    RotateHero {
        /// Relative rotation, positive is counter-clockwise.
        angle: f32,
    },
    /// Request a switch to the next island scene.
    NextIsland,
    /// Request a switch to the previous island scene.
    PreviousIsland,
    /// Re-center the active camera on the hero.
    CenterCamera,
    /// Toggle the render statistics overlay.
    ToggleDebugStats,
}

/// Shared FIFO of pending commands. Cheap to clone; all clones drain the same
/// queue.
#[derive(Clone, Default)]
pub struct CommandQueue {
    inner: Arc<Mutex<VecDeque<GameCommand>>>,
}

impl CommandQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a command for the next frame boundary.
    pub fn push(&self, command: GameCommand) {
        self.inner.lock().unwrap().push_back(command);
    }

    /// Drain all pending commands in submission order.
    pub fn drain(&self) -> Vec<GameCommand> {
        self.inner.lock().unwrap().drain(..).collect()
    }

    /// Number of commands waiting.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order_preserved() {
        let queue = CommandQueue::new();
        queue.push(GameCommand::NextIsland);
        queue.push(GameCommand::CenterCamera);
        let drained = queue.drain();
        assert_eq!(
            drained,
            vec![GameCommand::NextIsland, GameCommand::CenterCamera]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clones_share_the_queue() {
        let queue = CommandQueue::new();
        let producer = queue.clone();
        producer.push(GameCommand::ToggleDebugStats);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.drain(), vec![GameCommand::ToggleDebugStats]);
    }
}
