//! Per-frame action queue.
//!
//! Key events are pushed as they arrive and drained once at the start of the
//! next frame. Every queued action is applied; the buffer grows if a frame
//! receives more than [`ACTION_QUEUE_CAPACITY`] actions and keeps its
//! allocation afterwards.

use crate::types::GameAction;

/// Actions preallocated for one frame.
pub const ACTION_QUEUE_CAPACITY: usize = 32;

#[derive(Debug, Clone)]
pub struct ActionQueue {
    pending: Vec<GameAction>,
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionQueue {
    pub fn new() -> Self {
        Self {
            pending: Vec::with_capacity(ACTION_QUEUE_CAPACITY),
        }
    }

    pub fn push(&mut self, action: GameAction) {
        self.pending.push(action);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and yield queued actions in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = GameAction> + '_ {
        self.pending.drain(..)
    }
}
