//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and buffers them
//! until the next frame. There is no debouncing and no auto-repeat logic:
//! every mapped key event becomes exactly one action.

pub mod map;
pub mod queue;

pub use arena_tetris_types as types;

pub use map::{handle_key_event, should_quit};
pub use queue::{ActionQueue, ACTION_QUEUE_CAPACITY};
