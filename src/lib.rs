//! Arena Tetris (workspace facade crate).
//!
//! Exposes `arena_tetris::{core,input,term,types}` while the implementation
//! lives in dedicated crates under `crates/`.

pub use arena_tetris_core as core;
pub use arena_tetris_input as input;
pub use arena_tetris_term as term;
pub use arena_tetris_types as types;
