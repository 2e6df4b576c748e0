//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is flushed to a crossterm backend.
//!
//! - [`game_view`] draws a [`core::GameSnapshot`] (pure, no I/O)
//! - [`renderer`] diffs frames and writes escape sequences
//! - [`presenter`] plugs both into the core frame loop

pub mod fb;
pub mod game_view;
pub mod presenter;
pub mod renderer;

pub use arena_tetris_core as core;
pub use arena_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport};
pub use presenter::TermPresenter;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
