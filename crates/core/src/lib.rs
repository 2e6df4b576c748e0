//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the falling-block game: the piece catalog,
//! the board, the active piece controller, rotation with kicks, the frame loop
//! driver and the score counter.
//! It has **zero dependencies** on rendering, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: Rendering and input are collaborators behind [`Presenter`] and [`types::GameAction`]
//!
//! # Module Structure
//!
//! - [`board`]: Fixed-size grid with collision, merge and row sweeping
//! - [`pieces`]: Piece catalog, shape matrices and the kick-search rotation
//! - [`game_state`]: Session state: active piece, spawn, move, drop, lock, overflow
//! - [`game_loop`]: Per-frame driver and the [`Presenter`] output seam
//! - [`rng`]: Seeded uniform piece selection
//! - [`scoring`]: Line clear points and the score counter
//! - [`snapshot`]: Read-only render view
//!
//! # Game Rules
//!
//! - **Spawn**: Uniform random kind, centered at the top row
//! - **Rotation**: 90° matrix turn, then a horizontal probe 0, +1, -1, +2, ... bounded by the shape width
//! - **Gravity**: One row every 1000ms; a manual soft drop restarts the timer
//! - **Lock**: A piece that cannot move down merges into the board immediately
//! - **Scoring**: 10 points per cleared row
//! - **Overflow**: A spawn that collides wipes the board and the score, and play goes on
//!
//! # Example
//!
//! ```
//! use arena_tetris_core::GameState;
//! use arena_tetris_types::{GameAction, GameConfig};
//!
//! let mut game = GameState::new(GameConfig::default().with_seed(12345));
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::SoftDrop);
//!
//! assert_eq!(game.score(), 0);
//! assert!(game.active().is_some());
//! ```

pub mod board;
pub mod game_loop;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use arena_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_loop::{GameLoop, Presenter};
pub use game_state::{ActivePiece, GameState};
pub use pieces::{create_shape, try_rotate, Shape};
pub use rng::SimpleRng;
pub use scoring::{line_clear_points, ScoreTracker};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
