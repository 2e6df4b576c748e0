//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The default playfield is the classic arena size:
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! Both are configurable per session through [`GameConfig`].
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the terminal runner (~60 FPS) |
//! | `DROP_INTERVAL_MS` | 1000 | Automatic drop interval |
//!
//! # Examples
//!
//! ```
//! use arena_tetris_types::{PieceKind, GameConfig, DEFAULT_BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.color_id(), 6);
//! assert_eq!(PieceKind::from_color_id(6), Some(PieceKind::T));
//! assert_eq!(PieceKind::from_color_id(0), None);
//!
//! let config = GameConfig::default().with_seed(7);
//! assert_eq!(config.board_width, DEFAULT_BOARD_WIDTH);
//! assert_eq!(config.seed, 7);
//! ```

/// Default board width in cells (12 columns)
pub const DEFAULT_BOARD_WIDTH: u8 = 12;

/// Largest board side in cells.
///
/// Piece positions are `i8`; this leaves room for shape offsets and kick probes.
pub const MAX_BOARD_DIMENSION: u8 = 100;

/// Default board height in cells (20 rows)
pub const DEFAULT_BOARD_HEIGHT: u8 = 20;

/// Frame interval of the terminal runner in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Automatic drop interval (1000ms = 1 row per second)
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Points awarded per cleared row
pub const LINE_CLEAR_POINTS: u32 = 10;

/// Side length of the largest piece matrix (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Default RNG seed when none is configured
pub const DEFAULT_SEED: u32 = 1;

/// The seven piece kinds
///
/// Each kind doubles as a color key: [`PieceKind::color_id`] maps it to the
/// `1..=7` palette index used by renderers and snapshots. `0` is reserved for
/// an empty cell and has no kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in palette order (color ids 1..=7).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Palette index of this kind, always in `1..=7`.
    pub fn color_id(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::color_id`]. Returns `None` for `0` and for any
    /// value outside the palette.
    pub fn from_color_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Parse a piece letter (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_letter('s'), Some(PieceKind::S));
    /// assert_eq!(PieceKind::from_letter('X'), None);
    /// ```
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            'O' => Some(PieceKind::O),
            'S' => Some(PieceKind::S),
            'T' => Some(PieceKind::T),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
        }
    }
}

/// A cell on the game board or inside a piece matrix
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Occupied by the given kind
///
/// Every cell is therefore either empty or a valid piece kind by construction.
pub type Cell = Option<PieceKind>;

/// Abstract input actions accepted by the core
///
/// The input layer translates physical events into exactly these calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Shift the piece one column left
    MoveLeft,
    /// Shift the piece one column right
    MoveRight,
    /// Move down one row, locking the piece if it cannot move
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
}

/// Core-side event emitted after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreLastEvent {
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    /// The spawn that followed the lock collided and reset the board.
    pub overflowed: bool,
}

/// Per-session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_width: u8,
    pub board_height: u8,
    pub drop_interval_ms: u32,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            drop_interval_ms: DROP_INTERVAL_MS,
            seed: DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `ARENA_TETRIS_WIDTH` / `ARENA_TETRIS_HEIGHT`: board size (1-100)
    /// - `ARENA_TETRIS_DROP_MS`: automatic drop interval
    /// - `ARENA_TETRIS_SEED`: piece RNG seed
    ///
    /// Missing or invalid values keep their defaults.
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let board_width = env::var("ARENA_TETRIS_WIDTH")
            .ok()
            .and_then(|s| parse_dimension(&s))
            .unwrap_or(defaults.board_width);

        let board_height = env::var("ARENA_TETRIS_HEIGHT")
            .ok()
            .and_then(|s| parse_dimension(&s))
            .unwrap_or(defaults.board_height);

        let drop_interval_ms = env::var("ARENA_TETRIS_DROP_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.drop_interval_ms);

        let seed = env::var("ARENA_TETRIS_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        Self {
            board_width,
            board_height,
            drop_interval_ms,
            seed,
        }
    }

    /// Board size in cells. Each side must be in `1..=MAX_BOARD_DIMENSION`;
    /// a session built from an out-of-range config panics.
    pub fn with_board_size(mut self, width: u8, height: u8) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    pub fn with_drop_interval_ms(mut self, drop_interval_ms: u32) -> Self {
        self.drop_interval_ms = drop_interval_ms;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}

fn parse_dimension(s: &str) -> Option<u8> {
    s.trim()
        .parse::<u8>()
        .ok()
        .filter(|v| (1..=MAX_BOARD_DIMENSION).contains(v))
}
