//! Game state module - one play session
//!
//! This module ties together the board, the active piece, the piece RNG and the score.
//! It owns the drop counter (a soft drop always resets it) and implements the
//! spawn / move / rotate / drop / lock transitions.
//!
//! Nothing here can fail: an illegal move is a no-op, and a spawn that
//! collides immediately (overflow) wipes the board and the score and play
//! simply continues with the new piece.

use crate::board::Board;
use crate::pieces::{create_shape, try_rotate, Shape};
use crate::rng::SimpleRng;
use crate::scoring::{line_clear_points, ScoreTracker};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Current orientation; rotated in place as the piece turns
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece at the top row, horizontally centered on a board of `board_width`
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        let shape = create_shape(kind);
        Self {
            kind,
            shape,
            x: (board_width / 2) as i8 - (shape.size() / 2) as i8,
            y: 0,
        }
    }

    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.x, self.y)
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Option<ActivePiece>,
    rng: SimpleRng,
    score: ScoreTracker,
    /// Time accumulated towards the next automatic drop.
    drop_counter_ms: u32,
    /// Monotonic episode id (increments on every overflow reset).
    episode_id: u32,
    /// Monotonic id for spawned pieces.
    piece_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<CoreLastEvent>,
    started: bool,
}

impl GameState {
    /// Create a new session from a config
    ///
    /// # Panics
    ///
    /// Panics if the configured board has a zero dimension.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::new(config.board_width, config.board_height),
            active: None,
            rng: SimpleRng::new(config.seed),
            score: ScoreTracker::new(),
            drop_counter_ms: 0,
            episode_id: 0,
            piece_id: 0,
            last_event: None,
            started: false,
        }
    }

    /// Default-sized session with the given RNG seed
    pub fn with_seed(seed: u32) -> Self {
        Self::new(GameConfig::default().with_seed(seed))
    }

    /// Start the session and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score.value()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    /// Score value to push to the display, if it changed since the last call.
    ///
    /// A fresh session reports `Some(0)` once.
    pub fn take_score_change(&mut self) -> Option<u32> {
        self.score.take_change()
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<CoreLastEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        self.board.write_color_ids(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn a uniformly random piece.
    ///
    /// Returns false if the spawn overflowed: the board and score were reset
    /// and the new piece stays active on the empty board.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.rng.next_kind();
        self.spawn_kind(kind)
    }

    pub(crate) fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        let piece = ActivePiece::spawn(kind, self.board.width());
        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);

        if piece.collides(&self.board) {
            self.board.reset_all();
            self.score.reset();
            self.episode_id = self.episode_id.wrapping_add(1);
            return false;
        }

        true
    }

    /// Try to shift the active piece horizontally by `dx`.
    ///
    /// On collision the piece is left exactly where it was.
    pub fn try_move(&mut self, dx: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let moved = ActivePiece {
            x: active.x + dx,
            ..active
        };
        if moved.collides(&self.board) {
            return false;
        }

        self.active = Some(moved);
        true
    }

    /// Move the active piece down one row, locking it if it cannot move.
    ///
    /// Always resets the drop counter. Returns true if the piece moved down,
    /// false if it locked (or there is no active piece).
    pub fn soft_drop(&mut self) -> bool {
        self.drop_counter_ms = 0;

        let Some(active) = self.active else {
            return false;
        };

        let dropped = ActivePiece {
            y: active.y + 1,
            ..active
        };
        if dropped.collides(&self.board) {
            self.lock_piece();
            return false;
        }

        self.active = Some(dropped);
        true
    }

    /// Try to rotate the active piece, kicking horizontally if needed
    pub fn try_rotate(&mut self, clockwise: bool) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let board = &self.board;
        let result = try_rotate(&active.shape, active.x, clockwise, |shape, x| {
            board.collides(shape, x, active.y)
        });

        match result {
            Some((shape, x)) => {
                self.active = Some(ActivePiece { shape, x, ..active });
                true
            }
            None => false,
        }
    }

    /// Lock the active piece onto the board, spawn the next piece, then sweep
    /// completed rows and score them.
    ///
    /// The spawn happens before the sweep, so overflow is judged against the
    /// board as it was at the moment of locking.
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active else {
            return;
        };

        // A piece that already overlaps (only possible on a board too small
        // for it) is dropped rather than merged.
        if !active.collides(&self.board) {
            self.board.merge(&active.shape, active.x, active.y);
        }

        let overflowed = !self.spawn_piece();

        let lines_cleared = self.board.sweep_completed_rows();
        let line_clear_score = line_clear_points(lines_cleared);
        self.score.add(line_clear_score);

        self.last_event = Some(CoreLastEvent {
            lines_cleared,
            line_clear_score,
            overflowed,
        });
    }

    /// Advance the drop counter by `elapsed_ms`, dropping the piece once the
    /// counter exceeds the drop interval.
    ///
    /// Returns true if an automatic drop happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.started {
            return false;
        }

        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms > self.config.drop_interval_ms {
            self.soft_drop();
            return true;
        }

        false
    }

    /// Apply an input action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1),
            GameAction::MoveRight => self.try_move(1),
            GameAction::SoftDrop => {
                if self.active.is_none() {
                    return false;
                }
                self.soft_drop();
                true
            }
            GameAction::RotateCw => self.try_rotate(true),
            GameAction::RotateCcw => self.try_rotate(false),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
