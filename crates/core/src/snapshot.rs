//! Read-only view of a session handed to renderers.
//!
//! A snapshot carries the board as palette ids and the active piece with its
//! current shape. It owns its data, so a renderer holding one cannot reach
//! back into the session.

use crate::game_state::ActivePiece;
use crate::pieces::Shape;
use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major palette ids, `0` = empty
    pub board: Vec<u8>,
    pub active: Option<ActiveSnapshot>,
    pub episode_id: u32,
    pub piece_id: u32,
}

impl GameSnapshot {
    /// Palette id of the locked cell at `(x, y)`; `0` when empty or out of range.
    pub fn cell(&self, x: u8, y: u8) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.board
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Board cells covered by the active piece, with its kind.
    ///
    /// Cells outside the board are skipped.
    pub fn active_cells(&self) -> impl Iterator<Item = (u8, u8, PieceKind)> + '_ {
        self.active.iter().flat_map(move |active| {
            active.shape.minos().into_iter().filter_map(move |(dx, dy, kind)| {
                let x = active.x + dx;
                let y = active.y + dy;
                if x < 0 || y < 0 || x as u8 >= self.width || y as u8 >= self.height {
                    return None;
                }
                Some((x as u8, y as u8, kind))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::create_shape;

    #[test]
    fn active_cells_clip_to_board() {
        let snap = GameSnapshot {
            width: 3,
            height: 3,
            board: vec![0; 9],
            active: Some(ActiveSnapshot {
                kind: PieceKind::O,
                shape: create_shape(PieceKind::O),
                x: 2,
                y: -1,
            }),
            episode_id: 0,
            piece_id: 1,
        };

        let cells: Vec<_> = snap.active_cells().collect();
        assert_eq!(cells, vec![(2, 0, PieceKind::O)]);
    }
}
