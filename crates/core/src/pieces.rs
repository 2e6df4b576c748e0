//! Pieces module - piece catalog, shape matrices and kick-search rotation
//!
//! A [`Shape`] is a small square matrix of cells in the piece's local frame
//! (origin at the top-left). Shapes are plain values: [`create_shape`] hands out
//! a fresh copy every call and rotation only ever touches the caller's copy.
//!
//! Rotation does not use per-piece kick tables. After a 90° turn the resolver
//! probes horizontal offsets outward (0, +1, -1, +2, ...) until the piece fits
//! or the probe grows past the shape width.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, MAX_SHAPE_SIZE};

/// Offset of a single occupied cell relative to the shape origin, with its kind
pub type Mino = (i8, i8, PieceKind);

/// Occupied cells of a shape (at most a full 4x4 matrix)
pub type Minos = ArrayVec<Mino, { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

/// Square cell matrix describing one piece in its current orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[Cell; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a `size`x`size` shape from occupied offsets, all of one kind.
    fn from_offsets(kind: PieceKind, size: u8, offsets: &[(u8, u8)]) -> Self {
        assert!(
            (1..=MAX_SHAPE_SIZE as u8).contains(&size),
            "shape size {size} out of range"
        );
        let mut cells = [[None; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for &(x, y) in offsets {
            assert!(x < size && y < size, "offset ({x}, {y}) outside {size}x{size}");
            cells[y as usize][x as usize] = Some(kind);
        }
        Self { size, cells }
    }

    /// Side length of the matrix. This is the "width" used for spawn
    /// centering and for bounding the rotation kick search.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Cell at local `(x, y)`; `None` outside the matrix.
    pub fn get(&self, x: u8, y: u8) -> Option<Cell> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.cells[y as usize][x as usize])
    }

    /// Occupied cells in row-major order.
    pub fn minos(&self) -> Minos {
        let n = self.size as usize;
        let mut out = Minos::new();
        for (y, row) in self.cells[..n].iter().enumerate() {
            for (x, cell) in row[..n].iter().enumerate() {
                if let Some(kind) = cell {
                    out.push((x as i8, y as i8, *kind));
                }
            }
        }
        out
    }

    /// Rotate the matrix 90° in place.
    ///
    /// Transpose first, then mirror: reversing each row gives a clockwise
    /// turn, reversing the row order gives a counter-clockwise turn.
    pub fn rotate(&mut self, clockwise: bool) {
        let n = self.size as usize;
        for y in 0..n {
            for x in 0..y {
                let tmp = self.cells[y][x];
                self.cells[y][x] = self.cells[x][y];
                self.cells[x][y] = tmp;
            }
        }
        if clockwise {
            for row in &mut self.cells[..n] {
                row[..n].reverse();
            }
        } else {
            self.cells[..n].reverse();
        }
    }
}

/// Create a fresh shape for a piece kind in its spawn orientation
pub fn create_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_offsets(kind, 4, &[(1, 0), (1, 1), (1, 2), (1, 3)]),
        PieceKind::J => Shape::from_offsets(kind, 3, &[(1, 0), (1, 1), (0, 2), (1, 2)]),
        PieceKind::L => Shape::from_offsets(kind, 3, &[(1, 0), (1, 1), (1, 2), (2, 2)]),
        PieceKind::O => Shape::from_offsets(kind, 2, &[(0, 0), (1, 0), (0, 1), (1, 1)]),
        PieceKind::S => Shape::from_offsets(kind, 3, &[(1, 0), (2, 0), (0, 1), (1, 1)]),
        PieceKind::T => Shape::from_offsets(kind, 3, &[(0, 1), (1, 1), (2, 1), (1, 2)]),
        PieceKind::Z => Shape::from_offsets(kind, 3, &[(0, 0), (1, 0), (1, 1), (2, 1)]),
    }
}

/// Try to rotate a shape at column `x`, kicking horizontally on collision.
///
/// `collides(shape, x)` reports whether the shape would collide at column `x`
/// (the row is fixed by the caller). The input shape is never modified.
///
/// Returns `Some((rotated_shape, kicked_x))` on success, `None` if no probed
/// column fits; the caller then keeps its original shape and position.
pub fn try_rotate(
    shape: &Shape,
    x: i8,
    clockwise: bool,
    collides: impl Fn(&Shape, i8) -> bool,
) -> Option<(Shape, i8)> {
    let mut rotated = *shape;
    rotated.rotate(clockwise);

    let width = rotated.size() as i8;
    let mut pos = x;
    let mut offset: i8 = 1;

    while collides(&rotated, pos) {
        pos += offset;
        offset = -(offset + offset.signum());
        if offset > width {
            return None;
        }
    }

    Some((rotated, pos))
}
