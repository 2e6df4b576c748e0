//! Pieces module tests - shapes and kick-search rotation

use arena_tetris::core::{create_shape, try_rotate, Board};
use arena_tetris::types::PieceKind;

fn offsets(kind: PieceKind, turns_cw: usize) -> Vec<(i8, i8)> {
    let mut shape = create_shape(kind);
    for _ in 0..turns_cw {
        shape.rotate(true);
    }
    shape.minos().iter().map(|&(x, y, _)| (x, y)).collect()
}

// ============== Shape Tests ==============

#[test]
fn test_spawn_shapes() {
    assert_eq!(offsets(PieceKind::I, 0), [(1, 0), (1, 1), (1, 2), (1, 3)]);
    assert_eq!(offsets(PieceKind::O, 0), [(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(offsets(PieceKind::T, 0), [(0, 1), (1, 1), (2, 1), (1, 2)]);
    assert_eq!(offsets(PieceKind::S, 0), [(1, 0), (2, 0), (0, 1), (1, 1)]);
    assert_eq!(offsets(PieceKind::Z, 0), [(0, 0), (1, 0), (1, 1), (2, 1)]);
    assert_eq!(offsets(PieceKind::J, 0), [(1, 0), (1, 1), (0, 2), (1, 2)]);
    assert_eq!(offsets(PieceKind::L, 0), [(1, 0), (1, 1), (1, 2), (2, 2)]);
}

#[test]
fn test_create_shape_returns_independent_copies() {
    let mut a = create_shape(PieceKind::T);
    a.rotate(true);
    assert_ne!(a, create_shape(PieceKind::T));
}

// ============== Rotation Tests ==============

#[test]
fn test_i_rotates_to_horizontal() {
    assert_eq!(offsets(PieceKind::I, 1), [(0, 1), (1, 1), (2, 1), (3, 1)]);

    let mut ccw = create_shape(PieceKind::I);
    ccw.rotate(false);
    let cells: Vec<_> = ccw.minos().iter().map(|&(x, y, _)| (x, y)).collect();
    assert_eq!(cells, [(0, 2), (1, 2), (2, 2), (3, 2)]);
}

#[test]
fn test_t_rotates_clockwise() {
    assert_eq!(offsets(PieceKind::T, 1), [(1, 0), (0, 1), (1, 1), (1, 2)]);
}

#[test]
fn test_o_rotation_is_identity() {
    assert_eq!(offsets(PieceKind::O, 1), offsets(PieceKind::O, 0));
}

#[test]
fn test_four_turns_restore_every_shape() {
    for kind in PieceKind::ALL {
        let original = create_shape(kind);

        let mut cw = original;
        let mut ccw = original;
        for _ in 0..4 {
            cw.rotate(true);
            ccw.rotate(false);
        }
        assert_eq!(cw, original, "{kind:?} clockwise");
        assert_eq!(ccw, original, "{kind:?} counter-clockwise");

        let mut there_and_back = original;
        there_and_back.rotate(true);
        there_and_back.rotate(false);
        assert_eq!(there_and_back, original, "{kind:?} cw then ccw");
    }
}

// ============== Kick Tests ==============

#[test]
fn test_try_rotate_without_collision_keeps_column() {
    let board = Board::new(10, 10);
    let shape = create_shape(PieceKind::T);

    let (rotated, x) = try_rotate(&shape, 3, true, |s, x| board.collides(s, x, 2)).unwrap();
    assert_eq!(x, 3);
    assert_eq!(rotated, {
        let mut expected = shape;
        expected.rotate(true);
        expected
    });
}

#[test]
fn test_try_rotate_kicks_off_left_wall() {
    // Vertical I hugging the left wall: column 1 of the matrix sits on board column 0.
    let board = Board::new(6, 6);
    let shape = create_shape(PieceKind::I);
    assert!(!board.collides(&shape, -1, 0));

    let (rotated, x) = try_rotate(&shape, -1, true, |s, x| board.collides(s, x, 0)).unwrap();
    assert_eq!(x, 0);
    assert!(!board.collides(&rotated, x, 0));
}

#[test]
fn test_try_rotate_kicks_left_near_right_wall() {
    let board = Board::new(6, 6);
    let shape = create_shape(PieceKind::I);
    assert!(!board.collides(&shape, 3, 0));

    // Probes 3, 4, 2: only column 2 fits a 4-wide bar on a 6-wide board.
    let (_, x) = try_rotate(&shape, 3, true, |s, x| board.collides(s, x, 0)).unwrap();
    assert_eq!(x, 2);
}

#[test]
fn test_try_rotate_gives_up_after_width_bound() {
    // Against the right wall the search runs 4, 5, 3, 6 and stops before reaching 2.
    let board = Board::new(6, 6);
    let shape = create_shape(PieceKind::I);
    assert!(try_rotate(&shape, 4, true, |s, x| board.collides(s, x, 0)).is_none());
}

#[test]
fn test_try_rotate_fails_when_nothing_fits() {
    let shape = create_shape(PieceKind::L);
    assert!(try_rotate(&shape, 0, true, |_, _| true).is_none());
    assert_eq!(shape, create_shape(PieceKind::L), "input shape is untouched");
}
