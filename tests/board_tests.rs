//! Board tests

use arena_tetris::core::{create_shape, Board};
use arena_tetris::types::{
    PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_BOARD_DIMENSION,
};

#[test]
fn test_board_new_empty() {
    let board = Board::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT);
    assert_eq!(board.width(), 12);
    assert_eq!(board.height(), 20);

    for y in 0..DEFAULT_BOARD_HEIGHT as i8 {
        for x in 0..DEFAULT_BOARD_WIDTH as i8 {
            assert!(board.is_valid(x, y), "Cell ({}, {}) should be valid", x, y);
        }
    }
    assert_eq!(board.filled_count(), 0);
}

#[test]
#[should_panic(expected = "non-zero")]
fn test_board_rejects_zero_width() {
    Board::new(0, 5);
}

#[test]
#[should_panic(expected = "must not exceed")]
fn test_board_rejects_oversized_height() {
    Board::new(12, MAX_BOARD_DIMENSION + 1);
}

#[test]
fn test_max_size_board_collides_at_far_edges() {
    let n = MAX_BOARD_DIMENSION;
    let board = Board::new(n, n);
    let o = create_shape(PieceKind::O);
    let far = n as i8 - 2;

    assert!(!board.collides(&o, far, far));
    assert!(board.collides(&o, far + 1, far), "right wall");
    assert!(board.collides(&o, far, far + 1), "floor");
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(4, 3);

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(4, 0), None);
    assert_eq!(board.get(0, 3), None);
    assert_eq!(board.get(3, 2), Some(None));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(6, 6);

    assert!(board.set(5, 4, Some(PieceKind::T)));
    assert_eq!(board.get(5, 4), Some(Some(PieceKind::T)));
    assert!(!board.is_valid(5, 4));

    assert!(board.set(5, 4, None));
    assert_eq!(board.get(5, 4), Some(None));

    assert!(!board.set(6, 0, Some(PieceKind::I)));
}

#[test]
fn test_collides_on_walls_floor_and_top() {
    let board = Board::new(4, 4);
    let o = create_shape(PieceKind::O);

    assert!(!board.collides(&o, 0, 0));
    assert!(!board.collides(&o, 2, 2));

    assert!(board.collides(&o, -1, 0), "left wall");
    assert!(board.collides(&o, 3, 0), "right wall");
    assert!(board.collides(&o, 0, 3), "floor");
    assert!(board.collides(&o, 0, -1), "above the top");
}

#[test]
fn test_collides_with_locked_cells() {
    let board = Board::from_rows(&["....", "....", "..Z.", "...."]);
    let o = create_shape(PieceKind::O);

    assert!(board.collides(&o, 1, 1));
    assert!(!board.collides(&o, 0, 1));
    assert!(!board.collides(&o, 2, 0));
}

#[test]
fn test_empty_shape_rows_do_not_collide() {
    // The I matrix only fills column 1, so columns 0, 2 and 3 may hang off the board.
    let board = Board::new(3, 4);
    let i = create_shape(PieceKind::I);
    assert!(!board.collides(&i, -1, 0));
    assert!(board.collides(&i, -2, 0));
}

#[test]
fn test_merge_writes_piece_kind() {
    let mut board = Board::new(4, 4);
    board.merge(&create_shape(PieceKind::S), 1, 2);

    assert_eq!(board.get(2, 2), Some(Some(PieceKind::S)));
    assert_eq!(board.get(3, 2), Some(Some(PieceKind::S)));
    assert_eq!(board.get(1, 3), Some(Some(PieceKind::S)));
    assert_eq!(board.get(2, 3), Some(Some(PieceKind::S)));
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_sweep_removes_rows_and_shifts_down() {
    let mut board = Board::from_rows(&["....", "JJ..", "IIII", "IIII"]);

    assert_eq!(board.sweep_completed_rows(), 2);
    assert_eq!(board, Board::from_rows(&["....", "....", "....", "JJ.."]));
}

#[test]
fn test_sweep_rechecks_same_row_after_removal() {
    let mut board = Board::from_rows(&["....", "OOOO", "T...", "LLLL", "ZZZZ"]);

    assert_eq!(board.sweep_completed_rows(), 3);
    assert_eq!(
        board,
        Board::from_rows(&["....", "....", "....", "....", "T..."])
    );
}

#[test]
fn test_sweep_never_removes_top_row() {
    let mut board = Board::from_rows(&["IIII", "....", "..S."]);

    assert_eq!(board.sweep_completed_rows(), 0);
    assert!(board.is_row_full(0));
}

#[test]
fn test_reset_all_keeps_dimensions() {
    let mut board = Board::from_rows(&["I..", "OOO"]);
    board.reset_all();

    assert_eq!((board.width(), board.height()), (3, 2));
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_write_color_ids_row_major() {
    let board = Board::from_rows(&["I.", ".Z"]);
    let mut ids = vec![99; 10];
    board.write_color_ids(&mut ids);

    assert_eq!(
        ids,
        vec![PieceKind::I.color_id(), 0, 0, PieceKind::Z.color_id()]
    );
}
