//! Board tests - placement rules, win detection, and lifecycle

use tui_tictactoe::core::{Board, InvalidMove};
use tui_tictactoe::types::{Line, Mark, GRID_SIZE};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(!board.is_full());
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            assert!(board.is_empty(row, col), "cell ({}, {}) not empty", row, col);
        }
    }
    assert_eq!(board.empty_cells().count(), GRID_SIZE * GRID_SIZE);
}

#[test]
fn test_place_rejects_occupied_without_change() {
    let mut board = Board::new();
    board.place(1, 1, Mark::X).unwrap();
    let before = board.clone();

    assert_eq!(
        board.place(1, 1, Mark::O),
        Err(InvalidMove::Occupied { row: 1, col: 1 })
    );
    assert_eq!(board, before);
}

#[test]
fn test_place_rejects_out_of_bounds_without_change() {
    let mut board = Board::new();
    let before = board.clone();

    assert_eq!(
        board.place(GRID_SIZE, 0, Mark::X),
        Err(InvalidMove::OutOfBounds { row: GRID_SIZE, col: 0 })
    );
    assert_eq!(
        board.place(0, GRID_SIZE, Mark::X),
        Err(InvalidMove::OutOfBounds { row: 0, col: GRID_SIZE })
    );
    assert_eq!(board, before);
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    let marks = [Mark::X, Mark::O];
    let mut i = 0;
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            assert!(!board.is_full());
            board.place(row, col, marks[i % 2]).unwrap();
            i += 1;
        }
    }
    assert!(board.is_full());
}

#[test]
fn test_winning_line_detects_every_row_and_column() {
    for i in 0..GRID_SIZE {
        let mut by_row = Board::new();
        let mut by_col = Board::new();
        for j in 0..GRID_SIZE {
            by_row.place(i, j, Mark::X).unwrap();
            by_col.place(j, i, Mark::O).unwrap();
        }

        assert_eq!(
            by_row.winning_line(Mark::X),
            Some(Line::new((i, 0), (i, GRID_SIZE - 1)))
        );
        assert_eq!(by_row.winning_line(Mark::O), None);

        assert_eq!(
            by_col.winning_line(Mark::O),
            Some(Line::new((0, i), (GRID_SIZE - 1, i)))
        );
        assert_eq!(by_col.winning_line(Mark::X), None);
    }
}

#[test]
fn test_winning_line_detects_both_diagonals() {
    let mut main_diag = Board::new();
    let mut anti_diag = Board::new();
    for i in 0..GRID_SIZE {
        main_diag.place(i, i, Mark::X).unwrap();
        anti_diag.place(GRID_SIZE - 1 - i, i, Mark::X).unwrap();
    }

    assert_eq!(
        main_diag.winning_line(Mark::X),
        Some(Line::new((0, 0), (GRID_SIZE - 1, GRID_SIZE - 1)))
    );
    assert_eq!(
        anti_diag.winning_line(Mark::X),
        Some(Line::new((GRID_SIZE - 1, 0), (0, GRID_SIZE - 1)))
    );
}

#[test]
fn test_winning_line_none_without_a_complete_line() {
    let mut board = Board::new();
    // A drawn final position: no line for either side.
    //   X O X
    //   X O O
    //   O X X
    let layout = [
        [Mark::X, Mark::O, Mark::X],
        [Mark::X, Mark::O, Mark::O],
        [Mark::O, Mark::X, Mark::X],
    ];
    for (row, marks) in layout.iter().enumerate() {
        for (col, mark) in marks.iter().enumerate() {
            board.place(row, col, *mark).unwrap();
        }
    }

    assert!(board.is_full());
    assert_eq!(board.winning_line(Mark::X), None);
    assert_eq!(board.winning_line(Mark::O), None);
}

#[test]
fn test_winning_line_tie_break_is_scan_order() {
    // Row 0 and column 0 complete simultaneously; the row wins the scan.
    let mut board = Board::new();
    for i in 0..GRID_SIZE {
        board.place(0, i, Mark::X).unwrap();
        if i > 0 {
            board.place(i, 0, Mark::X).unwrap();
        }
    }

    assert_eq!(
        board.winning_line(Mark::X),
        Some(Line::new((0, 0), (0, GRID_SIZE - 1)))
    );

    // Both diagonals through a full X board: the main diagonal is
    // scanned before the anti-diagonal, but rows still come first.
    let mut full = Board::new();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            full.place(row, col, Mark::O).unwrap();
        }
    }
    assert_eq!(
        full.winning_line(Mark::O),
        Some(Line::new((0, 0), (0, GRID_SIZE - 1)))
    );
}

#[test]
fn test_reset_empties_every_cell() {
    let mut board = Board::new();
    board.place(0, 0, Mark::X).unwrap();
    board.place(1, 1, Mark::O).unwrap();
    board.place(2, 2, Mark::X).unwrap();

    board.reset();

    assert!(!board.is_full());
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            assert!(board.is_empty(row, col));
        }
    }
}
