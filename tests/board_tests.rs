//! Board tests - grid primitive behaviour

use clear_cell::core::Board;
use clear_cell::types::CellValue;

#[test]
fn test_board_new_empty() {
    let board = Board::new(6, 4);
    assert_eq!(board.rows(), 6);
    assert_eq!(board.cols(), 4);

    // All cells should be empty
    for row in 0..6 {
        for col in 0..4 {
            assert_eq!(board.get(row, col), CellValue::Empty);
        }
        assert!(board.is_row_empty(row));
    }
    assert_eq!(board.count(CellValue::Empty), 24);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(5, 5);

    board.set(4, 0, CellValue::Green);
    assert_eq!(board.get(4, 0), CellValue::Green);

    board.set(0, 4, CellValue::Yellow);
    assert_eq!(board.get(0, 4), CellValue::Yellow);

    // Clear a cell
    board.set(4, 0, CellValue::Empty);
    assert_eq!(board.get(4, 0), CellValue::Empty);
    assert_eq!(board.count(CellValue::Yellow), 1);
}

#[test]
#[should_panic]
fn test_board_get_out_of_bounds_panics() {
    let board = Board::new(2, 2);
    let _ = board.get(2, 0);
}

#[test]
fn test_board_dump_format() {
    let mut board = Board::new(2, 3);
    board.set(0, 0, CellValue::Red);
    board.set(1, 2, CellValue::Blue);

    assert_eq!(board.to_string(), "Board(Rows: 2, Cols: 3)\nR..\n..B\n");
}

#[test]
fn test_board_from_rows_matches_dump() {
    let board = Board::from_rows(&["RGBY", "....", "Y..R"]).unwrap();

    assert_eq!(board.rows(), 3);
    assert_eq!(board.cols(), 4);
    assert_eq!(board.to_string(), "Board(Rows: 3, Cols: 4)\nRGBY\n....\nY..R\n");
}

#[test]
fn test_board_row_helpers() {
    let mut board = Board::from_rows(&["RRR", "G.G", "..."]).unwrap();

    assert!(!board.is_row_empty(0));
    assert!(!board.is_row_empty(1));
    assert!(board.is_row_empty(2));

    board.copy_row(1, 2);
    assert_eq!(
        board.row(2),
        &[CellValue::Green, CellValue::Empty, CellValue::Green]
    );

    board.fill_row(0, CellValue::Empty);
    assert!(board.is_row_empty(0));
    assert_eq!(board.cells().len(), 9);
}
