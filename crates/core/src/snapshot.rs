use serde::Serialize;

use crate::board::Board;
use crate::types::CellValue;

/// Owned copy of an engine's observable state
///
/// Cells are stored as one label string per row (`"RG.."`), matching the
/// text dump. Changing a snapshot never affects the engine it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EngineSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<String>,
    pub score: u32,
    pub game_over: bool,
}

impl EngineSnapshot {
    pub(crate) fn capture(board: &Board, score: u32, game_over: bool) -> Self {
        let cells = (0..board.rows())
            .map(|row| board.row(row).iter().map(|cell| cell.label()).collect())
            .collect();

        Self {
            rows: board.rows(),
            cols: board.cols(),
            cells,
            score,
            game_over,
        }
    }

    /// Cell at (row, col), or `None` if out of range
    pub fn cell(&self, row: usize, col: usize) -> Option<CellValue> {
        let label = self.cells.get(row)?.chars().nth(col)?;
        CellValue::from_label(label)
    }

    /// Rebuild a standalone board from the snapshot
    pub fn to_board(&self) -> Option<Board> {
        let rows: Vec<&str> = self.cells.iter().map(String::as_str).collect();
        Board::from_rows(&rows)
    }
}
