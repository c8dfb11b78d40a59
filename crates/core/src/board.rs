//! Board module - manages the game grid
//!
//! The board is a `rows x cols` grid where each cell holds a [`CellValue`].
//! Uses a flat vector (row-major) for cache locality; dimensions are fixed at
//! construction.
//! Coordinates: (row, col) where row ranges 0..rows (top to bottom) and col
//! ranges 0..cols (left to right).
//!
//! Bounds are the caller's responsibility at this layer. The engine validates
//! player-facing coordinates before touching the board.

use std::fmt;

use crate::types::CellValue;

/// The game board - flat row-major storage of `rows * cols` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<CellValue>,
}

impl Board {
    /// Create a new board with every cell `Empty`
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![CellValue::Empty; rows * cols],
        }
    }

    /// Build a board from label strings, one per row (`"RG.B"`)
    ///
    /// Returns `None` if the rows are ragged, empty, or contain an unknown
    /// label.
    ///
    /// # Examples
    ///
    /// ```
    /// use clear_cell_core::Board;
    /// use clear_cell_core::types::CellValue;
    ///
    /// let board = Board::from_rows(&["R.", ".G"]).unwrap();
    /// assert_eq!(board.get(1, 1), CellValue::Green);
    /// assert!(Board::from_rows(&["R.", "G"]).is_none());
    /// ```
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let cols = rows.first()?.chars().count();
        if cols == 0 {
            return None;
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for line in rows {
            if line.chars().count() != cols {
                return None;
            }
            for label in line.chars() {
                cells.push(CellValue::from_label(label)?);
            }
        }

        Some(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> CellValue {
        self.cells[self.index(row, col)]
    }

    /// Set the cell at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: CellValue) {
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> &[CellValue] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Check if a row has no tiles left
    pub fn is_row_empty(&self, row: usize) -> bool {
        self.row(row).iter().all(|cell| cell.is_empty())
    }

    /// Overwrite every cell of a row with `value`
    pub fn fill_row(&mut self, row: usize, value: CellValue) {
        let start = row * self.cols;
        for cell in &mut self.cells[start..start + self.cols] {
            *cell = value;
        }
    }

    /// Copy row `src` over row `dst`
    /// Note: copy_within handles the ranges without a temporary buffer
    pub fn copy_row(&mut self, src: usize, dst: usize) {
        let width = self.cols;
        let src_start = src * width;
        self.cells
            .copy_within(src_start..src_start + width, dst * width);
    }

    /// Number of cells holding `value`
    pub fn count(&self, value: CellValue) -> usize {
        self.cells.iter().filter(|&&cell| cell == value).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board(Rows: {}, Cols: {})", self.rows, self.cols)?;
        for row in 0..self.rows {
            for cell in self.row(row) {
                write!(f, "{}", cell.label())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
