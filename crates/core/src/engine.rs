//! Engine module - the clear cell rules on top of a [`Board`]
//!
//! The engine owns its board, the running score and the injected random
//! source. Callers drive it with two mutators:
//!
//! - [`Engine::next_animation_step`] on a timer: rows move down one and a
//!   fresh row of random tiles appears at the top
//! - [`Engine::process_cell`] on a click: same-colored tiles around the click
//!   are cleared and any row left empty collapses
//!
//! Game over is derived from the last row on every query, never stored, so a
//! click that empties the last row puts the engine back in play.
//!
//! Renderers read state through [`Engine::board`] (a shared borrow, so the
//! grid cannot be mutated from outside) or [`Engine::snapshot`] (an owned
//! copy).

use arrayvec::ArrayVec;
use log::{debug, trace, warn};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::error::GameError;
use crate::rng::{random_non_empty, RandomSource};
use crate::snapshot::EngineSnapshot;
use crate::types::CellValue;

/// Result of one [`Engine::next_animation_step`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Rows shifted down and a new top row was injected
    Advanced,
    /// The game is over; nothing changed
    Halted,
}

/// What a single click did to the board
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClickOutcome {
    /// Cells turned empty (and points awarded)
    pub cleared: u32,
    /// Candidate rows that were collapsed, in the order they were processed
    pub collapsed_rows: ArrayVec<usize, 3>,
}

impl ClickOutcome {
    /// True when the click changed nothing (e.g. it hit an empty cell)
    pub fn is_noop(&self) -> bool {
        self.cleared == 0 && self.collapsed_rows.is_empty()
    }
}

/// Complete clear cell game state
#[derive(Debug, Clone)]
pub struct Engine<R> {
    board: Board,
    score: u32,
    rng: R,
    config: EngineConfig,
}

impl<R: RandomSource> Engine<R> {
    /// Create an engine with an empty `rows x cols` board
    ///
    /// # Examples
    ///
    /// ```
    /// use clear_cell_core::{Engine, SimpleRng};
    ///
    /// let mut engine = Engine::new(4, 4, SimpleRng::new(1)).unwrap();
    /// engine.next_animation_step();
    /// assert!(!engine.is_game_over());
    /// assert_eq!(engine.score(), 0);
    /// ```
    pub fn new(rows: usize, cols: usize, rng: R) -> Result<Self, GameError> {
        Self::with_config(EngineConfig::new(rows, cols), rng)
    }

    /// Create an engine from a full configuration
    pub fn with_config(config: EngineConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        debug!(
            "[Engine] new {}x{} board ({:?} tiles)",
            config.rows, config.cols, config.random_cells
        );
        Ok(Self {
            board: Board::new(config.rows, config.cols),
            score: 0,
            rng,
            config,
        })
    }

    /// Create an engine that starts from an existing position
    ///
    /// The score starts at 0; the default tile policy is used.
    pub fn from_board(board: Board, rng: R) -> Result<Self, GameError> {
        let config = EngineConfig::new(board.rows(), board.cols());
        config.validate()?;
        Ok(Self {
            board,
            score: 0,
            rng,
            config,
        })
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Read-only view of the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the cell at (row, col), validating both indices
    pub fn cell(&self, row: i32, col: i32) -> Result<CellValue, GameError> {
        let (row, col) = self.check_position(row, col)?;
        Ok(self.board.get(row, col))
    }

    /// Overwrite one cell; the score is not touched
    pub fn set_cell(&mut self, row: i32, col: i32, value: CellValue) -> Result<(), GameError> {
        let (row, col) = self.check_position(row, col)?;
        self.board.set(row, col, value);
        Ok(())
    }

    /// The game is over once the last row holds at least one tile.
    ///
    /// Only the last row is inspected.
    pub fn is_game_over(&self) -> bool {
        let last = self.board.rows() - 1;
        self.board.row(last).iter().any(|cell| !cell.is_empty())
    }

    /// Text dump of the board (see [`Board`]'s `Display`)
    pub fn dump(&self) -> String {
        self.board.to_string()
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot::capture(&self.board, self.score, self.is_game_over())
    }

    /// Advance the animation by one tick
    ///
    /// Does nothing once the game is over. Otherwise every row moves down one
    /// (the old last row is dropped) and row 0 is refilled left to right with
    /// freshly drawn tiles.
    pub fn next_animation_step(&mut self) -> StepOutcome {
        if self.is_game_over() {
            trace!("[Engine] animation step skipped, game over");
            return StepOutcome::Halted;
        }

        // Bottom-up so no row is overwritten before it is read.
        for row in (1..self.board.rows()).rev() {
            self.board.copy_row(row - 1, row);
        }

        for col in 0..self.board.cols() {
            let cell = random_non_empty(&mut self.rng, self.config.random_cells);
            self.board.set(0, col, cell);
        }

        debug!(
            "[Engine] animation step, top row {}",
            self.board.row(0).iter().map(|c| c.label()).collect::<String>()
        );
        StepOutcome::Advanced
    }

    /// Handle a click at (row, col)
    ///
    /// Clears the clicked tile and every tile of the same color in its 3x3
    /// neighborhood (one hop, no chaining), awarding a point per tile. Then
    /// each of the rows `row-1`, `row`, `row+1` that is empty when reached is
    /// collapsed, in that order.
    ///
    /// Clicking an empty cell is a no-op.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidRow`] if `row` is outside the board (checked
    /// first), then [`GameError::InvalidColumn`] if `col` is. Nothing is
    /// mutated on error.
    pub fn process_cell(&mut self, row: i32, col: i32) -> Result<ClickOutcome, GameError> {
        let (row, col) = match self.check_position(row, col) {
            Ok(pos) => pos,
            Err(e) => {
                warn!("[Engine] click rejected: {}", e);
                return Err(e);
            }
        };

        let target = self.board.get(row, col);
        if target.is_empty() {
            trace!("[Engine] click on empty cell ({}, {})", row, col);
            return Ok(ClickOutcome::default());
        }

        let mut outcome = ClickOutcome {
            cleared: self.clear_neighbors(row, col, target),
            collapsed_rows: ArrayVec::new(),
        };
        self.score += outcome.cleared;

        let (lo, hi) = Self::span(row, self.board.rows());
        for candidate in lo..=hi {
            if self.board.is_row_empty(candidate) {
                self.collapse_row(candidate);
                outcome.collapsed_rows.push(candidate);
            }
        }

        debug!(
            "[Engine] click ({}, {}) {:?}: cleared {}, collapsed {:?}, score {}",
            row, col, target, outcome.cleared, outcome.collapsed_rows, self.score
        );
        Ok(outcome)
    }

    /// Row is validated before column
    fn check_position(&self, row: i32, col: i32) -> Result<(usize, usize), GameError> {
        let rows = self.board.rows();
        let cols = self.board.cols();

        let r = usize::try_from(row)
            .ok()
            .filter(|&r| r < rows)
            .ok_or(GameError::InvalidRow { row, rows })?;
        let c = usize::try_from(col)
            .ok()
            .filter(|&c| c < cols)
            .ok_or(GameError::InvalidColumn { col, cols })?;
        Ok((r, c))
    }

    /// Inclusive index range `[center-1, center+1]` clipped to `[0, len)`
    fn span(center: usize, len: usize) -> (usize, usize) {
        (center.saturating_sub(1), (center + 1).min(len - 1))
    }

    /// Empty every `target`-colored cell in the 3x3 window around (row, col)
    fn clear_neighbors(&mut self, row: usize, col: usize, target: CellValue) -> u32 {
        let (row_lo, row_hi) = Self::span(row, self.board.rows());
        let (col_lo, col_hi) = Self::span(col, self.board.cols());

        let mut cleared = 0;
        for r in row_lo..=row_hi {
            for c in col_lo..=col_hi {
                if self.board.get(r, c) == target {
                    self.board.set(r, c, CellValue::Empty);
                    cleared += 1;
                }
            }
        }
        cleared
    }

    /// Remove `row` by shifting every row below it up one; the last row
    /// becomes empty
    fn collapse_row(&mut self, row: usize) {
        let rows = self.board.rows();
        for r in row + 1..rows {
            self.board.copy_row(r, r - 1);
        }
        self.board.fill_row(rows - 1, CellValue::Empty);
        trace!("[Engine] collapsed row {}", row);
    }
}
