//! Engine configuration.

use crate::error::GameError;
use crate::rng::RandomCellPolicy;

/// Default number of rows on a fresh board
pub const DEFAULT_ROWS: usize = 12;

/// Default number of columns on a fresh board
pub const DEFAULT_COLS: usize = 8;

/// Parameters fixed for the lifetime of an [`Engine`](crate::Engine)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    /// How injected tiles pick their color
    pub random_cells: RandomCellPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            random_cells: RandomCellPolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn with_random_cells(mut self, policy: RandomCellPolicy) -> Self {
        self.random_cells = policy;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}
