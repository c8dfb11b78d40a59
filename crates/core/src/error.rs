//! Errors reported by the engine.
//!
//! Every error is a caller-contract violation detected before any mutation,
//! so a rejected call leaves the engine untouched.

/// Errors that can occur when building or driving an [`Engine`](crate::Engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Invalid row index: {row} (rows: {rows})")]
    InvalidRow { row: i32, rows: usize },

    #[error("Invalid column index: {col} (cols: {cols})")]
    InvalidColumn { col: i32, cols: usize },

    #[error("invalid board dimensions {rows}x{cols}: both must be positive")]
    InvalidDimensions { rows: usize, cols: usize },
}

impl GameError {
    /// Stable machine-readable code for the error kind
    pub fn code(self) -> &'static str {
        match self {
            GameError::InvalidRow { .. } => "invalid_row",
            GameError::InvalidColumn { .. } => "invalid_column",
            GameError::InvalidDimensions { .. } => "invalid_dimensions",
        }
    }
}
