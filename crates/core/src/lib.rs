//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the clear cell rules and board state. It has **no
//! dependencies** on rendering, input handling or I/O, making it:
//!
//! - **Deterministic**: the same random source produces identical games
//! - **Testable**: a scripted [`RandomSource`] pins every injected tile
//! - **Portable**: any driver (terminal, GUI, headless) can run it
//!
//! # Module Structure
//!
//! - [`board`]: `rows x cols` grid of [`CellValue`](types::CellValue)s with row helpers
//! - [`engine`]: game-over test, scoring, animation step and click processing
//! - [`rng`]: random source capability and the non-empty tile draw
//! - [`config`]: engine dimensions and tile policy
//! - [`snapshot`]: owned, serializable copies of engine state
//! - [`error`]: caller-contract errors
//!
//! # Game Rules
//!
//! - **Animation step**: every row moves down one and a fresh random row
//!   appears at the top, unless the game is over
//! - **Click**: the clicked tile and same-colored tiles in its 3x3
//!   neighborhood are cleared, one point each
//! - **Collapse**: a row emptied by a click is removed; rows below move up
//! - **Game over**: the last row holds at least one tile
//!
//! # Example
//!
//! ```
//! use clear_cell_core::{Engine, SimpleRng};
//!
//! let mut engine = Engine::new(5, 5, SimpleRng::new(12345)).unwrap();
//! engine.next_animation_step();
//!
//! let outcome = engine.process_cell(0, 2).unwrap();
//! assert!(outcome.cleared >= 1);
//! assert_eq!(engine.score(), outcome.cleared);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod rng;
pub mod snapshot;

pub use clear_cell_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::EngineConfig;
pub use engine::{ClickOutcome, Engine, StepOutcome};
pub use error::GameError;
pub use rng::{random_non_empty, RandomCellPolicy, RandomSource, SimpleRng};
pub use snapshot::EngineSnapshot;
