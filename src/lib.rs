//! Clear Cell (workspace facade crate).
//!
//! This package exposes `clear_cell::{core, types}` while the implementation lives in
//! dedicated crates under `crates/`. It also hosts the headless driver used by the
//! `clear-cell` binary.

pub mod config;
pub mod driver;

pub use clear_cell_core as core;
pub use clear_cell_types as types;
