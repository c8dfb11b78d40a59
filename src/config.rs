//! Driver configuration, read from `CLEAR_CELL_*` environment variables.

use std::str::FromStr;

use clear_cell_core::config::{DEFAULT_COLS, DEFAULT_ROWS};
use clear_cell_core::{EngineConfig, RandomCellPolicy};

/// Default RNG seed for the driver
pub const DEFAULT_SEED: u64 = 1;

/// Default cap on animation steps before the driver stops
pub const DEFAULT_MAX_STEPS: u32 = 500;

/// Headless driver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub rows: usize,
    pub cols: usize,
    pub seed: u64,
    pub max_steps: u32,
    /// Draw injected tiles uniformly instead of the legacy red-biased draw
    pub uniform_cells: bool,
    /// Print the final state as a JSON snapshot instead of the text dump
    pub json: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: DEFAULT_SEED,
            max_steps: DEFAULT_MAX_STEPS,
            uniform_cells: false,
            json: false,
        }
    }
}

impl DriverConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup; unset or unparseable values fall
    /// back to the defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |key: &str| {
            lookup(key)
                .map(|v| v == "1" || v.to_lowercase() == "true")
                .unwrap_or(false)
        };

        Self {
            rows: parse_var(lookup("CLEAR_CELL_ROWS")).unwrap_or(defaults.rows),
            cols: parse_var(lookup("CLEAR_CELL_COLS")).unwrap_or(defaults.cols),
            seed: parse_var(lookup("CLEAR_CELL_SEED")).unwrap_or(defaults.seed),
            max_steps: parse_var(lookup("CLEAR_CELL_MAX_STEPS")).unwrap_or(defaults.max_steps),
            uniform_cells: flag("CLEAR_CELL_UNIFORM_CELLS"),
            json: flag("CLEAR_CELL_JSON"),
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        let policy = if self.uniform_cells {
            RandomCellPolicy::Uniform
        } else {
            RandomCellPolicy::Legacy
        };
        EngineConfig::new(self.rows, self.cols).with_random_cells(policy)
    }
}

fn parse_var<T: FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(DriverConfig::from_lookup(lookup(&[])), DriverConfig::default());
    }

    #[test]
    fn values_are_parsed() {
        let config = DriverConfig::from_lookup(lookup(&[
            ("CLEAR_CELL_ROWS", "5"),
            ("CLEAR_CELL_COLS", " 7 "),
            ("CLEAR_CELL_SEED", "99"),
            ("CLEAR_CELL_MAX_STEPS", "3"),
            ("CLEAR_CELL_UNIFORM_CELLS", "TRUE"),
            ("CLEAR_CELL_JSON", "1"),
        ]));

        assert_eq!(config.rows, 5);
        assert_eq!(config.cols, 7);
        assert_eq!(config.seed, 99);
        assert_eq!(config.max_steps, 3);
        assert!(config.uniform_cells);
        assert!(config.json);
        assert_eq!(config.engine_config().random_cells, RandomCellPolicy::Uniform);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let config = DriverConfig::from_lookup(lookup(&[
            ("CLEAR_CELL_ROWS", "-3"),
            ("CLEAR_CELL_SEED", "abc"),
            ("CLEAR_CELL_JSON", "yes"),
        ]));

        assert_eq!(config.rows, DEFAULT_ROWS);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert!(!config.json);
    }
}
