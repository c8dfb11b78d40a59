//! RNG module - random sources and the non-empty cell draw
//!
//! The engine never owns global random state. It is handed a [`RandomSource`]
//! at construction and only asks it for uniform integers in `[0, bound)`.
//!
//! Two sources are provided out of the box:
//! - [`SimpleRng`], a small LCG for deterministic tests and replays
//! - any [`rand::Rng`] (for example a seeded `rand::rngs::StdRng`)

use crate::types::{CellValue, CELL_VALUE_COUNT, COLOR_COUNT};

/// Capability to produce a uniform integer in `[0, bound)`
///
/// `bound` is always at least 1 when called by the engine.
pub trait RandomSource {
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_index(&mut self, bound: usize) -> usize {
        let bound = u32::try_from(bound).unwrap_or(u32::MAX);
        self.next_range(bound) as usize
    }
}

/// How a fresh tile color is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomCellPolicy {
    /// Draw over every slot including `Empty`; a draw landing on `Empty`
    /// yields `Red`, so red comes up twice as often as each other color.
    #[default]
    Legacy,
    /// Draw over the colored slots only; every color is equally likely.
    Uniform,
}

/// Draw a non-empty cell value from `source`
///
/// # Examples
///
/// ```
/// use clear_cell_core::rng::{random_non_empty, RandomCellPolicy, SimpleRng};
///
/// let mut rng = SimpleRng::new(7);
/// let cell = random_non_empty(&mut rng, RandomCellPolicy::Legacy);
/// assert!(!cell.is_empty());
/// ```
pub fn random_non_empty<R: RandomSource + ?Sized>(
    source: &mut R,
    policy: RandomCellPolicy,
) -> CellValue {
    let target = match policy {
        RandomCellPolicy::Legacy => source.next_index(CELL_VALUE_COUNT),
        RandomCellPolicy::Uniform => source.next_index(COLOR_COUNT),
    };

    // Any slot past the colors (i.e. Empty's) maps to the first color.
    CellValue::COLORS
        .get(target)
        .copied()
        .unwrap_or(CellValue::Red)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Replays a fixed list of draws and records the bounds it was asked for
    struct Scripted {
        draws: Vec<usize>,
        bounds: Vec<usize>,
    }

    impl RandomSource for Scripted {
        fn next_index(&mut self, bound: usize) -> usize {
            self.bounds.push(bound);
            self.draws.remove(0)
        }
    }

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_simple_rng_stays_in_range() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_index(CELL_VALUE_COUNT) < CELL_VALUE_COUNT);
        }
    }

    #[test]
    fn test_legacy_maps_empty_slot_to_red() {
        let mut source = Scripted {
            draws: vec![0, 1, 2, 3, 4],
            bounds: Vec::new(),
        };
        let drawn: Vec<_> = (0..5)
            .map(|_| random_non_empty(&mut source, RandomCellPolicy::Legacy))
            .collect();

        assert_eq!(
            drawn,
            vec![
                CellValue::Red,
                CellValue::Green,
                CellValue::Blue,
                CellValue::Yellow,
                CellValue::Red,
            ]
        );
        assert!(source.bounds.iter().all(|&b| b == CELL_VALUE_COUNT));
    }

    #[test]
    fn test_uniform_draws_over_colors_only() {
        let mut source = Scripted {
            draws: vec![3, 0],
            bounds: Vec::new(),
        };
        assert_eq!(
            random_non_empty(&mut source, RandomCellPolicy::Uniform),
            CellValue::Yellow
        );
        assert_eq!(
            random_non_empty(&mut source, RandomCellPolicy::Uniform),
            CellValue::Red
        );
        assert_eq!(source.bounds, vec![COLOR_COUNT, COLOR_COUNT]);
    }

    #[test]
    fn test_legacy_red_bias_is_visible() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = [0usize; COLOR_COUNT];
        for _ in 0..10_000 {
            counts[random_non_empty(&mut rng, RandomCellPolicy::Legacy).index()] += 1;
        }

        // Red collects two slots out of five; each other color one.
        assert!(counts[0] > counts[1] + counts[1] / 2);
        assert!(counts[0] > counts[2] + counts[2] / 2);
        assert!(counts[0] > counts[3] + counts[3] / 2);
    }

    #[test]
    fn test_rand_rng_is_a_source() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let cell = random_non_empty(&mut rng, RandomCellPolicy::Uniform);
            assert!(!cell.is_empty());
        }
    }
}
