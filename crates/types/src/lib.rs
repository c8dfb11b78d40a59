//! Core types module - shared cell values and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine rules, snapshots, a renderer reading state).
//!
//! # Cell Values
//!
//! A cell holds exactly one [`CellValue`]:
//!
//! | Variant | Label | Color |
//! |---------|-------|-------|
//! | `Red` | `R` | (255, 0, 0) |
//! | `Green` | `G` | (0, 255, 0) |
//! | `Blue` | `B` | (0, 0, 255) |
//! | `Yellow` | `Y` | (255, 255, 0) |
//! | `Empty` | `.` | (255, 255, 255) |
//!
//! The variant order is the ordinal order used by random draws, so `Empty`
//! always occupies the last slot.
//!
//! # Examples
//!
//! ```
//! use clear_cell_types::{CellValue, CELL_VALUE_COUNT, COLOR_COUNT};
//!
//! let cell = CellValue::Blue;
//! assert_eq!(cell.label(), 'B');
//! assert!(!cell.is_empty());
//!
//! // Parse from a label (case-insensitive)
//! assert_eq!(CellValue::from_label('y'), Some(CellValue::Yellow));
//!
//! assert_eq!(CELL_VALUE_COUNT, 5);
//! assert_eq!(COLOR_COUNT, 4);
//! ```

use std::fmt;

/// Number of cell values, including `Empty`
pub const CELL_VALUE_COUNT: usize = 5;

/// Number of non-empty (colored) cell values
pub const COLOR_COUNT: usize = CELL_VALUE_COUNT - 1;

/// Label used for `Empty` cells in text dumps
pub const EMPTY_LABEL: char = '.';

/// Display color of a cell as plain RGB components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The value stored in one board cell
///
/// - **Red**, **Green**, **Blue**, **Yellow**: tiles that can be cleared
/// - **Empty**: no tile present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellValue {
    Red,
    Green,
    Blue,
    Yellow,
    #[default]
    Empty,
}

impl CellValue {
    /// Every variant in ordinal order
    pub const ALL: [CellValue; CELL_VALUE_COUNT] = [
        CellValue::Red,
        CellValue::Green,
        CellValue::Blue,
        CellValue::Yellow,
        CellValue::Empty,
    ];

    /// The colored variants in ordinal order
    pub const COLORS: [CellValue; COLOR_COUNT] = [
        CellValue::Red,
        CellValue::Green,
        CellValue::Blue,
        CellValue::Yellow,
    ];

    /// Look up a variant by ordinal
    ///
    /// # Examples
    ///
    /// ```
    /// use clear_cell_types::CellValue;
    ///
    /// assert_eq!(CellValue::from_index(0), Some(CellValue::Red));
    /// assert_eq!(CellValue::from_index(4), Some(CellValue::Empty));
    /// assert_eq!(CellValue::from_index(5), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Ordinal of this variant
    pub fn index(self) -> usize {
        match self {
            CellValue::Red => 0,
            CellValue::Green => 1,
            CellValue::Blue => 2,
            CellValue::Yellow => 3,
            CellValue::Empty => 4,
        }
    }

    /// Parse a cell from its single-character label (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use clear_cell_types::CellValue;
    ///
    /// assert_eq!(CellValue::from_label('R'), Some(CellValue::Red));
    /// assert_eq!(CellValue::from_label('g'), Some(CellValue::Green));
    /// assert_eq!(CellValue::from_label('.'), Some(CellValue::Empty));
    /// assert_eq!(CellValue::from_label('x'), None);
    /// ```
    pub fn from_label(label: char) -> Option<Self> {
        match label.to_ascii_uppercase() {
            'R' => Some(CellValue::Red),
            'G' => Some(CellValue::Green),
            'B' => Some(CellValue::Blue),
            'Y' => Some(CellValue::Yellow),
            EMPTY_LABEL => Some(CellValue::Empty),
            _ => None,
        }
    }

    /// Single-character label used in text dumps
    pub fn label(self) -> char {
        match self {
            CellValue::Red => 'R',
            CellValue::Green => 'G',
            CellValue::Blue => 'B',
            CellValue::Yellow => 'Y',
            CellValue::Empty => EMPTY_LABEL,
        }
    }

    /// Display color for a renderer
    pub fn color(self) -> Rgb {
        match self {
            CellValue::Red => Rgb::new(255, 0, 0),
            CellValue::Green => Rgb::new(0, 255, 0),
            CellValue::Blue => Rgb::new(0, 0, 255),
            CellValue::Yellow => Rgb::new(255, 255, 0),
            CellValue::Empty => Rgb::new(255, 255, 255),
        }
    }

    pub fn is_empty(self) -> bool {
        self == CellValue::Empty
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
