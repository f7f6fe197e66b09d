//! Error types for puzzle input
//!
//! These are raised before any search runs. A word that is not found is not
//! an error and never shows up here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Grid or word text is blank after trimming
    #[error("The {field} input is empty")]
    EmptyInput { field: &'static str },

    /// Rows of unequal length
    #[error(
        "All grid rows must have the same length: row {row} has {found} cells, expected {expected}"
    )]
    MalformedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Declared `rows`/`cols` that disagree with the cells given
    #[error("Grid declares {declared_rows}x{declared_cols} but its cells are {rows}x{cols}")]
    DimensionMismatch {
        declared_rows: usize,
        declared_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// A cell entry that is not a single character
    #[error("Grid cell at row {row}, column {col} must be a single character, got '{value}'")]
    InvalidCell { row: usize, col: usize, value: String },
}
