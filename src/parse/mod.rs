//! Puzzle input parsing
//!
//! Grid text is one row per line with cells separated by commas, e.g.
//!
//! ```text
//! C, A, T
//! X, X, X
//! ```
//!
//! Word text is one word per line. Everything is trimmed and uppercased;
//! blank cells and blank lines are dropped.

pub mod errors;

pub use errors::InputError;

use crate::models::Grid;

/// Cell separator within a grid row
pub const CELL_SEPARATOR: char = ',';

/// Parse grid text into a rectangular `Grid`
pub fn parse_grid(text: &str) -> Result<Grid, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::EmptyInput { field: "grid" });
    }

    let rows = text
        .lines()
        .enumerate()
        .map(|(row, line)| parse_row(row, line))
        .collect::<Result<Vec<_>, _>>()?;

    Grid::from_rows(rows)
}

fn parse_row(row: usize, line: &str) -> Result<Vec<char>, InputError> {
    line.split(CELL_SEPARATOR)
        .map(|entry| entry.trim().to_uppercase())
        .filter(|entry| !entry.is_empty())
        .enumerate()
        .map(|(col, entry)| {
            let mut chars = entry.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(InputError::InvalidCell { row, col, value: entry }),
            }
        })
        .collect()
}

/// Parse word text into uppercase words, preserving order and duplicates
pub fn parse_words(text: &str) -> Result<Vec<String>, InputError> {
    let words: Vec<String> = text
        .lines()
        .map(normalize_word)
        .filter(|w| !w.is_empty())
        .collect();

    if words.is_empty() {
        return Err(InputError::EmptyInput { field: "words" });
    }
    Ok(words)
}

/// Trim and uppercase a single word
pub fn normalize_word(word: &str) -> String {
    word.trim().to_uppercase()
}
