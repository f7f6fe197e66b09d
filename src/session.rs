//! Search session controller
//!
//! Runs a batch of words against one grid and collects the results. The
//! occupied cell set belongs to the session that produced it; nothing is
//! shared between sessions.

use crate::models::{Grid, GridPos, OccupiedCells, SearchReport, WordResult};
use crate::parse::{parse_grid, parse_words, InputError};
use crate::search::locate;

/// Search every word in `words` and partition them into found / not found.
///
/// Words are searched in order, one at a time. Each found word adds its
/// cells to a fresh `OccupiedCells`.
pub fn solve<S: AsRef<str>>(grid: &Grid, words: &[S]) -> SearchReport {
    let mut report = SearchReport::default();

    for word in words {
        let word = word.as_ref();
        let placement = locate(grid, word);

        match &placement {
            Some(m) => {
                report.occupied.insert_match(m);
                report.found.push(word.to_string());
            }
            None => report.not_found.push(word.to_string()),
        }

        report.results.push(WordResult {
            word: word.to_string(),
            placement,
        });
    }

    log::info!(
        "searched {} words in {}x{} grid: {} found, {} not found",
        words.len(),
        grid.rows(),
        grid.cols(),
        report.found_count(),
        report.not_found_count()
    );

    report
}

/// Parse both inputs and solve, all or nothing
///
/// Blank input in either field is reported before any format check.
pub fn solve_text(
    grid_text: &str,
    words_text: &str,
) -> Result<(Grid, SearchReport), InputError> {
    if grid_text.trim().is_empty() {
        return Err(InputError::EmptyInput { field: "grid" });
    }
    if words_text.trim().is_empty() {
        return Err(InputError::EmptyInput { field: "words" });
    }

    let grid = parse_grid(grid_text)?;
    let words = parse_words(words_text)?;
    let report = solve(&grid, &words);
    Ok((grid, report))
}

/// Holds the grid and results of the most recent search
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    grid: Option<Grid>,
    report: SearchReport,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the session contents with a new search.
    ///
    /// On invalid input the previous state is cleared and the error is
    /// returned, so no stale results remain visible.
    pub fn run(&mut self, grid_text: &str, words_text: &str) -> Result<&SearchReport, InputError> {
        self.clear();
        let (grid, report) = solve_text(grid_text, words_text)?;
        self.grid = Some(grid);
        self.report = report;
        Ok(&self.report)
    }

    pub fn clear(&mut self) {
        self.grid = None;
        self.report = SearchReport::default();
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn report(&self) -> &SearchReport {
        &self.report
    }

    pub fn occupied(&self) -> &OccupiedCells {
        &self.report.occupied
    }

    pub fn is_occupied(&self, pos: GridPos) -> bool {
        self.report.occupied.contains(pos)
    }
}
