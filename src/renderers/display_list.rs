//! Display list for the results panel
//!
//! Everything the JavaScript host needs to build the highlighted grid and the
//! two word lists, precomputed so the host does no layout of its own.

use serde::{Deserialize, Serialize};

use super::config::RenderConfig;
use crate::models::{Grid, SearchReport};

/// Class applied to every grid cell
pub const CELL_CLASS: &str = "matrix-cell";
/// Class applied to grid cells covered by a found word, and to found badges
pub const FOUND_CLASS: &str = "found";
/// Class applied to not-found badges
pub const NOT_FOUND_CLASS: &str = "not-found";
/// Class applied to every word badge
pub const BADGE_CLASS: &str = "word-badge";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayList {
    /// CSS `grid-template-columns` value
    pub grid_template_columns: String,

    /// CSS `grid-auto-rows` value
    pub grid_auto_rows: String,

    /// CSS `gap` value
    pub gap: String,

    pub rows: usize,
    pub cols: usize,

    /// Grid cells in row-major order
    pub cells: Vec<RenderCell>,

    pub found: Vec<WordBadge>,
    pub not_found: Vec<WordBadge>,

    pub found_count: usize,
    pub not_found_count: usize,

    /// Shown in place of an empty word list
    pub empty_label: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderCell {
    pub row: usize,
    pub col: usize,
    pub text: String,
    pub classes: Vec<String>,
}

impl RenderCell {
    pub fn is_found(&self) -> bool {
        self.classes.iter().any(|c| c == FOUND_CLASS)
    }

    /// Space-joined class attribute
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WordBadge {
    pub text: String,
    pub classes: Vec<String>,
}

impl WordBadge {
    fn new(text: &str, kind: &str) -> Self {
        Self {
            text: text.to_string(),
            classes: vec![BADGE_CLASS.to_string(), kind.to_string()],
        }
    }

    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }
}

/// Build the display list for `report` over `grid`
pub fn build_display_list(
    grid: &Grid,
    report: &SearchReport,
    config: &RenderConfig,
) -> DisplayList {
    let cells = grid
        .positions()
        .map(|pos| {
            let mut classes = vec![CELL_CLASS.to_string()];
            if report.occupied.contains(pos) {
                classes.push(FOUND_CLASS.to_string());
            }
            RenderCell {
                row: pos.row,
                col: pos.col,
                text: grid.get(pos).map(String::from).unwrap_or_default(),
                classes,
            }
        })
        .collect();

    DisplayList {
        grid_template_columns: format!("repeat({}, {})", grid.cols(), config.cell_size),
        grid_auto_rows: config.cell_size.clone(),
        gap: config.cell_gap.clone(),
        rows: grid.rows(),
        cols: grid.cols(),
        cells,
        found: report.found.iter().map(|w| WordBadge::new(w, FOUND_CLASS)).collect(),
        not_found: report
            .not_found
            .iter()
            .map(|w| WordBadge::new(w, NOT_FOUND_CLASS))
            .collect(),
        found_count: report.found_count(),
        not_found_count: report.not_found_count(),
        empty_label: config.empty_label.clone(),
    }
}
