//! Stateless API functions
//!
//! Each call parses its inputs, runs the search and hands back plain JS
//! values. Validation errors reject the whole call; no partial results.

use wasm_bindgen::prelude::*;
use serde::Serialize;

use super::helpers::{deserialize, now_ms, render_config, serialize, validation_error};
use crate::models::{Grid, SearchReport};
use crate::parse::{normalize_word, parse_grid, parse_words};
use crate::renderers::{build_display_list, render_results_html, DisplayList};
use crate::search::locate;
use crate::session::solve_text;
use crate::{wasm_info, wasm_log, wasm_warn};

/// Result of `solvePuzzle`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResult {
    pub report: SearchReport,
    pub display_list: DisplayList,
}

/// Solve a puzzle from raw text
///
/// # Parameters
/// - `grid_text`: one row per line, cells separated by commas
/// - `words_text`: one word per line
/// - `config_js`: optional render config (`cellSize`, `cellGap`, `emptyLabel`)
///
/// # Returns
/// JavaScript object with `report` and `displayList`
#[wasm_bindgen(js_name = solvePuzzle)]
pub fn solve_puzzle(
    grid_text: &str,
    words_text: &str,
    config_js: JsValue,
) -> Result<JsValue, JsValue> {
    let started = now_ms();
    let config = render_config(config_js)?;

    let (grid, report) = solve_text(grid_text, words_text).map_err(validation_error)?;
    let display_list = build_display_list(&grid, &report, &config);

    if let (Some(start), Some(end)) = (started, now_ms()) {
        wasm_log!("solvePuzzle took {:.2}ms", end - start);
    }
    wasm_info!(
        "solvePuzzle: {}x{} grid, {} found, {} not found",
        grid.rows(),
        grid.cols(),
        report.found_count(),
        report.not_found_count()
    );

    serialize(&SolveResult { report, display_list }, "Failed to serialize solve result")
}

/// Locate a single word in an already parsed grid
///
/// The word is trimmed and uppercased first. Returns the match, or `null`
/// when the word is not in the grid.
#[wasm_bindgen(js_name = locateWord)]
pub fn locate_word(grid_js: JsValue, word: &str) -> Result<JsValue, JsValue> {
    let grid: Grid = deserialize(grid_js, "Invalid grid")?;
    let word = normalize_word(word);
    if word.is_empty() {
        wasm_warn!("locateWord called with an empty word");
    }

    match locate(&grid, &word) {
        Some(m) => serialize(&m, "Failed to serialize match"),
        None => Ok(JsValue::NULL),
    }
}

/// Parse grid text into `{ rows, cols, cells }`
#[wasm_bindgen(js_name = parseGrid)]
pub fn parse_grid_js(text: &str) -> Result<JsValue, JsValue> {
    let grid = parse_grid(text).map_err(validation_error)?;
    serialize(&grid, "Failed to serialize grid")
}

/// Parse word text into an array of uppercase words
#[wasm_bindgen(js_name = parseWords)]
pub fn parse_words_js(text: &str) -> Result<js_sys::Array, JsValue> {
    let words = parse_words(text).map_err(validation_error)?;
    Ok(words.iter().map(|w| JsValue::from_str(w)).collect())
}

/// Solve and render the results panel as an HTML fragment
#[wasm_bindgen(js_name = renderResultsHtml)]
pub fn render_results_html_js(
    grid_text: &str,
    words_text: &str,
    config_js: JsValue,
) -> Result<String, JsValue> {
    let config = render_config(config_js)?;
    let (grid, report) = solve_text(grid_text, words_text).map_err(validation_error)?;
    let display_list = build_display_list(&grid, &report, &config);
    render_results_html(&display_list).map_err(validation_error)
}

/// Solve and return the report as pretty-printed JSON
#[wasm_bindgen(js_name = exportReportJson)]
pub fn export_report_json(grid_text: &str, words_text: &str) -> Result<String, JsValue> {
    let (_, report) = solve_text(grid_text, words_text).map_err(validation_error)?;
    report.to_json().map_err(validation_error)
}
