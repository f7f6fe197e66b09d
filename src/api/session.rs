//! Stateful session exposed to JavaScript
//!
//! Mirrors the page lifecycle: `run` on submit, `clear` on the clear button.
//! Each JS object owns its own `SearchSession`.

use wasm_bindgen::prelude::*;

use super::helpers::{render_config, serialize, validation_error};
use crate::models::GridPos;
use crate::renderers::build_display_list;
use crate::session::SearchSession;
use crate::{wasm_error, wasm_info};

#[wasm_bindgen]
pub struct WordSearchSession {
    inner: SearchSession,
}

#[wasm_bindgen]
impl WordSearchSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WordSearchSession {
        WordSearchSession {
            inner: SearchSession::new(),
        }
    }

    /// Run a new search, replacing any previous results
    ///
    /// Returns the search report; on invalid input the session is left empty.
    pub fn run(&mut self, grid_text: &str, words_text: &str) -> Result<JsValue, JsValue> {
        match self.inner.run(grid_text, words_text) {
            Ok(report) => {
                wasm_info!(
                    "session run: {} found, {} not found",
                    report.found_count(),
                    report.not_found_count()
                );
                serialize(report, "Failed to serialize report")
            }
            Err(e) => {
                wasm_error!("session run rejected input");
                Err(validation_error(e))
            }
        }
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    #[wasm_bindgen(js_name = foundCount)]
    pub fn found_count(&self) -> usize {
        self.inner.report().found_count()
    }

    #[wasm_bindgen(js_name = notFoundCount)]
    pub fn not_found_count(&self) -> usize {
        self.inner.report().not_found_count()
    }

    #[wasm_bindgen(js_name = isOccupied)]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.inner.is_occupied(GridPos::new(row, col))
    }

    /// Display list for the current results, or `null` before a search
    #[wasm_bindgen(js_name = displayList)]
    pub fn display_list(&self, config_js: JsValue) -> Result<JsValue, JsValue> {
        let Some(grid) = self.inner.grid() else {
            return Ok(JsValue::NULL);
        };
        let config = render_config(config_js)?;
        let list = build_display_list(grid, self.inner.report(), &config);
        serialize(&list, "Failed to serialize display list")
    }
}

impl Default for WordSearchSession {
    fn default() -> Self {
        Self::new()
    }
}
