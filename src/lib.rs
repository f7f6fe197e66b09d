//! Word Search Solver WASM Module
//!
//! Locates words in a letter grid along the eight straight directions and
//! reports which words were found and the cells they cover, ready for the
//! page to highlight.

pub mod models;
pub mod parse;
pub mod search;
pub mod session;
pub mod renderers;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use parse::{parse_grid, parse_words, InputError};
pub use search::locate;
pub use session::{solve, solve_text, SearchSession};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            crate::wasm_warn!("logger already initialized");
        }
    }

    log::info!("Word search WASM module initialized");
}
