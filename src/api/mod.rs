//! Word Search WASM API
//!
//! The JavaScript-facing surface of the solver.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, `JsValue` (de)serialization, error conversion
//! - `core`: stateless functions (`solvePuzzle`, `locateWord`, `parseGrid`, ...)
//! - `session`: the `WordSearchSession` class that keeps the last search

pub mod helpers;
pub mod core;
pub mod session;

pub use self::core::*;
pub use session::WordSearchSession;
