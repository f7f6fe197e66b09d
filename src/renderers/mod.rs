//! Renderers for search results
//!
//! `display_list` computes per-cell classes, badges and grid geometry for the
//! JavaScript host; `html` turns a display list into a ready-made fragment.

pub mod config;
pub mod display_list;
pub mod html;

pub use config::RenderConfig;
pub use display_list::{build_display_list, DisplayList, RenderCell, WordBadge};
pub use html::{render_results_html, RenderError};
