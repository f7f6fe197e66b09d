//! Render configuration passed from JavaScript

use serde::{Deserialize, Serialize};

/// Presentation settings for the results panel
///
/// Every field is optional on the JS side; missing ones take the defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// CSS length of one grid cell (width and row height)
    pub cell_size: String,

    /// CSS gap between cells
    pub cell_gap: String,

    /// Text shown when a word list has no entries
    pub empty_label: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_size: "1.75rem".to_string(),
            cell_gap: "2px".to_string(),
            empty_label: "None".to_string(),
        }
    }
}
