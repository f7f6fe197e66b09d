//! HTML fragment rendering for the results panel
//!
//! Fills a Mustache template from a `DisplayList`. Mustache escapes every
//! interpolated value, so words and cell text are safe to insert as-is.

use serde::Serialize;
use thiserror::Error;

use super::display_list::{DisplayList, WordBadge};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template rendering failed: {0}")]
    Template(#[from] mustache::Error),
}

const RESULTS_TEMPLATE: &str = include_str!("templates/results.html.mustache");

#[derive(Debug, Serialize)]
struct HtmlContext<'a> {
    grid_template_columns: &'a str,
    grid_auto_rows: &'a str,
    gap: &'a str,
    cells: Vec<HtmlItem<'a>>,
    found: Vec<HtmlItem<'a>>,
    not_found: Vec<HtmlItem<'a>>,
    has_found: bool,
    has_not_found: bool,
    found_count: usize,
    not_found_count: usize,
    empty_label: &'a str,
}

#[derive(Debug, Serialize)]
struct HtmlItem<'a> {
    text: &'a str,
    class_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    row: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    col: Option<usize>,
}

impl<'a> HtmlContext<'a> {
    fn from_display_list(list: &'a DisplayList) -> Self {
        let badges = |badges: &'a [WordBadge]| {
            badges
                .iter()
                .map(|b| HtmlItem {
                    text: &b.text,
                    class_name: b.class_name(),
                    row: None,
                    col: None,
                })
                .collect::<Vec<_>>()
        };

        Self {
            grid_template_columns: &list.grid_template_columns,
            grid_auto_rows: &list.grid_auto_rows,
            gap: &list.gap,
            cells: list
                .cells
                .iter()
                .map(|c| HtmlItem {
                    text: &c.text,
                    class_name: c.class_name(),
                    row: Some(c.row),
                    col: Some(c.col),
                })
                .collect(),
            found: badges(&list.found),
            not_found: badges(&list.not_found),
            has_found: !list.found.is_empty(),
            has_not_found: !list.not_found.is_empty(),
            found_count: list.found_count,
            not_found_count: list.not_found_count,
            empty_label: &list.empty_label,
        }
    }
}

/// Render the results panel (word lists and highlighted grid) as HTML
pub fn render_results_html(list: &DisplayList) -> Result<String, RenderError> {
    let template = mustache::compile_str(RESULTS_TEMPLATE)?;
    let context = HtmlContext::from_display_list(list);
    Ok(template.render_to_string(&context)?)
}
