//! Search results: matches, the occupied cell set, and the per-batch report

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::direction::Direction;
use super::grid::GridPos;

/// Where a word was found: one cell per character, in word order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub start: GridPos,
    pub direction: Direction,
    pub cells: Vec<GridPos>,
}

/// Union of every cell belonging to some match in a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccupiedCells(BTreeSet<GridPos>);

impl OccupiedCells {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_match(&mut self, m: &Match) {
        self.0.extend(m.cells.iter().copied());
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        self.0.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.0.iter().copied()
    }
}

/// Outcome for one input word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordResult {
    pub word: String,
    #[serde(rename = "match")]
    pub placement: Option<Match>,
}

impl WordResult {
    pub fn is_found(&self) -> bool {
        self.placement.is_some()
    }
}

/// Everything a batch search produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    /// One entry per input word, input order, duplicates kept
    pub results: Vec<WordResult>,
    pub found: Vec<String>,
    pub not_found: Vec<String>,
    pub occupied: OccupiedCells,
}

impl SearchReport {
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn not_found_count(&self) -> usize {
        self.not_found.len()
    }

    /// Pretty-printed JSON, for export and debugging
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
