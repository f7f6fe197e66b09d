//! Data model for the word search solver
//!
//! Grids, coordinates, scan directions and the result types produced by a
//! search session.

pub mod direction;
pub mod grid;
pub mod report;

pub use direction::Direction;
pub use grid::{Grid, GridPos};
pub use report::{Match, OccupiedCells, SearchReport, WordResult};
