//! The eight scan directions
//!
//! Scan order is observable: when a word fits in several places, the first
//! placement in row-major start order, then `Direction::ALL` order, wins.

use serde::{Deserialize, Serialize};

/// A unit step on the grid, (row delta, col delta)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// (0, 1)
    East,
    /// (0, -1)
    West,
    /// (1, 0)
    South,
    /// (-1, 0)
    North,
    /// (1, 1)
    SouthEast,
    /// (-1, -1)
    NorthWest,
    /// (1, -1)
    SouthWest,
    /// (-1, 1)
    NorthEast,
}

impl Direction {
    /// Fixed scan order
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
        Direction::SouthEast,
        Direction::NorthWest,
        Direction::SouthWest,
        Direction::NorthEast,
    ];

    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::South => (1, 0),
            Direction::North => (-1, 0),
            Direction::SouthEast => (1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthWest => (1, -1),
            Direction::NorthEast => (-1, 1),
        }
    }
}
