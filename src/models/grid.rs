//! Letter grid and grid coordinates
//!
//! The grid is rectangular by construction: `Grid::from_rows` is the only way
//! to build one, and it rejects empty or ragged input.

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::parse::InputError;

/// A cell coordinate (row, col), 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `distance` cells along `direction`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant;
    /// upper bounds are checked by the grid.
    pub fn offset(self, direction: Direction, distance: usize) -> Option<GridPos> {
        let (dr, dc) = direction.delta();
        let row = step(self.row, dr, distance)?;
        let col = step(self.col, dc, distance)?;
        Some(GridPos { row, col })
    }
}

impl From<(usize, usize)> for GridPos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

fn step(origin: usize, delta: isize, distance: usize) -> Option<usize> {
    match delta {
        0 => Some(origin),
        d if d > 0 => origin.checked_add(distance),
        _ => origin.checked_sub(distance),
    }
}

/// Rectangular, row-major grid of single uppercase characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRows", into = "GridRows")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Build a grid from rows of characters
    ///
    /// Fails with `EmptyInput` when there are no rows or the first row is
    /// empty, with `MalformedGrid` when a row differs in length from the
    /// first one, and with `InvalidCell` when a character does not uppercase
    /// to a single character. Cells are stored uppercased.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Grid, InputError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(InputError::EmptyInput { field: "grid" });
        }

        if let Some((row, found)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != cols)
            .map(|(i, r)| (i, r.len()))
        {
            return Err(InputError::MalformedGrid { row, expected: cols, found });
        }

        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * cols);
        for (row, chars) in rows.into_iter().enumerate() {
            for (col, c) in chars.into_iter().enumerate() {
                cells.push(uppercase_cell(row, col, c)?);
            }
        }

        Ok(Grid {
            rows: row_count,
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Character at `pos`, or `None` when out of bounds
    pub fn get(&self, pos: GridPos) -> Option<char> {
        if !self.contains(pos) {
            return None;
        }
        self.cells.get(pos.row * self.cols + pos.col).copied()
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// All coordinates in row-major order
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| GridPos { row, col }))
    }

    pub fn to_rows(&self) -> Vec<Vec<char>> {
        self.cells.chunks(self.cols).map(<[char]>::to_vec).collect()
    }
}

fn uppercase_cell(row: usize, col: usize, c: char) -> Result<char, InputError> {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Ok(u),
        _ => Err(InputError::InvalidCell { row, col, value: c.to_string() }),
    }
}

/// Wire shape of a grid: `{ rows, cols, cells: [[char]] }`
///
/// `rows` and `cols` may be omitted on input; when given they must agree
/// with `cells`.
#[derive(Serialize, Deserialize)]
struct GridRows {
    #[serde(default)]
    rows: Option<usize>,
    #[serde(default)]
    cols: Option<usize>,
    cells: Vec<Vec<char>>,
}

impl TryFrom<GridRows> for Grid {
    type Error = InputError;

    fn try_from(value: GridRows) -> Result<Self, Self::Error> {
        let grid = Grid::from_rows(value.cells)?;
        let declared_rows = value.rows.unwrap_or(grid.rows);
        let declared_cols = value.cols.unwrap_or(grid.cols);
        if (declared_rows, declared_cols) != (grid.rows, grid.cols) {
            return Err(InputError::DimensionMismatch {
                declared_rows,
                declared_cols,
                rows: grid.rows,
                cols: grid.cols,
            });
        }
        Ok(grid)
    }
}

impl From<Grid> for GridRows {
    fn from(grid: Grid) -> Self {
        GridRows {
            rows: Some(grid.rows),
            cols: Some(grid.cols),
            cells: grid.to_rows(),
        }
    }
}
