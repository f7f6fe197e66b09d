//! Grid word locator
//!
//! Finds a word as a straight run of cells in one of the eight directions.
//! Start cells are tried in row-major order and, for each start, directions
//! in `Direction::ALL` order; the first full match is returned.

use crate::models::{Direction, Grid, GridPos, Match};

/// Locate `word` in `grid`.
///
/// Returns `None` when no start cell and direction spell the word, and for
/// an empty word. Both grid and word are expected to be uppercase already.
pub fn locate(grid: &Grid, word: &str) -> Option<Match> {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return None;
    }

    for start in grid.positions() {
        // Cheap reject before trying all eight directions
        if grid.get(start) != Some(chars[0]) {
            continue;
        }

        for direction in Direction::ALL {
            if let Some(cells) = match_at(grid, &chars, start, direction) {
                log::debug!(
                    "found {} at ({}, {}) heading {:?}",
                    word,
                    start.row,
                    start.col,
                    direction
                );
                return Some(Match { start, direction, cells });
            }
        }
    }

    log::debug!("{} not found", word);
    None
}

/// Try to spell `chars` from `start` along `direction`.
///
/// Fails on the first cell that is out of bounds or holds the wrong letter.
fn match_at(
    grid: &Grid,
    chars: &[char],
    start: GridPos,
    direction: Direction,
) -> Option<Vec<GridPos>> {
    let mut cells = Vec::with_capacity(chars.len());
    for (i, &expected) in chars.iter().enumerate() {
        let pos = start.offset(direction, i)?;
        if grid.get(pos)? != expected {
            return None;
        }
        cells.push(pos);
    }
    Some(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows.iter().map(|r| r.chars().collect()).collect()).unwrap()
    }

    fn cells(m: &Match) -> Vec<(usize, usize)> {
        m.cells.iter().map(|p| (p.row, p.col)).collect()
    }

    #[test]
    fn test_horizontal_forward() {
        let g = grid(&["CAT", "XXX", "XXX"]);
        let m = locate(&g, "CAT").unwrap();
        assert_eq!(cells(&m), vec![(0, 0), (0, 1), (0, 2)]);
        assert_eq!(m.direction, Direction::East);
    }

    #[test]
    fn test_vertical() {
        let g = grid(&["CXX", "AXX", "TXX"]);
        let m = locate(&g, "CAT").unwrap();
        assert_eq!(cells(&m), vec![(0, 0), (1, 0), (2, 0)]);
        assert_eq!(m.direction, Direction::South);
    }

    #[test]
    fn test_diagonal() {
        let g = grid(&["CXX", "XAX", "XXT"]);
        let m = locate(&g, "CAT").unwrap();
        assert_eq!(cells(&m), vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(m.direction, Direction::SouthEast);
    }

    #[test]
    fn test_reverse_horizontal() {
        let g = grid(&["TAC"]);
        let m = locate(&g, "CAT").unwrap();
        assert_eq!(cells(&m), vec![(0, 2), (0, 1), (0, 0)]);
        assert_eq!(m.start, GridPos::new(0, 2));
        assert_eq!(m.direction, Direction::West);
    }

    #[test]
    fn test_remaining_directions() {
        let g = grid(&["T", "A", "C"]);
        assert_eq!(locate(&g, "CAT").unwrap().direction, Direction::North);

        let g = grid(&["XXT", "XAX", "CXX"]);
        assert_eq!(locate(&g, "CAT").unwrap().direction, Direction::NorthEast);

        let g = grid(&["XXC", "XAX", "TXX"]);
        assert_eq!(locate(&g, "CAT").unwrap().direction, Direction::SouthWest);

        let g = grid(&["TXX", "XAX", "XXC"]);
        assert_eq!(locate(&g, "CAT").unwrap().direction, Direction::NorthWest);
    }

    #[test]
    fn test_not_found() {
        let g = grid(&["XY", "ZW"]);
        assert_eq!(locate(&g, "DOG"), None);
    }

    #[test]
    fn test_word_longer_than_grid() {
        let g = grid(&["AB", "BA"]);
        assert_eq!(locate(&g, "ABAB"), None);
    }

    #[test]
    fn test_empty_word_is_not_found() {
        let g = grid(&["A"]);
        assert_eq!(locate(&g, ""), None);
    }

    #[test]
    fn test_single_character_word() {
        let g = grid(&["XQ", "QX"]);
        let m = locate(&g, "Q").unwrap();
        assert_eq!(cells(&m), vec![(0, 1)]);
        assert_eq!(m.direction, Direction::East);
    }

    #[test]
    fn test_one_by_one_grid() {
        let g = grid(&["Z"]);
        assert_eq!(cells(&locate(&g, "Z").unwrap()), vec![(0, 0)]);
        assert_eq!(locate(&g, "ZZ"), None);
    }

    #[test]
    fn test_palindrome_prefers_first_direction() {
        // "ABA" reads the same both ways; East from (0,0) comes first
        let g = grid(&["ABA"]);
        let m = locate(&g, "ABA").unwrap();
        assert_eq!(m.start, GridPos::new(0, 0));
        assert_eq!(m.direction, Direction::East);
    }

    #[test]
    fn test_row_major_start_wins_over_direction_order() {
        // South from (0,1) is found before East from (1,0)
        let g = grid(&["XAX", "ABX", "XBX"]);
        let m = locate(&g, "AB").unwrap();
        assert_eq!(m.start, GridPos::new(0, 1));
        assert_eq!(m.direction, Direction::South);
    }

    #[test]
    fn test_does_not_wrap_around_rows() {
        let g = grid(&["XXC", "ATX"]);
        assert_eq!(locate(&g, "CAT"), None);
    }
}
