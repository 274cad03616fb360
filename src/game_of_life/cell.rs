//! Lattice coordinates and the Moore neighborhood

use serde::{Deserialize, Serialize};
use std::fmt;

/// Offsets of the 8 cells surrounding a position
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// A single position on the unbounded lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The 8 Moore neighbors of this cell.
    ///
    /// Coordinates wrap at the edges of the `i64` range, so every cell has
    /// exactly 8 distinct neighbors.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| Cell::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy)))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Cell> for (i64, i64) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_neighbors_are_the_moore_neighborhood() {
        let center = Cell::new(3, -7);
        let neighbors: HashSet<Cell> = center.neighbors().collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&center));
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                assert!(neighbors.contains(&Cell::new(3 + dx, -7 + dy)));
            }
        }
    }

    #[test]
    fn test_neighbors_restartable() {
        let cell = Cell::new(0, 0);
        let first: Vec<Cell> = cell.neighbors().collect();
        let second: Vec<Cell> = cell.neighbors().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_neighbors_at_extremes() {
        let corner = Cell::new(i64::MAX, i64::MIN);
        let neighbors: HashSet<Cell> = corner.neighbors().collect();
        assert_eq!(neighbors.len(), 8);
        assert!(neighbors.contains(&Cell::new(i64::MAX - 1, i64::MIN + 1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::new(-1, 2).to_string(), "(-1, 2)");
    }
}
