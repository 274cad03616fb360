//! Sparse world representation: the set of live cells

use super::Cell;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// The set of currently live cells on an unbounded lattice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct World {
    cells: HashSet<Cell>,
}

/// Smallest axis-aligned rectangle containing every live cell (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

/// Largest bounding-box area that is rendered cell by cell
pub const MAX_RENDER_AREA: u128 = 1 << 20;

impl BoundingBox {
    /// Number of columns; `u128` since a box can span the whole `i64` range
    pub fn width(&self) -> u128 {
        u128::from(self.max_x.abs_diff(self.min_x)) + 1
    }

    pub fn height(&self) -> u128 {
        u128::from(self.max_y.abs_diff(self.min_y)) + 1
    }

    pub fn area(&self) -> u128 {
        self.width().saturating_mul(self.height())
    }

    /// Whether drawing every position in the box stays within [`MAX_RENDER_AREA`]
    pub fn is_renderable(&self) -> bool {
        self.area() <= MAX_RENDER_AREA
    }
}

impl World {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a world from `(x, y)` pairs; duplicates collapse
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        cells.into_iter().map(Cell::from).collect()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Number of live cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Live cells in ascending `(x, y)` order
    pub fn sorted_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.iter().collect();
        cells.sort_unstable();
        cells
    }

    /// Every coordinate that could be live next generation: the neighbors
    /// of each live cell. A live cell with no live neighbor is left out; it
    /// dies regardless. At most 8 entries per live cell.
    pub fn candidates(&self) -> HashSet<Cell> {
        self.iter().flat_map(Cell::neighbors).collect()
    }

    /// Count how many of `cell`'s 8 neighbors are live (0..=8)
    pub fn count_neighbors(&self, cell: Cell) -> u8 {
        cell.neighbors()
            .filter(|neighbor| self.contains(*neighbor))
            .count() as u8
    }

    /// Bounds of the live cells, or `None` for an empty world
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut cells = self.iter();
        let first = cells.next()?;
        let init = BoundingBox {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };

        Some(cells.fold(init, |bbox, cell| BoundingBox {
            min_x: bbox.min_x.min(cell.x),
            max_x: bbox.max_x.max(cell.x),
            min_y: bbox.min_y.min(cell.y),
            max_y: bbox.max_y.max(cell.y),
        }))
    }
}

impl<C: Into<Cell>> FromIterator<C> for World {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<C: Into<Cell>> Extend<C> for World {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        self.cells.extend(iter.into_iter().map(Into::into));
    }
}

impl From<Vec<Cell>> for World {
    fn from(cells: Vec<Cell>) -> Self {
        cells.into_iter().collect()
    }
}

impl From<World> for Vec<Cell> {
    fn from(world: World) -> Self {
        world.sorted_cells()
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.sorted_cells().iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_creation() {
        let world = World::new();
        assert!(world.is_empty());
        assert_eq!(world.len(), 0);
        assert!(world.bounding_box().is_none());
    }

    #[test]
    fn test_duplicates_collapse() {
        let world = World::from_cells([(0, 0), (1, 1), (0, 0), (1, 1)]);
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn test_candidates_of_lone_cell() {
        let world = World::from_cells([(5, 5)]);
        let candidates = world.candidates();

        assert_eq!(candidates.len(), 8);
        assert!(!candidates.contains(&Cell::new(5, 5)));
        assert!(candidates.contains(&Cell::new(4, 6)));
    }

    #[test]
    fn test_candidates_include_connected_cells() {
        let world = World::from_cells([(0, 0), (1, 0), (2, 0)]);
        let candidates = world.candidates();

        // 5x3 box around the row
        assert_eq!(candidates.len(), 15);
        assert!(candidates.len() <= 8 * world.len());
        for cell in world.iter() {
            assert!(candidates.contains(&cell));
        }
    }

    #[test]
    fn test_candidates_of_empty_world() {
        assert!(World::new().candidates().is_empty());
    }

    #[test]
    fn test_neighbor_counting() {
        let ring = World::from_cells([
            (-1, -1), (0, -1), (1, -1),
            (-1, 0), (1, 0),
            (-1, 1), (0, 1), (1, 1),
        ]);

        assert_eq!(ring.count_neighbors(Cell::new(0, 0)), 8);
        assert_eq!(ring.count_neighbors(Cell::new(-1, -1)), 2);
        assert_eq!(ring.count_neighbors(Cell::new(10, 10)), 0);
    }

    #[test]
    fn test_bounding_box() {
        let world = World::from_cells([(0, 0), (1, 1), (1, 2), (0, 2), (-1, 2)]);
        let bbox = world.bounding_box().unwrap();

        assert_eq!(bbox, BoundingBox { min_x: -1, max_x: 1, min_y: 0, max_y: 2 });
        assert_eq!(bbox.width(), 3);
        assert_eq!(bbox.height(), 3);
        assert!(bbox.is_renderable());
    }

    #[test]
    fn test_bounding_box_spanning_full_range() {
        let world = World::from_cells([(i64::MIN, 0), (i64::MAX, 0)]);
        let bbox = world.bounding_box().unwrap();

        assert_eq!(bbox.width(), 1u128 << 64);
        assert_eq!(bbox.height(), 1);
        assert!(!bbox.is_renderable());

        let corners = World::from_cells([(i64::MIN, i64::MIN), (i64::MAX, i64::MAX)]);
        assert_eq!(corners.bounding_box().unwrap().area(), u128::MAX);
    }

    #[test]
    fn test_far_apart_cells_not_renderable() {
        let world = World::from_cells([(0, 0), (0, 1_000_000_000_000)]);
        let bbox = world.bounding_box().unwrap();
        assert_eq!(bbox.height(), 1_000_000_000_001);
        assert!(!bbox.is_renderable());
    }

    #[test]
    fn test_display_is_sorted() {
        let world = World::from_cells([(1, 2), (-1, 2), (0, 1)]);
        assert_eq!(world.to_string(), "{(-1, 2), (0, 1), (1, 2)}");
        assert_eq!(World::new().to_string(), "{}");
    }

    #[test]
    fn test_json_serialization() {
        let world = World::from_cells([(2, -3), (0, 0)]);
        let json = serde_json::to_string(&world).unwrap();
        assert_eq!(json, "[[0,0],[2,-3]]");

        let parsed: World = serde_json::from_str("[[2,-3],[0,0],[0,0]]").unwrap();
        assert_eq!(parsed, world);
    }
}
