//! The maze grid: a fixed rectangle of walled [`MazeCell`]s.
//!
//! Wall flags can only be changed through [`MazeGrid::carve`], which always
//! clears the two facing flags together. That keeps every pair of
//! neighbouring cells in agreement about the wall between them.

use std::fmt;

use crate::geom::{Point, Range};
use crate::walls::{Side, Walls};

/// Per-cell state written during generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeCell {
    /// Walls still standing around the cell.
    pub walls: Walls,
    /// Set once the generator has reached this cell.
    pub visited: bool,
}

/// A `rows × cols` grid of maze cells.
///
/// Points are `(x, y)` with `x` in `0..rows` and `y` in `0..cols`. Cells are
/// stored row-major by `y`, so the flat index of `(x, y)` is `y * rows + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct MazeGrid {
    bounds: Range,
    cells: Vec<MazeCell>,
}

/// Reasons a stored grid cannot be turned back into a [`MazeGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Bounds must start at the origin with non-negative extent.
    BadBounds(Range),
    /// Cell count does not match the bounds.
    CellCount { expected: usize, found: usize },
    /// A wall flag disagrees with the facing flag of its neighbour.
    AsymmetricWall(Point, Side),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::BadBounds(r) => write!(f, "grid bounds {r} must start at the origin"),
            GridError::CellCount { expected, found } => {
                write!(f, "expected {expected} cells, found {found}")
            }
            GridError::AsymmetricWall(p, side) => {
                write!(f, "wall on the {side:?} side of {p} is not mirrored")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Unchecked on-disk form of a [`MazeGrid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    bounds: Range,
    cells: Vec<MazeCell>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for MazeGrid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        MazeGrid::from_cells(raw.bounds, raw.cells)
    }
}

impl MazeGrid {
    /// Create a fully walled, unvisited grid. Non-positive dimensions give an
    /// empty grid.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Range::new(0, 0, rows.max(0), cols.max(0));
        Self {
            bounds,
            cells: vec![MazeCell::default(); bounds.len()],
        }
    }

    /// Rebuild a grid from stored cells, checking that the cells fit
    /// `bounds` and that every wall is mirrored by its neighbour.
    pub fn from_cells(bounds: Range, cells: Vec<MazeCell>) -> Result<Self, GridError> {
        if bounds.min != Point::ZERO || bounds.max.x < 0 || bounds.max.y < 0 {
            return Err(GridError::BadBounds(bounds));
        }
        if cells.len() != bounds.len() {
            return Err(GridError::CellCount {
                expected: bounds.len(),
                found: cells.len(),
            });
        }
        let grid = Self { bounds, cells };
        match grid.check_symmetry() {
            Some((p, side)) => Err(GridError::AsymmetricWall(p, side)),
            None => Ok(grid),
        }
    }

    /// Number of rows (extent along x).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of columns (extent along y).
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.height()
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat index (cell handle) of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y * self.rows() + p.x) as usize)
    }

    /// Convert a cell handle back to its point.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.rows() as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<MazeCell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Walls around `p`, or `None` if out of bounds.
    #[inline]
    pub fn walls(&self, p: Point) -> Option<Walls> {
        self.at(p).map(|c| c.walls)
    }

    /// Whether the generator has reached `p`. Out-of-bounds points are
    /// reported unvisited.
    #[inline]
    pub fn visited(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| c.visited)
    }

    /// Mark `p` visited. Returns `true` if the flag changed.
    pub fn mark_visited(&mut self, p: Point) -> bool {
        match self.index(p) {
            Some(i) if !self.cells[i].visited => {
                self.cells[i].visited = true;
                true
            }
            _ => false,
        }
    }

    /// The neighbour of `p` on `side`, or `None` if it falls outside the grid.
    #[inline]
    pub fn neighbor(&self, p: Point, side: Side) -> Option<Point> {
        let n = p + side.delta();
        self.contains(n).then_some(n)
    }

    /// Whether `p` can be left through `side`: the neighbour exists and the
    /// wall on `p`'s side is down.
    #[inline]
    pub fn is_open(&self, p: Point, side: Side) -> bool {
        self.neighbor(p, side).is_some() && self.walls(p).is_some_and(|w| !w.has(side))
    }

    /// Remove the wall between the adjacent cells `a` and `b`, on both sides.
    ///
    /// Returns the side of `a` that was opened, or `None` (and leaves the
    /// grid untouched) if the two points are not in-bounds neighbours.
    pub fn carve(&mut self, a: Point, b: Point) -> Option<Side> {
        let side = Side::between(a, b)?;
        let ia = self.index(a)?;
        let ib = self.index(b)?;
        self.cells[ia].walls.remove(side);
        self.cells[ib].walls.remove(side.opposite());
        Some(side)
    }

    /// Number of wall-free connections between adjacent cells.
    pub fn open_connections(&self) -> usize {
        self.bounds
            .iter()
            .map(|p| {
                [Side::East, Side::South]
                    .into_iter()
                    .filter(|&s| self.is_open(p, s))
                    .count()
            })
            .sum()
    }

    /// First cell whose wall on some side disagrees with the facing wall of
    /// its neighbour, if any.
    pub fn check_symmetry(&self) -> Option<(Point, Side)> {
        for p in self.bounds.iter() {
            for side in Side::ALL {
                let Some(n) = self.neighbor(p, side) else {
                    continue;
                };
                let here = self.walls(p).map(|w| w.has(side));
                let there = self.walls(n).map(|w| w.has(side.opposite()));
                if here != there {
                    return Some((p, side));
                }
            }
        }
        None
    }

    /// Iterate over `(Point, MazeCell)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, MazeCell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = MazeGrid::new(3, 2);
        g.mark_visited(Point::new(0, 0));
        g.carve(Point::new(0, 0), Point::new(1, 0));
        let json = serde_json::to_string(&g).unwrap();
        let back: MazeGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn rejects_short_cell_list() {
        let json = r#"{"bounds":{"min":{"x":0,"y":0},"max":{"x":3,"y":3}},"cells":[{"walls":0,"visited":true}]}"#;
        let err = serde_json::from_str::<MazeGrid>(json).unwrap_err();
        assert!(err.to_string().contains("expected 9 cells, found 1"), "{err}");
    }

    #[test]
    fn rejects_offset_bounds() {
        let json = r#"{"bounds":{"min":{"x":1,"y":0},"max":{"x":2,"y":1}},"cells":[{"walls":15,"visited":false}]}"#;
        let err = serde_json::from_str::<MazeGrid>(json).unwrap_err();
        assert!(err.to_string().contains("must start at the origin"), "{err}");
    }

    #[test]
    fn rejects_one_sided_wall() {
        // (0,0) has its east wall down, (1,0) still has its west wall.
        let json = r#"{"bounds":{"min":{"x":0,"y":0},"max":{"x":2,"y":1}},"cells":[{"walls":13,"visited":true},{"walls":15,"visited":true}]}"#;
        let err = serde_json::from_str::<MazeGrid>(json).unwrap_err();
        assert!(err.to_string().contains("not mirrored"), "{err}");
    }
}
