//! Compass sides and the per-cell wall mask: [`Side`] and [`Walls`].

use std::ops::{BitAnd, BitOr};

use crate::geom::Point;

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// One of the four sides of a cell.
///
/// The discriminant is the wall index: north 0, east 1, south 2, west 3.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Side {
    /// All sides in scan order: north, east, south, west.
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    /// Offset to the neighbour on this side.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Side::North => Point::new(0, -1),
            Side::East => Point::new(1, 0),
            Side::South => Point::new(0, 1),
            Side::West => Point::new(-1, 0),
        }
    }

    /// The side facing this one from the neighbouring cell.
    #[inline]
    pub const fn opposite(self) -> Side {
        match self {
            Side::North => Side::South,
            Side::East => Side::West,
            Side::South => Side::North,
            Side::West => Side::East,
        }
    }

    /// Wall index (0..4).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The side of `from` that faces `to`, if the two are 4-adjacent.
    pub fn between(from: Point, to: Point) -> Option<Side> {
        let d = to - from;
        Side::ALL.into_iter().find(|s| s.delta() == d)
    }
}

// ---------------------------------------------------------------------------
// Walls
// ---------------------------------------------------------------------------

/// Bitmask of the walls still standing around a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Walls(u8);

impl Walls {
    pub const NONE: Self = Self(0);
    pub const NORTH: Self = Self(1 << 0);
    pub const EAST: Self = Self(1 << 1);
    pub const SOUTH: Self = Self(1 << 2);
    pub const WEST: Self = Self(1 << 3);
    pub const ALL: Self = Self(0b1111);

    /// Mask with only the wall on `side`.
    #[inline]
    pub const fn of(side: Side) -> Self {
        Self(1 << side.index())
    }

    /// Whether the wall on `side` is standing.
    #[inline]
    pub const fn has(self, side: Side) -> bool {
        self.0 & (1 << side.index()) != 0
    }

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether no wall is standing.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of standing walls.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Wall flags indexed north, east, south, west.
    pub fn to_array(self) -> [bool; 4] {
        Side::ALL.map(|s| self.has(s))
    }

    /// Knock down the wall on `side`. Only the grid calls this, always in
    /// pairs, so that neighbouring masks stay mirrored.
    #[inline]
    pub(crate) fn remove(&mut self, side: Side) {
        self.0 &= !(1 << side.index());
    }
}

impl Default for Walls {
    /// Fully enclosed.
    #[inline]
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for Walls {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for Walls {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}
