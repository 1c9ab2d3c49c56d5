use maze_core::Side;

/// Read-only snapshot of one cell, for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellView {
    /// Wall flags indexed north, east, south, west.
    pub walls: [bool; 4],
    pub in_open_set: bool,
    pub in_closed_set: bool,
    pub visited: bool,
}

impl CellView {
    /// Whether the wall on `side` is standing.
    #[inline]
    pub fn wall(&self, side: Side) -> bool {
        self.walls[side.index()]
    }
}
