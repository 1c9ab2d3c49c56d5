use std::fmt;

use maze_core::Point;

use crate::session::SessionState;

/// Errors reported by [`Session`](crate::Session) operations.
///
/// None of them leave a session in a changed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Rows or columns were not strictly positive.
    InvalidDimensions { rows: i32, cols: i32 },
    /// A configured start or target lies outside the grid.
    InvalidEndpoint(Point),
    /// A cell query fell outside the grid.
    OutOfBounds(Point),
    /// The path was requested while the session was in the given state.
    PathRequestedBeforeSolved(SessionState),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "invalid maze dimensions {rows}x{cols}")
            }
            Self::InvalidEndpoint(p) => write!(f, "endpoint {p} is outside the grid"),
            Self::OutOfBounds(p) => write!(f, "no such cell {p}"),
            Self::PathRequestedBeforeSolved(state) => {
                write!(f, "path requested before the maze was solved (state: {state})")
            }
        }
    }
}

impl std::error::Error for SessionError {}
