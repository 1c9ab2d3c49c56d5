//! Session configuration.

use maze_core::Point;

use crate::error::SessionError;

/// Default grid size along both axes.
pub const DEFAULT_SIZE: i32 = 25;

/// Parameters for building a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    pub rows: i32,
    pub cols: i32,
    /// Where the search begins; the grid origin when unset.
    pub start: Option<Point>,
    /// Where the search ends; the far corner `(rows - 1, cols - 1)` when
    /// unset.
    pub target: Option<Point>,
    /// Seed for the carving RNG. A random seed is drawn (and logged) when
    /// unset.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SIZE,
            cols: DEFAULT_SIZE,
            start: None,
            target: None,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Set the grid size (builder).
    pub fn with_size(mut self, rows: i32, cols: i32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the carving seed (builder).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the search start (builder).
    pub fn with_start(mut self, start: Point) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the search target (builder).
    pub fn with_target(mut self, target: Point) -> Self {
        self.target = Some(target);
        self
    }

    /// Check the dimensions and resolve the endpoints.
    pub fn endpoints(&self) -> Result<(Point, Point), SessionError> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(SessionError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let start = self.start.unwrap_or(Point::ZERO);
        let target = self
            .target
            .unwrap_or(Point::new(self.rows - 1, self.cols - 1));
        for p in [start, target] {
            if p.x < 0 || p.y < 0 || p.x >= self.rows || p.y >= self.cols {
                return Err(SessionError::InvalidEndpoint(p));
            }
        }
        Ok((start, target))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: SessionConfig = serde_json::from_str(r#"{"rows": 10, "seed": 5}"#).unwrap();
        assert_eq!(cfg.rows, 10);
        assert_eq!(cfg.cols, DEFAULT_SIZE);
        assert_eq!(cfg.seed, Some(5));
        assert_eq!(cfg.target, None);
    }
}
