//! The inclusive rectangular region of legal rover positions.

use crate::rover::Position;
use serde::{Deserialize, Serialize};

/// Grid bounds: positions with `0 <= x <= east_bound` and
/// `0 <= y <= north_bound` are legal, inclusive at both edges.
///
/// The type performs membership testing only. Bound positivity is a
/// request-validation rule, not a constructor precondition, because
/// bounds arrive from the wire and may be rejected with a named
/// violation rather than a panic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    /// Largest legal x coordinate.
    pub east_bound: i32,
    /// Largest legal y coordinate.
    pub north_bound: i32,
}

impl GridBounds {
    /// Create bounds covering `[0, east_bound] × [0, north_bound]`.
    pub fn new(east_bound: i32, north_bound: i32) -> GridBounds {
        GridBounds {
            east_bound,
            north_bound,
        }
    }

    /// Whether `position` lies inside the inclusive region.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.x <= self.east_bound
            && position.y >= 0
            && position.y <= self.north_bound
    }
}
