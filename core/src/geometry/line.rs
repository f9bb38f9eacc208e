use serde::{Deserialize, Serialize};

use super::{Point, Vector};

/// An infinite line `anchor + t * direction` for all real `t`.
///
/// `direction` must be non-zero. Callers build lines either from a segment
/// (whose construction rejects coincident endpoints) or from two distinct
/// points, so the invariant holds by construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Line {
    anchor: Point,
    direction: Vector,
}

impl Line {
    pub fn new(anchor: Point, direction: Vector) -> Self {
        Self { anchor, direction }
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn direction(&self) -> Vector {
        self.direction
    }
}
