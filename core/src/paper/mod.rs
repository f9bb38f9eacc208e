//! The paper aggregate: the current planar arrangement of points and
//! segments, and the fold operation that grows it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{GeometryError, Line, Point, Segment};

#[cfg(test)]
mod tests_fold;

/// Errors surfaced by the fold operation. All of them indicate caller
/// misuse (a bad selection), never a transient condition; nothing retries.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CreaseError {
    #[error(transparent)]
    Degenerate(#[from] GeometryError),

    /// The fold line must cross the outer boundary in exactly two places.
    #[error("fold line meets the paper boundary at {found} points, expected 2")]
    InvalidCrease { found: usize },
}

/// A unit-square sheet: the point set and the segments (boundary edges
/// first, creases appended in fold order) of its current crease pattern.
///
/// Both collections only ever grow, and every segment's endpoints are
/// members of the point set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    // The set keys on the lexicographic point order, which doubles as the
    // coordinate-equality dedup the fold scan needs.
    points: BTreeSet<Point>,
    segments: Vec<Segment>,
}

impl Paper {
    /// A fresh sheet: the four unit-square corners (y up) joined by the
    /// four boundary edges, top/left/bottom/right.
    pub fn new() -> Self {
        let top_left = Point::new(0.0, 1.0);
        let bottom_left = Point::new(0.0, 0.0);
        let top_right = Point::new(1.0, 1.0);
        let bottom_right = Point::new(1.0, 0.0);

        let points = BTreeSet::from([top_left, bottom_left, top_right, bottom_right]);
        let segments = [
            (top_left, top_right),
            (top_left, bottom_left),
            (bottom_left, bottom_right),
            (top_right, bottom_right),
        ]
        .into_iter()
        .map(|(a, b)| Segment::edge(a, b).expect("unit square corners are distinct"))
        .collect();

        Self { points, segments }
    }

    pub fn points(&self) -> &BTreeSet<Point> {
        &self.points
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether `p` is one of the paper's known points.
    pub fn contains_point(&self, p: &Point) -> bool {
        self.points.contains(p)
    }

    /// Folds along the perpendicular bisector of `p1`–`p2` and returns the
    /// grown paper; `self` is never modified, and a failed fold leaves no
    /// trace. The two points are expected to be members of the current
    /// point set; selection is the caller's concern.
    ///
    /// The bisector (anchored at the midpoint, directed along the
    /// component-swapped difference) is intersected against every current
    /// segment. Hits on boundary edges become the new crease's endpoints
    /// and must number exactly two; every hit, including interior crossings
    /// with earlier creases, joins the point set. A fold that retraces an
    /// existing crease appends a second, identical segment; duplicates are
    /// not suppressed.
    pub fn crease(&self, p1: Point, p2: Point) -> Result<Paper, CreaseError> {
        if p1 == p2 {
            return Err(GeometryError::DegenerateSegment { x: p1.x, y: p1.y }.into());
        }

        let mid = p1.midpoint(p2);
        let cut = Line::new(mid, (p2 - p1).orthogonal());

        let mut points = self.points.clone();
        let mut boundary: Vec<Point> = Vec::new();

        for segment in &self.segments {
            if let Some(hit) = segment.intersection(&cut) {
                points.insert(hit);
                if segment.is_edge() && !boundary.contains(&hit) {
                    boundary.push(hit);
                }
            }
        }

        if boundary.len() != 2 {
            return Err(CreaseError::InvalidCrease {
                found: boundary.len(),
            });
        }

        let mut segments = self.segments.clone();
        segments.push(Segment::crease(boundary[0], boundary[1])?);

        Ok(Paper { points, segments })
    }
}

impl Default for Paper {
    fn default() -> Self {
        Self::new()
    }
}
