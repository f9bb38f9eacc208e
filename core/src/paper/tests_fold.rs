use super::*;
use crate::geometry::SegmentKind;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn test_fresh_sheet_is_four_corners_and_four_edges() {
    let paper = Paper::new();

    assert_eq!(paper.points().len(), 4);
    assert_eq!(paper.segments().len(), 4);
    assert!(paper.segments().iter().all(|s| s.is_edge()));

    for segment in paper.segments() {
        assert!(paper.contains_point(&segment.start()));
        assert!(paper.contains_point(&segment.end()));
    }
}

#[test]
fn test_vertical_fold_splits_top_and_bottom_edges() {
    let paper = Paper::new();

    // Top-left to top-right: the bisector is the vertical line x = 0.5.
    let folded = paper.crease(p(0.0, 1.0), p(1.0, 1.0)).unwrap();

    assert_eq!(folded.points().len(), 6);
    assert_eq!(folded.segments().len(), 5);
    assert!(folded.contains_point(&p(0.5, 1.0)));
    assert!(folded.contains_point(&p(0.5, 0.0)));

    let crease = folded.segments().last().unwrap();
    assert_eq!(crease.kind(), SegmentKind::Crease);
    assert_eq!(crease.start(), p(0.5, 0.0));
    assert_eq!(crease.end(), p(0.5, 1.0));

    // Functional update: the original sheet is untouched.
    assert_eq!(paper.points().len(), 4);
    assert_eq!(paper.segments().len(), 4);
}

#[test]
fn test_selecting_the_same_point_twice_is_degenerate() {
    let paper = Paper::new();
    let err = paper.crease(p(0.0, 0.0), p(0.0, 0.0)).unwrap_err();
    assert_eq!(
        err,
        CreaseError::Degenerate(GeometryError::DegenerateSegment { x: 0.0, y: 0.0 })
    );
}

#[test]
fn test_retracing_a_fold_appends_a_duplicate_crease() {
    let paper = Paper::new();
    let once = paper.crease(p(0.0, 1.0), p(1.0, 1.0)).unwrap();
    let twice = once.crease(p(0.0, 1.0), p(1.0, 1.0)).unwrap();

    // Both crossing points already exist, so the point set is unchanged
    // while the segment list grows by a geometrically identical crease.
    assert_eq!(twice.points().len(), once.points().len());
    assert_eq!(twice.segments().len(), once.segments().len() + 1);

    let n = twice.segments().len();
    assert_eq!(twice.segments()[n - 1], twice.segments()[n - 2]);
}

#[test]
fn test_fold_crossing_an_earlier_crease_adds_the_interior_point() {
    let paper = Paper::new();
    let vertical = paper.crease(p(0.0, 1.0), p(1.0, 1.0)).unwrap();

    // Left-bottom to left-top: the bisector is the horizontal line y = 0.5,
    // which crosses the first crease in the interior at (0.5, 0.5).
    let both = vertical.crease(p(0.0, 0.0), p(0.0, 1.0)).unwrap();

    assert!(both.contains_point(&p(0.0, 0.5)));
    assert!(both.contains_point(&p(1.0, 0.5)));
    assert!(both.contains_point(&p(0.5, 0.5)));
    assert_eq!(both.points().len(), 9);
    assert_eq!(both.segments().len(), 6);

    // The interior crossing is a point, not a crease endpoint.
    let crease = both.segments().last().unwrap();
    assert_eq!(crease.start(), p(0.0, 0.5));
    assert_eq!(crease.end(), p(1.0, 0.5));
}

#[test]
fn test_corner_to_corner_fold_creases_the_main_diagonal() {
    // The fold direction swaps components rather than rotating, so the
    // "bisector" of (0,0)-(1,1) runs along that same diagonal and the
    // crease lands on it, meeting the boundary at the selected corners.
    let paper = Paper::new();
    let folded = paper.crease(p(0.0, 0.0), p(1.0, 1.0)).unwrap();

    assert_eq!(folded.points().len(), 4);
    assert_eq!(folded.segments().len(), 5);

    let crease = folded.segments().last().unwrap();
    assert_eq!(crease.start(), p(0.0, 0.0));
    assert_eq!(crease.end(), p(1.0, 1.0));
}

#[test]
fn test_anti_diagonal_fold_passes_through_both_corners() {
    let paper = Paper::new();
    let folded = paper.crease(p(1.0, 0.0), p(0.0, 1.0)).unwrap();

    // Each corner is reported by both incident edges; dedup leaves two.
    let crease = folded.segments().last().unwrap();
    assert_eq!(crease.start(), p(0.0, 1.0));
    assert_eq!(crease.end(), p(1.0, 0.0));
    assert_eq!(folded.points().len(), 4);
}

#[test]
fn test_rejects_fold_whose_line_crosses_the_boundary_off_count() {
    let paper = Paper::new();
    let vertical = paper.crease(p(0.0, 1.0), p(1.0, 1.0)).unwrap();

    // Folding (1,0) onto (0.5,1) gives a cut that crosses the left and
    // right edges and also hits the top edge's back extension at
    // (-0.25, 1), for three boundary points.
    let err = vertical.crease(p(1.0, 0.0), p(0.5, 1.0)).unwrap_err();
    assert_eq!(err, CreaseError::InvalidCrease { found: 3 });

    // Atomicity: the failed fold left nothing behind.
    assert_eq!(vertical.points().len(), 6);
    assert_eq!(vertical.segments().len(), 5);
}
