use fold_core::geometry::Point;
use fold_core::paper::Paper;

fn describe(label: &str, paper: &Paper) {
    println!(
        "{}: {} points, {} segments",
        label,
        paper.points().len(),
        paper.segments().len()
    );
    for segment in paper.segments() {
        let (s, e) = (segment.start(), segment.end());
        println!("  {:?} ({}, {}) -> ({}, {})", segment.kind(), s.x, s.y, e.x, e.y);
    }
}

fn main() {
    let paper = Paper::new();
    describe("fresh sheet", &paper);

    // Fold the top edge onto itself: vertical crease at x = 0.5.
    let paper = paper
        .crease(Point::new(0.0, 1.0), Point::new(1.0, 1.0))
        .expect("vertical fold");
    describe("after vertical fold", &paper);

    // Fold the left edge onto itself: horizontal crease at y = 0.5,
    // crossing the first crease at the center.
    let paper = paper
        .crease(Point::new(0.0, 0.0), Point::new(0.0, 1.0))
        .expect("horizontal fold");
    describe("after horizontal fold", &paper);

    // A fold the sheet rejects: same point selected twice.
    let err = paper
        .crease(Point::new(0.0, 0.0), Point::new(0.0, 0.0))
        .unwrap_err();
    println!("rejected fold: {}", err);
}
