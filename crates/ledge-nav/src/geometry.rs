//! Planar primitives used by edge feasibility and waypoint arrival checks.

use ledge_core::Position;

pub fn distance(a: Position, b: Position) -> f32 {
    a.distance(b)
}

/// Inclusive on both ends.
///
/// Bounds are taken as given: with `lo > hi` nothing is in range.
pub fn in_range<T: PartialOrd>(value: T, lo: T, hi: T) -> bool {
    value >= lo && value <= hi
}

/// Whether the finite segments `p1-p2` and `q1-q2` cross.
///
/// Solves for the crossing point of the two infinite lines and accepts it only when it lies in
/// the bounding boxes of both segments. Parallel lines (including collinear, overlapping
/// segments) never intersect under this test.
pub fn segments_intersect(p1: Position, p2: Position, q1: Position, q2: Position) -> bool {
    let (p1x, p1y) = (p1.x as f64, p1.y as f64);
    let (p2x, p2y) = (p2.x as f64, p2.y as f64);
    let (q1x, q1y) = (q1.x as f64, q1.y as f64);
    let (q2x, q2y) = (q2.x as f64, q2.y as f64);

    let a1 = p2y - p1y;
    let b1 = p1x - p2x;
    let c1 = a1 * p1x + b1 * p1y;

    let a2 = q2y - q1y;
    let b2 = q1x - q2x;
    let c2 = a2 * q1x + b2 * q1y;

    let delta = a1 * b2 - a2 * b1;
    let x = (b2 * c1 - b1 * c2) / delta;
    let y = (a1 * c2 - a2 * c1) / delta;

    // delta == 0 yields +-inf, or NaN for collinear input.
    if !x.is_finite() || !y.is_finite() {
        return false;
    }

    in_range(x, p1x.min(p2x), p1x.max(p2x))
        && in_range(x, q1x.min(q2x), q1x.max(q2x))
        && in_range(y, p1y.min(p2y), p1y.max(p2y))
        && in_range(y, q1y.min(q2y), q1y.max(q2y))
}

/// Whether `current` lies inside the rectangle centred on `target` with half-extents
/// `x_tolerance` by `y_tolerance` (edges included).
pub fn reached(target: Position, current: Position, x_tolerance: f32, y_tolerance: f32) -> bool {
    in_range(current.x, target.x - x_tolerance, target.x + x_tolerance)
        && in_range(current.y, target.y - y_tolerance, target.y + y_tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_diagonals_intersect() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(10.0, 10.0);
        let c = Position::new(0.0, 10.0);
        let d = Position::new(10.0, 0.0);
        assert!(segments_intersect(a, b, c, d));
    }

    #[test]
    fn line_crossing_outside_either_segment_is_rejected() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(1.0, 1.0);
        let c = Position::new(5.0, 0.0);
        let d = Position::new(5.0, -10.0);
        assert!(!segments_intersect(a, b, c, d));
    }

    #[test]
    fn touching_endpoint_counts_as_intersection() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(10.0, 0.0);
        let c = Position::new(10.0, 0.0);
        let d = Position::new(10.0, 10.0);
        assert!(segments_intersect(a, b, c, d));
    }

    #[test]
    fn in_range_does_not_reorder_bounds() {
        assert!(in_range(5.0, 0.0, 10.0));
        assert!(in_range(0.0, 0.0, 10.0));
        assert!(in_range(10.0, 0.0, 10.0));
        assert!(!in_range(5.0, 10.0, 0.0));
    }

    #[test]
    fn reached_uses_an_axis_aligned_box() {
        let target = Position::new(100.0, 100.0);
        assert!(reached(target, Position::new(110.0, 150.0), 10.0, 50.0));
        assert!(!reached(target, Position::new(110.1, 100.0), 10.0, 50.0));
        assert!(!reached(target, Position::new(100.0, 49.0), 10.0, 50.0));
    }
}
