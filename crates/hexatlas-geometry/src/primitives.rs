//! Stateless point, bearing, and polygon math.

use hexatlas_core::{Point, RawPolygon};

/// Euclidean distance between two points.
///
/// Convenience alias for [`Point::distance_to`], kept as a free function so
/// call sites read symmetrically with [`bearing`].
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance_to(b)
}

/// Clockwise bearing from `reference` to `target`, in degrees `[0, 360)`.
///
/// A target directly above the reference yields 0°, directly to the right
/// 90°, directly below 180°, directly to the left 270°.
///
/// # Examples
///
/// ```
/// use hexatlas_core::Point;
/// use hexatlas_geometry::bearing;
///
/// let origin = Point::new(0.0, 0.0);
/// assert_eq!(bearing(origin, Point::new(0.0, 5.0)), 0.0);
/// assert_eq!(bearing(origin, Point::new(5.0, 0.0)), 90.0);
/// assert_eq!(bearing(origin, Point::new(0.0, -5.0)), 180.0);
/// assert_eq!(bearing(origin, Point::new(-5.0, 0.0)), 270.0);
/// ```
pub fn bearing(reference: Point, target: Point) -> f64 {
    let dx = target.x - reference.x;
    let dy = target.y - reference.y;
    (-dy.atan2(dx).to_degrees() + 450.0) % 360.0
}

/// Along-path length between two indices of a polyline: the sum of the
/// consecutive segment lengths, not the straight-line distance.
///
/// Indices are swapped if given out of order. Both must be valid indices
/// into `points`.
pub fn path_length(points: &[Point], first: usize, last: usize) -> f64 {
    let (first, last) = if first > last {
        (last, first)
    } else {
        (first, last)
    };
    points[first..=last]
        .windows(2)
        .map(|pair| pair[0].distance_to(pair[1]))
        .sum()
}

/// Centre of mass of a polygon ring (shoelace formula).
///
/// The ring is closed implicitly: the last point is joined back to the
/// first, so passing an already-closed ring is fine (the closing segment
/// is degenerate and contributes nothing). Returns `None` for rings with
/// fewer than 3 points or zero signed area, where the centre of mass is
/// undefined.
pub fn polygon_centroid(polygon: &RawPolygon) -> Option<Point> {
    let points = polygon.points();
    if points.len() < 3 {
        return None;
    }

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_area = 0.0;
    for i in 0..points.len() {
        let p0 = points[i];
        let p1 = points[(i + 1) % points.len()];
        let cross = p1.x * p0.y - p0.x * p1.y;
        sum_x += (p0.x + p1.x) * cross;
        sum_y += (p0.y + p1.y) * cross;
        sum_area += cross;
    }

    let area = 0.5 * sum_area;
    if area == 0.0 {
        return None;
    }
    Some(Point::new(sum_x / (6.0 * area), sum_y / (6.0 * area)))
}

/// The main part of a multi-part shape: the ring with the most points.
///
/// First wins on ties. Returns `None` for an empty part list.
///
/// Point count is a proxy for area; detailed coastlines dwarf their
/// islands in vertex count, which is what this selection relies on.
pub fn main_polygon(parts: &[RawPolygon]) -> Option<&RawPolygon> {
    let mut main: Option<&RawPolygon> = None;
    let mut max_points = 0;
    for part in parts {
        if main.is_none() || part.len() > max_points {
            max_points = part.len();
            main = Some(part);
        }
    }
    main
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    // ── bearing ─────────────────────────────────────────────────

    #[test]
    fn bearing_cardinal_points() {
        let origin = p(0.0, 0.0);
        assert_eq!(bearing(origin, p(0.0, 1.0)), 0.0);
        assert_eq!(bearing(origin, p(1.0, 0.0)), 90.0);
        assert_eq!(bearing(origin, p(0.0, -1.0)), 180.0);
        assert_eq!(bearing(origin, p(-1.0, 0.0)), 270.0);
    }

    #[test]
    fn bearing_diagonals() {
        let origin = p(0.0, 0.0);
        assert!((bearing(origin, p(1.0, 1.0)) - 45.0).abs() < 1e-9);
        assert!((bearing(origin, p(1.0, -1.0)) - 135.0).abs() < 1e-9);
        assert!((bearing(origin, p(-1.0, -1.0)) - 225.0).abs() < 1e-9);
        assert!((bearing(origin, p(-1.0, 1.0)) - 315.0).abs() < 1e-9);
    }

    #[test]
    fn bearing_is_translation_invariant() {
        let shift = p(12.5, -7.0);
        let a = p(3.0, 4.0);
        let b = p(-1.0, 9.0);
        let shifted = bearing(
            p(a.x + shift.x, a.y + shift.y),
            p(b.x + shift.x, b.y + shift.y),
        );
        assert!((bearing(a, b) - shifted).abs() < 1e-9);
    }

    // ── path_length ─────────────────────────────────────────────

    #[test]
    fn path_length_sums_segments() {
        let points = [p(0.0, 0.0), p(3.0, 4.0), p(3.0, 10.0)];
        assert_eq!(path_length(&points, 0, 2), 11.0);
        assert_eq!(path_length(&points, 0, 1), 5.0);
    }

    #[test]
    fn path_length_swaps_reversed_indices() {
        let points = [p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)];
        assert_eq!(path_length(&points, 2, 0), path_length(&points, 0, 2));
    }

    #[test]
    fn path_length_same_index_is_zero() {
        let points = [p(0.0, 0.0), p(1.0, 0.0)];
        assert_eq!(path_length(&points, 1, 1), 0.0);
    }

    // ── polygon_centroid ────────────────────────────────────────

    #[test]
    fn centroid_of_unit_square() {
        let square = RawPolygon::from_points(vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 1.0),
            p(0.0, 1.0),
        ]);
        let c = polygon_centroid(&square).unwrap();
        assert!((c.x - 0.5).abs() < 1e-9);
        assert!((c.y - 0.5).abs() < 1e-9);
    }

    #[test]
    fn centroid_ignores_explicit_closing_point() {
        let open = RawPolygon::from_points(vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]);
        let closed = RawPolygon::from_points(vec![
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 2.0),
            p(0.0, 2.0),
            p(0.0, 0.0),
        ]);
        assert_eq!(polygon_centroid(&open), polygon_centroid(&closed));
    }

    #[test]
    fn centroid_orientation_independent() {
        let ccw = RawPolygon::from_points(vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 2.0), p(0.0, 2.0)]);
        let cw = RawPolygon::from_points(vec![p(0.0, 0.0), p(0.0, 2.0), p(4.0, 2.0), p(4.0, 0.0)]);
        assert_eq!(polygon_centroid(&ccw), polygon_centroid(&cw));
    }

    #[test]
    fn centroid_of_degenerate_ring_is_none() {
        let line = RawPolygon::from_points(vec![p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)]);
        assert_eq!(polygon_centroid(&line), None);
        let too_few = RawPolygon::from_points(vec![p(0.0, 0.0), p(1.0, 0.0)]);
        assert_eq!(polygon_centroid(&too_few), None);
    }

    // ── main_polygon ────────────────────────────────────────────

    #[test]
    fn main_polygon_picks_most_points() {
        let small = RawPolygon::from_points(vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]);
        let large = RawPolygon::from_points(vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 1.0),
            p(0.0, 1.0),
        ]);
        let parts = [small.clone(), large.clone()];
        assert_eq!(main_polygon(&parts), Some(&large));
    }

    #[test]
    fn main_polygon_first_wins_ties() {
        let a = RawPolygon::from_points(vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]);
        let b = RawPolygon::from_points(vec![p(5.0, 5.0), p(6.0, 5.0), p(5.0, 6.0)]);
        let parts = [a.clone(), b];
        assert_eq!(main_polygon(&parts), Some(&a));
    }

    #[test]
    fn main_polygon_empty_is_none() {
        assert_eq!(main_polygon(&[]), None);
    }
}
