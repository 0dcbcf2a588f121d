//! Recursive boundary simplification.
//!
//! The simplifier thins a polyline by recursive divide-and-reduce: a range
//! whose along-path length falls under the tolerance collapses to its two
//! endpoints; otherwise the range splits at the interior point scoring
//! highest on a perimeter-ratio heuristic and both halves recurse.
//!
//! The heuristic scores a candidate `k` over range `[first, last]` as
//! `2 * (base + d(first,k) + d(k,last)) / base` with
//! `base = d(first, last)`. This is a proxy for distance from the chord,
//! not a true perpendicular height; it is reproduced exactly for output
//! compatibility with existing renderings. See DESIGN.md before changing
//! it.

use crate::error::SimplifyError;
use crate::primitives::path_length;
use hexatlas_core::{Boundary, BoundarySet, Point};
use std::collections::BTreeMap;

/// Simplify one boundary.
///
/// The result keeps the first and last point of the input and never has
/// more points than the input. Raising the tolerance collapses more of the
/// polyline; tolerance 0 keeps every point of a non-degenerate boundary.
///
/// # Errors
///
/// [`SimplifyError::TooFewPoints`] if the boundary has fewer than 2
/// points; [`SimplifyError::InvalidTolerance`] if the tolerance is
/// negative, NaN, or infinite.
///
/// # Examples
///
/// ```
/// use hexatlas_core::{Boundary, Point};
/// use hexatlas_geometry::simplify;
///
/// let square = Boundary::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 10.0),
///     Point::new(10.0, 10.0),
///     Point::new(10.0, 0.0),
///     Point::new(0.0, 0.0),
/// ]);
/// // Each side is longer than the tolerance, so all corners survive.
/// let simplified = simplify(&square, 5.0).unwrap();
/// assert_eq!(simplified, square);
/// ```
pub fn simplify(boundary: &Boundary, tolerance: f64) -> Result<Boundary, SimplifyError> {
    if boundary.len() < 2 {
        return Err(SimplifyError::TooFewPoints {
            got: boundary.len(),
        });
    }
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(SimplifyError::InvalidTolerance { value: tolerance });
    }

    let points = boundary.points();
    let kept = simplify_range(points, 0, points.len() - 1, tolerance);
    Ok(Boundary::new(kept.into_values().collect()))
}

/// Simplify every boundary in an arena, preserving order.
///
/// Fails on the first invalid boundary.
pub fn simplify_all(set: &BoundarySet, tolerance: f64) -> Result<Vec<Boundary>, SimplifyError> {
    set.iter()
        .map(|(_, boundary)| simplify(boundary, tolerance))
        .collect()
}

/// Reduce the index range `[first, last]` to the set of kept points.
///
/// The `BTreeMap` keeps entries ordered by original index, so merged
/// results emit points in input order.
fn simplify_range(
    points: &[Point],
    first: usize,
    last: usize,
    tolerance: f64,
) -> BTreeMap<usize, Point> {
    let split = if first + 1 == last || path_length(points, first, last) < tolerance {
        None
    } else {
        furthest_point(points, first, last)
    };

    match split {
        None => {
            // Adjacent endpoints, a range under the tolerance, or a fully
            // degenerate range where no candidate scored: keep the pair.
            let mut kept = BTreeMap::new();
            kept.insert(first, points[first]);
            kept.insert(last, points[last]);
            kept
        }
        Some(k) => {
            let mut kept = simplify_range(points, first, k, tolerance);
            for (index, point) in simplify_range(points, k, last, tolerance) {
                // On collision the lower-range entry wins.
                kept.entry(index).or_insert(point);
            }
            kept
        }
    }
}

/// Interior index of `(first, last)` scoring highest on the
/// perimeter-ratio heuristic; first-encountered maximum wins.
///
/// A zero-length chord (closed ring endpoints) makes every score infinite,
/// so the first interior index wins. Returns `None` only when every score
/// is NaN, which requires all points in the range to coincide.
fn furthest_point(points: &[Point], first: usize, last: usize) -> Option<usize> {
    let base = points[first].distance_to(points[last]);

    let mut best_index = None;
    let mut best_score = -1.0;
    for k in (first + 1)..last {
        let perimeter =
            base + points[first].distance_to(points[k]) + points[k].distance_to(points[last]);
        let score = 2.0 * perimeter / base;
        if score > best_score {
            best_score = score;
            best_index = Some(k);
        }
    }
    best_index
}
