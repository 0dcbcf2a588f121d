//! Reusable map fixtures.

use hexatlas_core::{Boundary, BoundarySet, Point, Region, RegionSet};
use hexatlas_resolver::SharedBoundaryIndex;

/// A closed 10×10 square ring with one point per corner.
///
/// Each side's along-path length is 10, so simplification with any
/// tolerance up to 10 keeps all four corners.
pub fn square_ring() -> Boundary {
    Boundary::new(vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 10.0),
        Point::new(10.0, 10.0),
        Point::new(10.0, 0.0),
        Point::new(0.0, 0.0),
    ])
}

/// A dense zigzag polyline along the x axis: `points` vertices alternating
/// between y = 0 and y = 1, one map unit apart in x. Exercises the
/// simplifier on input large enough to measure.
pub fn wavy_boundary(points: usize) -> Boundary {
    let vertices = (0..points)
        .map(|i| Point::new(i as f64, (i % 2) as f64))
        .collect();
    Boundary::new(vertices)
}

/// A west-to-east strip of `n` square regions, 10 map units apart, each
/// sharing one vertical boundary with its successor.
///
/// Returns the regions, the shared boundaries, and the adjacency index
/// wiring consecutive regions together. Region `i` is centred at
/// `(10 i + 5, 5)`.
pub fn strip_map(n: usize) -> (RegionSet, BoundarySet, SharedBoundaryIndex) {
    let mut regions = RegionSet::new();
    let mut boundaries = BoundarySet::new();
    let mut index = SharedBoundaryIndex::new();

    let ids: Vec<_> = (0..n)
        .map(|i| regions.insert(Region::new(Point::new(10.0 * i as f64 + 5.0, 5.0))))
        .collect();

    for pair in ids.windows(2) {
        let x = 10.0 * (pair[1].0 as f64);
        let shared = boundaries.insert(Boundary::new(vec![
            Point::new(x, 0.0),
            Point::new(x, 10.0),
        ]));
        index.record(pair[0], pair[1], shared);
    }

    (regions, boundaries, index)
}

/// Three mutually non-adjacent regions: no shared boundaries at all, so a
/// resolver can only place them through its fallback path.
pub fn isolated_triple() -> RegionSet {
    let mut regions = RegionSet::new();
    regions.insert(Region::new(Point::new(0.0, 0.0)));
    regions.insert(Region::new(Point::new(0.0, 10.0)));
    regions.insert(Region::new(Point::new(20.0, 0.0)));
    regions
}

/// A `cols` × `rows` rectangle of unit square regions, 10 map units per
/// side, with every horizontally and vertically adjacent pair sharing a
/// boundary. Region `(c, r)` is centred at `(10 c + 5, 10 r + 5)` with
/// row 0 southernmost, and regions are inserted row by row.
pub fn grid_map(cols: usize, rows: usize) -> (RegionSet, BoundarySet, SharedBoundaryIndex) {
    let mut regions = RegionSet::new();
    let mut boundaries = BoundarySet::new();
    let mut index = SharedBoundaryIndex::new();

    let mut ids = Vec::with_capacity(cols * rows);
    for r in 0..rows {
        for c in 0..cols {
            ids.push(regions.insert(Region::new(Point::new(
                10.0 * c as f64 + 5.0,
                10.0 * r as f64 + 5.0,
            ))));
        }
    }

    let id_at = |c: usize, r: usize| ids[r * cols + c];
    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                let x = 10.0 * (c as f64 + 1.0);
                let y = 10.0 * r as f64;
                let shared = boundaries.insert(Boundary::new(vec![
                    Point::new(x, y),
                    Point::new(x, y + 10.0),
                ]));
                index.record(id_at(c, r), id_at(c + 1, r), shared);
            }
            if r + 1 < rows {
                let x = 10.0 * c as f64;
                let y = 10.0 * (r as f64 + 1.0);
                let shared = boundaries.insert(Boundary::new(vec![
                    Point::new(x, y),
                    Point::new(x + 10.0, y),
                ]));
                index.record(id_at(c, r), id_at(c, r + 1), shared);
            }
        }
    }

    (regions, boundaries, index)
}
