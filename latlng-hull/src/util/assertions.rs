use log::error;

use crate::geometry::convex_hull::ConvexHull;
use crate::geometry::primitives::Point;

//Various checks to verify correctness of computed hulls
//Used in debug_assert!() blocks and in tests

/// Every hull vertex must be one of the input points, no points are ever interpolated.
pub fn hull_is_subset_of(hull: &[Point], points: &[Point]) -> bool {
    match hull.iter().find(|v| !points.contains(v)) {
        Some(v) => {
            error!("hull vertex {v:?} is not part of the input");
            false
        }
        None => true,
    }
}

/// Every point must lie inside or on the ring of `hull`.
///
/// Signed distances up to `tolerance` outside an edge are accepted. For degenerate (zero-area) hulls
/// the points must additionally lie inside the hull's bounding box.
pub fn hull_encloses_all(hull: &ConvexHull, points: &[Point], tolerance: f64) -> bool {
    let degenerate = hull.area() == 0.0;
    let bbox = hull.bbox();
    for p in points {
        if degenerate && !bbox.is_some_and(|b| b.contains(p)) {
            error!("{p:?} lies outside the bounding box of degenerate hull {hull:?}");
            return false;
        }
        if let Some(edge) = hull.edges().find(|e| e.signed_distance(p) > tolerance) {
            error!(
                "{p:?} lies outside hull edge {edge:?} (signed distance: {})",
                edge.signed_distance(p)
            );
            return false;
        }
    }
    true
}

/// Consecutive edges of the ring never turn clockwise.
pub fn hull_is_convex(hull: &ConvexHull, tolerance: f64) -> bool {
    let edges = hull.edges().collect::<Vec<_>>();
    for (i, edge) in edges.iter().enumerate() {
        let next = &edges[(i + 1) % edges.len()];
        if edge.signed_distance(&next.end) > tolerance {
            error!("hull turns clockwise at {:?}", edge.end);
            return false;
        }
    }
    true
}
