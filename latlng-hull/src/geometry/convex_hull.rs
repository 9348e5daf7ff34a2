use itertools::Itertools;

use crate::geometry::primitives::{Baseline, Bounds, Point};

/// Ordered boundary of the convex hull of a point set, as produced by
/// [`HullBuilder::get_convex_hull`](crate::quickhull::HullBuilder::get_convex_hull).
///
/// The vertices are ordered counterclockwise (with `lng` as x and `lat` as y), starting at the lower
/// seed (lowest latitude, or lowest longitude if all latitudes are equal).
/// The ring is implicitly closed: the last vertex connects back to the first.
/// For degenerate inputs the ring collapses to a segment (two vertices) or a single point repeated twice.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexHull {
    points: Vec<Point>,
}

impl ConvexHull {
    pub(crate) fn new(points: Vec<Point>) -> Self {
        debug_assert!(!points.is_empty());
        Self { points }
    }

    /// The hull vertices in counterclockwise order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// The edges of the closed ring, each oriented so that the interior of the hull lies to its left.
    pub fn edges(&self) -> impl Iterator<Item = Baseline> + '_ {
        self.points
            .iter()
            .circular_tuple_windows()
            .map(|(&start, &end)| Baseline::new(start, end))
    }

    pub fn bbox(&self) -> Option<Bounds> {
        Bounds::from_points(&self.points)
    }

    /// Returns `true` if `p` lies inside or on the boundary of the hull.
    ///
    /// Exact: no tolerance is applied to the signed distances.
    /// A degenerate hull contains only the points of its segment (or its single point).
    pub fn contains(&self, p: &Point) -> bool {
        self.bbox().is_some_and(|bbox| bbox.contains(p))
            && self.edges().all(|edge| edge.signed_distance(p) <= 0.0)
    }

    /// Area enclosed by the ring, in squared degrees (shoelace formula).
    pub fn area(&self) -> f64 {
        let twice_area: f64 = self
            .points
            .iter()
            .circular_tuple_windows()
            .map(|(a, b)| a.lng * b.lat - b.lng * a.lat)
            .sum();
        twice_area / 2.0
    }
}

impl From<ConvexHull> for Vec<Point> {
    fn from(hull: ConvexHull) -> Self {
        hull.points
    }
}

impl<'a> IntoIterator for &'a ConvexHull {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for ConvexHull {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
