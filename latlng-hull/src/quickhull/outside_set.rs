use crate::geometry::primitives::{Baseline, Point};

/// Points strictly outside a [`Baseline`] and the one farthest away from it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutsideSet {
    /// Point with the largest signed distance, `None` if no point lies outside
    pub farthest: Option<Point>,
    /// All points with a strictly positive signed distance, in reverse input order
    pub points: Vec<Point>,
}

/// Scans `points` back to front and collects every point strictly outside `baseline`.
///
/// Collinear points (signed distance exactly zero) are dropped.
/// On equal distances, the first one encountered in the scan (i.e. the one with the highest index) is the farthest.
pub fn find_most_distant_point_from_baseline(baseline: &Baseline, points: &[Point]) -> OutsideSet {
    let mut max_distance = 0.0;
    let mut farthest = None;
    let mut outside = vec![];

    for p in points.iter().rev() {
        let d = baseline.signed_distance(p);
        if d <= 0.0 {
            continue;
        }
        outside.push(*p);
        if d > max_distance {
            max_distance = d;
            farthest = Some(*p);
        }
    }

    OutsideSet {
        farthest,
        points: outside,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // pointing north along lng = 0, east is outside
    const NORTH: Baseline = Baseline::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));

    #[test]
    fn keeps_only_strictly_outside_points() {
        let points = [
            Point::new(1.0, 1.0),
            Point::new(2.0, -1.0),
            Point::new(3.0, 0.0),
            Point::new(4.0, 3.0),
        ];
        let set = find_most_distant_point_from_baseline(&NORTH, &points);
        assert_eq!(set.farthest, Some(Point::new(4.0, 3.0)));
        assert_eq!(set.points, vec![Point::new(4.0, 3.0), Point::new(1.0, 1.0)]);
    }

    #[test]
    fn ties_resolve_to_highest_index() {
        let points = [Point::new(1.0, 2.0), Point::new(5.0, 2.0), Point::new(6.0, 1.0)];
        let set = find_most_distant_point_from_baseline(&NORTH, &points);
        assert_eq!(set.farthest, Some(Point::new(5.0, 2.0)));
        assert_eq!(set.points.len(), 3);
    }

    #[test]
    fn nothing_outside() {
        let points = [Point::new(1.0, -1.0), Point::new(5.0, 0.0)];
        let set = find_most_distant_point_from_baseline(&NORTH, &points);
        assert_eq!(set, OutsideSet::default());
    }

    #[test]
    fn endpoints_are_never_outside() {
        let points = [NORTH.start, NORTH.end];
        let set = find_most_distant_point_from_baseline(&NORTH, &points);
        assert!(set.farthest.is_none());
        assert!(set.points.is_empty());
    }
}
