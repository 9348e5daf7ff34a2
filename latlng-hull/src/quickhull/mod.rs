//! Recursive divide-and-conquer QuickHull.
//!
//! A [`Seed`] baseline between two extreme points splits the input into two chains.
//! Each chain is refined by [`HullBuilder::build_convex_hull`]: the point farthest outside a baseline
//! is a hull vertex, and the two new baselines towards it are refined against the points that were
//! outside the original one. A baseline without outside points is a hull edge.

mod outside_set;
mod seed;

pub use outside_set::{OutsideSet, find_most_distant_point_from_baseline};
pub use seed::{Extremes, Seed, SeedAxis};

use log::{debug, trace};

use crate::error::HullError;
use crate::geometry::convex_hull::ConvexHull;
use crate::geometry::primitives::{Baseline, Point};
use crate::util::assertions;
use crate::util::config::HullConfig;

/// Builds convex hulls of latitude/longitude point sets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HullBuilder {
    pub config: HullConfig,
}

impl HullBuilder {
    pub fn new(config: HullConfig) -> Self {
        Self { config }
    }

    /// Computes the [`ConvexHull`] of `points`.
    ///
    /// The input is never modified and every vertex of the hull is one of the input points.
    /// Coincident or collinear inputs yield a degenerate hull of two vertices.
    ///
    /// # Errors
    /// [`HullError::EmptyInput`] if `points` is empty,
    /// [`HullError::NonFiniteCoordinate`] if any coordinate is `NaN` or infinite.
    pub fn get_convex_hull(&self, points: &[Point]) -> Result<ConvexHull, HullError> {
        if let Some((index, &point)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(HullError::NonFiniteCoordinate { index, point });
        }
        let Some(Seed { baseline, axis }) = Seed::select(points) else {
            return Err(HullError::EmptyInput);
        };
        trace!("[QH] seeded on {axis:?}: {baseline:?}");

        let (mut hull, opposite_chain) = self.join(
            points.len(),
            || self.build_convex_hull(baseline, points),
            || self.build_convex_hull(baseline.reversed(), points),
        );
        hull.extend(opposite_chain);

        debug!(
            "[QH] convex hull of {} points has {} vertices",
            points.len(),
            hull.len()
        );
        debug_assert!(assertions::hull_is_subset_of(&hull, points));

        Ok(ConvexHull::new(hull))
    }

    /// Computes the chain of hull vertices on the outside of `baseline`.
    ///
    /// The chain starts with `baseline.start` and ends just before `baseline.end`,
    /// which is emitted by whichever chain starts there.
    pub fn build_convex_hull(&self, baseline: Baseline, points: &[Point]) -> Vec<Point> {
        let OutsideSet {
            farthest,
            points: outside,
        } = find_most_distant_point_from_baseline(&baseline, points);

        let Some(farthest) = farthest else {
            trace!("[QH] hull edge: {baseline:?}");
            return vec![baseline.start];
        };

        let (mut chain, tail) = self.join(
            outside.len(),
            || self.build_convex_hull(Baseline::new(baseline.start, farthest), &outside),
            || self.build_convex_hull(Baseline::new(farthest, baseline.end), &outside),
        );
        chain.extend(tail);
        chain
    }

    /// Evaluates both closures, in parallel if `n_points` reaches the configured threshold.
    #[cfg(feature = "parallel")]
    fn join<A, B, RA, RB>(&self, n_points: usize, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        match self.config.parallel_threshold {
            Some(threshold) if n_points >= threshold => rayon::join(a, b),
            _ => (a(), b()),
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn join<A, B, RA, RB>(&self, _n_points: usize, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        (a(), b())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lng: f64) -> Point {
        Point::new(lat, lng)
    }

    #[test]
    fn terminal_branch_emits_start() {
        let bl = Baseline::new(p(0.0, 0.0), p(1.0, 0.0));
        let chain = HullBuilder::default().build_convex_hull(bl, &[p(0.5, -1.0), p(2.0, 0.0)]);
        assert_eq!(chain, vec![p(0.0, 0.0)]);
    }

    #[test]
    fn recursive_branch_orders_chain_from_start() {
        // north along lng = 0, both points are outside (east)
        let bl = Baseline::new(p(0.0, 0.0), p(10.0, 0.0));
        let points = [p(2.0, 3.0), p(8.0, 3.0), p(5.0, 1.0)];
        let chain = HullBuilder::default().build_convex_hull(bl, &points);
        assert_eq!(chain, vec![p(0.0, 0.0), p(2.0, 3.0), p(8.0, 3.0)]);
    }

    #[test]
    fn square_in_counterclockwise_order() {
        let points = [p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0), p(0.5, 0.5)];
        let hull = HullBuilder::default().get_convex_hull(&points).unwrap();
        assert_eq!(
            hull.points(),
            &[p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0), p(0.0, 0.0)]
        );
    }

    #[test]
    fn rejects_empty_input() {
        let res = HullBuilder::default().get_convex_hull(&[]);
        assert_eq!(res, Err(HullError::EmptyInput));
    }

    #[test]
    fn rejects_nan() {
        let points = [p(0.0, 0.0), p(f64::NAN, 1.0)];
        let res = HullBuilder::default().get_convex_hull(&points);
        assert!(matches!(res, Err(HullError::NonFiniteCoordinate { index: 1, .. })));
    }

    #[test]
    fn parallel_matches_sequential() {
        // points on a circle
        let points = (0..500)
            .map(|i| {
                let theta = i as f64 * std::f64::consts::TAU / 500.0;
                p(10.0 * theta.sin(), 10.0 * theta.cos())
            })
            .collect::<Vec<_>>();
        let sequential = HullBuilder::new(HullConfig::sequential())
            .get_convex_hull(&points)
            .unwrap();
        let parallel = HullBuilder::new(HullConfig {
            parallel_threshold: Some(1),
        })
        .get_convex_hull(&points)
        .unwrap();
        assert_eq!(sequential, parallel);
    }
}
