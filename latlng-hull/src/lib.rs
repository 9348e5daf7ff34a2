#![doc = document_features::document_features!()]
//! Convex hulls of latitude/longitude point sets with the QuickHull algorithm.
//!
//! Coordinates are treated as planar (`lng` as x, `lat` as y): there is no spherical geometry and
//! no antimeridian handling. The hull is returned as a counterclockwise ring of input points.
//!
//! ```
//! use latlng_hull::Point;
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(0.5, 0.5),
//! ];
//! let hull = latlng_hull::get_convex_hull(&points).unwrap();
//! assert_eq!(hull.len(), 4);
//! assert!(!hull.points().contains(&Point::new(0.5, 0.5)));
//! ```

/// Error types
pub mod error;

/// Geometric primitives and the hull result type
pub mod geometry;

/// The QuickHull algorithm
pub mod quickhull;

/// Configuration and debug checks
pub mod util;

#[doc(inline)]
pub use error::HullError;
#[doc(inline)]
pub use geometry::convex_hull::ConvexHull;
#[doc(inline)]
pub use geometry::primitives::{Baseline, Point};
#[doc(inline)]
pub use quickhull::HullBuilder;
#[doc(inline)]
pub use util::config::HullConfig;

/// Computes the convex hull of `points` with the default [`HullConfig`].
///
/// See [`HullBuilder::get_convex_hull`].
pub fn get_convex_hull(points: &[Point]) -> Result<ConvexHull, HullError> {
    HullBuilder::default().get_convex_hull(points)
}

/// Computes the hull chain outside of `baseline` with the default [`HullConfig`].
///
/// See [`HullBuilder::build_convex_hull`].
pub fn build_convex_hull(baseline: Baseline, points: &[Point]) -> Vec<Point> {
    HullBuilder::default().build_convex_hull(baseline, points)
}
