use crate::geometry::primitives::Point;

/// Invalid input rejected by [`get_convex_hull`](crate::get_convex_hull) before any hull construction.
///
/// Degenerate geometry (coincident or collinear points) is *not* an error, it yields a minimal hull.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HullError {
    #[error("invalid input: cannot compute the convex hull of an empty point set")]
    EmptyInput,

    #[error("invalid input: point {index} has a non-finite coordinate: {point:?}")]
    NonFiniteCoordinate { index: usize, point: Point },
}
