use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Point;

/// Oriented line segment from `start` to `end`, used to split candidate points
/// into an *outside* set (positive [`signed_distance`](Baseline::signed_distance)) and everything else.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub start: Point,
    pub end: Point,
}

impl Baseline {
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Baseline { start, end }
    }

    /// The same segment with opposite orientation, its outside set is the complement of `self`'s
    /// (up to collinear points, which are outside neither).
    #[inline]
    pub fn reversed(&self) -> Self {
        Baseline {
            start: self.end,
            end: self.start,
        }
    }

    /// A baseline whose endpoints coincide has no direction, every point lies *on* it.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Twice the signed area of the triangle (`start`, `end`, `p`), with `lng` as x and `lat` as y.
    ///
    /// * `> 0`: `p` lies strictly to the right of `start -> end` (outside)
    /// * `<= 0`: `p` lies on the line or to its left
    ///
    /// The magnitude is proportional to the perpendicular distance of `p` to the line, but is not
    /// normalized by the length of the baseline. Only compare values obtained from the same baseline.
    #[inline(always)]
    pub fn signed_distance(&self, p: &Point) -> f64 {
        let Baseline { start: a, end: b } = self;
        let v_y = b.lat - a.lat;
        let v_x = a.lng - b.lng;
        v_x * (p.lat - a.lat) + v_y * (p.lng - a.lng)
    }
}
