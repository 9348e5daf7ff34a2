use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Geometric primitive representing a latitude/longitude coordinate pair.
///
/// The coordinates are treated as planar: `lat` plays the role of the y-axis and `lng` of the x-axis.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Point { lat, lng }
    }

    /// Returns `true` if neither coordinate is `NaN` or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        //adding 0.0 maps -0.0 to 0.0, which compare equal
        let lat = (self.lat + 0.0).to_bits();
        let lng = (self.lng + 0.0).to_bits();
        lat.hash(state);
        lng.hash(state);
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.lat, p.lng)
    }
}

impl From<(f64, f64)> for Point {
    fn from((lat, lng): (f64, f64)) -> Self {
        Point { lat, lng }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn signed_zero_hashes_like_zero() {
        let set: HashSet<Point> = [Point::new(0.0, -0.0), Point::new(-0.0, 0.0)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn finiteness() {
        assert!(Point::new(52.1, 4.3).is_finite());
        assert!(!Point::new(f64::NAN, 4.3).is_finite());
        assert!(!Point::new(0.0, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn tuple_conversion_keeps_lat_first() {
        let p: Point = (1.5, -3.0).into();
        assert_eq!(p, Point { lat: 1.5, lng: -3.0 });
        assert_eq!(<(f64, f64)>::from(p), (1.5, -3.0));
    }
}
