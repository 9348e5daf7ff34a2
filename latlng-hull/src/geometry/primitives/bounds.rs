use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Point;

///Axis-aligned bounding box in latitude/longitude space
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl Bounds {
    /// Smallest [`Bounds`] containing all `points`, `None` if there are none.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let init = Bounds {
            lat_min: first.lat,
            lat_max: first.lat,
            lng_min: first.lng,
            lng_max: first.lng,
        };
        Some(points.fold(init, |b, p| Bounds {
            lat_min: f64::min(b.lat_min, p.lat),
            lat_max: f64::max(b.lat_max, p.lat),
            lng_min: f64::min(b.lng_min, p.lng),
            lng_max: f64::max(b.lng_max, p.lng),
        }))
    }

    /// Closed containment: points on the border are contained.
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        (self.lat_min..=self.lat_max).contains(&p.lat) && (self.lng_min..=self.lng_max).contains(&p.lng)
    }
}
