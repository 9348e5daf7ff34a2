use serde::{Deserialize, Serialize};

use crate::geometry::primitives::{Baseline, Point};

/// Coordinate axis along which the initial baseline was chosen.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeedAxis {
    /// Baseline runs from the lowest to the highest latitude
    Latitude,
    /// All points share one latitude, the baseline runs from the lowest to the highest longitude
    Longitude,
}

/// The initial baseline splitting a point set into its two hull chains.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seed {
    pub baseline: Baseline,
    pub axis: SeedAxis,
}

/// Extreme points of a point set, per coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extremes {
    pub max_lat: Point,
    pub min_lat: Point,
    pub max_lng: Point,
    pub min_lng: Point,
}

impl Extremes {
    /// Finds the extreme points in a single back-to-front scan, `None` if `points` is empty.
    ///
    /// Comparisons are strict, so among equal coordinates the point with the highest index wins.
    pub fn find(points: &[Point]) -> Option<Self> {
        let mut max_lat: Option<&Point> = None;
        let mut min_lat: Option<&Point> = None;
        let mut max_lng: Option<&Point> = None;
        let mut min_lng: Option<&Point> = None;

        for p in points.iter().rev() {
            if max_lat.is_none_or(|m| p.lat > m.lat) {
                max_lat = Some(p);
            }
            if min_lat.is_none_or(|m| p.lat < m.lat) {
                min_lat = Some(p);
            }
            if max_lng.is_none_or(|m| p.lng > m.lng) {
                max_lng = Some(p);
            }
            if min_lng.is_none_or(|m| p.lng < m.lng) {
                min_lng = Some(p);
            }
        }

        Some(Extremes {
            max_lat: *max_lat?,
            min_lat: *min_lat?,
            max_lng: *max_lng?,
            min_lng: *min_lng?,
        })
    }
}

impl Seed {
    /// Picks the latitude extremes as baseline, or the longitude extremes if all latitudes are equal.
    pub fn select(points: &[Point]) -> Option<Self> {
        let ext = Extremes::find(points)?;
        let seed = if ext.min_lat.lat != ext.max_lat.lat {
            Seed {
                baseline: Baseline::new(ext.min_lat, ext.max_lat),
                axis: SeedAxis::Latitude,
            }
        } else {
            Seed {
                baseline: Baseline::new(ext.min_lng, ext.max_lng),
                axis: SeedAxis::Longitude,
            }
        };
        Some(seed)
    }
}
