use crate::error::{Error, Result};

/// Mean radius of the Moon in kilometres.
pub const LUNAR_RADIUS_KM: f64 = 1737.1;

/// Geographic coordinate on the surface of a spherical body, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting values outside the valid ranges.
    pub fn new(lat_deg: f64, lon_deg: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat_deg) || !(-180.0..=180.0).contains(&lon_deg) {
            return Err(Error::InvalidCoordinate { lat_deg, lon_deg });
        }
        Ok(Self { lat_deg, lon_deg })
    }

    /// Great-circle distance to another coordinate on a body of the given
    /// radius.
    pub fn distance_to(&self, other: &Self, radius_km: f64) -> f64 {
        haversine_distance(self, other, radius_km)
    }
}

/// Great-circle distance between two coordinates using the haversine formula.
///
/// The atan2 form stays numerically stable near the poles and across the
/// antimeridian, where the arccos variant loses precision.
pub fn haversine_distance(from: &Coordinate, to: &Coordinate, radius_km: f64) -> f64 {
    let lat1 = from.lat_deg.to_radians();
    let lon1 = from.lon_deg.to_radians();
    let lat2 = to.lat_deg.to_radians();
    let lon2 = to.lon_deg.to_radians();
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    radius_km * c
}

/// Weight of a geodesic connection: surface distance plus a hazard penalty.
///
/// The penalty covers slopes, boulders, and other obstacles along the
/// connection; callers must keep it non-negative.
pub fn geodesic_weight(from: &Coordinate, to: &Coordinate, radius_km: f64, extra_km: f64) -> f64 {
    haversine_distance(from, to, radius_km) + extra_km
}
