//! Spherical-Earth helpers for placing the resize handle of a geofence.
//!
//! The handle of a circle with center `C` and radius `r` sits on the great
//! circle leaving `C` at [`RADIUS_BEARING_DEGREES`] (due east), `r` meters
//! away. [`to_radius_lat_lng`] and [`to_radius_meters`] are inverse to each
//! other along that bearing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean Earth radius (IUGG), meters.
pub const EARTH_RADIUS_M: f64 = 6_371_009.0;

/// Bearing along which the resize handle is placed.
pub const RADIUS_BEARING_DEGREES: f64 = 90.0;

/// Largest radius a handle can stand for: past the antipode the great circle
/// comes back towards the center and the distance shrinks again.
pub const MAX_RADIUS_M: f64 = std::f64::consts::PI * EARTH_RADIUS_M;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    /// Latitude is clamped to `[-90, 90]`, longitude wrapped to `[-180, 180)`.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: clamp_lat(latitude),
            longitude: wrap_lng(longitude),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lat/lng: ({},{})", self.latitude, self.longitude)
    }
}

pub fn clamp_lat(value: f64) -> f64 {
    value.max(-90.0).min(90.0)
}

pub fn wrap_lng(value: f64) -> f64 {
    if (-180.0..180.0).contains(&value) {
        return value;
    }
    (value + 180.0).rem_euclid(360.0) - 180.0
}

/// Haversine great-circle distance in meters.
pub fn distance_meters(from: LatLng, to: LatLng) -> f64 {
    let dlat = (to.latitude - from.latitude).to_radians();
    let dlng = (to.longitude - from.longitude).to_radians();
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let a = (dlat / 2.0).sin().powi(2) + (dlng / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).max(0.0).sqrt());
    EARTH_RADIUS_M * c
}

/// Forward azimuth from `from` towards `to`, degrees in `[0, 360)`.
pub fn initial_bearing_degrees(from: LatLng, to: LatLng) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let dlng = (to.longitude - from.longitude).to_radians();
    let y = dlng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlng.cos();
    let bearing = y.atan2(x).to_degrees().rem_euclid(360.0);
    if bearing >= 360.0 { 0.0 } else { bearing }
}

/// Point reached by travelling `distance_m` from `origin` on the great circle
/// with initial bearing `bearing_deg`.
pub fn destination(origin: LatLng, bearing_deg: f64, distance_m: f64) -> LatLng {
    let angular = distance_m / EARTH_RADIUS_M;
    let bearing = bearing_deg.to_radians();
    let lat1 = origin.latitude.to_radians();
    let lng1 = origin.longitude.to_radians();

    let sin_lat2 = lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
    let lng2 = lng1
        + (bearing.sin() * angular.sin() * lat1.cos()).atan2(angular.cos() - lat1.sin() * sin_lat2);

    LatLng::new(lat2.to_degrees(), lng2.to_degrees())
}

/// Position of the resize handle for a circle of `radius_m` around `center`.
pub fn to_radius_lat_lng(center: LatLng, radius_m: f64) -> LatLng {
    destination(center, RADIUS_BEARING_DEGREES, radius_m)
}

/// Finite, positive and no longer than [`MAX_RADIUS_M`].
pub fn is_valid_radius(radius_m: f64) -> bool {
    radius_m.is_finite() && radius_m > 0.0 && radius_m <= MAX_RADIUS_M
}

/// Radius implied by a resize handle at `point`.
pub fn to_radius_meters(center: LatLng, point: LatLng) -> f64 {
    distance_meters(center, point)
}
