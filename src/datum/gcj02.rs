//! WGS84 ↔ GCJ02 ("Mars coordinates") offset transform.
//!
//! Forward:
//!   (lat, lon) → (lat + dLat, lon + dLon), with the deltas taken from the
//!   empirical series in [`common`] and scaled by the curvature of the
//!   reference ellipsoid at the input latitude.
//!
//! Inverse:
//!   approximate — computes the forward offset at the *input* point and
//!   returns `2·input − forward(input)`.
//!
//! The forward offset has no closed-form inverse, so a WGS84 → GCJ02 → WGS84
//! round trip lands within ~1e-4 degrees of the origin, not exactly on it.
//! Outside the China bounding box both directions are exact identity.

use std::f64::consts::PI;

use crate::coord::LatLon;
use crate::datum::common::{out_of_china, transform_lat, transform_lon, A, EE};

/// Shift a WGS84 coordinate into GCJ02.
pub fn wgs84_to_gcj02(p: LatLon) -> LatLon {
    if out_of_china(p.lat, p.lon) {
        return p;
    }
    let x = p.lon - 105.0;
    let y = p.lat - 35.0;
    let mut d_lat = transform_lat(x, y);
    let mut d_lon = transform_lon(x, y);
    let rad_lat = p.lat / 180.0 * PI;
    let mut magic = rad_lat.sin();
    magic = 1.0 - EE * magic * magic;
    let sqrt_magic = magic.sqrt();
    d_lat = (d_lat * 180.0) / ((A * (1.0 - EE)) / (magic * sqrt_magic) * PI);
    d_lon = (d_lon * 180.0) / (A / sqrt_magic * rad_lat.cos() * PI);
    LatLon::new(p.lat + d_lat, p.lon + d_lon)
}

/// Shift a GCJ02 coordinate back to WGS84 (approximate inverse).
pub fn gcj02_to_wgs84(p: LatLon) -> LatLon {
    let g = wgs84_to_gcj02(p);
    LatLon::new(2.0 * p.lat - g.lat, 2.0 * p.lon - g.lon)
}
