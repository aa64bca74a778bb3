//! Shared constants and correction series for the datum offset math.
//!
//! The GCJ02 obfuscation adds a latitude/longitude delta computed from two
//! empirical polynomial-plus-sine series evaluated at
//! `(x = lon − 105, y = lat − 35)`, scaled by the curvature of the reference
//! ellipsoid at the input latitude. The literals below are the de facto
//! specification of the transform: every public reference implementation
//! carries them verbatim, and any deviation moves points visibly on a map.

use std::f64::consts::PI;

/// Semi-major axis of the reference ellipsoid (metres).
pub const A: f64 = 6_378_245.0;

/// First eccentricity squared of the reference ellipsoid.
pub const EE: f64 = 0.006_693_421_622_965_943_23;

/// π scaled by 3000/180, used by the BD09 polar transform.
pub const X_PI: f64 = PI * 3000.0 / 180.0;

/// Bounding box outside which no obfuscation offset is applied.
///
/// Points outside China are published unshifted, so the GCJ02/BD09 offset
/// transforms are exact identity there. This is a rule of the datum itself,
/// not an optimisation. NaN input compares false on every bound and falls
/// through to the offset math, where it propagates.
pub fn out_of_china(lat: f64, lon: f64) -> bool {
    lon < 72.004 || lon > 137.8347 || lat < 0.8293 || lat > 55.8271
}

/// Latitude correction series at `(x = lon − 105, y = lat − 35)`.
pub fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret =
        -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

/// Longitude correction series at `(x = lon − 105, y = lat − 35)`.
pub fn transform_lon(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}
