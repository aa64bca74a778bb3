//! GCJ02 ↔ BD09 polar offset transform, plus the WGS84 compositions.
//!
//! Forward (GCJ02 → BD09), with x = lon and y = lat:
//!   z = √(x² + y²) + 0.00002·sin(y·X_PI)
//!   θ = atan2(y, x) + 0.000003·cos(x·X_PI)
//!   bd = (z·sin θ + 0.006, z·cos θ + 0.0065)
//!
//! Inverse: subtract the fixed offsets first, then the same transform with
//! the correction terms negated. Unlike the GCJ02 leg this inverse is
//! near-exact; round trips stay within ~1e-6 degrees.

use crate::coord::LatLon;
use crate::datum::common::X_PI;
use crate::datum::gcj02::{gcj02_to_wgs84, wgs84_to_gcj02};

/// Shift a GCJ02 coordinate into BD09.
pub fn gcj02_to_bd09(p: LatLon) -> LatLon {
    let x = p.lon;
    let y = p.lat;
    let z = (x * x + y * y).sqrt() + 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) + 0.000003 * (x * X_PI).cos();
    LatLon::new(z * theta.sin() + 0.006, z * theta.cos() + 0.0065)
}

/// Shift a BD09 coordinate back to GCJ02.
pub fn bd09_to_gcj02(p: LatLon) -> LatLon {
    let x = p.lon - 0.0065;
    let y = p.lat - 0.006;
    let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();
    LatLon::new(z * theta.sin(), z * theta.cos())
}

/// WGS84 → BD09 through the GCJ02 intermediate space.
pub fn wgs84_to_bd09(p: LatLon) -> LatLon {
    gcj02_to_bd09(wgs84_to_gcj02(p))
}

/// BD09 → WGS84 through the GCJ02 intermediate space.
pub fn bd09_to_wgs84(p: LatLon) -> LatLon {
    gcj02_to_wgs84(bd09_to_gcj02(p))
}
