//! Spherical Mercator projection — Web Mercator (EPSG:3857) and Baidu's
//! BD09 Mercator plane.
//!
//!   forward: x = lon·R_WEB/180, y = ln(tan((90 + lat)·π/360))·R_WEB/180
//!   inverse: lon = x/R_WEB·180, lat = (2·atan(exp((y/R_WEB·180)·π/180)) − π/2)·180/π
//!
//! Invalid numeric input never raises and never panics: it degenerates to
//! NaN components the caller checks explicitly. The upstream use is a live
//! map where an invalid point should silently disappear, not crash the
//! render loop. When the logarithm diverges toward the poles the y
//! component is NaN rather than an infinity.

use std::f64::consts::PI;

use crate::coord::{LatLon, Projected};

/// Half the projected world extent (metres): the x coordinate of lon = 180°.
pub const R_WEB: f64 = 20_037_508.34;

fn spherical_forward(p: LatLon) -> Projected {
    if !p.is_finite() {
        return Projected::invalid();
    }
    let x = p.lon * R_WEB / 180.0;
    let y_deg = ((90.0 + p.lat) * PI / 360.0).tan().ln() / (PI / 180.0);
    let y = y_deg * R_WEB / 180.0;
    Projected::new(x, if y.is_finite() { y } else { f64::NAN })
}

/// Project a WGS84 coordinate onto the Web Mercator plane (EPSG:3857).
pub fn to_web_mercator(p: LatLon) -> Projected {
    spherical_forward(p)
}

/// Project a BD09 coordinate onto Baidu's Mercator plane.
///
/// Same spherical projection as [`to_web_mercator`]; only the expected input
/// datum differs.
pub fn to_bd09_mercator(p: LatLon) -> Projected {
    spherical_forward(p)
}

/// Inverse projection from the Web Mercator plane.
///
/// Returns the NaN-shaped sentinel for non-finite input; callers check
/// [`LatLon::is_finite`] before use.
pub fn from_web_mercator(p: Projected) -> LatLon {
    if !p.is_finite() {
        return LatLon::invalid();
    }
    let lon = p.x / R_WEB * 180.0;
    let y_deg = p.y / R_WEB * 180.0;
    let lat = (2.0 * (y_deg * PI / 180.0).exp().atan() - PI / 2.0) * 180.0 / PI;
    LatLon::new(lat, lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_origin() {
        let m = to_web_mercator(LatLon::new(0.0, 0.0));
        assert_relative_eq!(m.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(m.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_antimeridian_reference() {
        // lon = 180° maps exactly onto the world-extent constant.
        let m = to_web_mercator(LatLon::new(0.0, 180.0));
        assert_relative_eq!(m.x, R_WEB, epsilon = 1e-6);
    }

    #[test]
    fn test_roundtrip() {
        let cases = [
            LatLon::new(0.0, 0.0),
            LatLon::new(39.90750, 116.39723), // Beijing
            LatLon::new(40.7484, -73.9857),   // NYC
            LatLon::new(35.6895, 139.6917),   // Tokyo
            LatLon::new(-33.8688, 151.2093),  // Sydney
            LatLon::new(84.9, 0.0),
            LatLon::new(-84.9, 0.0),
        ];
        for p in cases {
            let back = from_web_mercator(to_web_mercator(p));
            assert_relative_eq!(back.lat, p.lat, epsilon = 1e-9);
            assert_relative_eq!(back.lon, p.lon, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_beijing_reference() {
        let m = to_web_mercator(LatLon::new(39.90750, 116.39723));
        assert_relative_eq!(m.x, 12_957_280.37, epsilon = 0.01);
        assert_relative_eq!(m.y, 4_852_509.52, epsilon = 0.01);
    }

    #[test]
    fn test_pole_never_infinite() {
        // The divergent logarithm must surface as NaN, not ±∞.
        let south = to_web_mercator(LatLon::new(-90.0, 0.0));
        assert!(south.y.is_nan(), "y at south pole: {}", south.y);
        assert!(south.x.is_finite());

        let north = to_web_mercator(LatLon::new(90.0, 0.0));
        assert!(!north.y.is_infinite(), "y at north pole: {}", north.y);

        // Beyond the poles the tangent goes negative and the log is NaN.
        let beyond = to_web_mercator(LatLon::new(-95.0, 0.0));
        assert!(beyond.y.is_nan());
    }

    #[test]
    fn test_nan_input() {
        assert!(!to_web_mercator(LatLon::new(f64::NAN, 116.4)).is_finite());
        assert!(!to_web_mercator(LatLon::new(39.9, f64::INFINITY)).is_finite());
        assert!(!from_web_mercator(Projected::new(f64::NAN, 0.0)).is_finite());
        assert!(!from_web_mercator(Projected::invalid()).is_finite());
    }

    #[test]
    fn test_bd09_mercator_same_projection() {
        let p = LatLon::new(39.915243, 116.409847);
        assert_eq!(to_bd09_mercator(p), to_web_mercator(p));
    }
}
