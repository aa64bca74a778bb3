//! Coordinate pair types.
//!
//! A [`LatLon`] is a latitude/longitude pair in decimal degrees. The pair is
//! kept together across every datum boundary; the transforms never treat the
//! two components as independent scalars. A [`Projected`] is a planar (x, y)
//! pair in metres produced by a Mercator projection.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Geographic coordinate in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// NaN-shaped sentinel for invalid input. Callers check with
    /// [`LatLon::is_finite`] instead of matching on an error.
    pub fn invalid() -> Self {
        Self {
            lat: f64::NAN,
            lon: f64::NAN,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

impl FromStr for LatLon {
    type Err = ParseError;

    /// Parse a `"lat,lon"` pair.
    ///
    /// This is a thin shim over the structured API; the conversion functions
    /// themselves only accept `LatLon`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| ParseError::InvalidCoordinate(s.into()))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidCoordinate(s.into()))?;
        let lon = lon
            .trim()
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidCoordinate(s.into()))?;
        Ok(Self { lat, lon })
    }
}

impl From<(f64, f64)> for LatLon {
    /// Build from a `(lat, lon)` tuple.
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

/// Planar Mercator coordinate in metres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
}

impl Projected {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// NaN-shaped sentinel for invalid input.
    pub fn invalid() -> Self {
        Self {
            x: f64::NAN,
            y: f64::NAN,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
