//! Datum conversion between WGS84, GCJ02 and BD09.
//!
//! GCJ02 is an offset of WGS84, and BD09 is a further offset of GCJ02, so
//! GCJ02 serves as the hub space: every supported pair is the composition of
//! at most one step into GCJ02 and one step out of it.

pub mod bd09;
pub mod common;
pub mod gcj02;

use std::str::FromStr;

use crate::error::ParseError;

/// Geodetic datums understood by the converter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Datum {
    /// Global satellite-positioning reference datum (EPSG:4326).
    Wgs84,
    /// "Mars coordinates" — the obfuscated datum mandated for maps of China.
    Gcj02,
    /// Baidu Maps' datum, a further offset applied on top of GCJ02.
    Bd09,
}

impl Datum {
    /// Parse from a string name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wgs84" => Some(Self::Wgs84),
            "gcj02" => Some(Self::Gcj02),
            "bd09" => Some(Self::Bd09),
            _ => None,
        }
    }
}

impl FromStr for Datum {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError::UnknownDatum(s.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Datum::from_name("wgs84"), Some(Datum::Wgs84));
        assert_eq!(Datum::from_name("GCJ02"), Some(Datum::Gcj02));
        assert_eq!(Datum::from_name("Bd09"), Some(Datum::Bd09));
        assert_eq!(Datum::from_name("bd09mc"), None);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "EPSG:4490".parse::<Datum>().unwrap_err();
        assert!(err.to_string().contains("EPSG:4490"));
    }
}
