//! Conversion between the geographic datums used by Chinese web maps —
//! WGS84, GCJ02 ("Mars coordinates") and BD09 — plus spherical Mercator
//! projection onto the Web Mercator (EPSG:3857) and Baidu Mercator planes.
//!
//! Every operation is a stateless pure function of its numeric inputs.
//! Invalid numeric input never panics; it degenerates to NaN components the
//! caller checks with [`LatLon::is_finite`].
//!
//! ```
//! use coordtrans::{Converter, Datum, LatLon};
//!
//! let conv = Converter::new(Datum::Wgs84, Datum::Gcj02);
//! let p = conv.convert(LatLon::new(39.90750, 116.39723));
//! assert!(p.is_finite());
//! ```

pub mod coord;
pub mod datum;
pub mod error;
pub mod mercator;
pub mod pipeline;

pub use coord::{LatLon, Projected};
pub use datum::Datum;
pub use error::ParseError;
pub use pipeline::Converter;
