//! Datum-to-datum conversion routed through GCJ02 as the hub space.
//!
//! GCJ02 sits between WGS84 and BD09 in the offset chain, so every supported
//! pair is the composition of at most one step into GCJ02 and one step out
//! of it. Adding a datum means adding one leg, not a full conversion matrix.

use crate::coord::LatLon;
use crate::datum::bd09::{bd09_to_gcj02, gcj02_to_bd09};
use crate::datum::gcj02::{gcj02_to_wgs84, wgs84_to_gcj02};
use crate::datum::Datum;

/// A datum-to-datum converter for a fixed source/destination pair.
#[derive(Clone, Copy, Debug)]
pub struct Converter {
    src: Datum,
    dst: Datum,
}

impl Converter {
    pub fn new(src: Datum, dst: Datum) -> Self {
        Self { src, dst }
    }

    /// Convert a single coordinate from the source to the destination datum.
    ///
    /// A same-datum pair is exact identity, never a forward/inverse round
    /// trip through the hub.
    pub fn convert(&self, p: LatLon) -> LatLon {
        if self.src == self.dst {
            return p;
        }

        // Step 1: source datum → GCJ02
        let hub = match self.src {
            Datum::Wgs84 => wgs84_to_gcj02(p),
            Datum::Gcj02 => p,
            Datum::Bd09 => bd09_to_gcj02(p),
        };

        // Step 2: GCJ02 → destination datum
        match self.dst {
            Datum::Wgs84 => gcj02_to_wgs84(hub),
            Datum::Gcj02 => hub,
            Datum::Bd09 => gcj02_to_bd09(hub),
        }
    }

    /// Convert a batch of coordinates in place.
    pub fn convert_batch(&self, pts: &mut [LatLon]) {
        for p in pts.iter_mut() {
            *p = self.convert(*p);
        }
    }
}
