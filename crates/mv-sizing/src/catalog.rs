//! Fixed equipment catalogs: nozzle K-factor ratings and deluge valve sizes.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Commercially available nozzle K-factors (L/min/bar^0.5), ascending.
pub const K_FACTORS: [u32; 9] = [18, 22, 26, 30, 34, 41, 51, 64, 79];

/// Rating used once the required K exceeds every entry of [`K_FACTORS`].
pub const K_FACTOR_OVERFLOW: u32 = 91;

/// Flow window (m³/h) covered by the valve catalog, inclusive on both ends.
pub const VALVE_FLOW_RANGE_M3H: (f64, f64) = (10.0, 501.0);

/// Valve nominal sizes keyed by their minimum flow (m³/h), largest first.
pub const VALVE_SIZES_MM: [(f64, u32); 4] = [(201.0, 150), (101.0, 100), (51.0, 80), (10.0, 50)];

/// Smallest catalog K-factor that is at least `k`.
pub fn k_bucket(k: f64) -> u32 {
    K_FACTORS
        .into_iter()
        .find(|&rating| k <= f64::from(rating))
        .unwrap_or(K_FACTOR_OVERFLOW)
}

/// Deluge valve selection for a total actual flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DelugeValve {
    /// Nominal valve size in millimetres
    Selected { size_mm: u32 },
    /// Flow outside the catalog range
    NotFound,
}

impl DelugeValve {
    pub fn size_mm(&self) -> Option<u32> {
        match self {
            Self::Selected { size_mm } => Some(*size_mm),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Selected { .. })
    }
}

impl fmt::Display for DelugeValve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selected { size_mm } => write!(f, "{size_mm} mm"),
            Self::NotFound => write!(f, "Not Found"),
        }
    }
}

/// Pick the deluge valve for `actual_m3h`.
pub fn select_deluge_valve(actual_m3h: f64) -> DelugeValve {
    let (lo, hi) = VALVE_FLOW_RANGE_M3H;
    if !(lo..=hi).contains(&actual_m3h) {
        return DelugeValve::NotFound;
    }
    VALVE_SIZES_MM
        .into_iter()
        .find(|&(min_m3h, _)| actual_m3h >= min_m3h)
        .map_or(DelugeValve::NotFound, |(_, size_mm)| DelugeValve::Selected {
            size_mm,
        })
}
