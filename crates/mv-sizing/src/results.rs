//! Derived sizing quantities.

use mv_core::units::{Area, Length, VolumeRate, lpm, m, m2, m3ph};
use serde::{Deserialize, Serialize};

use crate::catalog::DelugeValve;

/// Everything one `compute` call derives, at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingResults {
    /// Protected belt area (m²)
    pub area_m2: f64,
    /// Theoretical water demand at design density (L/min)
    pub flow_lpm: f64,
    /// Theoretical water demand (m³/h)
    pub flow_m3h: f64,
    /// Nozzle locations along the conveyor
    pub nozzle_runs: f64,
    /// Nozzles including the 5% margin, rounded up to even
    pub nozzle_qty: u64,
    /// LHS cable before rounding (m)
    pub lhs_base_m: f64,
    /// LHS cable rounded up to even (m)
    pub lhs_even_m: f64,
    /// LHS cable with 10% margin (m), not rounded
    pub lhs_with_margin_m: f64,
    pub flow_per_nozzle_lpm: f64,
    /// Required K-factor at the working pressure
    pub k_calc: f64,
    /// Catalog K-factor actually specified
    pub k_selected: u32,
    /// Discharge with the selected nozzles (L/min)
    pub actual_lpm: f64,
    /// Discharge with the selected nozzles (m³/h)
    pub actual_m3h: f64,
    pub deluge_valve: DelugeValve,
}

impl SizingResults {
    pub fn area(&self) -> Area {
        m2(self.area_m2)
    }

    pub fn theoretical_flow(&self) -> VolumeRate {
        lpm(self.flow_lpm)
    }

    pub fn actual_flow(&self) -> VolumeRate {
        m3ph(self.actual_m3h)
    }

    pub fn flow_per_nozzle(&self) -> VolumeRate {
        lpm(self.flow_per_nozzle_lpm)
    }

    pub fn lhs_cable(&self) -> Length {
        m(self.lhs_with_margin_m)
    }
}
