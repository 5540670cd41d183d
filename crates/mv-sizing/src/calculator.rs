//! The sizing pass: normalize, then derive every quantity in order.

use mv_core::{Real, even_up, finite_or, floor_at_least};

use crate::catalog::{k_bucket, select_deluge_valve};
use crate::constants::*;
use crate::inputs::SizingInputs;
use crate::results::SizingResults;

/// Inputs after default substitution and clamping.
///
/// Counts are whole numbers but kept as `f64` so the formulas chain without
/// casts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedInputs {
    pub length_m: Real,
    pub width_m: Real,
    pub belt_count: Real,
    pub nozzle_spacing_m: Real,
    pub nozzles_per_location: Real,
    pub lhs_sides: Real,
    pub lhs_to_panel_m: Real,
    pub pressure_bar: Real,
}

/// Substitute `defaults` for non-finite values, then apply the domain minimums.
pub fn normalize(inputs: &SizingInputs, defaults: &SizingInputs) -> NormalizedInputs {
    let v = inputs.sanitized(defaults);
    NormalizedInputs {
        length_m: finite_or(v.length_m, 0.0),
        width_m: finite_or(v.width_m, 0.0),
        belt_count: floor_at_least(v.belt_count, MIN_BELT_COUNT),
        nozzle_spacing_m: v.nozzle_spacing_m.max(MIN_NOZZLE_SPACING_M),
        nozzles_per_location: floor_at_least(v.nozzles_per_location, MIN_NOZZLES_PER_LOCATION),
        lhs_sides: floor_at_least(v.lhs_sides, MIN_LHS_SIDES),
        lhs_to_panel_m: v.lhs_to_panel_m.max(MIN_LHS_TO_PANEL_M),
        pressure_bar: v.pressure_bar.max(MIN_PRESSURE_BAR),
    }
}

/// Size the deluge system, falling back to the standard defaults for any
/// non-finite input.
pub fn compute(inputs: &SizingInputs) -> SizingResults {
    compute_with_defaults(inputs, &SizingInputs::default())
}

/// Size the deluge system with caller-supplied fallbacks.
///
/// Never fails; out-of-range values are clamped before any formula runs.
pub fn compute_with_defaults(inputs: &SizingInputs, defaults: &SizingInputs) -> SizingResults {
    let n = normalize(inputs, defaults);

    let area_m2 = n.length_m * n.width_m * n.belt_count;
    let flow_lpm = area_m2 * DESIGN_DENSITY_LPM_PER_M2;
    let flow_m3h = flow_lpm * M3H_PER_LPM;

    let nozzle_runs = (n.length_m / n.nozzle_spacing_m).ceil();
    let nozzle_qty = even_up(nozzle_runs * n.nozzles_per_location * NOZZLE_MARGIN);

    let lhs_base_m = (n.length_m * n.lhs_sides).ceil() + n.lhs_to_panel_m;
    let lhs_even_m = even_up(lhs_base_m);
    let lhs_with_margin_m = lhs_even_m * LHS_CABLE_MARGIN;

    let flow_per_nozzle_lpm = if nozzle_qty > 0.0 {
        flow_lpm / nozzle_qty
    } else {
        0.0
    };
    let sqrt_p = n.pressure_bar.sqrt();
    let k_calc = flow_per_nozzle_lpm / sqrt_p;
    let k_selected = k_bucket(k_calc);

    let actual_lpm = f64::from(k_selected) * sqrt_p * nozzle_qty;
    let actual_m3h = actual_lpm * M3H_PER_LPM;

    SizingResults {
        area_m2,
        flow_lpm,
        flow_m3h,
        nozzle_runs,
        nozzle_qty: nozzle_qty as u64,
        lhs_base_m,
        lhs_even_m,
        lhs_with_margin_m,
        flow_per_nozzle_lpm,
        k_calc,
        k_selected,
        actual_lpm,
        actual_m3h,
        deluge_valve: select_deluge_valve(actual_m3h),
    }
}
