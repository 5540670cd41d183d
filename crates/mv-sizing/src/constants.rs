//! Design constants for conveyor deluge sizing.

/// Design application density (L/min per m² of belt).
pub const DESIGN_DENSITY_LPM_PER_M2: f64 = 10.2;

/// L/min -> m³/h.
pub const M3H_PER_LPM: f64 = 0.06;

/// Spare nozzles on top of the layout count (5%).
pub const NOZZLE_MARGIN: f64 = 1.05;

/// Extra LHS cable for terminations and routing (10%).
pub const LHS_CABLE_MARGIN: f64 = 1.1;

/// Smallest nozzle spacing used in the run count; avoids division by zero.
pub const MIN_NOZZLE_SPACING_M: f64 = 0.0001;

/// Smallest working pressure used under the square root.
pub const MIN_PRESSURE_BAR: f64 = 0.0001;

pub const MIN_BELT_COUNT: f64 = 1.0;
pub const MIN_NOZZLES_PER_LOCATION: f64 = 1.0;
pub const MIN_LHS_SIDES: f64 = 0.0;
pub const MIN_LHS_TO_PANEL_M: f64 = 0.0;
