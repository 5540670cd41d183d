//! Human-readable result rows.
//!
//! This is the only place values are rounded.

use mv_core::round_to;
use mv_sizing::{DelugeValve, SizingResults};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub label: &'static str,
    pub value: String,
}

impl ReportRow {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStatus {
    Ok,
    Warn,
}

/// Deluge valve size as shown next to the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub text: String,
    pub status: BadgeStatus,
}

pub fn render_rows(r: &SizingResults) -> Vec<ReportRow> {
    vec![
        ReportRow::new("Total Area", format!("{} m²", round_to(r.area_m2, 2))),
        ReportRow::new(
            "Theoretical Flow",
            format!(
                "{} L/min ({} m³/h)",
                round_to(r.flow_lpm, 2),
                round_to(r.flow_m3h, 2)
            ),
        ),
        ReportRow::new("Nozzle Qty (incl. 5%)", format!("{} nos", r.nozzle_qty)),
        ReportRow::new(
            "LHS Cable Base",
            format!("{} m (even→ {} m)", r.lhs_base_m, r.lhs_even_m),
        ),
        ReportRow::new(
            "LHS Cable with 10%",
            format!("{} m", round_to(r.lhs_with_margin_m, 0)),
        ),
        ReportRow::new(
            "Flow per Nozzle",
            format!("{} L/min", round_to(r.flow_per_nozzle_lpm, 2)),
        ),
        ReportRow::new("K-Factor (calc)", format!("{}", round_to(r.k_calc, 2))),
        ReportRow::new("MVWS Nozzle Selected (K)", format!("K = {}", r.k_selected)),
        ReportRow::new(
            "Actual Flow (based on K)",
            format!(
                "{} L/min ({} m³/h)",
                round_to(r.actual_lpm, 2),
                round_to(r.actual_m3h, 2)
            ),
        ),
    ]
}

pub fn valve_badge(valve: &DelugeValve) -> Badge {
    Badge {
        text: valve.to_string(),
        status: if valve.is_found() {
            BadgeStatus::Ok
        } else {
            BadgeStatus::Warn
        },
    }
}

/// Plain-text table of rows followed by the valve badge.
pub fn render_text(r: &SizingResults) -> String {
    let rows = render_rows(r);
    let width = rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in &rows {
        out.push_str(&format!("  {:<width$}  {}\n", row.label, row.value));
    }

    let badge = valve_badge(&r.deluge_valve);
    let marker = match badge.status {
        BadgeStatus::Ok => "",
        BadgeStatus::Warn => "  (!)",
    };
    out.push_str(&format!(
        "\nDeluge Valve Size\n  Selected Size: {}{}\n",
        badge.text, marker
    ));
    out
}
