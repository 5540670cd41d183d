//! Raw calculator inputs and the field registry used by input sources.

use core::fmt;

use mv_core::units::{Length, Pressure, bar, m};
use mv_core::{Real, finite_or};
use serde::{Deserialize, Serialize};

/// Physical inputs for one conveyor section.
///
/// Values are stored as entered. Count-like fields are floored and clamped
/// only when the calculator normalizes them, so a saved snapshot keeps what
/// the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingInputs {
    /// Belt/conveyor length (m)
    pub length_m: Real,
    /// Belt width (m)
    pub width_m: Real,
    /// Number of parallel belts
    pub belt_count: Real,
    /// Spacing between nozzle locations along the length (m)
    pub nozzle_spacing_m: Real,
    /// Nozzles installed at each location
    pub nozzles_per_location: Real,
    /// Sides needing an LHS cable run per metre of length
    pub lhs_sides: Real,
    /// Extra cable from the conveyor to the control panel (m)
    pub lhs_to_panel_m: Real,
    /// Working pressure at the nozzle (bar)
    pub pressure_bar: Real,
}

impl Default for SizingInputs {
    fn default() -> Self {
        Self::from_fields(InputField::default_value)
    }
}

impl SizingInputs {
    /// Build inputs by asking `value` for every field.
    pub fn from_fields(mut value: impl FnMut(InputField) -> Real) -> Self {
        Self {
            length_m: value(InputField::Length),
            width_m: value(InputField::Width),
            belt_count: value(InputField::BeltCount),
            nozzle_spacing_m: value(InputField::NozzleSpacing),
            nozzles_per_location: value(InputField::NozzlesPerLocation),
            lhs_sides: value(InputField::LhsSides),
            lhs_to_panel_m: value(InputField::LhsToPanel),
            pressure_bar: value(InputField::Pressure),
        }
    }

    /// Replace every non-finite field with the matching field of `defaults`.
    pub fn sanitized(&self, defaults: &SizingInputs) -> SizingInputs {
        Self::from_fields(|field| finite_or(field.get(self), field.get(defaults)))
    }

    /// Set one field, returning the updated copy.
    pub fn with(mut self, field: InputField, value: Real) -> Self {
        field.set(&mut self, value);
        self
    }

    pub fn length(&self) -> Length {
        m(self.length_m)
    }

    pub fn pressure(&self) -> Pressure {
        bar(self.pressure_bar)
    }
}

/// One entry of the input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Length,
    Width,
    BeltCount,
    NozzleSpacing,
    NozzlesPerLocation,
    LhsSides,
    LhsToPanel,
    Pressure,
}

impl InputField {
    /// All fields, in form order.
    pub const ALL: [InputField; 8] = [
        InputField::Length,
        InputField::Width,
        InputField::BeltCount,
        InputField::NozzleSpacing,
        InputField::NozzlesPerLocation,
        InputField::LhsSides,
        InputField::LhsToPanel,
        InputField::Pressure,
    ];

    /// Serialized field name.
    pub fn key(self) -> &'static str {
        match self {
            Self::Length => "length_m",
            Self::Width => "width_m",
            Self::BeltCount => "belt_count",
            Self::NozzleSpacing => "nozzle_spacing_m",
            Self::NozzlesPerLocation => "nozzles_per_location",
            Self::LhsSides => "lhs_sides",
            Self::LhsToPanel => "lhs_to_panel_m",
            Self::Pressure => "pressure_bar",
        }
    }

    /// Worksheet-cell key used by share links and old browser snapshots.
    pub fn legacy_key(self) -> &'static str {
        match self {
            Self::Length => "B3_length_m",
            Self::Width => "C3_width_m",
            Self::BeltCount => "D3_belts",
            Self::NozzleSpacing => "C4_nozzleSpacing_m",
            Self::NozzlesPerLocation => "C5_nozzlesPerLocation",
            Self::LhsSides => "C6_lhsSides",
            Self::LhsToPanel => "C7_lhsToPanel_m",
            Self::Pressure => "C10_pressure_bar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Length => "Conveyor length",
            Self::Width => "Belt width",
            Self::BeltCount => "Number of belts",
            Self::NozzleSpacing => "Nozzle spacing",
            Self::NozzlesPerLocation => "Nozzles per location",
            Self::LhsSides => "LHS cable sides",
            Self::LhsToPanel => "LHS cable to panel",
            Self::Pressure => "Working pressure",
        }
    }

    pub fn unit(self) -> Option<&'static str> {
        match self {
            Self::Length | Self::Width | Self::NozzleSpacing | Self::LhsToPanel => Some("m"),
            Self::Pressure => Some("bar"),
            Self::BeltCount | Self::NozzlesPerLocation | Self::LhsSides => None,
        }
    }

    pub fn default_value(self) -> Real {
        match self {
            Self::Length => 172.0,
            Self::Width => 0.8,
            Self::BeltCount => 2.0,
            Self::NozzleSpacing => 3.0,
            Self::NozzlesPerLocation => 2.0,
            Self::LhsSides => 3.0,
            Self::LhsToPanel => 15.0,
            Self::Pressure => 2.1,
        }
    }

    /// Look a field up by either its key or its legacy key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == key || f.legacy_key() == key)
    }

    pub fn get(self, inputs: &SizingInputs) -> Real {
        match self {
            Self::Length => inputs.length_m,
            Self::Width => inputs.width_m,
            Self::BeltCount => inputs.belt_count,
            Self::NozzleSpacing => inputs.nozzle_spacing_m,
            Self::NozzlesPerLocation => inputs.nozzles_per_location,
            Self::LhsSides => inputs.lhs_sides,
            Self::LhsToPanel => inputs.lhs_to_panel_m,
            Self::Pressure => inputs.pressure_bar,
        }
    }

    pub fn set(self, inputs: &mut SizingInputs, value: Real) {
        let slot = match self {
            Self::Length => &mut inputs.length_m,
            Self::Width => &mut inputs.width_m,
            Self::BeltCount => &mut inputs.belt_count,
            Self::NozzleSpacing => &mut inputs.nozzle_spacing_m,
            Self::NozzlesPerLocation => &mut inputs.nozzles_per_location,
            Self::LhsSides => &mut inputs.lhs_sides,
            Self::LhsToPanel => &mut inputs.lhs_to_panel_m,
            Self::Pressure => &mut inputs.pressure_bar,
        };
        *slot = value;
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit() {
            Some(unit) => write!(f, "{} ({})", self.label(), unit),
            None => write!(f, "{}", self.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_section() {
        let d = SizingInputs::default();
        assert_eq!(d.length_m, 172.0);
        assert_eq!(d.width_m, 0.8);
        assert_eq!(d.belt_count, 2.0);
        assert_eq!(d.nozzle_spacing_m, 3.0);
        assert_eq!(d.nozzles_per_location, 2.0);
        assert_eq!(d.lhs_sides, 3.0);
        assert_eq!(d.lhs_to_panel_m, 15.0);
        assert_eq!(d.pressure_bar, 2.1);
    }

    #[test]
    fn get_set_cover_every_field() {
        let mut inputs = SizingInputs::default();
        for (i, field) in InputField::ALL.into_iter().enumerate() {
            field.set(&mut inputs, i as f64 + 100.0);
        }
        for (i, field) in InputField::ALL.into_iter().enumerate() {
            assert_eq!(field.get(&inputs), i as f64 + 100.0, "{field:?}");
        }
    }

    #[test]
    fn from_key_accepts_both_spellings() {
        assert_eq!(InputField::from_key("D3_belts"), Some(InputField::BeltCount));
        assert_eq!(InputField::from_key("belt_count"), Some(InputField::BeltCount));
        assert_eq!(
            InputField::from_key("C10_pressure_bar"),
            Some(InputField::Pressure)
        );
        assert_eq!(InputField::from_key("nope"), None);
    }

    #[test]
    fn sanitized_replaces_non_finite_only() {
        let raw = SizingInputs {
            length_m: f64::NAN,
            pressure_bar: f64::INFINITY,
            width_m: 0.0,
            ..SizingInputs::default()
        };
        let clean = raw.sanitized(&SizingInputs::default());
        assert_eq!(clean.length_m, 172.0);
        assert_eq!(clean.pressure_bar, 2.1);
        assert_eq!(clean.width_m, 0.0);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let inputs: SizingInputs = serde_json::from_str(r#"{"length_m": 50.0}"#).unwrap();
        assert_eq!(inputs.length_m, 50.0);
        assert_eq!(inputs.pressure_bar, 2.1);
    }

    #[test]
    fn display_includes_unit() {
        assert_eq!(InputField::Pressure.to_string(), "Working pressure (bar)");
        assert_eq!(InputField::BeltCount.to_string(), "Number of belts");
    }
}
