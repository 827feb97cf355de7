//! # Design Preferences
//!
//! Code-level settings that apply to every connection checked with them:
//! partial safety factors, hole type, edge preparation and detailing
//! clearances. Defaults follow IS 800:2007.
//!
//! Preferences serialize to JSON and every field is optional on input, so a
//! file only needs the values it overrides:
//!
//! ```rust
//! use seat_core::preferences::{DesignPreferences, HoleType};
//!
//! let prefs: DesignPreferences = serde_json::from_str(r#"{ "hole_type": "Oversize" }"#).unwrap();
//! assert_eq!(prefs.hole_type, HoleType::Oversize);
//! assert_eq!(prefs.gamma_m0, 1.10);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Bolt hole type (IS 800 Table 19)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HoleType {
    #[default]
    Standard,
    Oversize,
}

/// Edge preparation, which sets the minimum edge distance multiplier
/// (IS 800 Cl 10.2.4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgeType {
    /// Rolled, machine-flame cut, sawn and planed edges (1.5 d0)
    RolledOrMachined,
    /// Sheared or hand flame cut edges (1.7 d0)
    #[default]
    ShearedOrHandFlameCut,
}

impl EdgeType {
    /// Multiplier applied to the hole diameter for min edge/end distance
    pub fn min_edge_multiplier(&self) -> f64 {
        match self {
            EdgeType::RolledOrMachined => 1.5,
            EdgeType::ShearedOrHandFlameCut => 1.7,
        }
    }
}

/// Design preferences for seated angle checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignPreferences {
    /// Partial safety factor for bolt resistance (γ_mb)
    pub gamma_mb: f64,

    /// Partial safety factor for yielding/buckling (γ_m0)
    pub gamma_m0: f64,

    /// Partial safety factor for ultimate stress (γ_m1)
    pub gamma_m1: f64,

    /// Standard or oversize holes
    pub hole_type: HoleType,

    /// Hole clearance override (mm); replaces the Table 19 value when set
    pub custom_hole_clearance_mm: Option<f64>,

    /// Edge preparation of the connected parts
    pub edge_type: EdgeType,

    /// Gap between beam end and support face: 5 mm clearance + 5 mm tolerance
    pub beam_col_clear_gap_mm: f64,

    /// Clearance of the bolt line from the root of the seat angle (mm)
    pub root_clearance_mm: f64,
}

impl Default for DesignPreferences {
    fn default() -> Self {
        DesignPreferences {
            gamma_mb: 1.25,
            gamma_m0: 1.10,
            gamma_m1: 1.25,
            hole_type: HoleType::Standard,
            custom_hole_clearance_mm: None,
            edge_type: EdgeType::ShearedOrHandFlameCut,
            beam_col_clear_gap_mm: 5.0 + 5.0,
            root_clearance_mm: 5.0,
        }
    }
}

impl DesignPreferences {
    /// Validate preference values.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("gamma_mb", self.gamma_mb),
            ("gamma_m0", self.gamma_m0),
            ("gamma_m1", self.gamma_m1),
        ] {
            if !value.is_finite() || value < 1.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Partial safety factor must be at least 1.0",
                ));
            }
        }
        if let Some(clearance) = self.custom_hole_clearance_mm {
            if !clearance.is_finite() || clearance < 0.0 {
                return Err(CalcError::invalid_input(
                    "custom_hole_clearance_mm",
                    clearance.to_string(),
                    "Hole clearance cannot be negative",
                ));
            }
        }
        if !self.beam_col_clear_gap_mm.is_finite() || self.beam_col_clear_gap_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "beam_col_clear_gap_mm",
                self.beam_col_clear_gap_mm.to_string(),
                "Clear gap cannot be negative",
            ));
        }
        if !self.root_clearance_mm.is_finite() || self.root_clearance_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "root_clearance_mm",
                self.root_clearance_mm.to_string(),
                "Root clearance cannot be negative",
            ));
        }
        Ok(())
    }

    /// Load preferences from a JSON file.
    pub fn load(path: &str) -> CalcResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path, e.to_string()))?;
        let prefs: DesignPreferences = serde_json::from_str(&text)?;
        prefs.validate()?;
        Ok(prefs)
    }
}
