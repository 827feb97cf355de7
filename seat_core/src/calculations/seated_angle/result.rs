//! Output records for a seated angle check.

use serde::{Deserialize, Serialize};

use crate::diagnostics::{Check, Diagnostic, Level};

/// Seat angle group of the output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatAngleOutput {
    /// Length of the seat angle along the beam width (mm)
    pub length_mm: f64,

    /// Moment at the root of the outstanding leg (kN·mm)
    pub moment_demand_knmm: f64,
    /// Moment capacity of the outstanding leg (kN·mm)
    pub moment_capacity_knmm: f64,

    /// Factored shear carried by the seat (kN)
    pub shear_demand_kn: f64,
    /// Shear capacity of the outstanding leg (kN)
    pub shear_capacity_kn: f64,

    /// Shear capacity of the supported beam web (kN)
    pub beam_shear_strength_kn: f64,

    /// Recommended top angle designation
    pub top_angle: String,

    pub safe: bool,

    // === Intermediate values ===
    /// Bearing length at the root of the beam web (mm)
    pub bearing_length_mm: f64,
    /// Outstanding leg needed: bearing length + clear gap (mm)
    pub outstanding_leg_required_mm: f64,
    /// V > 0.6 V_d on the outstanding leg
    pub high_shear: bool,
    /// Moment reduction factor β, zero under low shear
    pub moment_beta: f64,
}

/// Bolt group of the output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltOutput {
    pub shear_capacity_kn: f64,
    pub bearing_capacity_kn: f64,
    /// min(shear, bearing) per bolt
    pub bolt_value_kn: f64,
    /// bolts_provided × bolt value
    pub group_capacity_kn: f64,

    pub bolts_provided: u32,
    pub bolts_required: u32,
    pub rows: u32,
    pub columns: u32,

    pub pitch_mm: f64,
    pub gauge_mm: f64,
    pub end_distance_mm: f64,
    pub edge_distance_mm: f64,
    /// Edge distance left at the row ends after rounding the gauge
    pub edge_distance_provided_mm: f64,

    pub bolt_fu_mpa: f64,
    pub bolt_diameter_mm: f64,
    pub k_b: f64,

    pub beam_web_thickness_mm: f64,
    pub beam_fu_mpa: f64,
    pub shear_force_kn: f64,
    pub hole_diameter_mm: f64,
}

/// Result of a seated angle connection check.
///
/// `safe` is the conjunction of every check; `diagnostics` explains each
/// failure with the clause and a suggested remedy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatedAngleResult {
    /// Label copied from the input
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,

    pub seat_angle: SeatAngleOutput,
    pub bolt: BoltOutput,
    pub diagnostics: Vec<Diagnostic>,
    pub safe: bool,
}

impl SeatedAngleResult {
    /// Check if every clause is satisfied
    pub fn passes(&self) -> bool {
        self.safe
    }

    /// Error-level diagnostics, excluding the final summary line
    pub fn violations(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_violation())
    }

    /// Checks that failed, in the order they were run
    pub fn failed_checks(&self) -> Vec<Check> {
        let mut checks: Vec<Check> = Vec::new();
        for diagnostic in self.violations() {
            if !checks.contains(&diagnostic.check) {
                checks.push(diagnostic.check);
            }
        }
        checks
    }

    /// Diagnostics at or above `level` (Error is the most severe)
    pub fn diagnostics_at(&self, level: Level) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.level <= level)
    }
}
