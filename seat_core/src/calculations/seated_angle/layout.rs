//! Bolt layout on the vertical leg of the seat angle.
//!
//! Bolts run in one or two horizontal rows across the angle length. Gauge is
//! the spacing along a row, pitch the spacing between rows.
//!
//! ## Policy for excessive gauge
//!
//! When the gauge exceeds the maximum spacing, the edge distance is held at
//! its minimum and columns are added until the gauge fits. Widening the edge
//! distance with the bolt count fixed would also be valid; this module does
//! not do that.
//!
//! Gauge is rounded up to whole millimetres, so the edge distance actually
//! left at the ends of a row, `(L - (n - 1) g) / 2`, can come out below the
//! adopted minimum. The provided value is what gets checked.

use serde::{Deserialize, Serialize};

use super::bolts::BoltDesign;
use super::params::ResolvedParameters;
use super::round_to;
use crate::diagnostics::{Check, Diagnostics};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltLayout {
    /// Length of the seat angle along the beam width (mm)
    pub angle_length_mm: f64,
    /// Angle length less two edge distances (mm)
    pub available_length_mm: f64,

    pub rows: u32,
    /// Bolts per row
    pub columns: u32,

    pub gauge_mm: f64,
    /// Zero for a single row
    pub pitch_mm: f64,
    /// Edge distance left at each end of a row after rounding the gauge (mm)
    pub edge_distance_provided_mm: f64,

    pub bolts_provided: u32,
    /// bolts_provided × bolt value, to 0.1 kN
    pub group_capacity_kn: f64,

    pub gauge_ok: bool,
    pub pitch_ok: bool,
    /// Edge and end distances within [min, max]
    pub edge_ok: bool,
}

impl BoltLayout {
    pub fn is_ok(&self) -> bool {
        self.gauge_ok && self.pitch_ok && self.edge_ok
    }
}

/// Length of the seat angle.
///
/// Against a column flange the angle is as wide as the narrower flange.
/// Inside a web (column web, or supporting beam web) it must also fit
/// between the root fillets of the supporting member, less a root clearance.
pub fn seat_angle_length_mm(params: &ResolvedParameters) -> f64 {
    let beam_width = params.beam.flange_width_mm;
    let length = if params.connectivity.is_web_connected() {
        let limiting = params.column.clear_web_depth_mm() - params.prefs.root_clearance_mm;
        beam_width.min(limiting)
    } else {
        beam_width.min(params.column.flange_width_mm)
    };
    length.ceil()
}

/// Gauge for `columns` bolts across `available_mm`. `columns` must be >= 2.
fn gauge_for(available_mm: f64, columns: u32) -> f64 {
    debug_assert!(columns >= 2);
    (available_mm / f64::from(columns - 1)).ceil()
}

/// Choose rows, columns, gauge and pitch for the required bolts.
///
/// Spacing violations are recorded in `diagnostics` and flagged on the
/// layout; they never abort the design.
pub fn resolve_layout(
    params: &ResolvedParameters,
    bolts: &BoltDesign,
    angle_length_mm: f64,
    diagnostics: &mut Diagnostics,
) -> BoltLayout {
    let limits = &bolts.limits;
    let available_mm = angle_length_mm - 2.0 * bolts.edge_distance_mm;

    let mut rows = 1;
    let mut columns = bolts.bolts_required.max(2);
    let mut gauge_mm = gauge_for(available_mm, columns);
    let mut gauge_ok = true;

    if gauge_mm < limits.min_gauge_mm {
        rows = 2;
        columns = bolts.bolts_required.div_ceil(2).max(2);
        gauge_mm = gauge_for(available_mm, columns);
        if gauge_mm < limits.min_gauge_mm {
            gauge_ok = false;
            diagnostics.violation(
                Check::BoltGauge,
                "Cl 10.2.2",
                "Bolt gauge is less than minimum gauge length",
            );
            diagnostics.warning(
                Check::BoltGauge,
                format!("Bolt gauge should be more than {:.2} mm", limits.min_gauge_mm),
            );
            diagnostics.warning(
                Check::BoltGauge,
                format!("Maximum gauge length allowed is {:.2} mm", limits.max_spacing_mm),
            );
            diagnostics.info(
                Check::BoltGauge,
                "Select bolt with higher grade/diameter to reduce number of bolts",
            );
        }
    }

    if gauge_mm > limits.max_spacing_mm {
        // whole millimetres not above the limit, so the recomputed gauge fits
        let capped = limits.max_spacing_mm.floor();
        columns = (((available_mm / capped) + 1.0).ceil() as u32)
            .max(bolts.bolts_required.div_ceil(rows))
            .max(2);
        gauge_mm = gauge_for(available_mm, columns);
        diagnostics.debug(
            Check::BoltGauge,
            format!(
                "Gauge capped at {:.0} mm: {} bolts per row at {:.0} mm",
                capped, columns, gauge_mm
            ),
        );
    }

    let bolts_provided = rows * columns;
    let group_capacity_kn = round_to(f64::from(bolts_provided) * bolts.bolt_value_kn, 1);

    let angle = &params.angle;
    let row_spacing = angle.long_leg_mm
        - bolts.end_distance_mm
        - angle.thickness_mm
        - angle.root_radius_mm
        - params.prefs.root_clearance_mm;
    let pitch_mm = (f64::from(rows - 1) * row_spacing).ceil();

    let mut pitch_ok = true;
    if rows == 2 && pitch_mm < limits.min_pitch_mm {
        pitch_ok = false;
        diagnostics.violation(
            Check::BoltPitch,
            "Cl 10.2.2",
            "Bolt pitch provided is less than minimum pitch",
        );
        diagnostics.warning(
            Check::BoltPitch,
            format!("Bolt pitch should be more than {:.2} mm", limits.min_pitch_mm),
        );
        diagnostics.info(Check::BoltPitch, "Select angle with longer vertical leg OR");
        diagnostics.info(
            Check::BoltPitch,
            "Select bolt with higher grade/diameter to reduce number of bolts",
        );
    }

    if rows == 2 && pitch_mm > limits.max_spacing_mm {
        pitch_ok = false;
        diagnostics.violation(
            Check::BoltPitch,
            "Cl 10.2.3",
            "Bolt pitch provided is more than maximum pitch",
        );
        diagnostics.warning(
            Check::BoltPitch,
            format!("Bolt pitch should be less than {:.2} mm", limits.max_spacing_mm),
        );
        diagnostics.info(Check::BoltPitch, "Select angle with shorter vertical leg");
    }

    let edge_distance_provided_mm = (angle_length_mm - f64::from(columns - 1) * gauge_mm) / 2.0;
    let mut edge_ok = true;
    if edge_distance_provided_mm < limits.min_edge_distance_mm - 1e-9 {
        edge_ok = false;
        diagnostics.violation(
            Check::BoltEdgeDistance,
            "Cl 10.2.4.2",
            format!(
                "Edge distance left after rounding the gauge is {:.1} mm, less than the minimum {:.1} mm",
                edge_distance_provided_mm, limits.min_edge_distance_mm
            ),
        );
        diagnostics.info(Check::BoltEdgeDistance, "Change the number of bolts per row or the angle length");
    }
    if edge_distance_provided_mm > limits.max_edge_distance_mm {
        edge_ok = false;
        diagnostics.violation(
            Check::BoltEdgeDistance,
            "Cl 10.2.4.3",
            format!(
                "Edge distance {:.1} mm is more than maximum edge distance {:.1} mm",
                edge_distance_provided_mm, limits.max_edge_distance_mm
            ),
        );
    }
    if bolts.end_distance_mm > limits.max_edge_distance_mm {
        edge_ok = false;
        diagnostics.violation(
            Check::BoltEdgeDistance,
            "Cl 10.2.4.3",
            format!(
                "End distance {:.1} mm is more than maximum edge distance {:.1} mm",
                bolts.end_distance_mm, limits.max_edge_distance_mm
            ),
        );
    }
    if !edge_ok && edge_distance_provided_mm >= limits.min_edge_distance_mm - 1e-9 {
        diagnostics.info(
            Check::BoltEdgeDistance,
            "Select thicker seat angle or supporting member to raise the maximum edge distance",
        );
    }

    BoltLayout {
        angle_length_mm,
        available_length_mm: available_mm,
        rows,
        columns,
        gauge_mm,
        pitch_mm,
        edge_distance_provided_mm,
        bolts_provided,
        group_capacity_kn,
        gauge_ok,
        pitch_ok,
        edge_ok,
    }
}
