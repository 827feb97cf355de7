//! # Seated Angle Connection (IS 800:2007)
//!
//! A beam end rests on the outstanding leg of an angle bolted to its support
//! (column flange, column web, or the web of a supporting beam). A light top
//! angle restrains the beam laterally.
//!
//! The check runs as a fixed pipeline, each stage a pure function:
//!
//! 1. [`params::resolve`] - validate input, look up sections
//! 2. [`bolts::design_bolts`] - bolt capacities and count
//! 3. [`layout::resolve_layout`] - rows, gauge and pitch on the vertical leg
//! 4. [`seat::check_seat`] - bearing length, leg shear and moment, beam shear
//!
//! Every check runs even when an earlier one fails, so a single call reports
//! all violated clauses.
//!
//! ## Example
//!
//! ```rust
//! use seat_core::calculations::seated_angle::{check, SeatedAngleInput};
//! use seat_core::preferences::DesignPreferences;
//! use seat_core::sections::builtin_is_sections;
//!
//! let input: SeatedAngleInput = serde_json::from_str(r#"{
//!     "member": {
//!         "connectivity": "Column flange-Beam web",
//!         "beam_section": "MB 300",
//!         "column_section": "SC 250",
//!         "fu_mpa": 410.0,
//!         "fy_mpa": 250.0
//!     },
//!     "load": { "shear_force_kn": 50.0 },
//!     "bolt": { "diameter_mm": 20.0, "grade": 4.6 },
//!     "angle": { "angle_section": "ISA 150X115X10" }
//! }"#).unwrap();
//!
//! let result = check(&input, &DesignPreferences::default(), builtin_is_sections()).unwrap();
//! assert!(result.bolt.bolts_provided >= result.bolt.bolts_required);
//! ```

pub mod bolts;
pub mod input;
pub mod layout;
pub mod params;
pub mod result;
pub mod seat;
pub mod top_angle;

pub use bolts::{design_bolts, BoltDesign};
pub use input::{AngleInput, BoltInput, BoltType, Connectivity, LoadInput, MemberInput, SeatedAngleInput};
pub use layout::{resolve_layout, seat_angle_length_mm, BoltLayout};
pub use params::{resolve, ResolvedParameters, SectionSummary};
pub use result::{BoltOutput, SeatAngleOutput, SeatedAngleResult};
pub use seat::{check_seat, SeatChecks};
pub use top_angle::{select_top_angle, TopAngle};

use crate::diagnostics::{Check, Diagnostics, Level};
use crate::errors::CalcResult;
use crate::preferences::DesignPreferences;
use crate::sections::SectionProvider;

/// Round half away from zero to `places` decimals
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Check a seated angle connection.
///
/// # Returns
///
/// * `Ok(SeatedAngleResult)` - every check ran; see `safe` and `diagnostics`
/// * `Err(CalcError)` - invalid input or a section missing from `provider`
///
/// Clause violations are never errors.
pub fn check(
    input: &SeatedAngleInput,
    prefs: &DesignPreferences,
    provider: &dyn SectionProvider,
) -> CalcResult<SeatedAngleResult> {
    let params = resolve(input, prefs, provider)?;
    log::debug!(
        target: "seat_core",
        "Checking {} seat: beam {}, support {}, angle {}, V = {} kN",
        params.connectivity,
        params.beam.designation,
        params.column.designation,
        params.angle.designation,
        params.shear_force_kn
    );

    let mut diagnostics = Diagnostics::new();
    if params.bolt_type == BoltType::Hsfg {
        diagnostics.info(
            Check::Summary,
            "HSFG bolts are checked as bearing type; slip resistance is not evaluated",
        );
    }

    let bolts = design_bolts(&params);
    let angle_length_mm = seat_angle_length_mm(&params);
    let layout = resolve_layout(&params, &bolts, angle_length_mm, &mut diagnostics);
    let seat = check_seat(&params, angle_length_mm, &mut diagnostics);

    Ok(assemble(&input.label, &params, &bolts, &layout, &seat, diagnostics))
}

/// Check several connections against the same preferences and sections.
///
/// Items are independent: one failing lookup does not affect the others.
pub fn check_all(
    inputs: &[SeatedAngleInput],
    prefs: &DesignPreferences,
    provider: &dyn SectionProvider,
) -> Vec<CalcResult<SeatedAngleResult>> {
    inputs.iter().map(|input| check(input, prefs, provider)).collect()
}

fn assemble(
    label: &str,
    params: &ResolvedParameters,
    bolts: &BoltDesign,
    layout: &BoltLayout,
    seat: &SeatChecks,
    mut diagnostics: Diagnostics,
) -> SeatedAngleResult {
    let safe = layout.is_ok() && seat.is_ok();

    if safe {
        diagnostics.info(Check::Summary, "The connection is safe");
    } else {
        diagnostics.push(Level::Error, Check::Summary, None, "Design of seated angle connection is unsafe");
    }
    diagnostics.debug(Check::Summary, "End of seated angle design");

    let seat_angle = SeatAngleOutput {
        length_mm: layout.angle_length_mm,
        moment_demand_knmm: seat.moment_demand.moment_knmm,
        moment_capacity_knmm: seat.moment_capacity.capacity_knmm,
        shear_demand_kn: params.shear_force_kn,
        shear_capacity_kn: seat.leg_shear_capacity_kn,
        beam_shear_strength_kn: seat.beam_shear_strength_kn,
        top_angle: params.top_angle.designation().to_string(),
        safe,
        bearing_length_mm: seat.bearing_length_mm,
        outstanding_leg_required_mm: seat.outstanding_leg_required_mm,
        high_shear: seat.moment_capacity.high_shear,
        moment_beta: seat.moment_capacity.beta,
    };

    let bolt = BoltOutput {
        shear_capacity_kn: bolts.shear_capacity_kn,
        bearing_capacity_kn: bolts.bearing_capacity_kn,
        bolt_value_kn: bolts.bolt_value_kn,
        group_capacity_kn: layout.group_capacity_kn,
        bolts_provided: layout.bolts_provided,
        bolts_required: bolts.bolts_required,
        rows: layout.rows,
        columns: layout.columns,
        pitch_mm: layout.pitch_mm,
        gauge_mm: layout.gauge_mm,
        end_distance_mm: bolts.end_distance_mm,
        edge_distance_mm: bolts.edge_distance_mm,
        edge_distance_provided_mm: layout.edge_distance_provided_mm,
        bolt_fu_mpa: params.bolt_fu_mpa,
        bolt_diameter_mm: params.bolt_diameter_mm,
        k_b: bolts.k_b,
        beam_web_thickness_mm: params.beam.web_thickness_mm,
        beam_fu_mpa: params.beam_fu_mpa,
        shear_force_kn: params.shear_force_kn,
        hole_diameter_mm: bolts.hole_diameter_mm,
    };

    SeatedAngleResult {
        label: label.to_string(),
        seat_angle,
        bolt,
        diagnostics: diagnostics.into_vec(),
        safe,
    }
}
