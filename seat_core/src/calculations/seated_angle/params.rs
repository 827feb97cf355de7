//! Parameter resolution: raw input + section lookups -> typed numbers.

use serde::{Deserialize, Serialize};

use super::bolts::{bearing_coefficient, hole_diameter_mm, SpacingLimits};
use super::input::{BoltType, Connectivity, SeatedAngleInput};
use super::top_angle::{select_top_angle, TopAngle};
use crate::errors::{CalcError, CalcResult};
use crate::preferences::DesignPreferences;
use crate::sections::{AngleProperties, SectionProperties, SectionProvider};

/// Everything the design stages need, resolved once per check.
///
/// Angle and column steel are taken as the beam steel (same fy and fu).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParameters {
    pub connectivity: Connectivity,

    pub beam: SectionProperties,
    /// Supporting member: a column, or a beam for Beam-Beam connections
    pub column: SectionProperties,
    pub angle: AngleProperties,

    pub beam_fy_mpa: f64,
    pub beam_fu_mpa: f64,
    pub column_fy_mpa: f64,
    pub column_fu_mpa: f64,
    pub angle_fy_mpa: f64,
    pub angle_fu_mpa: f64,

    pub shear_force_kn: f64,

    pub bolt_diameter_mm: f64,
    pub bolt_type: BoltType,
    pub bolt_grade: f64,
    pub bolt_fu_mpa: f64,
    pub hole_diameter_mm: f64,

    pub prefs: DesignPreferences,

    /// Initial top angle recommendation
    pub top_angle: TopAngle,
}

/// Section records used by a check, for inspection and reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub beam: SectionProperties,
    pub column: SectionProperties,
    pub angle: AngleProperties,
}

impl ResolvedParameters {
    /// Section properties behind this check
    pub fn section_summary(&self) -> SectionSummary {
        SectionSummary {
            beam: self.beam.clone(),
            column: self.column.clone(),
            angle: self.angle.clone(),
        }
    }

    /// Thinner of the supporting flange and the angle leg; governs bolt
    /// bearing and spacing limits
    pub fn governing_thickness_mm(&self) -> f64 {
        self.column.flange_thickness_mm.min(self.angle.thickness_mm)
    }
}

/// Validate the input, look up sections and derive strengths.
///
/// Lookup failures propagate unchanged; nothing is defaulted.
pub fn resolve(
    input: &SeatedAngleInput,
    prefs: &DesignPreferences,
    provider: &dyn SectionProvider,
) -> CalcResult<ResolvedParameters> {
    input.validate()?;
    prefs.validate()?;

    let connectivity = input.member.connectivity;
    let beam = provider.beam(&input.member.beam_section)?;
    let column = match connectivity {
        Connectivity::BeamBeam => provider.beam(&input.member.column_section)?,
        Connectivity::ColumnWebBeamWeb | Connectivity::ColumnFlangeBeamWeb => {
            provider.column(&input.member.column_section)?
        }
    };
    let angle = provider.angle(&input.angle.angle_section)?;

    let hole_diameter_mm = hole_diameter_mm(input.bolt.diameter_mm, prefs)?;
    let top_angle = select_top_angle(beam.depth_mm, hole_diameter_mm);

    // A hole too large for the minimum pitch drives k_b, and with it every
    // bolt capacity, to zero or below
    let limits = SpacingLimits::compute(
        input.bolt.diameter_mm,
        hole_diameter_mm,
        prefs.edge_type.min_edge_multiplier(),
        column.flange_thickness_mm.min(angle.thickness_mm),
        input.member.fy_mpa,
    );
    let k_b = bearing_coefficient(
        limits.min_end_distance_mm,
        limits.min_pitch_mm,
        hole_diameter_mm,
        input.bolt_fu_mpa(),
        input.member.fu_mpa,
    );
    if k_b <= 0.0 {
        return Err(CalcError::invalid_input(
            "custom_hole_clearance_mm",
            format!("{}", hole_diameter_mm - input.bolt.diameter_mm),
            format!(
                "Hole diameter {} mm is too large for M{} bolts: bearing coefficient k_b = {:.4} at minimum pitch {} mm",
                hole_diameter_mm, input.bolt.diameter_mm, k_b, limits.min_pitch_mm
            ),
        ));
    }

    let fy = input.member.fy_mpa;
    let fu = input.member.fu_mpa;

    Ok(ResolvedParameters {
        connectivity,
        beam,
        column,
        angle,
        beam_fy_mpa: fy,
        beam_fu_mpa: fu,
        column_fy_mpa: fy,
        column_fu_mpa: fu,
        angle_fy_mpa: fy,
        angle_fu_mpa: fu,
        shear_force_kn: input.load.shear_force_kn,
        bolt_diameter_mm: input.bolt.diameter_mm,
        bolt_type: input.bolt.bolt_type,
        bolt_grade: input.bolt.grade,
        bolt_fu_mpa: input.bolt_fu_mpa(),
        hole_diameter_mm,
        prefs: prefs.clone(),
        top_angle,
    })
}
