//! Bolt design: hole size, detailing distances and bolt capacities
//! (IS 800:2007 Section 10).
//!
//! All distances are millimetres, capacities kilonewtons.

use serde::{Deserialize, Serialize};

use super::params::ResolvedParameters;
use super::round_to;
use crate::errors::{CalcError, CalcResult};
use crate::preferences::{DesignPreferences, HoleType};

/// Bolt diameters covered by IS 800 Table 19
pub const SUPPORTED_DIAMETERS_MM: [u32; 11] = [12, 14, 16, 18, 20, 22, 24, 27, 30, 33, 36];

/// Net tensile stress area as a fraction of the shank area
const THREAD_AREA_RATIO: f64 = 0.78;

/// Hole clearance (IS 800 Table 19).
///
/// A custom clearance in the preferences replaces the table value.
pub fn hole_clearance_mm(diameter_mm: f64, hole_type: HoleType, custom_mm: Option<f64>) -> CalcResult<f64> {
    let nominal = diameter_mm.round();
    let supported = (diameter_mm - nominal).abs() < 1e-9
        && SUPPORTED_DIAMETERS_MM.iter().any(|&d| f64::from(d) == nominal);
    if !supported {
        return Err(CalcError::invalid_input(
            "bolt.diameter_mm",
            diameter_mm.to_string(),
            "Bolt diameter must be one of 12, 14, 16, 18, 20, 22, 24, 27, 30, 33, 36 mm",
        ));
    }
    if let Some(custom) = custom_mm {
        return Ok(custom);
    }
    let d = nominal as u32;
    let clearance = match hole_type {
        HoleType::Standard => match d {
            12 | 14 => 1.0,
            16..=24 => 2.0,
            _ => 3.0,
        },
        HoleType::Oversize => match d {
            12 | 14 => 3.0,
            16..=22 => 4.0,
            24 => 6.0,
            _ => 8.0,
        },
    };
    Ok(clearance)
}

/// Hole diameter d0 = d + clearance
pub fn hole_diameter_mm(diameter_mm: f64, prefs: &DesignPreferences) -> CalcResult<f64> {
    let clearance = hole_clearance_mm(diameter_mm, prefs.hole_type, prefs.custom_hole_clearance_mm)?;
    Ok(diameter_mm + clearance)
}

/// Detailing limits (IS 800 Cl 10.2)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingLimits {
    /// 2.5 d (Cl 10.2.2)
    pub min_pitch_mm: f64,
    /// 2.5 d (Cl 10.2.2)
    pub min_gauge_mm: f64,
    /// multiplier × d0, rounded up (Cl 10.2.4.2)
    pub min_end_distance_mm: f64,
    /// multiplier × d0, rounded up (Cl 10.2.4.2)
    pub min_edge_distance_mm: f64,
    /// min(100 + 4t, 200) for the exposed edge of the connected plies
    pub max_spacing_mm: f64,
    /// 12 t ε with ε = √(250/fy) (Cl 10.2.4.3)
    pub max_edge_distance_mm: f64,
}

impl SpacingLimits {
    pub fn compute(
        diameter_mm: f64,
        hole_diameter_mm: f64,
        min_edge_multiplier: f64,
        thickness_mm: f64,
        fy_mpa: f64,
    ) -> Self {
        let min_edge = (min_edge_multiplier * hole_diameter_mm).ceil();
        SpacingLimits {
            min_pitch_mm: 2.5 * diameter_mm,
            min_gauge_mm: 2.5 * diameter_mm,
            min_end_distance_mm: min_edge,
            min_edge_distance_mm: min_edge,
            max_spacing_mm: (100.0 + 4.0 * thickness_mm).min(200.0),
            max_edge_distance_mm: 12.0 * thickness_mm * (250.0 / fy_mpa).sqrt(),
        }
    }
}

/// Bearing coefficient k_b (Cl 10.3.4):
/// min(e/3d0, p/3d0 - 0.25, fub/fu, 1.0)
pub fn bearing_coefficient(
    end_distance_mm: f64,
    pitch_mm: f64,
    hole_diameter_mm: f64,
    bolt_fu_mpa: f64,
    plate_fu_mpa: f64,
) -> f64 {
    let three_d0 = 3.0 * hole_diameter_mm;
    (end_distance_mm / three_d0)
        .min(pitch_mm / three_d0 - 0.25)
        .min(bolt_fu_mpa / plate_fu_mpa)
        .min(1.0)
}

/// Design shear strength of one bolt, single shear plane through the
/// threads (Cl 10.3.3), kN
pub fn bolt_shear_capacity_kn(diameter_mm: f64, bolt_fu_mpa: f64, gamma_mb: f64) -> f64 {
    let net_area = THREAD_AREA_RATIO * std::f64::consts::PI * diameter_mm.powi(2) / 4.0;
    bolt_fu_mpa * net_area / (3f64.sqrt() * gamma_mb) / 1000.0
}

/// Design bearing strength of one bolt on the governing ply (Cl 10.3.4), kN
pub fn bolt_bearing_capacity_kn(
    diameter_mm: f64,
    thickness_mm: f64,
    plate_fu_mpa: f64,
    k_b: f64,
    gamma_mb: f64,
) -> f64 {
    2.5 * k_b * diameter_mm * thickness_mm * plate_fu_mpa / gamma_mb / 1000.0
}

/// Bolt capacities and detailing for the seat angle's vertical leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltDesign {
    pub hole_diameter_mm: f64,

    /// Thinner of supporting flange and angle leg (mm)
    pub governing_thickness_mm: f64,

    pub limits: SpacingLimits,

    /// Adopted end distance (minimum)
    pub end_distance_mm: f64,
    /// Adopted edge distance (minimum)
    pub edge_distance_mm: f64,
    /// Pitch used for k_b (minimum)
    pub pitch_mm: f64,

    pub k_b: f64,

    /// Shear capacity of one bolt (kN)
    pub shear_capacity_kn: f64,
    /// Bearing capacity of one bolt (kN)
    pub bearing_capacity_kn: f64,
    /// Governing capacity of one bolt (kN)
    pub bolt_value_kn: f64,

    pub bolts_required: u32,

    /// bolts_required × bolt value, to 0.1 kN
    pub group_capacity_kn: f64,
}

/// Size the bolts for the factored shear.
///
/// # Example
///
/// ```rust
/// use seat_core::calculations::seated_angle::bolts::bolt_shear_capacity_kn;
///
/// // M20 grade 4.6: 400 × 245 / (√3 × 1.25) ≈ 45.3 kN
/// let v = bolt_shear_capacity_kn(20.0, 400.0, 1.25);
/// assert!((v - 45.27).abs() < 0.01);
/// ```
pub fn design_bolts(params: &ResolvedParameters) -> BoltDesign {
    let prefs = &params.prefs;
    let d = params.bolt_diameter_mm;
    let d0 = params.hole_diameter_mm;
    let t = params.governing_thickness_mm();

    let limits = SpacingLimits::compute(
        d,
        d0,
        prefs.edge_type.min_edge_multiplier(),
        t,
        params.angle_fy_mpa,
    );
    let end_distance_mm = limits.min_end_distance_mm;
    let edge_distance_mm = limits.min_edge_distance_mm;
    let pitch_mm = limits.min_pitch_mm;

    let k_b = bearing_coefficient(end_distance_mm, pitch_mm, d0, params.bolt_fu_mpa, params.beam_fu_mpa);

    let shear_capacity_kn = round_to(bolt_shear_capacity_kn(d, params.bolt_fu_mpa, prefs.gamma_mb), 3);
    let bearing_capacity_kn = round_to(
        bolt_bearing_capacity_kn(d, t, params.beam_fu_mpa, k_b, prefs.gamma_mb),
        3,
    );
    let bolt_value_kn = shear_capacity_kn.min(bearing_capacity_kn);
    // V > 0 and bolt value > 0 after resolve, so this is at least 1
    let bolts_required = (params.shear_force_kn / bolt_value_kn).ceil() as u32;
    let group_capacity_kn = round_to(f64::from(bolts_required) * bolt_value_kn, 1);

    BoltDesign {
        hole_diameter_mm: d0,
        governing_thickness_mm: t,
        limits,
        end_distance_mm,
        edge_distance_mm,
        pitch_mm,
        k_b,
        shear_capacity_kn,
        bearing_capacity_kn,
        bolt_value_kn,
        bolts_required,
        group_capacity_kn,
    }
}
