//! Checks on the outstanding (seat) leg and the supported beam web.
//!
//! Geometry of the seat, measured from the support face:
//!
//! ```text
//!   support | gap |<------- b -------->|
//!           |     |   T + R1  |<- b1 ->|      b  = bearing length at web root
//!           |=====+===========+========|      b1 = stiff bearing on the seat
//!           |  B  ^ root of angle (t + R1 from support)
//!           |<-- b2 -->| from root to end of bearing
//! ```
//!
//! Units: kN, mm, MPa; moments in kN·mm.

use serde::{Deserialize, Serialize};

use super::params::ResolvedParameters;
use super::round_to;
use crate::diagnostics::{Check, Diagnostics};

/// Clause governing moment capacity under low shear
pub const LOW_SHEAR_CLAUSE: &str = "Cl 8.2.1.2";
/// Clause governing moment capacity under high shear
pub const HIGH_SHEAR_CLAUSE: &str = "Cl 8.2.1.3";

/// Shear above this fraction of capacity reduces moment capacity
const HIGH_SHEAR_RATIO: f64 = 0.6;

/// Bearing length needed at the root of the beam web (Cl 8.7.4),
/// rearranged: b = V γ_m0 / (tw fy)
pub fn bearing_length_mm(shear_force_kn: f64, web_thickness_mm: f64, fy_mpa: f64, gamma_m0: f64) -> f64 {
    round_to(shear_force_kn * 1000.0 * gamma_m0 / web_thickness_mm / fy_mpa, 3)
}

/// Shear capacity of a rectangular leg L × t (Cl 8.4.1), kN
pub fn leg_shear_capacity_kn(length_mm: f64, thickness_mm: f64, fy_mpa: f64, gamma_m0: f64) -> f64 {
    round_to(length_mm * thickness_mm * fy_mpa * 0.001 / (3f64.sqrt() * gamma_m0), 1)
}

/// Shear capacity of the beam web D × tw (Cl 8.4.1), kN
pub fn beam_shear_strength_kn(depth_mm: f64, web_thickness_mm: f64, fy_mpa: f64, gamma_m0: f64) -> f64 {
    round_to(depth_mm * web_thickness_mm * fy_mpa / 3f64.sqrt() / gamma_m0 / 1000.0, 1)
}

/// Moment capacity of the outstanding leg with the shear regime that
/// selected it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegMomentCapacity {
    /// V > 0.6 V_d
    pub high_shear: bool,
    /// (2V/V_d - 1)², zero in the low shear regime
    pub beta: f64,
    /// Plastic moment capacity M_d (kN·mm), β_b = 1
    pub plastic_knmm: f64,
    /// Governing capacity, to 0.1 kN·mm
    pub capacity_knmm: f64,
}

impl LegMomentCapacity {
    pub fn clause(&self) -> &'static str {
        if self.high_shear {
            HIGH_SHEAR_CLAUSE
        } else {
            LOW_SHEAR_CLAUSE
        }
    }
}

/// Moment capacity of the outstanding leg.
///
/// Low shear (V <= 0.6 V_d): min(M_d, 1.5 Z_e fy / γ_m0).
/// High shear: M_dv = min((1 - β) M_d, 1.2 Z_e fy / γ_m0), taking M_fd = 0
/// because the shear and bending areas of the leg coincide.
pub fn leg_moment_capacity(
    length_mm: f64,
    thickness_mm: f64,
    fy_mpa: f64,
    gamma_m0: f64,
    shear_force_kn: f64,
    leg_shear_capacity_kn: f64,
) -> LegMomentCapacity {
    let modulus_mm3 = length_mm * thickness_mm.powi(2) / 6.0;
    let base_knmm = (fy_mpa / gamma_m0) * modulus_mm3 / 1000.0;
    let plastic_knmm = base_knmm;

    if shear_force_kn <= HIGH_SHEAR_RATIO * leg_shear_capacity_kn {
        let limiting = 1.5 * base_knmm;
        LegMomentCapacity {
            high_shear: false,
            beta: 0.0,
            plastic_knmm,
            capacity_knmm: round_to(plastic_knmm.min(limiting), 1),
        }
    } else {
        let limiting = 1.2 * base_knmm;
        let beta = (2.0 * shear_force_kn / leg_shear_capacity_kn - 1.0).powi(2);
        LegMomentCapacity {
            high_shear: true,
            beta,
            plastic_knmm,
            capacity_knmm: round_to(((1.0 - beta) * plastic_knmm).min(limiting), 1),
        }
    }
}

/// How the moment demand at the angle root was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeverArmCase {
    /// b1 > 0 and b2 > 0: uniform load over b1, moment of the part beyond the root
    Distributed,
    /// b2 <= 0: bearing ends before the root, no bending of the leg
    NoLeverArm,
    /// b1 <= 0 < b2: reaction taken as a point load at the lever arm
    Concentrated,
}

/// Moment demand at the root of the angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentDemand {
    /// Stiff bearing length on the seat, b1 = b - T - R1 (45° dispersion, Cl 8.7.1.3)
    pub b1_mm: f64,
    /// From angle root to end of bearing, b2 = b1 + gap - t - R1
    pub b2_mm: f64,
    pub case: LeverArmCase,
    /// kN·mm, to 0.1; never negative
    pub moment_knmm: f64,
}

/// Moment at the angle root from the reaction spread over the stiff bearing.
///
/// The textbook expression V (b2/b1)(b2/2) goes negative or divides by zero
/// for short bearing lengths, so those cases are clamped as described on
/// [`LeverArmCase`].
pub fn moment_demand(
    shear_force_kn: f64,
    bearing_length_mm: f64,
    params: &ResolvedParameters,
) -> MomentDemand {
    let beam = &params.beam;
    let angle = &params.angle;
    let b1_mm = bearing_length_mm - beam.flange_thickness_mm - beam.root_radius_mm;
    let b2_mm = b1_mm + params.prefs.beam_col_clear_gap_mm - angle.thickness_mm - angle.root_radius_mm;

    let (case, moment) = if b2_mm <= 0.0 {
        (LeverArmCase::NoLeverArm, 0.0)
    } else if b1_mm <= 0.0 {
        (LeverArmCase::Concentrated, shear_force_kn * b2_mm)
    } else {
        (
            LeverArmCase::Distributed,
            shear_force_kn * (b2_mm / b1_mm) * (b2_mm / 2.0),
        )
    };

    MomentDemand {
        b1_mm,
        b2_mm,
        case,
        moment_knmm: round_to(moment, 1),
    }
}

/// Results of the seat and beam checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatChecks {
    pub bearing_length_mm: f64,
    /// b + beam/column clear gap
    pub outstanding_leg_required_mm: f64,
    pub leg_length_ok: bool,

    pub leg_shear_capacity_kn: f64,
    pub leg_shear_ok: bool,

    pub moment_capacity: LegMomentCapacity,
    pub moment_demand: MomentDemand,
    pub moment_ok: bool,

    pub beam_shear_strength_kn: f64,
    pub beam_shear_ok: bool,
}

impl SeatChecks {
    pub fn is_ok(&self) -> bool {
        self.leg_length_ok && self.leg_shear_ok && self.moment_ok && self.beam_shear_ok
    }
}

/// Round up to one decimal place
fn ceil_to_tenth(value: f64) -> f64 {
    (value * 10.0).ceil() / 10.0
}

/// Run every seat check. Each check runs regardless of earlier failures.
pub fn check_seat(params: &ResolvedParameters, angle_length_mm: f64, diagnostics: &mut Diagnostics) -> SeatChecks {
    let v = params.shear_force_kn;
    let fy = params.angle_fy_mpa;
    let gamma_m0 = params.prefs.gamma_m0;
    let angle = &params.angle;

    // Outstanding leg length (Cl 8.7.4)
    let bearing_length_mm = bearing_length_mm(v, params.beam.web_thickness_mm, fy, gamma_m0);
    let outstanding_leg_required_mm = bearing_length_mm + params.prefs.beam_col_clear_gap_mm;
    let leg_length_ok = outstanding_leg_required_mm <= angle.short_leg_mm;
    if !leg_length_ok {
        diagnostics.violation(
            Check::OutstandingLegLength,
            "Cl 8.7.4",
            "Length of outstanding leg of angle is less than required bearing length",
        );
        diagnostics.warning(
            Check::OutstandingLegLength,
            format!(
                "Outstanding leg length should be more than {:.2} mm",
                outstanding_leg_required_mm
            ),
        );
        diagnostics.info(
            Check::OutstandingLegLength,
            "Select seated angle with longer outstanding leg",
        );
    }

    // Shear of the outstanding leg (Cl 8.4.1)
    let leg_shear_capacity_kn = leg_shear_capacity_kn(angle_length_mm, angle.thickness_mm, fy, gamma_m0);
    let leg_shear_ok = leg_shear_capacity_kn >= v;
    if !leg_shear_ok {
        let ratio = ceil_to_tenth(v / leg_shear_capacity_kn);
        let required_thickness = ceil_to_tenth(angle.thickness_mm * v / leg_shear_capacity_kn);
        diagnostics.violation(
            Check::OutstandingLegShear,
            "Cl 8.4.1",
            "Shear capacity of outstanding leg of seated angle is insufficient",
        );
        diagnostics.warning(
            Check::OutstandingLegShear,
            format!(
                "Shear capacity should be more than factored shear force {:.2} kN (demand is {:.1} times capacity)",
                v, ratio
            ),
        );
        diagnostics.info(
            Check::OutstandingLegShear,
            format!(
                "Select seated angle with thickness greater than {:.1} mm",
                required_thickness
            ),
        );
    }

    // Moment at the root of the outstanding leg
    let moment_capacity = leg_moment_capacity(
        angle_length_mm,
        angle.thickness_mm,
        fy,
        gamma_m0,
        v,
        leg_shear_capacity_kn,
    );
    let moment_demand = moment_demand(v, bearing_length_mm, params);
    match moment_demand.case {
        LeverArmCase::NoLeverArm => diagnostics.info(
            Check::MomentLeverArm,
            format!(
                "Bearing ends {:.1} mm before the angle root; no bending of the outstanding leg",
                -moment_demand.b2_mm
            ),
        ),
        LeverArmCase::Concentrated => diagnostics.warning(
            Check::MomentLeverArm,
            format!(
                "Stiff bearing length on the seat is {:.1} mm; reaction taken as a point load {:.1} mm from the angle root",
                moment_demand.b1_mm, moment_demand.b2_mm
            ),
        ),
        LeverArmCase::Distributed => {}
    }
    let moment_ok = moment_capacity.capacity_knmm >= moment_demand.moment_knmm;
    if !moment_ok {
        diagnostics.violation(
            Check::OutstandingLegMoment,
            moment_capacity.clause(),
            "Moment capacity of outstanding leg of seated angle is not sufficient",
        );
        diagnostics.warning(
            Check::OutstandingLegMoment,
            format!(
                "Moment capacity should be at least {:.2} kN-mm",
                moment_demand.moment_knmm
            ),
        );
        diagnostics.info(
            Check::OutstandingLegMoment,
            "Increase thickness or decrease length of outstanding leg of seated angle",
        );
    }

    // Shear of the supported beam (Cl 8.4.1)
    let beam_shear_strength_kn = beam_shear_strength_kn(
        params.beam.depth_mm,
        params.beam.web_thickness_mm,
        params.beam_fy_mpa,
        gamma_m0,
    );
    let beam_shear_ok = beam_shear_strength_kn >= v;
    if !beam_shear_ok {
        diagnostics.violation(
            Check::BeamShear,
            "Cl 8.4.1",
            "Shear capacity of supported beam is not sufficient",
        );
        diagnostics.warning(
            Check::BeamShear,
            format!("Shear capacity of supported beam should be at least {:.2} kN", v),
        );
        diagnostics.warning(Check::BeamShear, "Beam design is outside the scope of this module");
    }

    SeatChecks {
        bearing_length_mm,
        outstanding_leg_required_mm,
        leg_length_ok,
        leg_shear_capacity_kn,
        leg_shear_ok,
        moment_capacity,
        moment_demand,
        moment_ok,
        beam_shear_strength_kn,
        beam_shear_ok,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::seated_angle::input::{BoltType, Connectivity};
    use crate::calculations::seated_angle::top_angle::select_top_angle;
    use crate::preferences::DesignPreferences;
    use crate::sections::{AngleProperties, SectionProperties};

    fn params(shear_kn: f64, angle_b: f64, angle_t: f64, angle_r1: f64) -> ResolvedParameters {
        ResolvedParameters {
            connectivity: Connectivity::ColumnFlangeBeamWeb,
            beam: SectionProperties {
                designation: "B".to_string(),
                depth_mm: 450.0,
                flange_width_mm: 250.0,
                web_thickness_mm: 7.6,
                flange_thickness_mm: 13.4,
                root_radius_mm: 15.0,
            },
            column: SectionProperties {
                designation: "C".to_string(),
                depth_mm: 250.0,
                flange_width_mm: 250.0,
                web_thickness_mm: 10.0,
                flange_thickness_mm: 16.0,
                root_radius_mm: 12.0,
            },
            angle: AngleProperties {
                designation: "A".to_string(),
                long_leg_mm: 200.0,
                short_leg_mm: angle_b,
                thickness_mm: angle_t,
                root_radius_mm: angle_r1,
            },
            beam_fy_mpa: 250.0,
            beam_fu_mpa: 410.0,
            column_fy_mpa: 250.0,
            column_fu_mpa: 410.0,
            angle_fy_mpa: 250.0,
            angle_fu_mpa: 410.0,
            shear_force_kn: shear_kn,
            bolt_diameter_mm: 20.0,
            bolt_type: BoltType::BlackBolt,
            bolt_grade: 4.6,
            bolt_fu_mpa: 400.0,
            hole_diameter_mm: 22.0,
            prefs: DesignPreferences::default(),
            top_angle: select_top_angle(450.0, 22.0),
        }
    }

    #[test]
    fn test_bearing_length() {
        // 150000 × 1.1 / 7.6 / 250 = 86.842
        assert_eq!(bearing_length_mm(150.0, 7.6, 250.0, 1.1), 86.842);
    }

    #[test]
    fn test_leg_shear_capacity() {
        // 250 × 16 × 250 × 0.001 / (√3 × 1.1) = 524.86
        assert_eq!(leg_shear_capacity_kn(250.0, 16.0, 250.0, 1.1), 524.9);
    }

    #[test]
    fn test_beam_shear_strength() {
        // 450 × 7.6 × 250 / √3 / 1.1 / 1000 = 448.76
        assert_eq!(beam_shear_strength_kn(450.0, 7.6, 250.0, 1.1), 448.8);
    }

    #[test]
    fn test_low_shear_moment_capacity() {
        let cap = leg_moment_capacity(250.0, 16.0, 250.0, 1.1, 150.0, 524.9);
        assert!(!cap.high_shear);
        assert_eq!(cap.beta, 0.0);
        assert_eq!(cap.clause(), LOW_SHEAR_CLAUSE);
        // (250/1.1) × (250 × 256 / 6) / 1000 = 2424.24
        assert_eq!(cap.capacity_knmm, 2424.2);
    }

    #[test]
    fn test_high_shear_moment_capacity() {
        // V / V_d = 0.8 -> β = 0.36
        let cap = leg_moment_capacity(250.0, 16.0, 250.0, 1.1, 400.0, 500.0);
        assert!(cap.high_shear);
        assert!((cap.beta - 0.36).abs() < 1e-12);
        assert_eq!(cap.clause(), HIGH_SHEAR_CLAUSE);
        assert_eq!(cap.capacity_knmm, round_to(0.64 * cap.plastic_knmm, 1));
    }

    #[test]
    fn test_shear_ratio_boundary_is_low_shear() {
        // exactly 0.6 V_d selects the low shear branch
        let cap = leg_moment_capacity(250.0, 16.0, 250.0, 1.1, 300.0, 500.0);
        assert!(!cap.high_shear);
        let cap = leg_moment_capacity(250.0, 16.0, 250.0, 1.1, 300.1, 500.0);
        assert!(cap.high_shear);
    }

    #[test]
    fn test_distributed_moment_demand() {
        let p = params(150.0, 150.0, 16.0, 13.5);
        let demand = moment_demand(150.0, 86.842, &p);
        // b1 = 86.842 - 13.4 - 15 = 58.442; b2 = 58.442 + 10 - 16 - 13.5 = 38.942
        assert!((demand.b1_mm - 58.442).abs() < 1e-9);
        assert!((demand.b2_mm - 38.942).abs() < 1e-9);
        assert_eq!(demand.case, LeverArmCase::Distributed);
        let expected = round_to(150.0 * (38.942 / 58.442) * (38.942 / 2.0), 1);
        assert_eq!(demand.moment_knmm, expected);
    }

    #[test]
    fn test_negative_lever_arm_clamped() {
        // short bearing: b1 = 30 - 28.4 = 1.6; b2 = 1.6 + 10 - 16 - 13.5 < 0
        let p = params(50.0, 150.0, 16.0, 13.5);
        let demand = moment_demand(50.0, 30.0, &p);
        assert_eq!(demand.case, LeverArmCase::NoLeverArm);
        assert_eq!(demand.moment_knmm, 0.0);
    }

    #[test]
    fn test_non_positive_b1_is_point_load() {
        // thin angle with small root: b1 = 20 - 28.4 = -8.4; b2 = -8.4 + 10 - 1 - 0.5 = 0.1
        let p = params(50.0, 150.0, 1.0, 0.5);
        let demand = moment_demand(50.0, 20.0, &p);
        assert_eq!(demand.case, LeverArmCase::Concentrated);
        assert!(demand.moment_knmm >= 0.0);
        assert_eq!(demand.moment_knmm, round_to(50.0 * demand.b2_mm, 1));
    }

    #[test]
    fn test_check_seat_passes() {
        let p = params(150.0, 150.0, 16.0, 13.5);
        let mut diags = Diagnostics::new();
        let checks = check_seat(&p, 250.0, &mut diags);
        assert!(checks.is_ok());
        assert!(!diags.has_violations());
        assert!((checks.outstanding_leg_required_mm - 96.842).abs() < 1e-9);
    }

    #[test]
    fn test_short_outstanding_leg() {
        let p = params(150.0, 75.0, 16.0, 13.5);
        let mut diags = Diagnostics::new();
        let checks = check_seat(&p, 250.0, &mut diags);
        assert!(!checks.leg_length_ok);
        // other checks still ran
        assert!(checks.leg_shear_ok);
        assert!(checks.beam_shear_ok);
        assert!(diags
            .iter()
            .any(|d| d.is_violation() && d.check == Check::OutstandingLegLength));
    }

    #[test]
    fn test_thin_leg_fails_shear() {
        // 100 × 6 × 250 × 0.001 / (√3 × 1.1) = 78.7 < 150
        let p = params(150.0, 150.0, 6.0, 6.5);
        let mut diags = Diagnostics::new();
        let checks = check_seat(&p, 100.0, &mut diags);
        assert_eq!(checks.leg_shear_capacity_kn, 78.7);
        assert!(!checks.leg_shear_ok);
        let violation = diags
            .iter()
            .find(|d| d.is_violation() && d.check == Check::OutstandingLegShear)
            .unwrap();
        assert_eq!(violation.clause.as_deref(), Some("Cl 8.4.1"));
        // 6 × 150 / 78.7 = 11.44 -> 11.5
        assert!(diags
            .iter()
            .any(|d| d.check == Check::OutstandingLegShear && d.message.contains("11.5 mm")));
    }
}
