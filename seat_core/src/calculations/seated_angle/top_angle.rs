//! Top angle selection.
//!
//! The top (cleat) angle only restrains the beam laterally, so it is sized by
//! thumb rule rather than by calculation:
//!
//! - leg = beam depth / 4, but at least two edge distances (2 × 1.5 d0)
//! - rounded up to the nearest 5 mm (with a +2 mm bias)
//! - the nearest standard equal angle at or above that leg
//!
//! Anything outside the table, or nonsense input, gets [`DEFAULT_TOP_ANGLE`].

/// Designation used when no table size applies
pub const DEFAULT_TOP_ANGLE: &str = "ISA 100X65X8";

const DEFAULT_TOP_ANGLE_LEG_MM: u32 = 100;

/// Equal angles that satisfy both thumb rules (leg ≈ D/4, t ≈ leg/10),
/// ordered by leg size. Sizes below 40 mm cannot fit the minimum edge
/// distance of a 12 mm bolt but are kept so shallow beams map somewhere.
const TOP_ANGLES: [(u32, &str); 14] = [
    (20, "ISA 20X20X3"),
    (25, "ISA 25X25X3"),
    (30, "ISA 30X30X3"),
    (35, "ISA 35X35X4"),
    (40, "ISA 40X40X4"),
    (45, "ISA 45X45X5"),
    (50, "ISA 50X50X5"),
    (55, "ISA 55X55X6"),
    (60, "ISA 60X60X6"),
    (65, "ISA 65X65X6"),
    (70, "ISA 70X70X7"),
    (75, "ISA 75X75X8"),
    (80, "ISA 80X80X8"),
    (90, "ISA 90X90X10"),
];

/// Outcome of top angle selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopAngle {
    /// A table size was found for the computed leg
    Selected { designation: &'static str, leg_mm: u32 },
    /// Inputs were unusable or the leg exceeded the table
    Fallback { designation: &'static str, leg_mm: u32 },
}

impl TopAngle {
    fn fallback() -> Self {
        TopAngle::Fallback {
            designation: DEFAULT_TOP_ANGLE,
            leg_mm: DEFAULT_TOP_ANGLE_LEG_MM,
        }
    }

    pub fn designation(&self) -> &'static str {
        match self {
            TopAngle::Selected { designation, .. } | TopAngle::Fallback { designation, .. } => *designation,
        }
    }

    /// Longer leg of the recommended angle (mm)
    pub fn leg_mm(&self) -> u32 {
        match self {
            TopAngle::Selected { leg_mm, .. } | TopAngle::Fallback { leg_mm, .. } => *leg_mm,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, TopAngle::Fallback { .. })
    }
}

/// Leg size before table lookup: max(D/4, 3 d0), rounded to 5 mm.
///
/// Returns `None` when the inputs are not positive finite numbers.
pub fn rounded_leg_mm(beam_depth_mm: f64, hole_diameter_mm: f64) -> Option<f64> {
    if !beam_depth_mm.is_finite() || !hole_diameter_mm.is_finite() {
        return None;
    }
    if beam_depth_mm <= 0.0 || hole_diameter_mm <= 0.0 {
        return None;
    }
    // twice the edge distance; angle thickness is covered by the round-up
    let minimum_leg = 2.0 * 1.5 * hole_diameter_mm;
    let leg = (beam_depth_mm / 4.0).max(minimum_leg);
    Some(((leg.floor() + 2.0) / 5.0).round() * 5.0)
}

/// Recommend a top angle for a beam of the given depth.
///
/// # Example
///
/// ```rust
/// use seat_core::calculations::seated_angle::top_angle::select_top_angle;
///
/// let top = select_top_angle(300.0, 22.0);
/// assert_eq!(top.designation(), "ISA 75X75X8");
/// ```
pub fn select_top_angle(beam_depth_mm: f64, hole_diameter_mm: f64) -> TopAngle {
    let Some(leg) = rounded_leg_mm(beam_depth_mm, hole_diameter_mm) else {
        return TopAngle::fallback();
    };
    TOP_ANGLES
        .iter()
        .find(|(size, _)| f64::from(*size) >= leg)
        .map(|&(leg_mm, designation)| TopAngle::Selected { designation, leg_mm })
        .unwrap_or_else(TopAngle::fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_governs() {
        // 300/4 = 75 > 3*22 = 66; (75 + 2)/5 = 15.4 -> 75
        assert_eq!(rounded_leg_mm(300.0, 22.0), Some(75.0));
        assert_eq!(select_top_angle(300.0, 22.0).designation(), "ISA 75X75X8");
    }

    #[test]
    fn test_hole_governs() {
        // 200/4 = 50 < 66; (66 + 2)/5 = 13.6 -> 70
        assert_eq!(rounded_leg_mm(200.0, 22.0), Some(70.0));
        assert_eq!(select_top_angle(200.0, 22.0).designation(), "ISA 70X70X7");
    }

    #[test]
    fn test_gap_in_table_rounds_up() {
        // 340/4 = 85 -> (85 + 2)/5 = 17.4 -> 85, no 85 in the table
        let top = select_top_angle(340.0, 13.0);
        assert_eq!(top.designation(), "ISA 90X90X10");
        assert!(!top.is_fallback());
    }

    #[test]
    fn test_small_sizes_map_to_smallest() {
        // 3*4 = 12 -> (12 + 2)/5 = 2.8 -> 15
        assert_eq!(select_top_angle(40.0, 4.0).designation(), "ISA 20X20X3");
    }

    #[test]
    fn test_deep_beam_falls_back() {
        // 450/4 = 112.5 -> 115, beyond the table
        let top = select_top_angle(450.0, 22.0);
        assert!(top.is_fallback());
        assert_eq!(top.designation(), DEFAULT_TOP_ANGLE);
        assert_eq!(top.leg_mm(), 100);
    }

    #[test]
    fn test_invalid_input_falls_back() {
        assert!(select_top_angle(f64::NAN, 22.0).is_fallback());
        assert!(select_top_angle(300.0, 0.0).is_fallback());
        assert!(select_top_angle(-300.0, 22.0).is_fallback());
        assert!(select_top_angle(f64::INFINITY, 22.0).is_fallback());
    }
}
