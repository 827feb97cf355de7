//! Input records for a seated angle check.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "label": "SA-1",
//!   "member": {
//!     "connectivity": "Column flange-Beam web",
//!     "beam_section": "MB 300",
//!     "column_section": "SC 200",
//!     "fu_mpa": 410.0,
//!     "fy_mpa": 250.0
//!   },
//!   "load": { "shear_force_kn": 100.0 },
//!   "bolt": { "diameter_mm": 20.0, "bolt_type": "Black Bolt", "grade": 4.6 },
//!   "angle": { "angle_section": "ISA 150X115X10" }
//! }
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// How the seated beam is connected to its support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Connectivity {
    /// Seat angle bolted to a column web
    #[serde(rename = "Column web-Beam web")]
    ColumnWebBeamWeb,
    /// Seat angle bolted to a column flange
    #[serde(rename = "Column flange-Beam web")]
    ColumnFlangeBeamWeb,
    /// Seat angle bolted to the web of a supporting beam
    #[serde(rename = "Beam-Beam")]
    BeamBeam,
}

impl Connectivity {
    pub const ALL: [Connectivity; 3] = [
        Connectivity::ColumnWebBeamWeb,
        Connectivity::ColumnFlangeBeamWeb,
        Connectivity::BeamBeam,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Connectivity::ColumnWebBeamWeb => "Column web-Beam web",
            Connectivity::ColumnFlangeBeamWeb => "Column flange-Beam web",
            Connectivity::BeamBeam => "Beam-Beam",
        }
    }

    /// Whether the seat sits between the flanges of the supporting member
    pub fn is_web_connected(&self) -> bool {
        !matches!(self, Connectivity::ColumnFlangeBeamWeb)
    }
}

impl FromStr for Connectivity {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Connectivity::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CalcError::invalid_input(
                    "connectivity",
                    s,
                    "Expected 'Column web-Beam web', 'Column flange-Beam web' or 'Beam-Beam'",
                )
            })
    }
}

impl std::fmt::Display for Connectivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bolt type. Both are checked as bearing-type bolts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoltType {
    #[default]
    #[serde(rename = "Black Bolt")]
    BlackBolt,
    #[serde(rename = "HSFG")]
    Hsfg,
}

/// Supported and supporting members, with the beam's material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberInput {
    pub connectivity: Connectivity,

    /// Supported beam designation (e.g., "MB 300")
    pub beam_section: String,

    /// Supporting column designation, or supporting beam for Beam-Beam
    pub column_section: String,

    /// Ultimate tensile strength of the beam steel (MPa)
    pub fu_mpa: f64,

    /// Yield strength of the beam steel (MPa)
    pub fy_mpa: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadInput {
    /// Factored end shear (kN)
    pub shear_force_kn: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltInput {
    /// Nominal bolt diameter (mm)
    pub diameter_mm: f64,

    #[serde(default)]
    pub bolt_type: BoltType,

    /// Property class (e.g., 4.6, 8.8)
    pub grade: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleInput {
    /// Seat angle designation (e.g., "ISA 150X115X10")
    pub angle_section: String,
}

/// Complete input for one seated angle connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatedAngleInput {
    /// User label (e.g., "SA-1")
    #[serde(default)]
    pub label: String,

    pub member: MemberInput,
    pub load: LoadInput,
    pub bolt: BoltInput,
    pub angle: AngleInput,
}

fn require_positive(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), reason));
    }
    Ok(())
}

fn require_name(field: &str, value: &str) -> CalcResult<()> {
    if value.trim().is_empty() {
        return Err(CalcError::missing_field(field));
    }
    Ok(())
}

impl SeatedAngleInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_name("member.beam_section", &self.member.beam_section)?;
        require_name("member.column_section", &self.member.column_section)?;
        require_name("angle.angle_section", &self.angle.angle_section)?;

        require_positive("member.fu_mpa", self.member.fu_mpa, "Ultimate strength must be positive")?;
        require_positive("member.fy_mpa", self.member.fy_mpa, "Yield strength must be positive")?;
        if self.member.fy_mpa > self.member.fu_mpa {
            return Err(CalcError::invalid_input(
                "member.fy_mpa",
                self.member.fy_mpa.to_string(),
                "Yield strength cannot exceed ultimate strength",
            ));
        }
        require_positive(
            "load.shear_force_kn",
            self.load.shear_force_kn,
            "Factored shear force must be positive",
        )?;
        require_positive("bolt.diameter_mm", self.bolt.diameter_mm, "Bolt diameter must be positive")?;
        if !self.bolt.grade.is_finite() || self.bolt.grade < 1.0 {
            return Err(CalcError::invalid_input(
                "bolt.grade",
                self.bolt.grade.to_string(),
                "Bolt grade must be a property class such as 4.6 or 8.8",
            ));
        }
        Ok(())
    }

    /// Bolt ultimate strength from the property class: 4.6 -> 400 MPa
    pub fn bolt_fu_mpa(&self) -> f64 {
        self.bolt.grade.floor() * 100.0
    }
}
