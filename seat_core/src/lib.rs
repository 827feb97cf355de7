//! # seat_core - Seated Angle Connection Design
//!
//! Design checks for bolted seated angle connections per IS 800:2007. All
//! inputs and outputs are JSON-serializable; every check is a pure function
//! of its input, the design preferences and a section provider.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one call per connection, nothing cached between calls
//! - **Complete reports**: a violated clause never stops the remaining checks
//! - **Rich Errors**: structured [`CalcError`] for bad input or missing sections
//!
//! ## Quick Start
//!
//! ```rust
//! use seat_core::calculations::seated_angle::{check, SeatedAngleInput};
//! use seat_core::{builtin_is_sections, DesignPreferences};
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
//! println!("safe: {}", result.safe);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Connection checks
//! - [`sections`] - Section property records, tables and the provider seam
//! - [`preferences`] - Safety factors and detailing preferences
//! - [`diagnostics`] - Per-clause findings, mirrored to `log`
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod diagnostics;
pub mod errors;
pub mod preferences;
pub mod sections;

pub use diagnostics::{Check, Diagnostic, Level};
pub use errors::{CalcError, CalcResult};
pub use preferences::DesignPreferences;
pub use sections::{builtin_is_sections, SectionProvider, SectionTable};
