//! # Connection Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - input parameters (JSON-serializable)
//! - `*Result` - results with a `safe` verdict and diagnostics
//! - `check(input, prefs, provider) -> CalcResult<*Result>` - pure function
//!
//! ## Available Calculations
//!
//! - [`seated_angle`] - Seated angle beam-to-column / beam-to-beam connection

pub mod seated_angle;

pub use seated_angle::{SeatedAngleInput, SeatedAngleResult};
