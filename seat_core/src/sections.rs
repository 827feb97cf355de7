//! Steel Section Tables (IS 808)
//!
//! Geometric properties of rolled I-sections and angles, looked up by
//! designation. The connection checker never touches a table directly; it
//! goes through the [`SectionProvider`] trait so callers can plug in their own
//! database.
//!
//! ## Data Source
//!
//! The built-in table carries a selection of common IS 808 sizes (`MB` beams,
//! `SC`/`HB` columns, `ISA` angles). Larger tables can be loaded from CSV with
//! [`SectionTable::load_i_sections_csv`] and [`SectionTable::load_angles_csv`].
//!
//! ## CSV Format
//!
//! ```text
//! Designation,D,B,tw,T,R1        (beams and columns)
//! MB 450,450,150,9.4,17.4,15
//!
//! Designation,A,B,t,R1           (angles)
//! ISA 100X75X8,100,75,8,8.5
//! ```
//!
//! All dimensions are millimetres.
//!
//! ## Example
//!
//! ```rust
//! use seat_core::sections::{builtin_is_sections, SectionProvider};
//!
//! let table = builtin_is_sections();
//! let beam = table.beam("MB 450").unwrap();
//! assert_eq!(beam.depth_mm, 450.0);
//!
//! // Designations are matched ignoring case and whitespace
//! let angle = table.angle("isa 100x75x8").unwrap();
//! assert_eq!(angle.thickness_mm, 8.0);
//! ```

use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Which table a section belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Beam,
    Column,
    Angle,
}

impl SectionKind {
    /// Lowercase name used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Beam => "beam",
            SectionKind::Column => "column",
            SectionKind::Angle => "angle",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rolled I-section (beam or column) dimensions.
///
/// Serialized field names follow the steel table headings (`D`, `B`, `tw`,
/// `T`, `R1`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Table designation (e.g., "MB 450")
    pub designation: String,

    /// Overall depth D (mm)
    #[serde(rename = "D")]
    pub depth_mm: f64,

    /// Flange width B (mm)
    #[serde(rename = "B")]
    pub flange_width_mm: f64,

    /// Web thickness tw (mm)
    #[serde(rename = "tw")]
    pub web_thickness_mm: f64,

    /// Flange thickness T (mm)
    #[serde(rename = "T")]
    pub flange_thickness_mm: f64,

    /// Root radius R1 (mm)
    #[serde(rename = "R1")]
    pub root_radius_mm: f64,
}

impl SectionProperties {
    /// Check every dimension is positive and finite.
    pub fn validate(&self) -> CalcResult<()> {
        check_dimension(&self.designation, "D", self.depth_mm)?;
        check_dimension(&self.designation, "B", self.flange_width_mm)?;
        check_dimension(&self.designation, "tw", self.web_thickness_mm)?;
        check_dimension(&self.designation, "T", self.flange_thickness_mm)?;
        check_dimension(&self.designation, "R1", self.root_radius_mm)?;
        Ok(())
    }

    /// Clear depth of the web between root fillets: D - 2T - 2R1
    pub fn clear_web_depth_mm(&self) -> f64 {
        self.depth_mm - 2.0 * self.flange_thickness_mm - 2.0 * self.root_radius_mm
    }
}

impl std::fmt::Display for SectionProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (D={} mm, B={} mm, tw={} mm, T={} mm, R1={} mm)",
            self.designation,
            self.depth_mm,
            self.flange_width_mm,
            self.web_thickness_mm,
            self.flange_thickness_mm,
            self.root_radius_mm
        )
    }
}

/// Angle dimensions. `A` is the longer leg, `B` the shorter one.
///
/// In a seated connection the longer leg is bolted to the support and the
/// shorter leg is the outstanding (seat) leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleProperties {
    /// Table designation (e.g., "ISA 100X75X8")
    pub designation: String,

    /// Longer leg A (mm)
    #[serde(rename = "A")]
    pub long_leg_mm: f64,

    /// Shorter leg B (mm)
    #[serde(rename = "B")]
    pub short_leg_mm: f64,

    /// Leg thickness t (mm)
    #[serde(rename = "t")]
    pub thickness_mm: f64,

    /// Root radius R1 (mm)
    #[serde(rename = "R1")]
    pub root_radius_mm: f64,
}

impl AngleProperties {
    /// Check dimensions are positive and the legs are ordered A >= B.
    pub fn validate(&self) -> CalcResult<()> {
        check_dimension(&self.designation, "A", self.long_leg_mm)?;
        check_dimension(&self.designation, "B", self.short_leg_mm)?;
        check_dimension(&self.designation, "t", self.thickness_mm)?;
        check_dimension(&self.designation, "R1", self.root_radius_mm)?;
        if self.short_leg_mm > self.long_leg_mm {
            return Err(CalcError::invalid_input(
                format!("{}.B", self.designation),
                self.short_leg_mm.to_string(),
                "Shorter leg B cannot exceed longer leg A",
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for AngleProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (A={} mm, B={} mm, t={} mm, R1={} mm)",
            self.designation, self.long_leg_mm, self.short_leg_mm, self.thickness_mm, self.root_radius_mm
        )
    }
}

fn check_dimension(designation: &str, name: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(
            format!("{}.{}", designation, name),
            value.to_string(),
            "Section dimension must be positive",
        ));
    }
    Ok(())
}

/// Lookup seam between the connection checker and a section database.
///
/// Implementations must be deterministic: the same designation always yields
/// the same record. Unknown designations return
/// [`CalcError::SectionNotFound`].
pub trait SectionProvider {
    /// Look up a beam (supported member, or supporting beam for Beam-Beam)
    fn beam(&self, designation: &str) -> CalcResult<SectionProperties>;

    /// Look up a column
    fn column(&self, designation: &str) -> CalcResult<SectionProperties>;

    /// Look up an angle
    fn angle(&self, designation: &str) -> CalcResult<AngleProperties>;
}

/// In-memory section tables keyed by normalized designation.
#[derive(Debug, Clone, Default)]
pub struct SectionTable {
    beams: HashMap<String, SectionProperties>,
    columns: HashMap<String, SectionProperties>,
    angles: HashMap<String, AngleProperties>,

    /// Table version or source label (e.g., "builtin-is808")
    pub version: Option<String>,
}

/// Normalize a designation for lookup: uppercase, whitespace removed.
///
/// `"isa 100x75x8"` and `"ISA100X75X8"` map to the same key.
pub fn normalize_designation(designation: &str) -> String {
    designation
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

impl SectionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a beam section, replacing any with the same designation
    pub fn insert_beam(&mut self, section: SectionProperties) -> CalcResult<()> {
        section.validate()?;
        self.beams.insert(normalize_designation(&section.designation), section);
        Ok(())
    }

    /// Insert a column section, replacing any with the same designation
    pub fn insert_column(&mut self, section: SectionProperties) -> CalcResult<()> {
        section.validate()?;
        self.columns.insert(normalize_designation(&section.designation), section);
        Ok(())
    }

    /// Insert an angle, replacing any with the same designation
    pub fn insert_angle(&mut self, angle: AngleProperties) -> CalcResult<()> {
        angle.validate()?;
        self.angles.insert(normalize_designation(&angle.designation), angle);
        Ok(())
    }

    /// Insert an I-section into the table for `kind`.
    ///
    /// `SectionKind::Angle` is rejected; angles have their own record type.
    pub fn insert_section(&mut self, kind: SectionKind, section: SectionProperties) -> CalcResult<()> {
        match kind {
            SectionKind::Beam => self.insert_beam(section),
            SectionKind::Column => self.insert_column(section),
            SectionKind::Angle => Err(CalcError::invalid_input(
                "kind",
                kind.as_str(),
                "Angles must be inserted with insert_angle",
            )),
        }
    }

    /// Load beam or column sections from a CSV file.
    ///
    /// Returns the number of sections loaded.
    pub fn load_i_sections_csv(&mut self, path: &str, kind: SectionKind) -> CalcResult<usize> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("open", path, format!("Failed to open CSV: {}", e)))?;
        let sections = parse_i_sections_csv(&text, path)?;
        let count = sections.len();
        for section in sections {
            self.insert_section(kind, section)?;
        }
        Ok(count)
    }

    /// Load angles from a CSV file.
    ///
    /// Returns the number of angles loaded.
    pub fn load_angles_csv(&mut self, path: &str) -> CalcResult<usize> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("open", path, format!("Failed to open CSV: {}", e)))?;
        let angles = parse_angles_csv(&text, path)?;
        let count = angles.len();
        for angle in angles {
            self.insert_angle(angle)?;
        }
        Ok(count)
    }

    /// Search designations by prefix across all tables.
    ///
    /// Matching uses the normalized form, so "mb4" finds "MB 400" and
    /// "MB 450". Results are sorted by kind, then designation.
    pub fn search(&self, prefix: &str) -> Vec<(SectionKind, &str)> {
        let key = normalize_designation(prefix);
        let mut found: Vec<(SectionKind, &str)> = Vec::new();
        found.extend(
            self.beams
                .iter()
                .filter(|(k, _)| k.starts_with(&key))
                .map(|(_, s)| (SectionKind::Beam, s.designation.as_str())),
        );
        found.extend(
            self.columns
                .iter()
                .filter(|(k, _)| k.starts_with(&key))
                .map(|(_, s)| (SectionKind::Column, s.designation.as_str())),
        );
        found.extend(
            self.angles
                .iter()
                .filter(|(k, _)| k.starts_with(&key))
                .map(|(_, a)| (SectionKind::Angle, a.designation.as_str())),
        );
        found.sort_by(|a, b| {
            (a.0 as u8)
                .cmp(&(b.0 as u8))
                .then_with(|| natural_key(a.1).cmp(&natural_key(b.1)))
        });
        found
    }

    /// Total number of sections across all tables
    pub fn len(&self) -> usize {
        self.beams.len() + self.columns.len() + self.angles.len()
    }

    /// Check if all tables are empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sort key that orders "MB 90" before "MB 450".
fn natural_key(designation: &str) -> (String, Vec<u64>) {
    let prefix: String = designation
        .chars()
        .take_while(|c| !c.is_ascii_digit())
        .collect();
    let numbers = designation
        .split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect();
    (prefix, numbers)
}

impl SectionProvider for SectionTable {
    fn beam(&self, designation: &str) -> CalcResult<SectionProperties> {
        self.beams
            .get(&normalize_designation(designation))
            .cloned()
            .ok_or_else(|| CalcError::section_not_found(SectionKind::Beam.as_str(), designation))
    }

    fn column(&self, designation: &str) -> CalcResult<SectionProperties> {
        self.columns
            .get(&normalize_designation(designation))
            .cloned()
            .ok_or_else(|| CalcError::section_not_found(SectionKind::Column.as_str(), designation))
    }

    fn angle(&self, designation: &str) -> CalcResult<AngleProperties> {
        self.angles
            .get(&normalize_designation(designation))
            .cloned()
            .ok_or_else(|| CalcError::section_not_found(SectionKind::Angle.as_str(), designation))
    }
}

/// Column positions found in a CSV header row
struct CsvHeader {
    columns: Vec<String>,
}

impl CsvHeader {
    fn parse(line: &str) -> Self {
        CsvHeader {
            columns: line.split(',').map(|h| h.trim().to_string()).collect(),
        }
    }

    /// Exact-name match first so `T` and `t` stay distinct, then case-insensitive
    fn index(&self, name: &str, source: &str) -> CalcResult<usize> {
        self.columns
            .iter()
            .position(|h| h == name)
            .or_else(|| self.columns.iter().position(|h| h.eq_ignore_ascii_case(name)))
            .ok_or_else(|| CalcError::file_error("parse", source, format!("Missing '{}' column", name)))
    }
}

/// Non-empty data rows with their 1-based line numbers
fn data_rows(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (i + 1, line.split(',').map(str::trim).collect()))
}

fn field_f64(fields: &[&str], idx: usize, name: &str, line: usize, source: &str) -> CalcResult<f64> {
    fields
        .get(idx)
        .and_then(|v| parse_optional_f64(v))
        .ok_or_else(|| {
            CalcError::file_error(
                "parse",
                source,
                format!("Line {}: missing or invalid '{}' value", line, name),
            )
        })
}

fn field_designation(fields: &[&str], idx: usize, line: usize, source: &str) -> CalcResult<String> {
    fields
        .get(idx)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .ok_or_else(|| CalcError::file_error("parse", source, format!("Line {}: missing designation", line)))
}

/// Parse I-section rows (`Designation,D,B,tw,T,R1`) from CSV text.
///
/// `source` is only used in error messages.
pub fn parse_i_sections_csv(text: &str, source: &str) -> CalcResult<Vec<SectionProperties>> {
    let header_line = text
        .lines()
        .next()
        .ok_or_else(|| CalcError::file_error("read", source, "CSV file is empty"))?;
    let header = CsvHeader::parse(header_line);

    let name_idx = header.index("Designation", source)?;
    let d_idx = header.index("D", source)?;
    let b_idx = header.index("B", source)?;
    let tw_idx = header.index("tw", source)?;
    let t_idx = header.index("T", source)?;
    let r1_idx = header.index("R1", source)?;

    let mut sections = Vec::new();
    for (line, fields) in data_rows(text) {
        let section = SectionProperties {
            designation: field_designation(&fields, name_idx, line, source)?,
            depth_mm: field_f64(&fields, d_idx, "D", line, source)?,
            flange_width_mm: field_f64(&fields, b_idx, "B", line, source)?,
            web_thickness_mm: field_f64(&fields, tw_idx, "tw", line, source)?,
            flange_thickness_mm: field_f64(&fields, t_idx, "T", line, source)?,
            root_radius_mm: field_f64(&fields, r1_idx, "R1", line, source)?,
        };
        section.validate()?;
        sections.push(section);
    }
    Ok(sections)
}

/// Parse angle rows (`Designation,A,B,t,R1`) from CSV text.
pub fn parse_angles_csv(text: &str, source: &str) -> CalcResult<Vec<AngleProperties>> {
    let header_line = text
        .lines()
        .next()
        .ok_or_else(|| CalcError::file_error("read", source, "CSV file is empty"))?;
    let header = CsvHeader::parse(header_line);

    let name_idx = header.index("Designation", source)?;
    let a_idx = header.index("A", source)?;
    let b_idx = header.index("B", source)?;
    let t_idx = header.index("t", source)?;
    let r1_idx = header.index("R1", source)?;

    let mut angles = Vec::new();
    for (line, fields) in data_rows(text) {
        let angle = AngleProperties {
            designation: field_designation(&fields, name_idx, line, source)?,
            long_leg_mm: field_f64(&fields, a_idx, "A", line, source)?,
            short_leg_mm: field_f64(&fields, b_idx, "B", line, source)?,
            thickness_mm: field_f64(&fields, t_idx, "t", line, source)?,
            root_radius_mm: field_f64(&fields, r1_idx, "R1", line, source)?,
        };
        angle.validate()?;
        angles.push(angle);
    }
    Ok(angles)
}

/// Parse an optional f64 from a CSV field
///
/// Returns None for empty strings, dashes, or invalid numbers.
fn parse_optional_f64(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed == "—" {
        return None;
    }
    f64::from_str(trimmed).ok()
}

// ============================================================================
// Built-in IS 808 Sections (for use without CSV files)
// ============================================================================

static BUILTIN: Lazy<SectionTable> = Lazy::new(build_is_sections);

/// Shared table of common IS 808 sections.
///
/// A minimal set for demos and tests; load CSV tables for production work.
pub fn builtin_is_sections() -> &'static SectionTable {
    &BUILTIN
}

fn i_section(designation: &str, d: f64, b: f64, tw: f64, t: f64, r1: f64) -> SectionProperties {
    SectionProperties {
        designation: designation.to_string(),
        depth_mm: d,
        flange_width_mm: b,
        web_thickness_mm: tw,
        flange_thickness_mm: t,
        root_radius_mm: r1,
    }
}

fn build_is_sections() -> SectionTable {
    let mut table = SectionTable::new();

    // (designation, D, B, tw, T, R1)
    let beams = [
        ("MB 150", 150.0, 80.0, 4.8, 7.6, 8.0),
        ("MB 175", 175.0, 90.0, 5.5, 8.6, 10.0),
        ("MB 200", 200.0, 100.0, 5.7, 10.8, 11.0),
        ("MB 225", 225.0, 110.0, 6.5, 11.8, 12.0),
        ("MB 250", 250.0, 125.0, 6.9, 12.5, 13.0),
        ("MB 300", 300.0, 140.0, 7.5, 12.4, 14.0),
        ("MB 350", 350.0, 140.0, 8.1, 14.2, 14.0),
        ("MB 400", 400.0, 140.0, 8.9, 16.0, 14.0),
        ("MB 450", 450.0, 150.0, 9.4, 17.4, 15.0),
        ("MB 500", 500.0, 180.0, 10.2, 17.2, 17.0),
        ("MB 550", 550.0, 190.0, 11.2, 19.3, 18.0),
        ("MB 600", 600.0, 210.0, 12.0, 20.8, 20.0),
    ];

    let columns = [
        ("SC 100", 100.0, 100.0, 6.0, 10.0, 12.0),
        ("SC 120", 120.0, 120.0, 6.5, 11.0, 12.0),
        ("SC 140", 140.0, 140.0, 7.0, 12.0, 12.0),
        ("SC 160", 160.0, 160.0, 8.0, 13.0, 15.0),
        ("SC 180", 180.0, 180.0, 8.5, 14.0, 15.0),
        ("SC 200", 200.0, 200.0, 9.0, 15.0, 15.0),
        ("SC 220", 220.0, 220.0, 9.5, 16.0, 18.0),
        ("SC 250", 250.0, 250.0, 10.0, 17.0, 23.0),
        ("HB 150", 150.0, 150.0, 5.4, 9.0, 8.0),
        ("HB 200", 200.0, 200.0, 6.1, 9.0, 9.0),
        ("HB 225", 225.0, 225.0, 6.5, 9.1, 10.0),
        ("HB 250", 250.0, 250.0, 6.9, 9.7, 10.0),
        ("HB 300", 300.0, 250.0, 7.6, 10.6, 11.0),
        ("HB 350", 350.0, 250.0, 8.3, 11.6, 12.0),
        ("HB 400", 400.0, 250.0, 9.1, 12.7, 14.0),
        ("HB 450", 450.0, 250.0, 9.8, 13.7, 15.0),
    ];

    // (designation, A, B, t, R1)
    let angles = [
        ("ISA 20X20X3", 20.0, 20.0, 3.0, 4.5),
        ("ISA 25X25X3", 25.0, 25.0, 3.0, 4.5),
        ("ISA 30X30X3", 30.0, 30.0, 3.0, 5.0),
        ("ISA 35X35X4", 35.0, 35.0, 4.0, 5.0),
        ("ISA 40X40X4", 40.0, 40.0, 4.0, 5.5),
        ("ISA 45X45X5", 45.0, 45.0, 5.0, 5.5),
        ("ISA 50X50X5", 50.0, 50.0, 5.0, 6.0),
        ("ISA 55X55X6", 55.0, 55.0, 6.0, 6.5),
        ("ISA 60X60X6", 60.0, 60.0, 6.0, 6.5),
        ("ISA 65X65X6", 65.0, 65.0, 6.0, 6.5),
        ("ISA 70X70X7", 70.0, 70.0, 7.0, 7.0),
        ("ISA 75X75X8", 75.0, 75.0, 8.0, 7.0),
        ("ISA 80X80X8", 80.0, 80.0, 8.0, 8.0),
        ("ISA 90X90X10", 90.0, 90.0, 10.0, 8.5),
        ("ISA 100X100X10", 100.0, 100.0, 10.0, 8.5),
        ("ISA 75X50X6", 75.0, 50.0, 6.0, 6.5),
        ("ISA 90X60X8", 90.0, 60.0, 8.0, 7.0),
        ("ISA 100X65X8", 100.0, 65.0, 8.0, 8.0),
        ("ISA 100X75X8", 100.0, 75.0, 8.0, 8.5),
        ("ISA 125X75X8", 125.0, 75.0, 8.0, 9.0),
        ("ISA 125X95X10", 125.0, 95.0, 10.0, 9.0),
        ("ISA 150X90X10", 150.0, 90.0, 10.0, 11.0),
        ("ISA 150X115X10", 150.0, 115.0, 10.0, 11.0),
        ("ISA 200X100X10", 200.0, 100.0, 10.0, 12.0),
        ("ISA 200X150X12", 200.0, 150.0, 12.0, 13.5),
        ("ISA 200X150X16", 200.0, 150.0, 16.0, 13.5),
    ];

    for (name, d, b, tw, t, r1) in beams {
        table.beams.insert(normalize_designation(name), i_section(name, d, b, tw, t, r1));
    }
    for (name, d, b, tw, t, r1) in columns {
        table.columns.insert(normalize_designation(name), i_section(name, d, b, tw, t, r1));
    }
    for (name, a, b, t, r1) in angles {
        table.angles.insert(
            normalize_designation(name),
            AngleProperties {
                designation: name.to_string(),
                long_leg_mm: a,
                short_leg_mm: b,
                thickness_mm: t,
                root_radius_mm: r1,
            },
        );
    }

    table.version = Some("builtin-is808".to_string());
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_designation() {
        assert_eq!(normalize_designation("ISA 100X75X8"), "ISA100X75X8");
        assert_eq!(normalize_designation("  isa 100x75x8 "), "ISA100X75X8");
        assert_eq!(normalize_designation("MB450"), "MB450");
    }

    #[test]
    fn test_builtin_lookup() {
        let table = builtin_is_sections();
        assert!(!table.is_empty());

        let beam = table.beam("MB 450").unwrap();
        assert_eq!(beam.web_thickness_mm, 9.4);
        assert_eq!(beam.flange_width_mm, 150.0);

        let column = table.column("sc200").unwrap();
        assert_eq!(column.flange_thickness_mm, 15.0);

        let angle = table.angle("ISA 100X75X8").unwrap();
        assert_eq!(angle.long_leg_mm, 100.0);
        assert_eq!(angle.short_leg_mm, 75.0);
    }

    #[test]
    fn test_builtin_sections_validate() {
        let table = builtin_is_sections();
        assert!(table.beams.values().all(|s| s.validate().is_ok()));
        assert!(table.columns.values().all(|s| s.validate().is_ok()));
        assert!(table.angles.values().all(|a| a.validate().is_ok()));
    }

    #[test]
    fn test_lookup_is_per_table() {
        let table = builtin_is_sections();
        // Column designations are not beams
        let err = table.beam("SC 200").unwrap_err();
        assert_eq!(err, CalcError::section_not_found("beam", "SC 200"));
    }

    #[test]
    fn test_section_not_found() {
        let table = builtin_is_sections();
        assert!(table.angle("ISA 999X999X99").is_err());
    }

    #[test]
    fn test_search_sorted() {
        let table = builtin_is_sections();
        let found = table.search("MB");
        assert_eq!(found.len(), 12);
        assert_eq!(found[0], (SectionKind::Beam, "MB 150"));
        assert_eq!(found[11], (SectionKind::Beam, "MB 600"));

        let angles = table.search("isa 2");
        assert!(angles.iter().all(|(k, _)| *k == SectionKind::Angle));
        assert_eq!(angles.first().map(|(_, d)| *d), Some("ISA 20X20X3"));
    }

    #[test]
    fn test_insert_rejects_bad_dimensions() {
        let mut table = SectionTable::new();
        let result = table.insert_beam(i_section("BAD", 300.0, 140.0, 0.0, 12.4, 14.0));
        assert!(result.is_err());
        assert!(table.is_empty());
    }

    #[test]
    fn test_angle_leg_order() {
        let angle = AngleProperties {
            designation: "ISA 75X100X8".to_string(),
            long_leg_mm: 75.0,
            short_leg_mm: 100.0,
            thickness_mm: 8.0,
            root_radius_mm: 8.5,
        };
        assert!(angle.validate().is_err());
    }

    #[test]
    fn test_insert_section_rejects_angle_kind() {
        let mut table = SectionTable::new();
        let section = i_section("MB 300", 300.0, 140.0, 7.5, 12.4, 14.0);
        assert!(table.insert_section(SectionKind::Angle, section).is_err());
    }

    #[test]
    fn test_parse_i_sections_csv() {
        let csv = "Designation,D,B,tw,T,R1\nMB 300,300,140,7.5,12.4,14\n\nMB 350,350,140,8.1,14.2,14\n";
        let sections = parse_i_sections_csv(csv, "test.csv").unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].designation, "MB 350");
        assert_eq!(sections[1].flange_thickness_mm, 14.2);
        assert_eq!(sections[1].web_thickness_mm, 8.1);
    }

    #[test]
    fn test_parse_i_sections_csv_column_order() {
        let csv = "R1,T,tw,B,D,Designation\n14,12.4,7.5,140,300,MB 300\n";
        let sections = parse_i_sections_csv(csv, "test.csv").unwrap();
        assert_eq!(sections[0].depth_mm, 300.0);
        assert_eq!(sections[0].flange_thickness_mm, 12.4);
        assert_eq!(sections[0].web_thickness_mm, 7.5);
    }

    #[test]
    fn test_parse_angles_csv() {
        let csv = "Designation,A,B,t,R1\nISA 100X75X8,100,75,8,8.5\n";
        let angles = parse_angles_csv(csv, "angles.csv").unwrap();
        assert_eq!(angles.len(), 1);
        assert_eq!(angles[0].thickness_mm, 8.0);
        assert_eq!(angles[0].root_radius_mm, 8.5);
    }

    #[test]
    fn test_parse_csv_reports_line() {
        let csv = "Designation,A,B,t,R1\nISA 100X75X8,100,75,-,8.5\n";
        match parse_angles_csv(csv, "angles.csv") {
            Err(CalcError::FileError { reason, .. }) => assert!(reason.contains("Line 2")),
            other => panic!("expected FileError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_csv_missing_column() {
        let csv = "Designation,D,B,tw,R1\nMB 300,300,140,7.5,14\n";
        assert!(parse_i_sections_csv(csv, "beams.csv").is_err());
    }

    #[test]
    fn test_parse_optional_f64() {
        assert_eq!(parse_optional_f64("123.45"), Some(123.45));
        assert_eq!(parse_optional_f64("  456  "), Some(456.0));
        assert_eq!(parse_optional_f64(""), None);
        assert_eq!(parse_optional_f64("-"), None);
        assert_eq!(parse_optional_f64("not a number"), None);
    }

    #[test]
    fn test_section_json_keys() {
        let beam = builtin_is_sections().beam("MB 300").unwrap();
        let json = serde_json::to_value(&beam).unwrap();
        assert_eq!(json["tw"], 7.5);
        assert_eq!(json["T"], 12.4);
        assert_eq!(json["R1"], 14.0);
    }
}
