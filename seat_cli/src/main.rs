//! # Seatcheck CLI
//!
//! Command-line front end for `seat_core`: reads connection inputs as JSON,
//! runs the seated angle checks and prints a summary followed by the JSON
//! result.
//!
//! Exit status: 0 when every connection is safe, 2 when any is unsafe,
//! 1 on an input or lookup error.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use serde::Deserialize;

use seat_core::calculations::seated_angle::{
    check, check_all, AngleInput, BoltInput, BoltType, Connectivity, LoadInput, MemberInput,
    SeatedAngleInput, SeatedAngleResult,
};
use seat_core::diagnostics::Level;
use seat_core::sections::SectionKind;
use seat_core::{builtin_is_sections, CalcError, CalcResult, Check, DesignPreferences, SectionTable};

mod cli;

use cli::{CheckArgs, Cli, Commands, SectionFiles, SectionsArgs};

/// A check file holds one connection or an array of them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InputFile {
    Batch(Vec<SeatedAngleInput>),
    Single(Box<SeatedAngleInput>),
}

impl InputFile {
    fn into_vec(self) -> Vec<SeatedAngleInput> {
        match self {
            InputFile::Batch(inputs) => inputs,
            InputFile::Single(input) => vec![*input],
        }
    }
}

fn path_str(path: &Path) -> String {
    path.display().to_string()
}

fn read_inputs(path: &Path) -> CalcResult<Vec<SeatedAngleInput>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path_str(path), e.to_string()))?;
    let file: InputFile = serde_json::from_str(&text)?;
    Ok(file.into_vec())
}

/// Built-in IS tables, extended by any user CSV files
fn section_table(args: &SectionFiles) -> CalcResult<SectionTable> {
    let mut table = builtin_is_sections().clone();
    if let Some(path) = &args.beams {
        let count = table.load_i_sections_csv(&path_str(path), SectionKind::Beam)?;
        log::info!("Loaded {} beam sections from {}", count, path.display());
    }
    if let Some(path) = &args.columns {
        let count = table.load_i_sections_csv(&path_str(path), SectionKind::Column)?;
        log::info!("Loaded {} column sections from {}", count, path.display());
    }
    if let Some(path) = &args.angles {
        let count = table.load_angles_csv(&path_str(path))?;
        log::info!("Loaded {} angles from {}", count, path.display());
    }
    Ok(table)
}

fn run_check(args: &CheckArgs) -> CalcResult<bool> {
    let prefs = match &args.preferences {
        Some(path) => DesignPreferences::load(&path_str(path))?,
        None => DesignPreferences::default(),
    };
    let table = section_table(&args.sections)?;
    let inputs = read_inputs(&args.input)?;

    let results = check_all(&inputs, &prefs, &table);
    let mut all_safe = true;
    let mut json_items = Vec::with_capacity(results.len());

    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(result) => {
                all_safe &= result.safe;
                if !args.json {
                    print_summary(&inputs[index], &result);
                }
                json_items.push(serde_json::to_value(&result)?);
            }
            Err(e) => {
                all_safe = false;
                eprintln!("Error in connection {}: {}", index + 1, e);
                json_items.push(serde_json::to_value(&e)?);
            }
        }
    }

    let output = if json_items.len() == 1 {
        json_items.remove(0)
    } else {
        serde_json::Value::Array(json_items)
    };
    if !args.json {
        println!();
        println!("JSON Output:");
    }
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(all_safe)
}

fn demo_input() -> SeatedAngleInput {
    SeatedAngleInput {
        label: "Demo".to_string(),
        member: MemberInput {
            connectivity: Connectivity::ColumnFlangeBeamWeb,
            beam_section: "MB 300".to_string(),
            column_section: "SC 250".to_string(),
            fu_mpa: 410.0,
            fy_mpa: 250.0,
        },
        load: LoadInput { shear_force_kn: 50.0 },
        bolt: BoltInput {
            diameter_mm: 20.0,
            bolt_type: BoltType::BlackBolt,
            grade: 4.6,
        },
        angle: AngleInput {
            angle_section: "ISA 150X115X10".to_string(),
        },
    }
}

fn run_demo() -> CalcResult<bool> {
    let input = demo_input();
    let result = check(&input, &DesignPreferences::default(), builtin_is_sections())?;
    print_summary(&input, &result);
    println!();
    println!("JSON Output:");
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(result.safe)
}

fn run_sections(args: &SectionsArgs) -> CalcResult<()> {
    let table = section_table(&args.sections)?;
    let found = table.search(&args.prefix);
    if found.is_empty() {
        println!("No sections match '{}'", args.prefix);
        return Ok(());
    }
    for (kind, designation) in found {
        println!("{:<8} {}", kind.as_str(), designation);
    }
    Ok(())
}

fn print_summary(input: &SeatedAngleInput, result: &SeatedAngleResult) {
    let seat = &result.seat_angle;
    let bolt = &result.bolt;

    println!("═══════════════════════════════════════");
    if result.label.is_empty() {
        println!("  SEATED ANGLE CONNECTION");
    } else {
        println!("  SEATED ANGLE CONNECTION: {}", result.label);
    }
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Connectivity: {}", input.member.connectivity);
    println!("  Beam:         {}", input.member.beam_section);
    println!("  Support:      {}", input.member.column_section);
    println!("  Seat angle:   {}", input.angle.angle_section);
    println!("  Shear:        {:.1} kN", input.load.shear_force_kn);
    println!(
        "  Bolts:        M{:.0} grade {} ({:?})",
        input.bolt.diameter_mm, input.bolt.grade, input.bolt.bolt_type
    );
    println!();
    println!("Bolts:");
    println!(
        "  Value:    {:.2} kN (shear {:.2}, bearing {:.2})",
        bolt.bolt_value_kn, bolt.shear_capacity_kn, bolt.bearing_capacity_kn
    );
    println!(
        "  Layout:   {} x {} = {} (required {})",
        bolt.rows, bolt.columns, bolt.bolts_provided, bolt.bolts_required
    );
    println!(
        "  Gauge:    {:.0} mm {}",
        bolt.gauge_mm,
        status_icon(!has_failed(result, Check::BoltGauge))
    );
    println!(
        "  Pitch:    {:.0} mm {}",
        bolt.pitch_mm,
        status_icon(!has_failed(result, Check::BoltPitch))
    );
    println!(
        "  End/edge: {:.0}/{:.1} mm {}",
        bolt.end_distance_mm,
        bolt.edge_distance_provided_mm,
        status_icon(!has_failed(result, Check::BoltEdgeDistance))
    );
    println!();
    println!("Seat Checks:");
    println!(
        "  Leg length:  {:.1} mm required {}",
        seat.outstanding_leg_required_mm,
        status_icon(!has_failed(result, Check::OutstandingLegLength))
    );
    println!(
        "  Leg shear:   {:.1}/{:.1} kN {}",
        seat.shear_demand_kn,
        seat.shear_capacity_kn,
        status_icon(!has_failed(result, Check::OutstandingLegShear))
    );
    println!(
        "  Leg moment:  {:.1}/{:.1} kN-mm {}",
        seat.moment_demand_knmm,
        seat.moment_capacity_knmm,
        status_icon(!has_failed(result, Check::OutstandingLegMoment))
    );
    println!(
        "  Beam shear:  {:.1}/{:.1} kN {}",
        seat.shear_demand_kn,
        seat.beam_shear_strength_kn,
        status_icon(!has_failed(result, Check::BeamShear))
    );
    println!("  Top angle:   {}", seat.top_angle);

    let notes: Vec<_> = result.diagnostics_at(Level::Info).collect();
    if !notes.is_empty() {
        println!();
        println!("Diagnostics:");
        for diagnostic in notes {
            println!("  {}", diagnostic);
        }
    }

    println!();
    println!("═══════════════════════════════════════");
    println!("  RESULT: {}", if result.passes() { "SAFE" } else { "UNSAFE" });
    println!("═══════════════════════════════════════");
}

fn has_failed(result: &SeatedAngleResult, check: Check) -> bool {
    result.failed_checks().contains(&check)
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match &cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Demo => run_demo(),
        Commands::Sections(args) => run_sections(args).map(|()| true),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_file_single_or_batch() {
        let single = serde_json::to_string(&demo_input()).unwrap();
        let file: InputFile = serde_json::from_str(&single).unwrap();
        assert_eq!(file.into_vec().len(), 1);

        let batch = format!("[{},{}]", single, single);
        let file: InputFile = serde_json::from_str(&batch).unwrap();
        assert_eq!(file.into_vec().len(), 2);
    }

    #[test]
    fn test_demo_is_safe() {
        let result = check(&demo_input(), &DesignPreferences::default(), builtin_is_sections()).unwrap();
        assert!(result.safe, "diagnostics: {:?}", result.diagnostics);
    }

    #[test]
    fn test_status_lines_follow_failed_checks() {
        let mut input = demo_input();
        input.member.column_section = "HB 200".to_string();
        input.angle.angle_section = "ISA 200X150X12".to_string();
        input.bolt.diameter_mm = 12.0;
        input.load.shear_force_kn = 100.0;
        let result = check(&input, &DesignPreferences::default(), builtin_is_sections()).unwrap();

        assert!(!result.safe);
        assert!(has_failed(&result, Check::BoltPitch));
        assert!(!has_failed(&result, Check::BeamShear));

        let demo = check(&demo_input(), &DesignPreferences::default(), builtin_is_sections()).unwrap();
        assert!(demo.failed_checks().is_empty());
        assert!(!has_failed(&demo, Check::BoltPitch));
    }
}
