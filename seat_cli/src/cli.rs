//! CLI definitions using clap derive API

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Seatcheck - seated angle connection design (IS 800:2007)
#[derive(Parser, Debug)]
#[command(
    name = "seat_cli",
    author,
    version,
    about = "Seated angle connection checks per IS 800:2007",
    after_help = "Examples:\n    \
                  seat_cli check connection.json\n    \
                  seat_cli check batch.json --preferences prefs.json --json\n    \
                  seat_cli check connection.json --angles my_angles.csv\n    \
                  seat_cli demo\n    \
                  seat_cli sections ISA150"
)]
pub struct Cli {
    /// Show debug diagnostics
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check connections from a JSON file (one object or an array)
    Check(CheckArgs),

    /// Run a built-in example connection
    Demo,

    /// List section designations (built-in table plus any CSV files)
    Sections(SectionsArgs),
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Input JSON file
    pub input: PathBuf,

    /// Design preferences JSON (missing keys take code defaults)
    #[arg(long, short = 'p', value_name = "FILE")]
    pub preferences: Option<PathBuf>,

    #[command(flatten)]
    pub sections: SectionFiles,

    /// Print only JSON
    #[arg(long)]
    pub json: bool,
}

/// User CSV tables layered over the built-in IS sections
#[derive(Args, Debug, Default)]
pub struct SectionFiles {
    /// Extra beam sections (CSV: Designation,D,B,tw,T,R1)
    #[arg(long, value_name = "CSV")]
    pub beams: Option<PathBuf>,

    /// Extra column sections (CSV: Designation,D,B,tw,T,R1)
    #[arg(long, value_name = "CSV")]
    pub columns: Option<PathBuf>,

    /// Extra angle sections (CSV: Designation,A,B,t,R1)
    #[arg(long, value_name = "CSV")]
    pub angles: Option<PathBuf>,
}

/// Arguments for the sections command
#[derive(Parser, Debug)]
pub struct SectionsArgs {
    /// Designation prefix, e.g. "MB" or "isa 100"
    #[arg(default_value = "")]
    pub prefix: String,

    #[command(flatten)]
    pub sections: SectionFiles,
}
