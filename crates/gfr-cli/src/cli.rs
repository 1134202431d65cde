//! CLI argument definitions for the GFR slope assessment tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use gfr_model::{PopulationPreference, Race, Sex, SlopeType, StudySize};

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(
    name = "gfr-slope",
    version,
    about = "GFR slope clinical assessment - estimate benefit, hazard ratio and prognosis",
    long_about = "Estimate the GFR slope from two measurements and translate it into a\n\
                  probability of clinical benefit, a hazard ratio and a progression prognosis.\n\n\
                  Thresholds and coefficients follow the Inker et al. (2019) meta-analysis\n\
                  of CKD progression trials."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include patient GFR values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file (default: gfr-slope.toml in the user config directory).
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the GFR slope and its clinical assessment for one patient.
    Assess(AssessArgs),

    /// Print the benefit threshold table and hazard ratio coefficients.
    Thresholds,
}

/// Patient measurements. Numbers are passed through as text so that
/// validation reports them with field-level messages.
#[derive(Parser, Default)]
pub struct AssessArgs {
    /// JSON file with patient input; flags override its fields.
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Baseline GFR (ml/min/1.73m²).
    #[arg(long = "baseline", value_name = "GFR", allow_hyphen_values = true)]
    pub baseline: Option<String>,

    /// Follow-up GFR (ml/min/1.73m²).
    #[arg(long = "follow-up", value_name = "GFR", allow_hyphen_values = true)]
    pub follow_up: Option<String>,

    /// Time between baseline and follow-up, in years.
    #[arg(long = "interval", value_name = "YEARS", allow_hyphen_values = true)]
    pub interval: Option<String>,

    /// Slope basis.
    #[arg(long = "slope-type", value_enum)]
    pub slope_type: Option<SlopeTypeArg>,

    /// GFR at 3 months (required for chronic slopes).
    #[arg(long = "acute", value_name = "GFR", allow_hyphen_values = true)]
    pub acute: Option<String>,

    /// Study-size assumption for the threshold column.
    #[arg(long = "study-size", value_enum)]
    pub study_size: Option<StudySizeArg>,

    /// Population dataset preference (reported only).
    #[arg(long = "population", value_enum)]
    pub population: Option<PopulationArg>,

    /// Patient age in years.
    #[arg(long = "age", value_name = "YEARS", allow_hyphen_values = true)]
    pub age: Option<String>,

    #[arg(long = "sex", value_enum)]
    pub sex: Option<SexArg>,

    #[arg(long = "race", value_enum)]
    pub race: Option<RaceArg>,

    /// Output format (default from settings, else table).
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormatArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SlopeTypeArg {
    Total,
    Chronic,
}

impl From<SlopeTypeArg> for SlopeType {
    fn from(value: SlopeTypeArg) -> Self {
        match value {
            SlopeTypeArg::Total => SlopeType::Total,
            SlopeTypeArg::Chronic => SlopeType::Chronic,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StudySizeArg {
    Large,
    Modest,
    Infinite,
}

impl From<StudySizeArg> for StudySize {
    fn from(value: StudySizeArg) -> Self {
        match value {
            StudySizeArg::Large => StudySize::Large,
            StudySizeArg::Modest => StudySize::Modest,
            StudySizeArg::Infinite => StudySize::Infinite,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PopulationArg {
    Auto,
    Western,
    Asian,
}

impl From<PopulationArg> for PopulationPreference {
    fn from(value: PopulationArg) -> Self {
        match value {
            PopulationArg::Auto => PopulationPreference::Auto,
            PopulationArg::Western => PopulationPreference::Western,
            PopulationArg::Asian => PopulationPreference::Asian,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SexArg {
    Female,
    Male,
}

impl From<SexArg> for Sex {
    fn from(value: SexArg) -> Self {
        match value {
            SexArg::Female => Sex::Female,
            SexArg::Male => Sex::Male,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RaceArg {
    White,
    Black,
    Other,
}

impl From<RaceArg> for Race {
    fn from(value: RaceArg) -> Self {
        match value {
            RaceArg::White => Race::White,
            RaceArg::Black => Race::Black,
            RaceArg::Other => Race::Other,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Table => OutputFormat::Table,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
