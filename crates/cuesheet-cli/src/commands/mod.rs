use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI for inspecting, validating and rewriting CUE sheets.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Info(InfoCommand),
    Json(JsonCommand),
    Cue(CueCommand),
    Timeline(TimelineCommand),
    Validate(ValidateCommand),
}

/// Prints a human-readable summary of a CUE sheet.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct InfoCommand {
    /// Input CUE file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// Dumps the parse result, including diagnostics, as JSON.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct JsonCommand {
    /// Input CUE file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// Re-writes a CUE sheet in canonical form.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
#[command(
    long_about = "Re-writes a CUE sheet in canonical form\n\nTracks are indented with two tabs and their fields with three, which is what rekordbox expects. Consecutive tracks sharing a file get a single FILE line."
)]
pub struct CueCommand {
    /// Input CUE file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file path, prints to stdout if omitted
    #[arg(long, short = 'o', value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Only keep titles, performers, files and INDEX 01
    #[arg(long, short = 'm', default_value_t = false, conflicts_with_all = ["indent", "spacing"])]
    pub minimal: bool,

    /// Indentation unit, repeated twice for TRACK lines and three times for track fields
    #[arg(long, value_name = "INDENT")]
    pub indent: Option<String>,

    /// Insert a blank line before every track
    #[arg(long, short = 's', default_value_t = false)]
    pub spacing: bool,

    /// Force overwrite of the output file if it already exists
    #[arg(long, short = 'f', default_value_t = false)]
    pub force: bool,
}

/// Lists tracks as `HH:MM:SS performer - title`.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct TimelineCommand {
    /// Input CUE file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// Checks a CUE sheet and exits with an error status if it has errors.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct ValidateCommand {
    /// Input CUE file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}
