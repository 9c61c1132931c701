//! Command-line argument definitions for `logsift`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use clap_complete::Shell;

use crate::timestamp::TimestampMode;

/// Scan log files for keywords and report every match with its description.
///
/// Matches can be listed per file, merged into one chronological stream
/// across all files, or written to one file per keyword.
#[derive(Debug, Parser)]
#[command(name = "logsift", version, about, long_about = None)]
pub struct Cli {
    /// Log file to scan. Repeatable; wildcards are expanded.
    #[arg(
        short = 'l',
        long = "log",
        value_name = "PATTERN",
        required_unless_present = "completions"
    )]
    pub logs: Vec<String>,

    /// Keyword definitions, one `description:keyword` per line.
    #[arg(
        short = 'k',
        long,
        value_name = "FILE",
        required_unless_present = "completions"
    )]
    pub keywords: Option<PathBuf>,

    /// Merge matches from all files and sort them by timestamp.
    ///
    /// Lines without a recognizable timestamp sort first.
    #[arg(short = 'c', long)]
    pub chrono: bool,

    /// Print only the matched log lines, without headers or descriptions.
    #[arg(short = 'm', long)]
    pub matchonly: bool,

    /// Write the matched lines of each keyword to `<keyword>_matches.csv`.
    #[arg(long)]
    pub keywordfiles: bool,

    /// Directory for `--keywordfiles` output.
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Timestamp extraction strategy.
    ///
    /// `generic` tries a table of common log formats; `gmt` only reads
    /// `YYYY-MM-DD HH:MM:SS,mmm GMT±ZZZZ` lines.
    #[arg(short = 't', long, value_enum)]
    pub timestamp_mode: Option<TimestampMode>,

    /// Year assumed for timestamps without one (`Jan 15 23:39:16`).
    ///
    /// Without it such timestamps are treated as unrecognized.
    #[arg(short = 'y', long, value_name = "YYYY", value_parser = parse_year_arg)]
    pub year: Option<i16>,

    /// Emit one JSON object per match instead of text.
    #[arg(short = 'j', long, conflicts_with = "matchonly")]
    pub json: bool,

    /// Control color output.
    ///
    /// `auto` enables colors only when stdout is a TTY and `NO_COLOR` is unset.
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase diagnostic output on stderr (`-v` info, `-vv` debug).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print shell completions and exit.
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}

/// Parse a four-digit calendar year.
fn parse_year_arg(s: &str) -> Result<i16, String> {
    match s.parse::<i16>() {
        Ok(year) if (1..=9999).contains(&year) => Ok(year),
        _ => Err(format!("invalid year '{s}': expected a value between 1 and 9999")),
    }
}
