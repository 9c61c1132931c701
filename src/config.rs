//! Configuration management with TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`~/.config/logsift/config.toml` or `$XDG_CONFIG_HOME/logsift/config.toml`)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::{Cli, ColorMode};
use crate::error::LogsiftError;
use crate::timestamp::{Extractor, TimestampMode};

/// Runtime configuration merged from defaults, config file, and CLI arguments.
///
/// Use [`Config::from_cli`] to build from parsed CLI arguments, or
/// [`Config::default`] for built-in defaults (useful in tests and benchmarks).
#[derive(Debug, Clone)]
pub struct Config {
    /// Log path patterns, in argument order.
    pub log_patterns: Vec<String>,
    /// Keyword-definition file.
    pub keywords_path: PathBuf,
    /// Color output mode (auto/always/never).
    pub color_mode: ColorMode,
    /// Timestamp extraction strategy.
    pub timestamp_mode: TimestampMode,
    /// Year assumed for year-less timestamps; `None` leaves them unparsed.
    pub fallback_year: Option<i16>,
    /// Merge all matches into one chronological stream.
    pub chronological: bool,
    /// Print only matched lines.
    pub match_only: bool,
    /// Write one file per keyword instead of printing matches.
    pub keyword_files: bool,
    /// Directory receiving per-keyword files.
    pub output_dir: PathBuf,
    /// Emit JSON lines.
    pub json_output: bool,
    /// Width of the separator line between matches.
    pub separator_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_patterns: Vec::new(),
            keywords_path: PathBuf::new(),
            color_mode: ColorMode::Auto,
            timestamp_mode: TimestampMode::Generic,
            fallback_year: None,
            chronological: false,
            match_only: false,
            keyword_files: false,
            output_dir: PathBuf::from("."),
            json_output: false,
            separator_width: 80,
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > config file > defaults. A config file named
    /// with `--config` must exist; the default location is optional.
    pub fn from_cli(cli: &Cli) -> Result<Self, LogsiftError> {
        let mut config = Self::default();

        match cli.config {
            Some(ref path) => {
                if !path.exists() {
                    return Err(LogsiftError::Config(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
                config.apply_file_config(FileConfig::load(path)?)?;
            }
            None => {
                let path = Self::default_config_path();
                if path.exists() {
                    config.apply_file_config(FileConfig::load(&path)?)?;
                }
            }
        }

        // CLI overrides
        config.log_patterns.clone_from(&cli.logs);
        if let Some(ref path) = cli.keywords {
            config.keywords_path.clone_from(path);
        }
        if let Some(color) = cli.color {
            config.color_mode = color;
        }
        if let Some(mode) = cli.timestamp_mode {
            config.timestamp_mode = mode;
        }
        if cli.year.is_some() {
            config.fallback_year = cli.year;
        }
        if let Some(ref dir) = cli.output_dir {
            config.output_dir.clone_from(dir);
        }

        config.chronological = cli.chrono;
        config.match_only = cli.matchonly;
        config.keyword_files = cli.keywordfiles;
        config.json_output = cli.json;

        Ok(config)
    }

    /// The timestamp extractor this configuration describes.
    pub fn extractor(&self) -> Extractor {
        let extractor = Extractor::new(self.timestamp_mode);
        match self.fallback_year {
            Some(year) => extractor.with_fallback_year(year),
            None => extractor,
        }
    }

    /// Default config file path: `$XDG_CONFIG_HOME/logsift/config.toml` or `~/.config/logsift/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("logsift").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("logsift")
                .join("config.toml")
        } else {
            PathBuf::from(".config/logsift/config.toml")
        }
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: FileConfig) -> Result<(), LogsiftError> {
        if let Some(color) = file.color {
            self.color_mode = match color.as_str() {
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => ColorMode::Auto,
            };
        }

        if let Some(mode) = file.timestamp_mode {
            self.timestamp_mode = mode;
        }

        if let Some(year) = file.fallback_year {
            if !(1..=9999).contains(&year) {
                return Err(LogsiftError::Config(format!(
                    "fallback_year {year} is outside 1..=9999"
                )));
            }
            self.fallback_year = Some(year);
        }

        if let Some(dir) = file.output_dir {
            self.output_dir = dir;
        }

        if let Some(width) = file.separator_width {
            self.separator_width = width;
        }

        Ok(())
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    color: Option<String>,
    timestamp_mode: Option<TimestampMode>,
    fallback_year: Option<i16>,
    output_dir: Option<PathBuf>,
    separator_width: Option<usize>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, LogsiftError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LogsiftError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
