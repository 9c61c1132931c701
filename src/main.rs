use std::io::{self, BufWriter, IsTerminal, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use logsift::cli::{Cli, ColorMode};
use logsift::config::Config;
use logsift::error::LogsiftError;
use logsift::input::expand_log_patterns;
use logsift::keywords::KeywordMap;
use logsift::logging;
use logsift::pipeline;

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so `logsift ... | head` terminates
    // quietly instead of failing with a BrokenPipe write error.
    reset_sigpipe();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "logsift", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(LogsiftError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("logsift: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), LogsiftError> {
    let config = Config::from_cli(cli)?;
    let use_color = resolve_color_mode(config.color_mode);

    let resolved = expand_log_patterns(&config.log_patterns)?;
    for pattern in &resolved.unmatched {
        eprintln!("logsift: warning: no files found matching pattern '{pattern}'");
    }
    if resolved.files.is_empty() {
        return Err(LogsiftError::NoInputFiles);
    }

    let (keywords, rejected) = KeywordMap::load(&config.keywords_path)?;
    for line in &rejected {
        eprintln!(
            "logsift: invalid line {} in keywords file: {}",
            line.line_number, line.text
        );
    }

    let collection = pipeline::scan(&resolved.files, &keywords, &config);
    for skipped in &collection.skipped {
        eprintln!(
            "logsift: cannot read log file '{}': {}",
            skipped.path.display(),
            skipped.error
        );
    }
    if collection.skipped.len() == resolved.files.len() {
        return Err(LogsiftError::NoReadableFiles);
    }

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let report = pipeline::emit(collection, &keywords, &config, use_color, &mut writer)?;
    writer.flush()?;
    tracing::debug!(
        matches = report.matches,
        keyword_files = report.written.len(),
        "run finished"
    );

    Ok(())
}

fn resolve_color_mode(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            let stdout = io::stdout();
            if !stdout.is_terminal() {
                return false;
            }
            if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                return false;
            }
            if std::env::var("TERM").is_ok_and(|v| v == "dumb") {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some_and(|v| !v.is_empty()) {
                return true;
            }
            true
        }
    }
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// For a CLI whose output is routinely piped into `head` or `less`,
/// restoring `SIG_DFL` lets the OS end the process normally.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
