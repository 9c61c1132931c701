//! Integration tests for the config file and flag precedence.

use std::io::Write;

use predicates::prelude::*;

use crate::logsift;

#[test]
fn config_file_fallback_year_applies() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "fallback_year = 2025").unwrap();
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("messages");
    std::fs::write(
        &log,
        "Feb 01 00:00:00 host DISK_ERR later\nJan 31 23:59:59 host DISK_ERR earlier\n",
    )
    .unwrap();

    logsift()
        .arg("--config")
        .arg(config.path())
        .args(["--chrono", "--json", "--keywords", "tests/fixtures/keywords.txt"])
        .arg("--log")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""timestamp":"2025-01-31T23:59:59.000""#));
}

#[test]
fn config_file_separator_width() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "separator_width = 12").unwrap();

    let output = logsift()
        .arg("--config")
        .arg(config.path())
        .args(["--color=never", "--log", "tests/fixtures/syslog.log"])
        .args(["--keywords", "tests/fixtures/keywords.txt"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("\n{}\n", "-".repeat(12))));
    assert!(!stdout.contains(&"-".repeat(13)));
}

#[test]
fn cli_color_overrides_config_file() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "color = \"always\"").unwrap();

    logsift()
        .arg("--config")
        .arg(config.path())
        .args(["--color=never", "--log", "tests/fixtures/app.log"])
        .args(["--keywords", "tests/fixtures/keywords.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn config_file_color_always() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "color = \"always\"").unwrap();

    logsift()
        .arg("--config")
        .arg(config.path())
        .args(["--log", "tests/fixtures/app.log"])
        .args(["--keywords", "tests/fixtures/keywords.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["));
}

#[test]
fn invalid_config_file_exits_one() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "fallback_year = \"soon\"").unwrap();

    logsift()
        .arg("--config")
        .arg(config.path())
        .args(["--log", "tests/fixtures/app.log"])
        .args(["--keywords", "tests/fixtures/keywords.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config file error"));
}
