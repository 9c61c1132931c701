//! Integration tests for unreadable inputs and malformed definitions.

use predicates::prelude::*;

use crate::logsift;

#[test]
fn missing_log_file_is_reported_and_skipped() {
    logsift()
        .args(["--color=never", "--matchonly"])
        .args(["--log", "tests/fixtures/does-not-exist.log"])
        .args(["--log", "tests/fixtures/app.log"])
        .args(["--keywords", "tests/fixtures/keywords.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "cannot read log file 'tests/fixtures/does-not-exist.log'",
        ))
        .stdout(predicate::str::contains("DISK_ERR sda1"));
}

#[test]
fn no_files_resolved_exits_one() {
    logsift()
        .args(["--log", "tests/fixtures/*.nothing"])
        .args(["--keywords", "tests/fixtures/keywords.txt"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("no files found matching pattern"))
        .stderr(predicate::str::contains("no log files found"));
}

#[test]
fn every_log_file_unreadable_exits_one_without_output() {
    logsift()
        .args(["--color=never"])
        .args(["--log", "tests/fixtures/nope1.log"])
        .args(["--log", "tests/fixtures/nope2.log"])
        .args(["--keywords", "tests/fixtures/keywords.txt"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "cannot read log file 'tests/fixtures/nope1.log'",
        ))
        .stderr(predicate::str::contains(
            "cannot read log file 'tests/fixtures/nope2.log'",
        ))
        .stderr(predicate::str::contains("none of the log files could be read"));
}

#[test]
fn missing_keywords_file_exits_one() {
    logsift()
        .args(["--log", "tests/fixtures/app.log"])
        .args(["--keywords", "tests/fixtures/missing-keywords.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot read keywords file"));
}

#[test]
fn malformed_keyword_lines_reported() {
    let dir = tempfile::tempdir().unwrap();
    let keywords = dir.path().join("keywords.txt");
    std::fs::write(&keywords, "just a comment\nDisk Error:DISK_ERR\na:b:c\n").unwrap();

    logsift()
        .args(["--matchonly", "--log", "tests/fixtures/app.log"])
        .arg("--keywords")
        .arg(&keywords)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "invalid line 1 in keywords file: just a comment",
        ))
        .stderr(predicate::str::contains("invalid line 3 in keywords file: a:b:c"))
        .stdout("2025-01-15 23:39:17,000 GMT+0000 DISK_ERR sda1\n");
}

#[test]
fn invalid_year_rejected_by_parser() {
    logsift()
        .args(["--log", "tests/fixtures/app.log"])
        .args(["--keywords", "tests/fixtures/keywords.txt", "--year", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid year"));
}
