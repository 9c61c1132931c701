//! Integration tests for `--chrono` merging across files.

use predicates::prelude::*;

use crate::logsift;

#[test]
fn merges_matches_from_all_files_by_time() {
    let output = logsift()
        .args(["--chrono", "--matchonly"])
        .args(["--log", "tests/fixtures/app.log", "--log", "tests/fixtures/syslog.log"])
        .args(["--keywords", "tests/fixtures/keywords.txt"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "no timestamp here AUTH_FAIL user alice",
            "2025-01-15 23:39:16,366 GMT+0000 AUTH_FAIL user bob",
            "2025-01-15 23:39:17,000 GMT+0000 DISK_ERR sda1",
            "Jan 15 23:39:18 2025 kernel: DISK_ERR sdb",
        ]
    );
}

#[test]
fn order_does_not_depend_on_file_argument_order() {
    let forward = logsift()
        .args(["--chrono", "--matchonly"])
        .args(["--log", "tests/fixtures/app.log", "--log", "tests/fixtures/syslog.log"])
        .args(["--keywords", "tests/fixtures/keywords.txt"])
        .output()
        .unwrap();
    let reverse = logsift()
        .args(["--chrono", "--matchonly"])
        .args(["--log", "tests/fixtures/syslog.log", "--log", "tests/fixtures/app.log"])
        .args(["--keywords", "tests/fixtures/keywords.txt"])
        .output()
        .unwrap();
    assert_eq!(forward.stdout, reverse.stdout);
}

#[test]
fn file_header_repeats_when_source_changes() {
    let output = logsift()
        .args(["--color=never", "--chrono"])
        .args(["--log", "tests/fixtures/app.log", "--log", "tests/fixtures/syslog.log"])
        .args(["--keywords", "tests/fixtures/keywords.txt"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Matches in chronological order:"));
    assert_eq!(stdout.matches("From file: tests/fixtures/syslog.log").count(), 2);
    assert_eq!(stdout.matches("From file: tests/fixtures/app.log").count(), 1);
}

#[test]
fn auth_fail_listed_before_disk_err() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("scenario.log");
    std::fs::write(
        &log,
        "2025-01-15 23:39:16,366 GMT+0000 AUTH_FAIL user bob\n2025-01-15 23:39:17,000 GMT+0000 DISK_ERR sda1\n",
    )
    .unwrap();

    let output = logsift()
        .args(["--color=never", "--chrono", "--timestamp-mode", "gmt"])
        .arg("--log")
        .arg(&log)
        .args(["--keywords", "tests/fixtures/keywords.txt"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let auth = stdout.find("Description: Auth Failure").unwrap();
    let disk = stdout.find("Description: Disk Error").unwrap();
    assert!(auth < disk);
}

#[test]
fn year_flag_resolves_year_less_syslog() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("messages");
    std::fs::write(
        &log,
        "Mar 02 10:00:00 host app: DISK_ERR later\nJan 15 09:00:00 host app: DISK_ERR earlier\n",
    )
    .unwrap();

    logsift()
        .args(["--chrono", "--matchonly", "--year", "2025"])
        .arg("--log")
        .arg(&log)
        .args(["--keywords", "tests/fixtures/keywords.txt"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Jan 15 09:00:00 host app: DISK_ERR earlier\n",
        ));
}

#[test]
fn chrono_without_matches_prints_no_heading() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("quiet.log");
    std::fs::write(&log, "nothing to see\n").unwrap();

    logsift()
        .args(["--color=never", "--chrono"])
        .arg("--log")
        .arg(&log)
        .args(["--keywords", "tests/fixtures/keywords.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matches in chronological order").not());
}
