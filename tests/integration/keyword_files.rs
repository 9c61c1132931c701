//! Integration tests for `--keywordfiles`.

use predicates::prelude::*;

use crate::logsift;

#[test]
fn writes_one_file_per_matched_keyword() {
    let out_dir = tempfile::tempdir().unwrap();
    let keywords = out_dir.path().join("keywords.txt");
    std::fs::write(&keywords, "Auth Failure:AUTH_FAIL\nDisk Error:DISK_ERR\nUnused:NEVER_SEEN\n")
        .unwrap();

    logsift()
        .args(["--keywordfiles", "--log", "tests/fixtures/app.log"])
        .arg("--keywords")
        .arg(&keywords)
        .arg("--output-dir")
        .arg(out_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Writing 1 matches for keyword 'AUTH_FAIL'",
        ));

    let auth = std::fs::read_to_string(out_dir.path().join("AUTH_FAIL_matches.csv")).unwrap();
    assert_eq!(auth, "2025-01-15 23:39:16,366 GMT+0000 AUTH_FAIL user bob\n");
    let disk = std::fs::read_to_string(out_dir.path().join("DISK_ERR_matches.csv")).unwrap();
    assert_eq!(disk, "2025-01-15 23:39:17,000 GMT+0000 DISK_ERR sda1\n");
    assert!(!out_dir.path().join("NEVER_SEEN_matches.csv").exists());
}

#[test]
fn line_with_two_keywords_lands_twice_in_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("both.log");
    std::fs::write(&log, "AUTH_FAIL followed by DISK_ERR\n").unwrap();

    logsift()
        .args(["--keywordfiles", "--keywords", "tests/fixtures/keywords.txt"])
        .arg("--log")
        .arg(&log)
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Writing 2 matches for keyword 'AUTH_FAIL'"))
        .stdout(predicate::str::contains("Writing 2 matches for keyword 'DISK_ERR'"));

    for name in ["AUTH_FAIL_matches.csv", "DISK_ERR_matches.csv"] {
        let content = std::fs::read_to_string(dir.path().join(name)).unwrap();
        assert_eq!(
            content,
            "AUTH_FAIL followed by DISK_ERR\nAUTH_FAIL followed by DISK_ERR\n"
        );
    }
}
