//! CLI integration tests for the `logsift` binary.

mod chronological;
mod config_custom;
mod errors;
mod keyword_files;

use assert_cmd::Command;

#[allow(deprecated)]
pub fn logsift() -> Command {
    let mut cmd = Command::cargo_bin("logsift").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/logsift-test-no-config");
    cmd.env_remove("RUST_LOG");
    cmd
}
