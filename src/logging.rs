//! Diagnostic logging on stderr.
//!
//! Library code emits [`tracing`] events; the binary installs a
//! `tracing-subscriber` formatter here. `RUST_LOG` takes precedence over the
//! `-v` count.

use std::io;

use tracing_subscriber::{EnvFilter, fmt};

/// Default filter directive for a `-v` count.
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber. Safe to call once per process.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
