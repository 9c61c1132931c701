//! `logsift` — Scan log files for keywords and merge the matches chronologically.
//!
//! This library provides the core of the `logsift` CLI tool: timestamp
//! extraction from heterogeneous log lines, keyword match collection across
//! files, and the chronological / per-keyword views over the matches.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use std::sync::Arc;
//!
//! use logsift::{Extractor, KeywordMap, TimestampMode, scan_reader, sort_chronological};
//!
//! let keywords = KeywordMap::from_pairs([("AUTH_FAIL", "Auth Failure"), ("DISK_ERR", "Disk Error")]);
//! let log = "2025-01-15 23:39:17,000 DISK_ERR sda1\n2025-01-15 23:39:16,366 AUTH_FAIL user bob\n";
//! let source: Arc<str> = Arc::from("app.log");
//!
//! let mut records = scan_reader(
//!     Cursor::new(log),
//!     &source,
//!     &keywords,
//!     &Extractor::new(TimestampMode::Generic),
//! )
//! .unwrap();
//! sort_chronological(&mut records);
//!
//! assert_eq!(records[0].description, "Auth Failure");
//! assert_eq!(records[1].description, "Disk Error");
//! ```

pub mod cli;
pub mod collect;
pub mod config;
pub mod error;
pub mod input;
pub mod keywords;
pub mod logging;
pub mod order;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod timestamp;

// Re-export primary API types for convenience.
pub use collect::{MatchCollection, MatchRecord, SkippedFile, collect, scan_reader};
pub use config::Config;
pub use error::LogsiftError;
pub use keywords::KeywordMap;
pub use order::{KeywordPartition, partition_by_keyword, sort_chronological};
pub use timestamp::{Extractor, Timestamp, TimestampMode};
