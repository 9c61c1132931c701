//! Timestamp extraction from raw log lines.
//!
//! Log lines carry their time in many shapes. The [`Extractor`] tries an
//! ordered table of patterns against the start of each line and returns the
//! first one that parses. Nothing here fails loudly: a line whose time cannot
//! be recovered yields `None`, which callers map to [`Timestamp::EARLIEST`].

use std::fmt;

use clap::ValueEnum;
use jiff::civil::DateTime;
use jiff::fmt::strtime::{self, BrokenDownTime};
use serde::Deserialize;

/// Point in time recovered from a log line.
///
/// Wraps a [`jiff::civil::DateTime`] holding wall-clock time. Values parsed
/// with an explicit UTC offset are normalized to UTC first, everything else is
/// compared as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    value: DateTime,
}

impl Timestamp {
    /// Sentinel for lines without a recognizable timestamp. Sorts before every
    /// parsed value.
    pub const EARLIEST: Self = Self {
        value: DateTime::MIN,
    };

    pub const fn new(value: DateTime) -> Self {
        Self { value }
    }

    /// The underlying civil date and time.
    pub const fn value(self) -> DateTime {
        self.value
    }

    /// Whether this is the [`EARLIEST`](Self::EARLIEST) sentinel.
    pub fn is_earliest(self) -> bool {
        self == Self::EARLIEST
    }

    /// Format the timestamp using the given strftime-compatible format string.
    pub fn format_with(self, format: &str) -> String {
        self.value.strftime(format).to_string()
    }

    /// Format the timestamp using the default format (`YYYY-MM-DDTHH:MM:SS.mmm`).
    pub fn format_display(self) -> String {
        self.format_with("%Y-%m-%dT%H:%M:%S%.3f")
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_earliest() {
            f.write_str("-")
        } else {
            write!(f, "{}", self.format_display())
        }
    }
}

/// Which extraction strategy a run uses.
///
/// The two modes are alternatives, never chained: a run selects one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TimestampMode {
    /// Delimited-field heuristic followed by the generic pattern table.
    #[default]
    Generic,
    /// Only `YYYY-MM-DD HH:MM:SS,mmm GMT±ZZZZ` lines.
    #[value(name = "gmt")]
    #[serde(rename = "gmt")]
    GmtFixed,
}

/// Format of the timestamp column in comma-delimited lines (4th field).
const DELIMITED_FIELD_FORMAT: &str = "%d/%m/%Y %I:%M:%S %p";

/// Index of the timestamp column in comma-delimited lines.
const DELIMITED_FIELD_INDEX: usize = 3;

/// Number of leading whitespace tokens considered by the generic patterns.
const PREFIX_TOKENS: usize = 6;

/// How the parsed fields of a pattern become a [`Timestamp`].
#[derive(Debug, Clone, Copy)]
enum Resolve {
    /// Date and time are complete.
    Civil,
    /// Carries a UTC offset; normalized to UTC.
    Offset,
    /// No year; needs the configured fallback year.
    YearLess,
}

/// One entry of the generic pattern table.
struct Pattern {
    format: &'static str,
    /// Whitespace-separated tokens the pattern spans.
    tokens: usize,
    resolve: Resolve,
}

/// Generic patterns, tried in order. First success wins.
const PATTERNS: &[Pattern] = &[
    // 2025-01-15 23:39:16,366
    Pattern {
        format: "%Y-%m-%d %H:%M:%S,%f",
        tokens: 2,
        resolve: Resolve::Civil,
    },
    // 2025-01-15T23:39:16.366Z
    Pattern {
        format: "%Y-%m-%dT%H:%M:%S.%fZ",
        tokens: 1,
        resolve: Resolve::Civil,
    },
    // Jan 15 23:39:16 2025
    Pattern {
        format: "%b %d %H:%M:%S %Y",
        tokens: 4,
        resolve: Resolve::Civil,
    },
    // 15/Jan/2025:23:39:16 +0000
    Pattern {
        format: "%d/%b/%Y:%H:%M:%S %z",
        tokens: 2,
        resolve: Resolve::Offset,
    },
    // Wed Jan 15 23:39:16 2025
    Pattern {
        format: "%a %b %d %H:%M:%S %Y",
        tokens: 5,
        resolve: Resolve::Civil,
    },
    // 2025/01/15 23:39:16
    Pattern {
        format: "%Y/%m/%d %H:%M:%S",
        tokens: 2,
        resolve: Resolve::Civil,
    },
    // 15-Jan-2025 23:39:16
    Pattern {
        format: "%d-%b-%Y %H:%M:%S",
        tokens: 2,
        resolve: Resolve::Civil,
    },
    // Jan 15 23:39:16
    Pattern {
        format: "%b %d %H:%M:%S",
        tokens: 3,
        resolve: Resolve::YearLess,
    },
];

/// Recovers a [`Timestamp`] from a raw log line.
///
/// Configured once per run and shared by reference. The extractor never reads
/// the system clock: year-less timestamps are only resolved when a fallback
/// year was supplied with [`with_fallback_year`](Self::with_fallback_year).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extractor {
    mode: TimestampMode,
    fallback_year: Option<i16>,
}

impl Extractor {
    pub const fn new(mode: TimestampMode) -> Self {
        Self {
            mode,
            fallback_year: None,
        }
    }

    /// Year assumed for `Mon DD HH:MM:SS` timestamps.
    #[must_use]
    pub const fn with_fallback_year(mut self, year: i16) -> Self {
        self.fallback_year = Some(year);
        self
    }

    pub const fn mode(&self) -> TimestampMode {
        self.mode
    }

    pub const fn fallback_year(&self) -> Option<i16> {
        self.fallback_year
    }

    /// Extract the timestamp of `line`, or `None` when no strategy matches.
    pub fn extract(&self, line: &str) -> Option<Timestamp> {
        match self.mode {
            TimestampMode::Generic => {
                parse_delimited_field(line).or_else(|| self.parse_prefix(line))
            }
            TimestampMode::GmtFixed => parse_gmt_fixed(line),
        }
    }

    /// Like [`extract`](Self::extract), falling back to [`Timestamp::EARLIEST`].
    pub fn extract_or_earliest(&self, line: &str) -> Timestamp {
        self.extract(line).unwrap_or(Timestamp::EARLIEST)
    }

    /// Try the generic pattern table against the leading tokens of `line`.
    fn parse_prefix(&self, line: &str) -> Option<Timestamp> {
        let tokens: Vec<&str> = line.split_whitespace().take(PREFIX_TOKENS).collect();
        if tokens.is_empty() {
            return None;
        }

        PATTERNS.iter().find_map(|pattern| {
            let candidate = tokens.get(..pattern.tokens)?.join(" ");
            self.apply(pattern, &candidate)
        })
    }

    fn apply(&self, pattern: &Pattern, candidate: &str) -> Option<Timestamp> {
        let mut parsed = strtime::parse(pattern.format, candidate).ok()?;
        let value = match pattern.resolve {
            Resolve::Civil => parsed.to_datetime().ok()?,
            Resolve::Offset => to_utc_datetime(&parsed)?,
            Resolve::YearLess => {
                parsed.set_year(Some(self.fallback_year?)).ok()?;
                parsed.to_datetime().ok()?
            }
        };
        Some(Timestamp::new(value))
    }
}

/// Comma-delimited lines keep a 12-hour `day/month/year` time in the 4th field.
fn parse_delimited_field(line: &str) -> Option<Timestamp> {
    if !line.contains(',') {
        return None;
    }
    let field = line.split(',').nth(DELIMITED_FIELD_INDEX)?.trim();
    DateTime::strptime(DELIMITED_FIELD_FORMAT, field)
        .ok()
        .map(Timestamp::new)
}

/// `YYYY-MM-DD HH:MM:SS,mmm GMT±ZZZZ`: cut at `" GMT"`, then read the comma as
/// the fractional-second separator. The offset is discarded.
fn parse_gmt_fixed(line: &str) -> Option<Timestamp> {
    let head = line.find(" GMT").map_or(line, |pos| &line[..pos]);
    let normalized = head.replace(',', ".");
    DateTime::strptime("%Y-%m-%d %H:%M:%S%.f", &normalized)
        .ok()
        .map(Timestamp::new)
}

fn to_utc_datetime(parsed: &BrokenDownTime) -> Option<DateTime> {
    let ts = parsed.to_timestamp().ok()?;
    Some(ts.to_zoned(jiff::tz::TimeZone::UTC).datetime())
}
