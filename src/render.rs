//! Console rendering of match lists.
//!
//! Four views over the same records:
//! - per file: matches grouped under a `From file:` header
//! - chronological: one merged stream, with a file header whenever the source
//!   changes between consecutive matches
//! - match-only: bare log lines
//! - JSON lines: one object per match
//!
//! Each entry is formatted into a reusable `String` buffer and then written
//! out, so large match lists are never rendered in one piece.

use std::fmt::Write as _;
use std::io::{self, Write};

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::collect::MatchRecord;
use crate::error::LogsiftError;
use crate::keywords::KeywordMap;
use crate::order;

/// Which shape the console output takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    ByFile,
    Chronological,
    MatchOnly,
    Json,
}

/// Presentation settings shared by all views.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub use_color: bool,
    pub separator_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            use_color: false,
            separator_width: 80,
        }
    }
}

/// Write `records` to `writer` in the given view.
///
/// `records` must already be in the order the view expects: collection order
/// for [`View::ByFile`], sorted for [`View::Chronological`].
pub fn render<W: Write>(
    records: &[MatchRecord],
    view: View,
    options: RenderOptions,
    writer: &mut W,
) -> Result<(), LogsiftError> {
    let mut buf = String::new();

    match view {
        View::ByFile => {
            writeln!(writer, "Occurrences of keywords in log files:")?;
            for group in order::group_by_source(records) {
                buf.clear();
                format_file_header(&group.source, options, &mut buf);
                writer.write_all(buf.as_bytes())?;
                for record in group.records {
                    buf.clear();
                    format_entry(record, options, &mut buf);
                    writer.write_all(buf.as_bytes())?;
                }
            }
        }
        View::Chronological => {
            if records.is_empty() {
                return Ok(());
            }
            writeln!(writer, "\nMatches in chronological order:")?;
            let mut current: Option<&str> = None;
            for record in records {
                buf.clear();
                if current != Some(&*record.source) {
                    format_file_header(&record.source, options, &mut buf);
                    current = Some(&*record.source);
                }
                format_entry(record, options, &mut buf);
                writer.write_all(buf.as_bytes())?;
            }
        }
        View::MatchOnly => {
            for record in records {
                writeln!(writer, "{}", record.line)?;
            }
        }
        View::Json => {
            for record in records {
                serde_json::to_writer(&mut *writer, &JsonRecord::from(record))?;
                writer.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}

/// List the loaded keyword definitions.
pub fn render_keyword_list<W: Write>(
    keywords: &KeywordMap,
    options: RenderOptions,
    writer: &mut W,
) -> io::Result<()> {
    for (keyword, description) in keywords.iter() {
        if options.use_color {
            writeln!(
                writer,
                "Keyword: {}, Description: {description}",
                keyword.bold()
            )?;
        } else {
            writeln!(writer, "Keyword: {keyword}, Description: {description}")?;
        }
    }
    Ok(())
}

/// `\nFrom file: <path>\n`
fn format_file_header(source: &str, options: RenderOptions, out: &mut String) {
    if options.use_color {
        let _ = writeln!(out, "\n{} {}", "From file:".bold().cyan(), source.cyan());
    } else {
        let _ = writeln!(out, "\nFrom file: {source}");
    }
}

/// Description, log entry, and separator for one match.
fn format_entry(record: &MatchRecord, options: RenderOptions, out: &mut String) {
    let separator = "-".repeat(options.separator_width);
    if options.use_color {
        let _ = writeln!(
            out,
            "\n{} {}",
            "Description:".bold(),
            record.description.yellow().bold()
        );
        let _ = writeln!(out, "{} {}", "Log entry:".bold(), record.line);
        let _ = writeln!(out, "{}", separator.dimmed());
    } else {
        let _ = writeln!(out, "\nDescription: {}", record.description);
        let _ = writeln!(out, "Log entry: {}", record.line);
        let _ = writeln!(out, "{separator}");
    }
}

/// Wire shape of a match in `--json` mode.
#[derive(Debug, Serialize)]
struct JsonRecord<'a> {
    /// `null` when the line had no recognizable timestamp.
    timestamp: Option<String>,
    description: &'a str,
    line: &'a str,
    file: &'a str,
    line_number: usize,
}

impl<'a> From<&'a MatchRecord> for JsonRecord<'a> {
    fn from(record: &'a MatchRecord) -> Self {
        Self {
            timestamp: record
                .has_timestamp()
                .then(|| record.timestamp.format_display()),
            description: &record.description,
            line: &record.line,
            file: &record.source,
            line_number: record.line_number,
        }
    }
}
