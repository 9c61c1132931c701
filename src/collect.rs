//! Keyword match collection across log files.
//!
//! Every file is opened, scanned line by line, and closed before the next one
//! is touched. Each keyword found in a line yields its own [`MatchRecord`], so
//! a line containing three keywords produces three records.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::keywords::KeywordMap;
use crate::timestamp::{Extractor, Timestamp};

/// One keyword found in one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Extracted time of the line, or [`Timestamp::EARLIEST`].
    pub timestamp: Timestamp,
    /// Description of the keyword that matched.
    pub description: String,
    /// The matched line without its terminator.
    pub line: String,
    /// File the line came from, as the path was given.
    pub source: Arc<str>,
    /// 1-based line number within `source`.
    pub line_number: usize,
}

impl MatchRecord {
    /// Whether the line carried a recognizable timestamp.
    pub fn has_timestamp(&self) -> bool {
        !self.timestamp.is_earliest()
    }
}

/// A log file that could not be scanned.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: io::Error,
}

/// All matches of one run, plus the files that were skipped.
///
/// Records are in file order, then line order, until sorted by
/// [`sort_chronological`](crate::order::sort_chronological).
#[derive(Debug, Default)]
pub struct MatchCollection {
    pub records: Vec<MatchRecord>,
    pub skipped: Vec<SkippedFile>,
}

impl MatchCollection {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Scan `files` in order for every keyword in `keywords`.
///
/// Unreadable files are recorded in [`MatchCollection::skipped`] and contribute
/// no records; they never abort the run.
pub fn collect(files: &[PathBuf], keywords: &KeywordMap, extractor: &Extractor) -> MatchCollection {
    let mut collection = MatchCollection::default();

    for path in files {
        match scan_file(path, keywords, extractor) {
            Ok(records) => {
                tracing::debug!(
                    file = %path.display(),
                    matches = records.len(),
                    "scanned log file"
                );
                collection.records.extend(records);
            }
            Err(error) => {
                tracing::debug!(file = %path.display(), %error, "skipping unreadable log file");
                collection.skipped.push(SkippedFile {
                    path: path.clone(),
                    error,
                });
            }
        }
    }

    collection
}

/// Scan a single file. The handle is dropped before returning, error or not.
fn scan_file(path: &Path, keywords: &KeywordMap, extractor: &Extractor) -> io::Result<Vec<MatchRecord>> {
    if path.is_dir() {
        return Err(io::Error::other("is a directory"));
    }
    let file = File::open(path)?;
    let source: Arc<str> = Arc::from(path.to_string_lossy());
    scan_reader(BufReader::new(file), &source, keywords, extractor)
}

/// Scan any buffered reader as if it were a log file named `source`.
///
/// Invalid UTF-8 is decoded lossily so the rest of the line stays searchable.
pub fn scan_reader<R: BufRead>(
    mut reader: R,
    source: &Arc<str>,
    keywords: &KeywordMap,
    extractor: &Extractor,
) -> io::Result<Vec<MatchRecord>> {
    let mut records = Vec::new();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let line = String::from_utf8_lossy(trim_terminator(&buf));
        let mut timestamp = None;

        for (_, description) in keywords.matches_in(&line) {
            // One extraction per line, shared by all its records.
            let ts = *timestamp.get_or_insert_with(|| extractor.extract_or_earliest(&line));
            records.push(MatchRecord {
                timestamp: ts,
                description: description.to_string(),
                line: line.to_string(),
                source: Arc::clone(source),
                line_number,
            });
        }
    }

    Ok(records)
}

fn trim_terminator(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
