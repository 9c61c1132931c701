//! Keyword definitions: the `keyword → description` map and its file format.
//!
//! A keywords file holds one `description:keyword` definition per line:
//!
//! ```text
//! Auth Failure:AUTH_FAIL
//! Disk Error:DISK_ERR
//! ```
//!
//! Lines that do not split into exactly two `:` fields, or whose keyword is
//! empty, are rejected and reported back to the caller. They never reach the
//! scanner.

use std::path::Path;

use indexmap::IndexMap;

use crate::error::LogsiftError;

/// Immutable mapping from keyword (literal substring) to description.
///
/// Iterates in definition order. Redefining a keyword replaces its
/// description but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordMap {
    entries: IndexMap<String, String>,
}

/// A keywords-file line that was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number in the keywords file.
    pub line_number: usize,
    pub text: String,
}

impl KeywordMap {
    /// Build a map from `(keyword, description)` pairs. Empty keywords are
    /// dropped; the last description for a repeated keyword wins.
    pub fn from_pairs<I, K, D>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, D)>,
        K: Into<String>,
        D: Into<String>,
    {
        let mut entries = IndexMap::new();
        for (keyword, description) in pairs {
            let keyword = keyword.into();
            if keyword.is_empty() {
                continue;
            }
            entries.insert(keyword, description.into());
        }
        Self { entries }
    }

    /// Parse keyword definitions from text.
    ///
    /// Blank lines are ignored. Returns the map together with every rejected
    /// line so the caller can report them.
    pub fn parse(text: &str) -> (Self, Vec<RejectedLine>) {
        let mut entries = IndexMap::new();
        let mut rejected = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            match parse_definition(line) {
                Some((description, keyword)) => {
                    tracing::debug!(keyword, description, "loaded keyword");
                    entries.insert(keyword.to_string(), description.to_string());
                }
                None => rejected.push(RejectedLine {
                    line_number: idx + 1,
                    text: line.to_string(),
                }),
            }
        }

        (Self { entries }, rejected)
    }

    /// Read and parse a keywords file.
    pub fn load(path: &Path) -> Result<(Self, Vec<RejectedLine>), LogsiftError> {
        let text = std::fs::read_to_string(path).map_err(|source| LogsiftError::Keywords {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// `(keyword, description)` pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, d)| (k.as_str(), d.as_str()))
    }

    /// Keywords in definition order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Definitions whose keyword occurs in `line` (case-sensitive substring).
    pub fn matches_in<'a>(&'a self, line: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.iter().filter(move |(keyword, _)| line.contains(keyword))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split `description:keyword`. Exactly one `:` and a non-empty keyword.
fn parse_definition(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split(':');
    let description = parts.next()?.trim();
    let keyword = parts.next()?.trim();
    if parts.next().is_some() || keyword.is_empty() {
        return None;
    }
    Some((description, keyword))
}
