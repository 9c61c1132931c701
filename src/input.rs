//! Resolution of `--log` arguments into concrete file paths.

use std::path::PathBuf;

use glob::glob;

use crate::error::LogsiftError;

/// Paths resolved from the `--log` patterns, plus patterns that matched nothing.
#[derive(Debug, Default)]
pub struct ResolvedPaths {
    pub files: Vec<PathBuf>,
    pub unmatched: Vec<String>,
}

/// Expand each pattern with [`glob`], preserving argument order.
///
/// Matches of a single pattern come back sorted. A pattern without wildcard
/// characters is kept verbatim even when the path does not exist, so the
/// scanner can report it as unreadable instead of it silently vanishing.
pub fn expand_log_patterns(patterns: &[String]) -> Result<ResolvedPaths, LogsiftError> {
    let mut resolved = ResolvedPaths::default();

    for pattern in patterns {
        if !has_wildcard(pattern) {
            resolved.files.push(PathBuf::from(pattern));
            continue;
        }

        let mut matched: Vec<PathBuf> = glob(pattern)
            .map_err(|source| LogsiftError::Pattern {
                pattern: pattern.clone(),
                source,
            })?
            .filter_map(Result::ok)
            .collect();
        matched.sort();

        if matched.is_empty() {
            tracing::debug!(pattern = %pattern, "no files found matching pattern");
            resolved.unmatched.push(pattern.clone());
        }
        resolved.files.extend(matched);
    }

    Ok(resolved)
}

fn has_wildcard(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}
