//! Per-keyword match files.
//!
//! Each non-empty [`KeywordPartition`] becomes `<keyword>_matches.csv` in the
//! output directory, holding one raw log line per row.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::LogsiftError;
use crate::order::KeywordPartition;

/// A keyword file that was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub keyword: String,
    pub path: PathBuf,
    pub lines: usize,
}

/// File name for a keyword's matches.
///
/// Characters that cannot appear in a file name (path separators, reserved
/// punctuation, control characters) are replaced with `_`.
pub fn keyword_file_name(keyword: &str) -> String {
    let stem: String = keyword
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let stem = match stem.as_str() {
        "." | ".." => stem.replace('.', "_"),
        _ => stem,
    };
    format!("{stem}_matches.csv")
}

/// Write every non-empty partition into `dir`, overwriting existing files.
pub fn write_keyword_files(
    partitions: &[KeywordPartition],
    dir: &Path,
) -> Result<Vec<WrittenFile>, LogsiftError> {
    let mut written = Vec::with_capacity(partitions.len());

    for partition in partitions.iter().filter(|p| !p.lines.is_empty()) {
        let path = dir.join(keyword_file_name(&partition.keyword));
        let mut writer = BufWriter::new(File::create(&path)?);
        for line in &partition.lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;

        tracing::debug!(
            keyword = %partition.keyword,
            path = %path.display(),
            lines = partition.lines.len(),
            "wrote keyword file"
        );
        written.push(WrittenFile {
            keyword: partition.keyword.clone(),
            path,
            lines: partition.lines.len(),
        });
    }

    Ok(written)
}
