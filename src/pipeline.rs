//! One scan, end to end: collect, order, then render or write keyword files.
//!
//! Every output combination goes through [`scan`] then [`emit`]; the flags in [`Config`]
//! choose the extraction mode and the output shape.

use std::io::Write;
use std::path::PathBuf;

use crate::collect::{self, MatchCollection};
use crate::config::Config;
use crate::error::LogsiftError;
use crate::keywords::KeywordMap;
use crate::order;
use crate::output::{self, WrittenFile};
use crate::render::{self, RenderOptions, View};

/// What a run produced besides its console output.
#[derive(Debug, Default)]
pub struct RunReport {
    pub matches: usize,
    pub written: Vec<WrittenFile>,
}

/// The console view selected by `config`.
pub const fn view_for(config: &Config) -> View {
    if config.json_output {
        View::Json
    } else if config.match_only {
        View::MatchOnly
    } else if config.chronological {
        View::Chronological
    } else {
        View::ByFile
    }
}

/// Scan `files` for `keywords` with the extractor described by `config`.
///
/// Unreadable files end up in [`MatchCollection::skipped`].
pub fn scan(files: &[PathBuf], keywords: &KeywordMap, config: &Config) -> MatchCollection {
    let extractor = config.extractor();
    tracing::debug!(
        mode = ?extractor.mode(),
        fallback_year = ?extractor.fallback_year(),
        "timestamp extractor"
    );

    let collection = collect::collect(files, keywords, &extractor);
    tracing::info!(
        files = files.len(),
        skipped = collection.skipped.len(),
        matches = collection.len(),
        "scan complete"
    );
    collection
}

/// Emit the configured output for `collection` to `writer`: the keyword list
/// (except for match-only and JSON output), then either the console view or
/// the keyword files with their summary lines.
pub fn emit<W: Write>(
    mut collection: MatchCollection,
    keywords: &KeywordMap,
    config: &Config,
    use_color: bool,
    writer: &mut W,
) -> Result<RunReport, LogsiftError> {
    let options = RenderOptions {
        use_color,
        separator_width: config.separator_width,
    };
    let mut report = RunReport {
        matches: collection.len(),
        ..RunReport::default()
    };

    if !config.match_only && !config.json_output {
        render::render_keyword_list(keywords, options, writer)?;
    }

    if config.keyword_files {
        order::sort_chronological(&mut collection.records);
        let partitions = order::partition_by_keyword(&collection.records, keywords);
        report.written = output::write_keyword_files(&partitions, &config.output_dir)?;
        for file in &report.written {
            writeln!(
                writer,
                "Writing {} matches for keyword '{}' to {}",
                file.lines,
                file.keyword,
                file.path.display()
            )?;
        }
    } else {
        if config.chronological {
            order::sort_chronological(&mut collection.records);
        }
        render::render(&collection.records, view_for(config), options, writer)?;
    }

    Ok(report)
}
