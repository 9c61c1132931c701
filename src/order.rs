//! Output shapes over a match list: chronological order, per-keyword
//! partitions, and per-file groups.

use std::sync::Arc;

use crate::collect::MatchRecord;
use crate::keywords::KeywordMap;

/// Sort all records by timestamp, oldest first.
///
/// The sort is stable: records with equal timestamps (including every record
/// without one) keep their collection order, i.e. input file order then line
/// order. Records without a timestamp come first.
pub fn sort_chronological(records: &mut [MatchRecord]) {
    records.sort_by_key(|record| record.timestamp);
}

/// Lines attributed to one keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordPartition {
    pub keyword: String,
    pub lines: Vec<String>,
}

/// Group matched lines by keyword, in keyword definition order.
///
/// Membership is decided by re-testing each keyword against every record's
/// line. A line holding two keywords produced two records, so it lands twice
/// in both partitions. Empty partitions are omitted.
pub fn partition_by_keyword(records: &[MatchRecord], keywords: &KeywordMap) -> Vec<KeywordPartition> {
    keywords
        .keywords()
        .filter_map(|keyword| {
            let lines: Vec<String> = records
                .iter()
                .filter(|record| record.line.contains(keyword))
                .map(|record| record.line.clone())
                .collect();
            (!lines.is_empty()).then(|| KeywordPartition {
                keyword: keyword.to_string(),
                lines,
            })
        })
        .collect()
}

/// Records of one source file, in their original order.
#[derive(Debug)]
pub struct SourceGroup<'a> {
    pub source: Arc<str>,
    pub records: Vec<&'a MatchRecord>,
}

/// Group records by source file, ordered by first appearance.
pub fn group_by_source(records: &[MatchRecord]) -> Vec<SourceGroup<'_>> {
    let mut groups: Vec<SourceGroup<'_>> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|group| group.source == record.source) {
            Some(group) => group.records.push(record),
            None => groups.push(SourceGroup {
                source: Arc::clone(&record.source),
                records: vec![record],
            }),
        }
    }
    groups
}
