//! Timeline builder: joins records with their analysis results.

use chrono::{Datelike, NaiveDate};
use tracing::debug;
use uuid::Uuid;

use crate::types::TimelineEntry;
use diarist_core::{AnalysisResult, Error, Record, Result};

/// Suffix of the title given to entries without a heading.
pub const DEFAULT_TITLE_SUFFIX: &str = "日记";

/// Build one timeline entry per record/result pair.
///
/// Fails with [`Error::LengthMismatch`] when the slices differ in length:
/// that is a caller bug, not a data problem.
pub fn build(records: &[Record], results: &[AnalysisResult]) -> Result<Vec<TimelineEntry>> {
    if records.len() != results.len() {
        return Err(Error::LengthMismatch {
            records: records.len(),
            results: results.len(),
        });
    }

    let entries: Vec<TimelineEntry> = records
        .iter()
        .zip(results)
        .map(|(record, result)| TimelineEntry {
            id: Uuid::new_v4().to_string(),
            date: record.date,
            title: record
                .metadata
                .title
                .clone()
                .unwrap_or_else(|| default_title(record.date)),
            summary: result.summary.clone(),
            keywords: result.keywords.clone(),
            mood_score: result.mood_score,
            activities: result.activities.clone(),
        })
        .collect();

    debug!("Built {} timeline entries", entries.len());
    Ok(entries)
}

/// Long-form date, e.g. `2024年1月5日`.
pub fn long_date(date: NaiveDate) -> String {
    format!("{}年{}月{}日", date.year(), date.month(), date.day())
}

/// Title for an entry without a heading, e.g. `2024年1月5日 日记`.
pub fn default_title(date: NaiveDate) -> String {
    format!("{} {}", long_date(date), DEFAULT_TITLE_SUFFIX)
}

/// Entries sorted by date, oldest first. Same-day entries keep their order.
pub fn sort_by_date(mut entries: Vec<TimelineEntry>) -> Vec<TimelineEntry> {
    entries.sort_by_key(|e| e.date);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use diarist_core::Metadata;
    use std::collections::HashSet;

    fn record(y: i32, m: u32, d: u32, title: Option<&str>) -> Record {
        Record {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            text: "text".into(),
            metadata: Metadata {
                title: title.map(String::from),
                ..Default::default()
            },
        }
    }

    fn result(mood: u8) -> AnalysisResult {
        AnalysisResult {
            keywords: vec!["工作".into()],
            mood_score: mood,
            summary: "summary".into(),
            activities: vec!["开会".into()],
        }
    }

    #[test]
    fn test_length_mismatch() {
        let records = vec![
            record(2024, 1, 1, None),
            record(2024, 1, 2, None),
            record(2024, 1, 3, None),
        ];
        let results = vec![result(3), result(4)];
        match build(&records, &results) {
            Err(Error::LengthMismatch { records, results }) => {
                assert_eq!(records, 3);
                assert_eq!(results, 2);
            }
            other => panic!("expected length mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_build_titles_and_fields() {
        let records = vec![record(2024, 1, 5, Some("周末")), record(2024, 12, 25, None)];
        let results = vec![result(4), result(2)];
        let entries = build(&records, &results).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "周末");
        assert_eq!(entries[1].title, "2024年12月25日 日记");
        assert_eq!(entries[0].mood_score, 4);
        assert_eq!(entries[1].keywords, vec!["工作"]);
        assert_eq!(entries[1].activities, vec!["开会"]);
    }

    #[test]
    fn test_ids_unique_across_builds() {
        let records = vec![record(2024, 1, 1, None); 50];
        let results = vec![result(3); 50];
        let mut ids = HashSet::new();
        for _ in 0..3 {
            for entry in build(&records, &results).unwrap() {
                assert!(ids.insert(entry.id));
            }
        }
        assert_eq!(ids.len(), 150);
    }

    #[test]
    fn test_empty_build() {
        assert!(build(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_sort_by_date() {
        let records = vec![record(2024, 3, 1, Some("b")), record(2024, 1, 1, Some("a"))];
        let entries = sort_by_date(build(&records, &[result(3), result(3)]).unwrap());
        assert_eq!(entries[0].title, "a");
        assert_eq!(entries[1].title, "b");
    }
}
