//! Timeline statistics.

use std::collections::BTreeMap;

use diarist_core::rank_by_frequency;

use crate::types::{RankedItem, TimelineEntry, TimelineStats};

pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Compute statistics over `entries`, keeping the top `limit` keywords and
/// activities.
pub fn stats(entries: &[TimelineEntry], limit: usize) -> TimelineStats {
    let total_entries = entries.len();

    let average_mood = if entries.is_empty() {
        0.0
    } else {
        let sum: f64 = entries.iter().map(|e| f64::from(e.mood_score)).sum();
        round_one_decimal(sum / total_entries as f64)
    };

    let mut mood_distribution: BTreeMap<u8, usize> = (1..=5).map(|bucket| (bucket, 0)).collect();
    for entry in entries {
        *mood_distribution.entry(entry.mood_score).or_insert(0) += 1;
    }

    let mut entries_per_month: BTreeMap<String, usize> = BTreeMap::new();
    for entry in entries {
        *entries_per_month
            .entry(entry.date.format("%Y-%m").to_string())
            .or_insert(0) += 1;
    }

    TimelineStats {
        total_entries,
        average_mood,
        mood_distribution,
        top_keywords: top(entries.iter().flat_map(|e| e.keywords.iter()), limit),
        top_activities: top(entries.iter().flat_map(|e| e.activities.iter()), limit),
        entries_per_month,
    }
}

fn top<'a>(items: impl Iterator<Item = &'a String>, limit: usize) -> Vec<RankedItem> {
    rank_by_frequency(items)
        .into_iter()
        .take(limit)
        .map(RankedItem::from)
        .collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
