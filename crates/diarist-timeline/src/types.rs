//! Timeline types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One journal entry on the timeline: a record joined with its analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    /// Unique for the life of the process, never reused.
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    pub summary: String,
    pub keywords: Vec<String>,
    pub mood_score: u8,
    pub activities: Vec<String>,
}

/// A keyword or activity and how many times it appeared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedItem {
    pub name: String,
    pub count: usize,
}

impl From<(String, usize)> for RankedItem {
    fn from((name, count): (String, usize)) -> Self {
        Self { name, count }
    }
}

/// Aggregate view of a set of entries. Always recomputed, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStats {
    pub total_entries: usize,
    /// Mean mood rounded to one decimal place; 0 for no entries.
    pub average_mood: f64,
    /// Entry count per mood bucket; buckets 1 through 5 are always present.
    pub mood_distribution: BTreeMap<u8, usize>,
    pub top_keywords: Vec<RankedItem>,
    pub top_activities: Vec<RankedItem>,
    /// Entry count per `YYYY-MM`.
    pub entries_per_month: BTreeMap<String, usize>,
}
