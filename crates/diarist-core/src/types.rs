//! Record and analysis types shared by every pipeline stage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Metadata pulled out of a journal entry's raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Text of the first level-one heading, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Hashtags in encounter order, duplicates kept.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Explicit mood written by the author (`心情：4`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_override: Option<i64>,
}

/// One parsed journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub date: NaiveDate,
    pub text: String,
    pub metadata: Metadata,
}

/// Derived analysis for a single [`Record`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Rank-ordered keywords, at most `max_keywords`.
    pub keywords: Vec<String>,
    /// Mood in the configured range, `[1, 5]` by default.
    pub mood_score: u8,
    pub summary: String,
    /// Activities in first-seen order, without duplicates.
    pub activities: Vec<String>,
}
