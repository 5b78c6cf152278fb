//! Batch analysis types.

use chrono::NaiveDate;
use serde::Serialize;

use diarist_core::{AnalysisResult, Record};

/// An entry whose analysis failed.
#[derive(Debug, Clone, Serialize)]
pub struct BatchFailure {
    /// Position of the record in the batch input.
    pub index: usize,
    /// Date of the failed record.
    pub date: NaiveDate,
    pub error: String,
}

/// Successful record/result pairs from a batch, plus the failures.
///
/// `records` and `results` always have equal length and line up
/// index-for-index, ready for the timeline builder.
#[derive(Debug, Default)]
pub struct AnalyzedBatch {
    pub records: Vec<Record>,
    pub results: Vec<AnalysisResult>,
    pub failures: Vec<BatchFailure>,
}

impl AnalyzedBatch {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Analyzer settings, for logs and status output.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzerStatus {
    pub strategy: String,
    #[serde(rename = "maxKeywords")]
    pub max_keywords: usize,
    #[serde(rename = "maxInFlight")]
    pub max_in_flight: usize,
}
