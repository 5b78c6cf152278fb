//! Analyzer — composes the four extractors into one call per entry.

use std::sync::Arc;

use diarist_backend::{create_backend, TextAnalysisBackend};
use diarist_core::{AnalysisResult, DiaristConfig, Record, Result};
use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::extract::{ActivityExtractor, KeywordExtractor, MoodScorer, Strategy, SummaryGenerator};
use crate::types::{AnalyzedBatch, AnalyzerStatus, BatchFailure};

/// Runs keyword, mood, activity and summary extraction for journal records.
pub struct Analyzer {
    strategy: Strategy,
    keywords: KeywordExtractor,
    mood: MoodScorer,
    activities: ActivityExtractor,
    summary: SummaryGenerator,
    max_keywords: usize,
    max_in_flight: usize,
}

impl Analyzer {
    /// Build from config, creating the configured backend (if any).
    pub fn from_config(config: &DiaristConfig) -> Result<Self> {
        let backend = create_backend(&config.backend)?;
        Ok(Self::new(config, backend))
    }

    /// Build with an explicit backend; `None` selects the heuristics.
    pub fn new(config: &DiaristConfig, backend: Option<Arc<dyn TextAnalysisBackend>>) -> Self {
        let strategy = Strategy::from_backend(backend);
        let max_in_flight = config.max_in_flight.max(1);

        info!(
            "Analyzer initialized: strategy={}, max_keywords={}, max_in_flight={}",
            strategy.name(),
            config.max_keywords,
            max_in_flight
        );

        Self {
            keywords: KeywordExtractor::new(strategy.clone(), config.max_keywords),
            mood: MoodScorer::new(strategy.clone(), config.mood_range),
            activities: ActivityExtractor::new(strategy.clone()),
            summary: SummaryGenerator::new(strategy.clone()),
            strategy,
            max_keywords: config.max_keywords,
            max_in_flight,
        }
    }

    pub fn status(&self) -> AnalyzerStatus {
        AnalyzerStatus {
            strategy: self.strategy.name().to_string(),
            max_keywords: self.max_keywords,
            max_in_flight: self.max_in_flight,
        }
    }

    /// Analyze one record.
    ///
    /// Keywords, mood and activities are extracted concurrently, then the
    /// summary. Any backend failure fails the whole call.
    pub async fn analyze(&self, record: &Record) -> Result<AnalysisResult> {
        let (keywords, mood_score, activities) = tokio::try_join!(
            self.keywords.extract(&record.text),
            self.mood.score(record),
            self.activities.extract(&record.text)
        )?;
        let summary = self.summary.generate(&record.text).await?;

        debug!(
            "Analyzed entry {}: {} keywords, mood {}, {} activities",
            record.date,
            keywords.len(),
            mood_score,
            activities.len()
        );

        Ok(AnalysisResult {
            keywords,
            mood_score,
            summary,
            activities,
        })
    }

    /// Analyze many records with at most `max_in_flight` in progress.
    ///
    /// Records are admitted in input order and results come back in input
    /// order, one per record. A failing record does not stop the others.
    pub async fn analyze_batch(&self, records: &[Record]) -> Vec<Result<AnalysisResult>> {
        stream::iter(records.iter().map(|record| self.analyze(record)))
            .buffered(self.max_in_flight)
            .collect()
            .await
    }

    /// [`analyze_batch`](Self::analyze_batch), split into successful pairs
    /// and failures.
    pub async fn analyze_all(&self, records: Vec<Record>) -> AnalyzedBatch {
        let outcomes = self.analyze_batch(&records).await;
        let mut batch = AnalyzedBatch::default();

        for (index, (record, outcome)) in records.into_iter().zip(outcomes).enumerate() {
            match outcome {
                Ok(result) => {
                    batch.records.push(record);
                    batch.results.push(result);
                }
                Err(e) => {
                    warn!("Analysis failed for entry {} ({}): {}", index, record.date, e);
                    batch.failures.push(BatchFailure {
                        index,
                        date: record.date,
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Batch analysis complete: {} analyzed, {} failed",
            batch.results.len(),
            batch.failures.len()
        );
        batch
    }
}
