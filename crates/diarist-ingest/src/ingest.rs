//! Journal ingestion pipeline: store → text → date + metadata → record.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::store::EntryStore;
use crate::{date, metadata};
use diarist_core::{DiaristConfig, Record, Result};

/// An entry that could not be read.
#[derive(Debug, Clone)]
pub struct IngestFailure {
    pub identifier: String,
    pub reason: String,
}

/// Outcome of ingesting a folder of entries.
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Parsed records, in listing order.
    pub records: Vec<Record>,
    /// Identifiers matching `records` index-for-index.
    pub identifiers: Vec<String>,
    /// Entries dropped because they could not be read.
    pub failures: Vec<IngestFailure>,
    /// Entries skipped because they were blank.
    pub skipped: usize,
}

/// Turns raw entry text into [`Record`]s.
pub struct Ingester<'a> {
    config: &'a DiaristConfig,
    excluded: HashSet<String>,
}

impl<'a> Ingester<'a> {
    pub fn new(config: &'a DiaristConfig) -> Self {
        Self {
            config,
            excluded: HashSet::new(),
        }
    }

    /// Never ingest these identifiers, e.g. exports written into the journal.
    pub fn excluding<I, S>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded.extend(identifiers.into_iter().map(Into::into));
        self
    }

    /// Parse one entry. Never fails: a missing date falls back to today.
    pub fn parse_record(&self, identifier: &str, text: &str) -> Record {
        Record {
            date: date::resolve(identifier, &self.config.date_format, text),
            text: text.to_string(),
            metadata: metadata::extract(text),
        }
    }

    /// Ingest every entry under `scope`.
    ///
    /// Listing errors are returned. A single unreadable entry is logged and
    /// dropped, and the rest of the folder still ingests.
    pub fn ingest(&self, store: &dyn EntryStore, scope: &str) -> Result<IngestReport> {
        let identifiers = store.list_entries(scope)?;
        let mut report = IngestReport::default();

        for identifier in identifiers {
            if self.excluded.contains(&identifier) {
                debug!("Excluded entry, skipping: {}", identifier);
                continue;
            }

            let text = match store.read_text(&identifier) {
                Ok(t) => t,
                Err(e) => {
                    warn!("Skipping unreadable entry {}: {}", identifier, e);
                    report.failures.push(IngestFailure {
                        identifier,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            if text.trim().is_empty() {
                debug!("Blank entry, skipping: {}", identifier);
                report.skipped += 1;
                continue;
            }

            report.records.push(self.parse_record(&identifier, &text));
            report.identifiers.push(identifier);
        }

        info!(
            "Ingested {} entries ({} failed, {} blank)",
            report.records.len(),
            report.failures.len(),
            report.skipped
        );
        Ok(report)
    }
}
