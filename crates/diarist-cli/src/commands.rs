//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use chrono::NaiveDate;
use tracing::info;

use diarist_analyze::{Analyzer, BatchFailure};
use diarist_core::DiaristConfig;
use diarist_ingest::{EntryStore, FsStore, IngestFailure, IngestReport, Ingester};
use diarist_timeline::{self as timeline, TimelineEntry, TimelineStats};

pub const TIMELINE_JSON: &str = "timeline.json";
pub const TIMELINE_MARKDOWN: &str = "timeline.md";
const CONFIG_FILE: &str = ".diarist.json";

/// An entry whose analysis failed, named by its journal identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedEntry {
    pub identifier: String,
    pub date: NaiveDate,
    pub error: String,
}

/// Outcome of `diarist analyze`.
#[derive(Debug)]
pub struct AnalyzeReport {
    pub ingested: usize,
    pub blank: usize,
    pub unreadable: Vec<IngestFailure>,
    pub failed: Vec<FailedEntry>,
    pub stats: TimelineStats,
    pub json_path: PathBuf,
    pub markdown_path: PathBuf,
}

impl AnalyzeReport {
    pub fn is_clean(&self) -> bool {
        self.unreadable.is_empty() && self.failed.is_empty()
    }
}

/// Config from `$DIARIST_CONFIG`, else `.diarist.json` in `dir`.
pub fn load_config(dir: &Path) -> anyhow::Result<DiaristConfig> {
    let path = std::env::var("DIARIST_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dir.join(CONFIG_FILE));
    DiaristConfig::load(&path).map_err(|e| anyhow!("Failed to load config {}: {}", path.display(), e))
}

/// Ingest a journal folder, analyze every entry and write the timeline.
pub async fn analyze(
    config: &DiaristConfig,
    journal_dir: &Path,
    out_dir: &Path,
) -> anyhow::Result<AnalyzeReport> {
    let journal = FsStore::new(journal_dir);
    let IngestReport {
        records,
        identifiers,
        failures: unreadable,
        skipped,
    } = Ingester::new(config)
        .excluding(output_identifiers(journal_dir, out_dir))
        .ingest(&journal, "")?;
    let ingested = records.len();

    let analyzer = Analyzer::from_config(config)?;
    info!("Analyzing {} entries with {}", ingested, analyzer.status().strategy);
    let batch = analyzer.analyze_all(records).await;

    let entries = timeline::sort_by_date(timeline::build(&batch.records, &batch.results)?);

    let out = FsStore::new(out_dir);
    out.write_text(TIMELINE_JSON, &timeline::to_json(&entries)?)?;
    out.write_text(TIMELINE_MARKDOWN, &timeline::to_markdown(&entries))?;
    info!("Timeline written to {}", out_dir.display());

    Ok(AnalyzeReport {
        ingested,
        blank: skipped,
        unreadable,
        failed: name_failures(&identifiers, batch.failures),
        stats: timeline::stats(&entries, config.stats_limit),
        json_path: out_dir.join(TIMELINE_JSON),
        markdown_path: out_dir.join(TIMELINE_MARKDOWN),
    })
}

/// Identifiers, relative to the journal root, of the files `analyze` writes
/// when `out_dir` lies inside `journal_dir`.
fn output_identifiers(journal_dir: &Path, out_dir: &Path) -> Vec<String> {
    let (Ok(journal), Ok(out)) = (journal_dir.canonicalize(), out_dir.canonicalize()) else {
        return Vec::new();
    };
    let Ok(rel) = out.strip_prefix(&journal) else {
        return Vec::new();
    };
    [TIMELINE_JSON, TIMELINE_MARKDOWN]
        .iter()
        .map(|name| rel.join(name).to_string_lossy().replace('\\', "/"))
        .collect()
}

/// Attach journal identifiers to batch failures. `identifiers` lines up
/// index-for-index with the records handed to the analyzer.
pub fn name_failures(identifiers: &[String], failures: Vec<BatchFailure>) -> Vec<FailedEntry> {
    failures
        .into_iter()
        .map(|f| FailedEntry {
            identifier: identifiers
                .get(f.index)
                .cloned()
                .unwrap_or_else(|| format!("entry #{}", f.index)),
            date: f.date,
            error: f.error,
        })
        .collect()
}

/// Read a timeline previously written by [`analyze`].
pub fn load_timeline(path: &Path) -> anyhow::Result<Vec<TimelineEntry>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
    Ok(timeline::from_json(&json)?)
}

/// Parse a `YYYY-MM-DD` bound; `-` means unbounded.
pub fn parse_bound(arg: &str) -> anyhow::Result<Option<NaiveDate>> {
    if arg == "-" {
        return Ok(None);
    }
    NaiveDate::parse_from_str(arg, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| anyhow!("Invalid date '{}', expected YYYY-MM-DD or -", arg))
}

pub fn print_analyze_report(report: &AnalyzeReport) {
    println!("=== Diarist Analysis Report ===");
    println!();
    println!("Entries analyzed:   {}", report.stats.total_entries);
    println!("Entries ingested:   {}", report.ingested);
    println!("Blank entries:      {}", report.blank);
    println!("Timeline JSON:      {}", report.json_path.display());
    println!("Timeline Markdown:  {}", report.markdown_path.display());

    if !report.unreadable.is_empty() {
        println!();
        println!("Unreadable entries:");
        for f in &report.unreadable {
            println!("  - {}: {}", f.identifier, f.reason);
        }
    }

    if !report.failed.is_empty() {
        println!();
        println!("Failed analyses:");
        for f in &report.failed {
            println!("  - {} ({}): {}", f.identifier, f.date, f.error);
        }
    }

    println!();
    print_stats(&report.stats);
}

pub fn print_stats(stats: &TimelineStats) {
    println!("=== Timeline Statistics ===");
    println!();
    println!("Total entries:      {}", stats.total_entries);
    println!("Average mood:       {:.1}", stats.average_mood);

    println!();
    println!("Mood distribution:");
    for (mood, count) in &stats.mood_distribution {
        println!("  {} {}: {}", timeline::mood_emoji(*mood), mood, count);
    }

    if !stats.top_keywords.is_empty() {
        println!();
        println!("Top keywords:");
        for item in &stats.top_keywords {
            println!("  {:<16} {}", item.name, item.count);
        }
    }

    if !stats.top_activities.is_empty() {
        println!();
        println!("Top activities:");
        for item in &stats.top_activities {
            println!("  {:<16} {}", item.name, item.count);
        }
    }

    if !stats.entries_per_month.is_empty() {
        println!();
        println!("Entries per month:");
        for (month, count) in &stats.entries_per_month {
            println!("  {}  {}", month, count);
        }
    }
}

pub fn print_entries(entries: &[TimelineEntry]) {
    for entry in entries {
        println!(
            "{}  {} {}",
            entry.date,
            entry.title,
            timeline::mood_emoji(entry.mood_score)
        );
        if !entry.summary.is_empty() {
            println!("    {}", entry.summary.replace('\n', " "));
        }
    }
    println!();
    println!("{} entries", entries.len());
}
