//! Summary generation.

use diarist_core::Result;
use once_cell::sync::Lazy;
use regex::Regex;

use super::Strategy;

const MAX_SUMMARY_CHARS: usize = 100;
const ELLIPSIS: &str = "...";

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n[ \t]*\r?\n").expect("valid paragraph regex"));

#[derive(Debug, Clone)]
pub struct SummaryGenerator {
    strategy: Strategy,
}

impl SummaryGenerator {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub async fn generate(&self, text: &str) -> Result<String> {
        match &self.strategy {
            Strategy::Heuristic => Ok(heuristic_summary(text)),
            Strategy::Backend(backend) => Ok(backend.complete(&prompt(text)).await?.trim().to_string()),
        }
    }
}

fn prompt(text: &str) -> String {
    format!(
        "Summarize the following journal entry in one or two sentences, \
         in the language of the entry.\n\n{}",
        text
    )
}

/// First paragraph, cut to 100 characters with a trailing ellipsis.
pub fn heuristic_summary(text: &str) -> String {
    let first = PARAGRAPH_BREAK.split(text).next().unwrap_or("").trim();

    if first.chars().count() <= MAX_SUMMARY_CHARS {
        return first.to_string();
    }

    let mut truncated: String = first.chars().take(MAX_SUMMARY_CHARS).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
