//! Mood scoring.
//!
//! Precedence: an explicit mood written in the entry (already captured in
//! `Metadata::mood_override`), then the backend, then the dictionary
//! heuristic.

use diarist_core::{MoodRange, Record, Result};
use tracing::debug;

use super::Strategy;

const BASELINE: i64 = 3;
const MAX_SHIFT: i64 = 2;

const POSITIVE_WORDS: &[&str] = &[
    "开心", "快乐", "高兴", "满意", "兴奋", "幸福", "愉快", "喜欢", "顺利", "感恩",
    "happy", "glad", "excited", "grateful", "wonderful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "难过", "伤心", "失望", "沮丧", "焦虑", "生气", "烦恼", "痛苦", "疲惫", "糟糕",
    "sad", "angry", "upset", "anxious", "terrible",
];

/// Scores an entry's mood within the configured range.
#[derive(Debug, Clone)]
pub struct MoodScorer {
    strategy: Strategy,
    range: MoodRange,
}

impl MoodScorer {
    pub fn new(strategy: Strategy, range: MoodRange) -> Self {
        Self { strategy, range }
    }

    pub async fn score(&self, record: &Record) -> Result<u8> {
        if let Some(explicit) = record.metadata.mood_override {
            if self.range.contains(explicit) {
                return Ok(explicit as u8);
            }
            debug!("Ignoring out-of-range mood override {}", explicit);
        }

        let score = match &self.strategy {
            Strategy::Heuristic => heuristic_mood(&record.text),
            Strategy::Backend(backend) => {
                let response = backend.complete(&prompt(&record.text, self.range)).await?;
                match parse_leading_int(&response) {
                    Some(n) if self.range.contains(n) => n,
                    _ => {
                        debug!("Unusable mood response {:?}, using neutral", response);
                        BASELINE
                    }
                }
            }
        };

        Ok(self.clamp(score))
    }

    fn clamp(&self, score: i64) -> u8 {
        score.clamp(i64::from(self.range.min), i64::from(self.range.max)) as u8
    }
}

fn prompt(text: &str, range: MoodRange) -> String {
    format!(
        "Rate the overall mood of the following journal entry on a scale from \
         {} (very negative) to {} (very positive). Reply with a single integer only.\n\n{}",
        range.min, range.max, text
    )
}

/// Integer at the start of a response (`"4"`, `" 4/5"`, `"4."`).
fn parse_leading_int(response: &str) -> Option<i64> {
    let trimmed = response.trim();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

fn count_occurrences(text: &str, words: &[&str]) -> i64 {
    words.iter().map(|w| text.matches(w).count() as i64).sum()
}

/// Dictionary score in `[1, 5]`: baseline 3, shifted by at most 2 toward the
/// side with more matching words. Every occurrence counts.
pub fn heuristic_mood(text: &str) -> i64 {
    let lower = text.to_lowercase();
    let positive = count_occurrences(&lower, POSITIVE_WORDS);
    let negative = count_occurrences(&lower, NEGATIVE_WORDS);

    if positive > negative {
        BASELINE + (positive - negative).min(MAX_SHIFT)
    } else if negative > positive {
        BASELINE - (negative - positive).min(MAX_SHIFT)
    } else {
        BASELINE
    }
}
