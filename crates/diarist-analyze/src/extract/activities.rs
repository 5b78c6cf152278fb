//! Activity extraction.

use diarist_core::Result;

use super::{dedup_in_order, split_list, Strategy};

/// Verbs that introduce an activity: go, do, finish, attend, start, end.
const MARKERS: &[&str] = &["去", "做", "完成", "参加", "开始", "结束"];

const SENTENCE_ENDS: &[char] = &['。', '！', '？', '.', '!', '?', '\n'];

const CLAUSE_SEPARATORS: &[char] = &['，', ',', '；', ';', '、', '：', ':'];

/// Pulls the things the author did out of an entry.
#[derive(Debug, Clone)]
pub struct ActivityExtractor {
    strategy: Strategy,
}

impl ActivityExtractor {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Activities in first-seen order, duplicates removed.
    pub async fn extract(&self, text: &str) -> Result<Vec<String>> {
        let activities = match &self.strategy {
            Strategy::Heuristic => heuristic_activities(text),
            Strategy::Backend(backend) => split_list(&backend.complete(&prompt(text)).await?),
        };
        Ok(dedup_in_order(activities))
    }
}

fn prompt(text: &str) -> String {
    format!(
        "List the activities described in the following journal entry. \
         Reply with the activities only, separated by commas, \
         in the language of the entry.\n\n{}",
        text
    )
}

/// For each sentence and marker, the phrase right after the marker's first
/// occurrence up to the next clause separator.
pub fn heuristic_activities(text: &str) -> Vec<String> {
    let mut found = Vec::new();

    for sentence in text.split(SENTENCE_ENDS) {
        for marker in MARKERS {
            let Some(pos) = sentence.find(marker) else {
                continue;
            };
            let rest = &sentence[pos + marker.len()..];
            let phrase = rest.split(CLAUSE_SEPARATORS).next().unwrap_or("").trim();
            if !phrase.is_empty() {
                found.push(phrase.to_string());
            }
        }
    }

    dedup_in_order(found)
}
