//! Keyword extraction.

use diarist_core::{rank_by_frequency, Result};
use tracing::debug;

use super::{split_list, Strategy};

/// Extracts up to `max_keywords` rank-ordered keywords from entry text.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    strategy: Strategy,
    max_keywords: usize,
}

impl KeywordExtractor {
    pub fn new(strategy: Strategy, max_keywords: usize) -> Self {
        Self {
            strategy,
            max_keywords,
        }
    }

    pub async fn extract(&self, text: &str) -> Result<Vec<String>> {
        match &self.strategy {
            Strategy::Heuristic => Ok(heuristic_keywords(text, self.max_keywords)),
            Strategy::Backend(backend) => {
                let response = backend.complete(&prompt(text, self.max_keywords)).await?;
                let mut keywords = split_list(&response);
                keywords.truncate(self.max_keywords);
                debug!("Backend returned {} keywords", keywords.len());
                Ok(keywords)
            }
        }
    }
}

fn prompt(text: &str, max_keywords: usize) -> String {
    format!(
        "Extract exactly {} keywords from the following journal entry. \
         Reply with the keywords only, separated by commas, \
         in the language of the entry.\n\n{}",
        max_keywords, text
    )
}

/// CJK unified ideographs (base block, extension A, compatibility).
fn is_cjk(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{F900}'..='\u{FAFF}')
}

/// Most frequent tokens of two or more characters.
///
/// Anything that is not a CJK ideograph, ASCII letter or digit separates
/// tokens. Equal counts keep first-seen order.
pub fn heuristic_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .map(|c| if is_cjk(c) || c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();

    let tokens = cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() > 1);

    rank_by_frequency(tokens)
        .into_iter()
        .take(max_keywords)
        .map(|(token, _)| token)
        .collect()
}
