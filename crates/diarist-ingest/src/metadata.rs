//! Title, hashtag and mood-marker extraction from raw entry text.
//!
//! This is the only place the mood marker is read; the mood scorer trusts
//! `Metadata::mood_override` and never re-scans the body.

use once_cell::sync::Lazy;
use regex::Regex;

use diarist_core::Metadata;

static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").expect("valid title regex"));

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#([^\s#]+)").expect("valid tag regex"));

static MOOD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:心情|(?i:mood))[ \t]*[：:][ \t]*(\d+)").expect("valid mood regex")
});

/// Extract title, tags and an explicit mood from an entry body.
pub fn extract(body: &str) -> Metadata {
    Metadata {
        title: extract_title(body),
        tags: extract_tags(body),
        mood_override: extract_mood(body),
    }
}

/// Text of the first `# heading` line, trimmed.
pub fn extract_title(body: &str) -> Option<String> {
    TITLE
        .captures_iter(body)
        .map(|cap| cap[1].trim().to_string())
        .find(|title| !title.is_empty())
}

/// Every `#tag` token with the `#` stripped, in order, duplicates kept.
pub fn extract_tags(body: &str) -> Vec<String> {
    TAG.captures_iter(body)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Integer after the first `心情：` / `mood:` marker.
pub fn extract_mood(body: &str) -> Option<i64> {
    MOOD.captures(body).and_then(|cap| cap[1].parse().ok())
}
