//! JSON and Markdown renderings of a timeline.

use diarist_core::Result;

use crate::aggregator::long_date;
use crate::types::TimelineEntry;

const MOOD_EMOJIS: [&str; 5] = ["😢", "😕", "😐", "🙂", "😄"];

/// Pretty-printed JSON array of entries.
pub fn to_json(entries: &[TimelineEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Parse entries previously written by [`to_json`].
pub fn from_json(json: &str) -> Result<Vec<TimelineEntry>> {
    Ok(serde_json::from_str(json)?)
}

/// Emoji for a mood score; out-of-range scores clamp to the nearest end.
pub fn mood_emoji(mood_score: u8) -> &'static str {
    let index = usize::from(mood_score.saturating_sub(1)).min(MOOD_EMOJIS.len() - 1);
    MOOD_EMOJIS[index]
}

/// Markdown document with one section per entry.
pub fn to_markdown(entries: &[TimelineEntry]) -> String {
    let mut out = String::new();

    for entry in entries {
        out.push_str(&format!(
            "## {} {} {}\n\n",
            long_date(entry.date),
            entry.title,
            mood_emoji(entry.mood_score)
        ));
        if !entry.summary.is_empty() {
            out.push_str(&format!("{}\n\n", entry.summary));
        }
        out.push_str(&format!("- 关键词：{}\n", entry.keywords.join(", ")));
        out.push_str(&format!("- 活动：{}\n", entry.activities.join(", ")));
        out.push_str("\n---\n\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry() -> TimelineEntry {
        TimelineEntry {
            id: "0b4f2a8e-5c1d-4e7a-9f3b-2d6c8a1e4f70".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            title: "周末".into(),
            summary: "和朋友去爬山。".into(),
            keywords: vec!["爬山".into(), "朋友".into()],
            mood_score: 5,
            activities: vec!["爬山".into()],
        }
    }

    #[test]
    fn test_json_round_trip() {
        let entries = vec![entry()];
        let json = to_json(&entries).unwrap();
        assert!(json.contains("\"moodScore\": 5"));
        assert!(json.contains("\"date\": \"2024-01-05\""));
        assert_eq!(from_json(&json).unwrap(), entries);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(from_json("not json").is_err());
    }

    #[test]
    fn test_mood_emoji_clamps() {
        assert_eq!(mood_emoji(0), "😢");
        assert_eq!(mood_emoji(1), "😢");
        assert_eq!(mood_emoji(3), "😐");
        assert_eq!(mood_emoji(5), "😄");
        assert_eq!(mood_emoji(9), "😄");
    }

    #[test]
    fn test_markdown() {
        let md = to_markdown(&[entry()]);
        assert!(md.starts_with("## 2024年1月5日 周末 😄\n"));
        assert!(md.contains("和朋友去爬山。\n"));
        assert!(md.contains("- 关键词：爬山, 朋友\n"));
        assert!(md.contains("- 活动：爬山\n"));
        assert!(md.contains("---"));
    }

    #[test]
    fn test_markdown_keeps_empty_lists() {
        let mut e = entry();
        e.activities.clear();
        e.mood_score = 2;
        let md = to_markdown(&[e]);
        assert!(md.starts_with("## 2024年1月5日 周末 😕\n"));
        assert!(md.contains("- 活动：\n"));
    }

    #[test]
    fn test_markdown_empty() {
        assert!(to_markdown(&[]).is_empty());
    }
}
