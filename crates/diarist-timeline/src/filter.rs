//! Date-range and mood-range filters, and keyword search.

use chrono::NaiveDate;

use crate::types::TimelineEntry;

/// Entries dated within `[start, end]`. A missing bound does not filter.
pub fn filter_by_date_range(
    entries: &[TimelineEntry],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<TimelineEntry> {
    entries
        .iter()
        .filter(|e| start.map_or(true, |s| e.date >= s))
        .filter(|e| end.map_or(true, |s| e.date <= s))
        .cloned()
        .collect()
}

/// Entries with `min <= mood_score <= max`.
pub fn filter_by_mood_range(entries: &[TimelineEntry], min: u8, max: u8) -> Vec<TimelineEntry> {
    entries
        .iter()
        .filter(|e| (min..=max).contains(&e.mood_score))
        .cloned()
        .collect()
}

/// Entries whose keywords, summary or activities contain `term`, ignoring case.
pub fn search(entries: &[TimelineEntry], term: &str) -> Vec<TimelineEntry> {
    let needle = term.to_lowercase();
    let hit = |s: &str| s.to_lowercase().contains(&needle);

    entries
        .iter()
        .filter(|e| {
            e.keywords.iter().any(|k| hit(k))
                || hit(&e.summary)
                || e.activities.iter().any(|a| hit(a))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, mood: u8, keywords: &[&str], summary: &str, activities: &[&str]) -> TimelineEntry {
        TimelineEntry {
            id: format!("id-{date}"),
            date: date.parse().unwrap(),
            title: "t".into(),
            summary: summary.into(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            mood_score: mood,
            activities: activities.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn sample() -> Vec<TimelineEntry> {
        vec![
            entry("2023-12-31", 2, &["Rust"], "late night coding", &[]),
            entry("2024-01-01", 4, &["新年"], "元旦快乐", &["放烟花"]),
            entry("2024-01-31", 5, &[], "月底总结", &["写报告"]),
            entry("2024-02-01", 1, &["工作"], "加班", &[]),
        ]
    }

    fn dates(entries: &[TimelineEntry]) -> Vec<String> {
        entries.iter().map(|e| e.date.to_string()).collect()
    }

    #[test]
    fn test_date_range_inclusive() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1);
        let end = NaiveDate::from_ymd_opt(2024, 1, 31);
        let filtered = filter_by_date_range(&sample(), start, end);
        assert_eq!(dates(&filtered), vec!["2024-01-01", "2024-01-31"]);
    }

    #[test]
    fn test_date_range_open_bounds() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 31);
        assert_eq!(filter_by_date_range(&sample(), start, None).len(), 2);
        assert_eq!(filter_by_date_range(&sample(), None, start).len(), 3);
        assert_eq!(filter_by_date_range(&sample(), None, None).len(), 4);
    }

    #[test]
    fn test_mood_range_inclusive() {
        let filtered = filter_by_mood_range(&sample(), 2, 4);
        assert_eq!(dates(&filtered), vec!["2023-12-31", "2024-01-01"]);
        assert!(filter_by_mood_range(&sample(), 5, 1).is_empty());
    }

    #[test]
    fn test_search_fields() {
        let entries = sample();
        assert_eq!(dates(&search(&entries, "rust")), vec!["2023-12-31"]);
        assert_eq!(dates(&search(&entries, "CODING")), vec!["2023-12-31"]);
        assert_eq!(dates(&search(&entries, "烟花")), vec!["2024-01-01"]);
        assert_eq!(dates(&search(&entries, "报告")), vec!["2024-01-31"]);
        assert!(search(&entries, "nothing").is_empty());
    }
}
