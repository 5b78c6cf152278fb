//! Calendar date resolution for journal entries.
//!
//! Precedence: the identifier's file stem against the configured pattern,
//! then the first `YYYY-MM-DD` / `YYYY/MM/DD` date in the body, then today.
//! Resolution never fails; a journal with odd file names still ingests.

use std::path::Path;

use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static BODY_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})[-/](\d{2})[-/](\d{2})").expect("valid body date regex"));

/// Resolve the date of an entry from its identifier, falling back to its body.
pub fn resolve(identifier: &str, format: &str, body: &str) -> NaiveDate {
    if let Some(date) = from_identifier(identifier, format) {
        return date;
    }
    if let Some(date) = from_body(body) {
        debug!("Date for {} taken from body: {}", identifier, date);
        return date;
    }
    debug!("No date found for {}, using today", identifier);
    today()
}

/// Parse the identifier's file stem against a moment-style pattern.
pub fn from_identifier(identifier: &str, format: &str) -> Option<NaiveDate> {
    let stem = Path::new(identifier).file_stem()?.to_str()?;
    NaiveDate::parse_from_str(stem, &to_chrono_pattern(format)).ok()
}

/// First valid `YYYY-MM-DD` or `YYYY/MM/DD` date in the text.
pub fn from_body(body: &str) -> Option<NaiveDate> {
    BODY_DATE.captures_iter(body).find_map(|cap| {
        let year = cap[1].parse().ok()?;
        let month = cap[2].parse().ok()?;
        let day = cap[3].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    })
}

/// Today's calendar date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Translate a moment-style pattern (`YYYY-MM-DD`) into a chrono one (`%Y-%m-%d`).
///
/// Supported tokens: `YYYY YY MMMM MMM MM M DD D dddd ddd`. Text inside
/// square brackets is literal; any other character is copied through.
pub fn to_chrono_pattern(format: &str) -> String {
    let chars: Vec<char> = format.chars().collect();
    let mut out = String::with_capacity(format.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '[' {
            let close = chars[i + 1..].iter().position(|&ch| ch == ']');
            if let Some(len) = close {
                for &lit in &chars[i + 1..i + 1 + len] {
                    push_literal(&mut out, lit);
                }
                i += len + 2;
                continue;
            }
        }

        let run = chars[i..].iter().take_while(|&&ch| ch == c).count();
        let token: String = std::iter::repeat(c).take(run).collect();
        let mapped = match token.as_str() {
            "YYYY" => Some("%Y"),
            "YY" => Some("%y"),
            "MMMM" => Some("%B"),
            "MMM" => Some("%b"),
            "MM" | "M" => Some("%m"),
            "DD" | "D" => Some("%d"),
            "dddd" => Some("%A"),
            "ddd" => Some("%a"),
            _ => None,
        };
        match mapped {
            Some(directive) => out.push_str(directive),
            None => token.chars().for_each(|ch| push_literal(&mut out, ch)),
        }
        i += run;
    }

    out
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}
