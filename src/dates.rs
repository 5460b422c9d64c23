//! Lenient parsing of the human-readable dates found in payment exports.
//!
//! Exports are not consistent about how the request date is written, so a
//! small set of common layouts is accepted. Time of day, when present, is
//! discarded.

use chrono::{DateTime, NaiveDate};

/// Layouts tried in order. Month-first numeric dates come before day-first
/// ones, so `03/04/2022` reads as March 4th. `%b` accepts both abbreviated and
/// full month names.
const DATE_FORMATS: [&str; 9] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %b %Y",
    "%d %b, %Y",
];

/// Parses `text` into a calendar date, or `None` if no layout matches.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(timestamp.date_naive());
    }

    DATE_FORMATS.iter().find_map(|fmt| {
        let (date, remainder) = NaiveDate::parse_and_remainder(&normalized, fmt).ok()?;
        is_time_suffix(remainder).then_some(date)
    })
}

/// Trims, collapses runs of whitespace and strips English ordinal suffixes
/// (`23rd` becomes `23`).
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(strip_ordinal)
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_ordinal(token: &str) -> String {
    let (body, comma) = match token.strip_suffix(',') {
        Some(body) => (body, ","),
        None => (token, ""),
    };
    for suffix in ["st", "nd", "rd", "th"] {
        if let Some(digits) = body.strip_suffix(suffix) {
            if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                return format!("{digits}{comma}");
            }
        }
    }
    token.to_string()
}

/// Whatever follows the date must be empty or start a time-of-day part.
fn is_time_suffix(remainder: &str) -> bool {
    match remainder.chars().next() {
        None => true,
        Some(' ' | 'T' | ',') => remainder[1..]
            .trim_start()
            .starts_with(|c: char| c.is_ascii_digit()),
        Some(_) => false,
    }
}
