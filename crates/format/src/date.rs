use crate::locale::LocaleSettings;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::fmt::Write;

const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"];

/// Parses the date representations the data layer hands out.
///
/// Timestamps keep the calendar date they were written with; no timezone
/// conversion is applied. Integers are epoch milliseconds.
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::Number(n) => {
            let millis = n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            })?;
            if millis == 0 {
                return None;
            }
            DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
        }
        Value::String(s) => parse_date_str(s.trim()),
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Some(dt) = OFFSET_DATETIME_FORMATS
        .iter()
        .find_map(|f| DateTime::parse_from_str(s, f).ok())
    {
        return Some(dt.date_naive());
    }
    if let Some(dt) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
    {
        return Some(dt.date());
    }
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
}

pub(crate) fn format_date(value: Option<&Value>, locale: &LocaleSettings) -> String {
    match value.and_then(parse_date) {
        Some(date) => render(&date, &locale.date_format)
            .or_else(|| render(&date, DEFAULT_DATE_FORMAT))
            .unwrap_or_else(|| locale.placeholder.clone()),
        None => locale.placeholder.clone(),
    }
}

/// Formats the document generation timestamp.
pub(crate) fn format_timestamp(at: &NaiveDateTime, locale: &LocaleSettings) -> String {
    let mut out = String::new();
    match write!(out, "{}", at.format(&locale.timestamp_format)) {
        Ok(()) => out,
        Err(_) => {
            log::warn!(
                "Invalid timestamp format '{}', using ISO 8601",
                locale.timestamp_format
            );
            at.format("%Y-%m-%d %H:%M").to_string()
        }
    }
}

// An invalid strftime pattern surfaces as a fmt error instead of a panic here.
fn render(date: &NaiveDate, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}
