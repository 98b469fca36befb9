// src/domain/dates.rs
//
// Calendar dates are exchanged as `YYYY-MM-DD` strings with no timezone.
// All date math treats them as local dates at midnight.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn today_string() -> String {
    format_date(today())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// True when `value` looks like `YYYY-MM-DD`, without checking the calendar
pub fn has_date_shape(value: &str) -> bool {
    DATE_SHAPE.is_match(value)
}

/// Parse a strict `YYYY-MM-DD` calendar date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !has_date_shape(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}
