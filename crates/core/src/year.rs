// SPDX-License-Identifier: MIT

//!
//! The derived year of an event
//!

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Calendar date formats tried, in order, once a date isn't a bare integer
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Date-time formats without an offset
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Month & year formats (parsed with a day of `1` prepended)
const MONTH_YEAR_FORMATS: [&str; 2] = ["%d %B %Y", "%d %b %Y"];

/// Errors that can arise in relation to a [`Year`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum YearError {
    /// Neither an integer nor a calendar date could be read from the string
    #[error("No year can be derived from `{0}`")]
    Underivable(String),
}

/// The year an event is positioned at on a timeline.
///
/// Events carry free-form dates (`"1851"`, `"1889-06-06"`, `"June 1889"`).
/// The same derivation must be used both to lay events out and to map a
/// clicked position back to its event, so it lives here and nowhere else.
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Deserialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Year(i32);

impl Year {
    /// Create a year from its numeric value
    pub fn new(value: i32) -> Self {
        Year(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// Derive the year of a free-form event date.
    ///
    /// 1. The whole (trimmed) string as an integer, e.g. `"1851"` or `"-44"`
    /// 2. The year of the string parsed as a calendar date, e.g.
    ///    `"1889-06-06"` or `"June 6, 1889"`
    /// 3. The leading integer of the string, e.g. `"1850s"`
    ///
    /// Returns `None` if all three fail.
    pub fn derive(date: &str) -> Option<Year> {
        let date = date.trim();
        date.parse::<i32>()
            .ok()
            .or_else(|| calendar_year(date))
            .or_else(|| leading_integer(date))
            .map(Year)
    }
}

impl From<i32> for Year {
    fn from(value: i32) -> Self {
        Year(value)
    }
}

impl FromStr for Year {
    type Err = YearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Year::derive(s).ok_or_else(|| YearError::Underivable(s.to_string()))
    }
}

/// The year of `date` when read as a calendar date or date-time
fn calendar_year(date: &str) -> Option<i32> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(date) {
        return Some(date_time.year());
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(date, format) {
            return Some(date_time.year());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(date, format) {
            return Some(date.year());
        }
    }
    let with_day = format!("1 {date}");
    for format in MONTH_YEAR_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&with_day, format) {
            return Some(date.year());
        }
    }
    None
}

/// The (optionally signed) run of digits at the start of `date`
fn leading_integer(date: &str) -> Option<i32> {
    let (sign, digits) = match date.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, date.strip_prefix('+').unwrap_or(date)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i32>().ok().map(|value| sign * value)
}
