use std::{fmt, ops::Deref, str::FromStr};

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;
#[cfg(feature = "backend")]
use rusqlite::{
    types::{FromSql, FromSqlResult, ToSqlOutput, ValueRef},
    ToSql,
};

/// Format used whenever a date leaves the api, e.g. `Mon Jan 01 2024`
pub const DISPLAY_FORMAT: &str = "%a %b %d %Y";

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    DISPLAY_FORMAT,
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%Y/%m/%d",
    "%m/%d/%Y",
];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Unrecognised date: {input:?}")]
pub struct DateParseError {
    pub input: String,
}

/// A day on the calendar. Time of day is never stored or compared.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Accepts the handful of shapes people type into a date field. Date-time
    /// input keeps only its calendar day, as written (no timezone shift).
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Some(Self(dt.date_naive()));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
            return Some(Self(dt.date_naive()));
        }

        DATE_FORMATS
            .iter()
            .find_map(|f| NaiveDate::parse_from_str(input, f).ok())
            .or_else(|| parse_reduced(input))
            .or_else(|| {
                DATE_TIME_FORMATS
                    .iter()
                    .find_map(|f| NaiveDateTime::parse_from_str(input, f).ok())
                    .map(|dt| dt.date())
            })
            .map(Self)
    }

    /// Parses `input` if there is any, falling back to today's date
    pub fn parse_or_today(input: Option<&str>) -> Self {
        input.and_then(Self::parse).unwrap_or_else(Self::today)
    }
}

/// `YYYY` and `YYYY-MM`, which name the first day of the year or month
fn parse_reduced(input: &str) -> Option<NaiveDate> {
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    let (year, month) = match input.split_once('-') {
        None => (input, "01"),
        Some((year, month)) => (year, month),
    };
    if year.len() != 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

impl From<NaiveDate> for CalendarDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl Deref for CalendarDate {
    type Target = NaiveDate;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.format(DISPLAY_FORMAT).fmt(f)
    }
}

impl FromStr for CalendarDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DateParseError {
            input: s.to_owned(),
        })
    }
}

// Stored as ISO text so that string comparison in sql matches date order
#[cfg(feature = "backend")]
impl ToSql for CalendarDate {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        self.0.to_sql()
    }
}

#[cfg(feature = "backend")]
impl FromSql for CalendarDate {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        NaiveDate::column_result(value).map(Self)
    }
}

#[cfg(feature = "backend")]
impl From<CalendarDate> for sea_query::Value {
    fn from(value: CalendarDate) -> Self {
        value.0.into()
    }
}
