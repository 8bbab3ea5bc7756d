//! Week keys: the partition every entry is stored and queried under.
//!
//! A key is the ISO-8601 week number followed by the ISO week-year.
//! The legacy layout does not pad the week (`"32024"`), the padded layout
//! always uses two digits (`"032024"`).

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WeekKeyFormat {
    Legacy,
    #[default]
    Padded,
}

impl WeekKeyFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekKeyFormat::Legacy => "legacy",
            WeekKeyFormat::Padded => "padded",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekKey(String);

impl WeekKey {
    /// Key of the ISO week containing `date`.
    ///
    /// Uses the ISO week-year, so Dec 31 2018 (week 1 of 2019) yields
    /// `"12019"`, not `"12018"`.
    pub fn from_date(date: NaiveDate, format: WeekKeyFormat) -> Self {
        let iso = date.iso_week();
        Self::from_parts(iso.week(), iso.year(), format)
    }

    pub fn from_parts(week: u32, year: i32, format: WeekKeyFormat) -> Self {
        match format {
            WeekKeyFormat::Legacy => WeekKey(format!("{}{}", week, year)),
            WeekKeyFormat::Padded => WeekKey(format!("{:02}{}", week, year)),
        }
    }

    /// Wrap a key exactly as it was stored.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        WeekKey(raw.into())
    }

    /// Split a stored key into (week, year).
    ///
    /// The last four digits are the year, whatever precedes them is the week.
    pub fn parse(raw: &str) -> AppResult<(u32, i32)> {
        let invalid = || AppError::InvalidWeekKey(raw.to_string());

        if !(5..=6).contains(&raw.len()) || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let (w, y) = raw.split_at(raw.len() - 4);
        let week: u32 = w.parse().map_err(|_| invalid())?;
        let year: i32 = y.parse().map_err(|_| invalid())?;

        if !(1..=53).contains(&week) {
            return Err(invalid());
        }

        Ok((week, year))
    }

    /// Re-encode this key in another layout.
    pub fn to_format(&self, format: WeekKeyFormat) -> AppResult<WeekKey> {
        let (week, year) = Self::parse(&self.0)?;
        Ok(Self::from_parts(week, year, format))
    }

    /// Monday of the week this key stands for.
    pub fn monday(&self) -> AppResult<NaiveDate> {
        let (week, year) = Self::parse(&self.0)?;
        NaiveDate::from_isoywd_opt(year, week, chrono::Weekday::Mon)
            .ok_or_else(|| AppError::InvalidWeekKey(self.0.clone()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shorthand for [`WeekKey::from_date`].
pub fn week_key(date: NaiveDate, format: WeekKeyFormat) -> WeekKey {
    WeekKey::from_date(date, format)
}
