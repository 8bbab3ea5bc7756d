use crate::errors::{AppError, AppResult};
use crate::models::days::Weekday;
use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Monday of the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Monday..Friday of the week containing `date`.
pub fn week_days(date: NaiveDate) -> Vec<(Weekday, NaiveDate)> {
    let monday = start_of_week(date);
    Weekday::ALL
        .into_iter()
        .map(|d| (d, monday + Duration::days(d.offset())))
        .collect()
}

/// Resolve the optional `--week` argument: any date of the wanted week,
/// defaulting to today. Always returns the Monday.
pub fn resolve_week(input: Option<&String>) -> AppResult<NaiveDate> {
    let d = match input {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
        None => today(),
    };
    Ok(start_of_week(d))
}

/// "Week of Jan 15" style label.
pub fn week_label(date: NaiveDate) -> String {
    start_of_week(date).format("Week of %b %-d, %Y").to_string()
}
