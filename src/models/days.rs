use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Working days an entry can claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    pub fn short(&self) -> &'static str {
        &self.name()[..3]
    }

    /// Convert enum → DB column name
    pub fn column(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
        }
    }

    /// Helper: accept CLI input like "mon", "Tue", "wednesday"
    pub fn from_code(code: &str) -> Option<Self> {
        let c = code.trim().to_lowercase();
        if c.len() < 3 {
            return None;
        }
        Weekday::ALL
            .into_iter()
            .find(|d| d.column().starts_with(&c))
    }

    /// Offset from Monday (0..=4).
    pub fn offset(&self) -> i64 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
        }
    }
}

/// The five day flags of an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDays {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
}

impl WeekDays {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        let mut d = Self::default();
        d.set_all(true);
        d
    }

    pub fn from_days(days: &[Weekday]) -> Self {
        let mut d = Self::default();
        for day in days {
            d.set(*day, true);
        }
        d
    }

    /// Parse a comma separated list ("mon,tue,fri").
    pub fn parse_list(s: &str) -> AppResult<Self> {
        let mut d = Self::default();
        for part in s.split(',').filter(|p| !p.trim().is_empty()) {
            let day = Weekday::from_code(part).ok_or_else(|| AppError::InvalidDay(part.trim().to_string()))?;
            d.set(day, true);
        }
        Ok(d)
    }

    pub fn get(&self, day: Weekday) -> bool {
        match day {
            Weekday::Monday => self.monday,
            Weekday::Tuesday => self.tuesday,
            Weekday::Wednesday => self.wednesday,
            Weekday::Thursday => self.thursday,
            Weekday::Friday => self.friday,
        }
    }

    pub fn set(&mut self, day: Weekday, value: bool) {
        let flag = match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
        };
        *flag = value;
    }

    /// "All days" toggle: sets or clears every flag.
    pub fn set_all(&mut self, value: bool) {
        for day in Weekday::ALL {
            self.set(day, value);
        }
    }

    /// Derived "all days" value, recomputed from the five flags.
    pub fn all_days(&self) -> bool {
        Weekday::ALL.iter().all(|d| self.get(*d))
    }

    pub fn any(&self) -> bool {
        Weekday::ALL.iter().any(|d| self.get(*d))
    }

    pub fn selected(&self) -> Vec<Weekday> {
        Weekday::ALL.into_iter().filter(|d| self.get(*d)).collect()
    }

    /// Days flagged in both sets.
    pub fn overlap(&self, other: &WeekDays) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|d| self.get(*d) && other.get(*d))
            .collect()
    }

    pub fn overlaps(&self, other: &WeekDays) -> bool {
        Weekday::ALL.iter().any(|d| self.get(*d) && other.get(*d))
    }
}
