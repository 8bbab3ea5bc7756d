//! Day-overlap detection between an entry being saved and the entries
//! already stored for the same week.

use crate::models::days::{WeekDays, Weekday};
use crate::models::entry::Entry;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which stored entries a candidate is compared against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConflictScope {
    /// Every entry of the week, whoever owns it.
    #[default]
    Week,
    /// Only entries of the week owned by the same user.
    Owner,
}

impl ConflictScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictScope::Week => "week",
            ConflictScope::Owner => "owner",
        }
    }
}

fn relevant<'a>(
    existing: &'a [Entry],
    exclude_id: Option<&'a str>,
    scope: ConflictScope,
    owner_id: &'a str,
) -> impl Iterator<Item = &'a Entry> {
    existing
        .iter()
        .filter(move |e| exclude_id != Some(e.id.as_str()))
        .filter(move |e| scope == ConflictScope::Week || e.owner_id == owner_id)
}

/// True when any entry of `existing` (other than `exclude_id`) claims a
/// day flagged in `candidate`. Week-wide: owners are not distinguished.
pub fn has_conflict(candidate: &WeekDays, existing: &[Entry], exclude_id: Option<&str>) -> bool {
    has_conflict_in_scope(candidate, existing, exclude_id, ConflictScope::Week, "")
}

/// [`has_conflict`] with an explicit scope. `owner_id` is the owner of the
/// candidate and only matters for [`ConflictScope::Owner`].
pub fn has_conflict_in_scope(
    candidate: &WeekDays,
    existing: &[Entry],
    exclude_id: Option<&str>,
    scope: ConflictScope,
    owner_id: &str,
) -> bool {
    relevant(existing, exclude_id, scope, owner_id).any(|e| candidate.overlaps(&e.days))
}

/// Weekdays of `candidate` already claimed by some relevant entry, Monday first.
pub fn conflicting_days(
    candidate: &WeekDays,
    existing: &[Entry],
    exclude_id: Option<&str>,
    scope: ConflictScope,
    owner_id: &str,
) -> Vec<Weekday> {
    let mut taken = WeekDays::none();
    for e in relevant(existing, exclude_id, scope, owner_id) {
        for day in candidate.overlap(&e.days) {
            taken.set(day, true);
        }
    }
    taken.selected()
}
