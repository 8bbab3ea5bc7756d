use super::codes::{KnownCode, describe};
use super::days::WeekDays;
use super::week_key::WeekKey;
use chrono::Local;
use serde::{Deserialize, Serialize};

/// A stored entry: one activity code worked on some days of a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,         // ⇔ entries.id (TEXT, assigned by the store)
    pub week: WeekKey,      // ⇔ entries.week
    pub ian: String,        // ⇔ entries.ian      ("NN-NNN")
    pub activity: String,   // ⇔ entries.activity ("NNNN")
    pub object: String,     // ⇔ entries.object   ("NNNN")
    pub days: WeekDays,     // ⇔ entries.monday .. entries.friday
    pub owner_id: String,   // ⇔ entries.owner_id (set once, on insert)
    pub created_at: String, // ⇔ entries.created_at (TEXT, ISO8601)
}

impl Entry {
    pub fn description(&self) -> &'static str {
        describe(&self.ian, &self.activity, &self.object)
    }

    pub fn fields(&self) -> EntryFields {
        EntryFields {
            week: self.week.clone(),
            ian: self.ian.clone(),
            activity: self.activity.clone(),
            object: self.object.clone(),
            days: self.days,
        }
    }
}

/// The part of an entry that is written on insert and replaced on update.
/// Never carries `id` or `owner_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryFields {
    pub week: WeekKey,
    pub ian: String,
    pub activity: String,
    pub object: String,
    pub days: WeekDays,
}

impl EntryFields {
    /// Build a full entry once the store has picked an id.
    pub fn into_entry(self, id: String, owner_id: &str) -> Entry {
        Entry {
            id,
            week: self.week,
            ian: self.ian,
            activity: self.activity,
            object: self.object,
            days: self.days,
            owner_id: owner_id.to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }
}

/// Raw, not yet validated form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    pub ian: String,
    pub activity: String,
    pub object: String,
    pub days: WeekDays,
}

impl EntryForm {
    /// Pre-fill the editor with an existing entry.
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            ian: entry.ian.clone(),
            activity: entry.activity.clone(),
            object: entry.object.clone(),
            days: entry.days,
        }
    }

    /// Quick-fill the three code fields from a known code.
    pub fn apply_code(&mut self, code: &KnownCode) {
        self.ian = code.ian.to_string();
        self.activity = code.activity.to_string();
        self.object = code.object.to_string();
    }
}
