use crate::core::conflict::{ConflictScope, conflicting_days};
use crate::core::validate::validate_entry;
use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, EntryForm};
use crate::models::week_key::{WeekKey, WeekKeyFormat};
use chrono::NaiveDate;

/// How week keys are written and how conflicts are scoped.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaveOptions {
    pub format: WeekKeyFormat,
    pub scope: ConflictScope,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(String),
    Updated(String),
}

impl SaveOutcome {
    pub fn id(&self) -> &str {
        match self {
            SaveOutcome::Created(id) | SaveOutcome::Updated(id) => id,
        }
    }
}

/// High-level business logic for saving an entry.
pub struct SaveLogic;

impl SaveLogic {
    /// Validate `form`, check it against the entries of `week` and write it.
    ///
    /// `editing` is the stored entry being replaced, `None` for a new one.
    /// The store is only written when validation and the conflict check pass.
    pub fn apply<S: EntryStore + ?Sized>(
        store: &mut S,
        form: &EntryForm,
        week: NaiveDate,
        editing: Option<&Entry>,
        actor: &str,
        opts: SaveOptions,
    ) -> AppResult<SaveOutcome> {
        //
        // 1. Field checks
        //
        let valid = validate_entry(form)?;

        //
        // 2. Day conflicts within the week
        //
        let key = WeekKey::from_date(week, opts.format);
        let existing = load_iso_week(store, &key)?;

        let owner = editing.map(|e| e.owner_id.as_str()).unwrap_or(actor);
        let exclude = editing.map(|e| e.id.as_str());

        let days = conflicting_days(valid.days(), &existing, exclude, opts.scope, owner);
        if !days.is_empty() {
            return Err(AppError::Conflict {
                week: key.to_string(),
                days,
            });
        }

        //
        // 3. Write
        //
        let fields = valid.into_fields(key);
        match editing {
            Some(e) => {
                store.update(&e.id, &fields)?;
                Ok(SaveOutcome::Updated(e.id.clone()))
            }
            None => Ok(SaveOutcome::Created(store.create(fields, actor)?)),
        }
    }
}

/// Entries of the ISO week of `key`, under either key layout.
fn load_iso_week<S: EntryStore + ?Sized>(store: &mut S, key: &WeekKey) -> AppResult<Vec<Entry>> {
    let mut keys: Vec<WeekKey> = Vec::with_capacity(2);
    for format in [WeekKeyFormat::Legacy, WeekKeyFormat::Padded] {
        let k = key.to_format(format)?;
        if !keys.contains(&k) {
            keys.push(k);
        }
    }

    let mut entries = Vec::new();
    for k in &keys {
        entries.extend(store.list_for_week(k)?);
    }
    Ok(entries)
}
