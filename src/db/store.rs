//! The entry store boundary: find by week, insert, update and delete by id.

use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, EntryFields};
use crate::models::week_key::WeekKey;
use uuid::Uuid;

/// Maximum number of entries returned by a single week query.
pub const RESULT_LIMIT: usize = 1000;

pub trait EntryStore {
    /// Entries whose week equals `week`, capped at [`RESULT_LIMIT`].
    fn list_for_week(&mut self, week: &WeekKey) -> AppResult<Vec<Entry>>;

    fn find(&mut self, id: &str) -> AppResult<Option<Entry>>;

    /// Store a new entry owned by `owner_id`; returns the assigned id.
    fn create(&mut self, fields: EntryFields, owner_id: &str) -> AppResult<String>;

    /// Replace week, codes and days of entry `id`. Owner is untouched.
    fn update(&mut self, id: &str, fields: &EntryFields) -> AppResult<()>;

    fn delete(&mut self, id: &str) -> AppResult<()>;
}

impl EntryStore for DbPool {
    fn list_for_week(&mut self, week: &WeekKey) -> AppResult<Vec<Entry>> {
        queries::load_entries_by_week(&self.conn, week, RESULT_LIMIT)
    }

    fn find(&mut self, id: &str) -> AppResult<Option<Entry>> {
        queries::load_entry_by_id(&self.conn, id)
    }

    fn create(&mut self, fields: EntryFields, owner_id: &str) -> AppResult<String> {
        let id = Uuid::new_v4().to_string();
        let entry = fields.into_entry(id.clone(), owner_id);

        queries::insert_entry(&self.conn, &entry)?;

        audit(
            &self.conn,
            "add",
            &id,
            &format!(
                "week={} ian={} activity={} object={} owner={}",
                entry.week, entry.ian, entry.activity, entry.object, entry.owner_id
            ),
        );

        Ok(id)
    }

    fn update(&mut self, id: &str, fields: &EntryFields) -> AppResult<()> {
        if queries::update_entry(&self.conn, id, fields)? == 0 {
            return Err(AppError::NotFound(id.to_string()));
        }

        audit(
            &self.conn,
            "edit",
            id,
            &format!(
                "week={} ian={} activity={} object={}",
                fields.week, fields.ian, fields.activity, fields.object
            ),
        );

        Ok(())
    }

    fn delete(&mut self, id: &str) -> AppResult<()> {
        if queries::delete_entry(&self.conn, id)? == 0 {
            return Err(AppError::NotFound(id.to_string()));
        }

        audit(&self.conn, "del", id, "Entry deleted");
        Ok(())
    }
}
