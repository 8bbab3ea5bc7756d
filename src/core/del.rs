use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove entry `id` permanently and return what was removed.
    pub fn apply<S: EntryStore + ?Sized>(store: &mut S, id: &str) -> AppResult<Entry> {
        let entry = store
            .find(id)?
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;

        store.delete(id)?;
        Ok(entry)
    }
}
