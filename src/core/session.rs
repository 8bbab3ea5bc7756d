//! One user working on one store: every user action goes through here so
//! that the view state transitions happen in the right order.

use crate::core::del::DeleteLogic;
use crate::core::save::{SaveLogic, SaveOptions, SaveOutcome};
use crate::core::state::ViewState;
use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, EntryForm};
use chrono::NaiveDate;

pub struct Session<S: EntryStore> {
    store: S,
    state: ViewState,
    actor: String,
    opts: SaveOptions,
}

impl<S: EntryStore> Session<S> {
    pub fn new(store: S, week: NaiveDate, actor: impl Into<String>, opts: SaveOptions) -> Self {
        Self {
            store,
            state: ViewState::new(week, opts.format),
            actor: actor.into(),
            opts,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Reload the listing of the selected week.
    pub fn refresh(&mut self) -> AppResult<&[Entry]> {
        let ticket = self.state.begin_listing();
        let entries = self.store.list_for_week(ticket.week())?;
        self.state.apply_listing(&ticket, entries);
        Ok(self.state.entries())
    }

    pub fn select_week(&mut self, date: NaiveDate) -> AppResult<&[Entry]> {
        self.state.select_week(date);
        self.refresh()
    }

    /// Open the editor on a blank form for the selected week.
    pub fn open_new(&mut self) -> EntryForm {
        self.state.open_new()
    }

    /// Open the editor on a stored entry.
    ///
    /// With `week` the entry will be saved into that week, otherwise into
    /// the week it is stored under.
    pub fn open_entry(&mut self, id: &str, week: Option<NaiveDate>) -> AppResult<EntryForm> {
        let entry = self
            .store
            .find(id)?
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;

        let target = match week {
            Some(d) => d,
            None => entry.week.monday()?,
        };
        self.select_week(target)?;

        if !self.state.select_entry(id) {
            self.state.select_stored(entry);
        }

        Ok(self.state.open_editor())
    }

    /// Save the editor content: a new entry, or the selected one.
    pub fn save(&mut self, form: &EntryForm) -> AppResult<SaveOutcome> {
        self.state.begin_operation()?;

        let result = SaveLogic::apply(
            &mut self.store,
            form,
            self.state.selected_week(),
            self.state.selected_entry(),
            &self.actor,
            self.opts,
        );

        self.state.end_operation();

        let outcome = result?;
        self.state.close_editor();
        self.refresh()?;
        Ok(outcome)
    }

    /// Delete the entry open in the editor.
    pub fn delete_selected(&mut self) -> AppResult<Entry> {
        let id = self
            .state
            .selected_entry()
            .map(|e| e.id.clone())
            .ok_or_else(|| AppError::Other("No entry selected".into()))?;

        self.state.begin_operation()?;
        let result = DeleteLogic::apply(&mut self.store, &id);
        self.state.end_operation();

        let removed = result?;
        self.state.close_editor();
        self.refresh()?;
        Ok(removed)
    }
}
