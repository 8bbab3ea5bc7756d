//! Explicit view state: which week is selected, which entry is being
//! edited, whether an operation is in flight, and which listing response
//! is still wanted.

use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, EntryForm};
use crate::models::week_key::{WeekKey, WeekKeyFormat};
use crate::utils::date::start_of_week;
use chrono::NaiveDate;

/// Identifies one listing request. A response is applied only if its
/// ticket still matches the state when it arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingTicket {
    week: WeekKey,
    generation: u64,
}

impl ListingTicket {
    pub fn week(&self) -> &WeekKey {
        &self.week
    }
}

#[derive(Debug, Clone)]
pub struct ViewState {
    selected_week: NaiveDate,
    format: WeekKeyFormat,
    selected_entry: Option<Entry>,
    editor_open: bool,
    generation: u64,
    loading: bool,
    busy: bool,
    entries: Vec<Entry>,
}

impl ViewState {
    pub fn new(week: NaiveDate, format: WeekKeyFormat) -> Self {
        Self {
            selected_week: start_of_week(week),
            format,
            selected_entry: None,
            editor_open: false,
            generation: 0,
            loading: false,
            busy: false,
            entries: Vec::new(),
        }
    }

    /// Monday of the selected week.
    pub fn selected_week(&self) -> NaiveDate {
        self.selected_week
    }

    pub fn week_key(&self) -> WeekKey {
        WeekKey::from_date(self.selected_week, self.format)
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selected_entry.as_ref()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_editor_open(&self) -> bool {
        self.editor_open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    // ---------------------------
    // Transitions
    // ---------------------------

    /// Pick another week: drops the selection and invalidates any listing
    /// still in flight.
    pub fn select_week(&mut self, date: NaiveDate) {
        self.selected_week = start_of_week(date);
        self.selected_entry = None;
        self.request_refresh();
    }

    /// Select a row of the current listing. Returns false for unknown ids.
    pub fn select_entry(&mut self, id: &str) -> bool {
        self.selected_entry = self.entries.iter().find(|e| e.id == id).cloned();
        self.selected_entry.is_some()
    }

    /// Select an entry fetched outside the current listing.
    pub fn select_stored(&mut self, entry: Entry) {
        self.selected_entry = Some(entry);
    }

    /// Open the editor on the selected entry, or on a blank form.
    pub fn open_editor(&mut self) -> EntryForm {
        self.editor_open = true;
        self.selected_entry
            .as_ref()
            .map(EntryForm::from_entry)
            .unwrap_or_default()
    }

    /// Open the editor on a blank form, whatever was selected.
    pub fn open_new(&mut self) -> EntryForm {
        self.selected_entry = None;
        self.open_editor()
    }

    /// Close the editor; the listing must be reloaded afterwards.
    pub fn close_editor(&mut self) {
        self.editor_open = false;
        self.selected_entry = None;
        self.request_refresh();
    }

    pub fn request_refresh(&mut self) {
        self.generation += 1;
    }

    // ---------------------------
    // Listing
    // ---------------------------

    pub fn begin_listing(&mut self) -> ListingTicket {
        self.loading = true;
        ListingTicket {
            week: self.week_key(),
            generation: self.generation,
        }
    }

    /// Apply a listing response. Stale responses (another week selected, or
    /// a newer refresh requested since) are dropped and false is returned.
    pub fn apply_listing(&mut self, ticket: &ListingTicket, entries: Vec<Entry>) -> bool {
        if ticket.generation != self.generation || ticket.week != self.week_key() {
            return false;
        }
        self.entries = entries;
        self.loading = false;
        true
    }

    // ---------------------------
    // In-flight operations
    // ---------------------------

    /// Claim the single operation slot.
    pub fn begin_operation(&mut self) -> AppResult<()> {
        if self.busy {
            return Err(AppError::Busy);
        }
        self.busy = true;
        Ok(())
    }

    /// Release the slot, on success or failure alike.
    pub fn end_operation(&mut self) {
        self.busy = false;
    }
}
