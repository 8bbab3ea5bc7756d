//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::models::days::Weekday;
use crate::models::validation::ValidationErrors;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("No entry found with id {0}")]
    NotFound(String),

    // ---------------------------
    // User-correctable input
    // ---------------------------
    #[error("Invalid entry:\n{0}")]
    Validation(ValidationErrors),

    #[error("There is a conflict in selected days with previous entries (week {week}: {})", join_days(.days))]
    Conflict { week: String, days: Vec<Weekday> },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid week key: {0}")]
    InvalidWeekKey(String),

    #[error("Invalid day: {0}")]
    InvalidDay(String),

    #[error("Unknown code: {0}")]
    UnknownCode(String),

    // ---------------------------
    // Interaction
    // ---------------------------
    #[error("Another operation is still in progress")]
    Busy,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

/// Coarse classification used when reporting an error to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    Store,
    Other,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_)
            | AppError::InvalidDate(_)
            | AppError::InvalidDay(_)
            | AppError::UnknownCode(_) => ErrorKind::Validation,
            AppError::Conflict { .. } => ErrorKind::Conflict,
            AppError::Db(_) | AppError::Io(_) | AppError::Migration(_) | AppError::NotFound(_) => {
                ErrorKind::Store
            }
            _ => ErrorKind::Other,
        }
    }

    /// True for errors the user can fix by changing the input.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation | ErrorKind::Conflict)
    }
}

fn join_days(days: &[Weekday]) -> String {
    days.iter()
        .map(|d| d.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        AppError::Validation(e)
    }
}

pub type AppResult<T> = Result<T, AppError>;
