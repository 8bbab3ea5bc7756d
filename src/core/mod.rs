pub mod backup;
pub mod config;
pub mod conflict;
pub mod del;
pub mod export;
pub mod list;
pub mod log;
pub mod save;
pub mod session;
pub mod state;
pub mod validate;

pub use conflict::{ConflictScope, has_conflict};
pub use validate::validate_entry;
