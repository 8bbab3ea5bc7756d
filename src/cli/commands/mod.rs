pub mod add;
pub mod backup;
pub mod codes;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod week;

use crate::config::Config;
use crate::core::save::SaveOptions;
use crate::core::session::Session;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::NaiveDate;

/// Open the configured database and start a session on the week of `week`.
pub(crate) fn open_session(cfg: &Config, week: NaiveDate) -> AppResult<Session<DbPool>> {
    let pool = DbPool::open(&cfg.database)?;
    Ok(Session::new(
        pool,
        week,
        cfg.owner.clone(),
        SaveOptions {
            format: cfg.week_key_format,
            scope: cfg.conflict_scope,
        },
    ))
}
