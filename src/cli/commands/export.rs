use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        week,
        force,
    } = cmd
    {
        let week = match week {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        let mut pool = DbPool::open(&cfg.database)?;
        ExportLogic::export(&mut pool, *format, file, week, cfg.week_key_format, *force)?;
    }
    Ok(())
}
