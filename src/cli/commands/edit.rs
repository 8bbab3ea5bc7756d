use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

/// Replace the fields of an existing entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, week, entry } = cmd {
        let target = match week {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        let mut session = open_session(cfg, date::today())?;

        // Pre-filled with the stored values, then overridden by the options
        let mut form = session.open_entry(id, target)?;
        entry.apply_to(&mut form)?;

        session.save(&form)?;

        success(format!(
            "Entry edited successfully: {} (week {})",
            id,
            session.state().week_key()
        ));
    }

    Ok(())
}
