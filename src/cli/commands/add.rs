use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

/// Add a new entry to a week.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { week, entry } = cmd {
        //
        // 1. Resolve the week (Monday)
        //
        let monday = date::resolve_week(week.as_ref())?;

        //
        // 2. Load the week, then fill a blank form
        //
        let mut session = open_session(cfg, monday)?;
        session.refresh()?;

        let mut form = session.open_new();
        entry.apply_to(&mut form)?;

        //
        // 3. Validate, check conflicts, insert
        //
        let outcome = session.save(&form)?;

        success(format!(
            "New entry added successfully: {} (week {})",
            outcome.id(),
            session.state().week_key()
        ));
    }

    Ok(())
}
