use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::{date, days_summary};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut session = open_session(cfg, date::today())?;
        let form = session.open_entry(id, None)?;

        //
        // Confirmation prompt
        //
        if !*yes {
            let prompt = format!(
                "Delete entry {} ({} {} {}, {}) of week {}? This action is irreversible.",
                id,
                form.ian,
                form.activity,
                form.object,
                days_summary(&form.days),
                session.state().week_key()
            );

            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute deletion
        //
        let removed = session.delete_selected()?;
        success(format!(
            "Entry {} deleted successfully (week {}).",
            removed.id, removed.week
        ));
    }

    Ok(())
}
