use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::store::RESULT_LIMIT;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { week } = cmd {
        let monday = date::resolve_week(week.as_ref())?;

        let mut session = open_session(cfg, monday)?;
        let entries = session.refresh()?.to_vec();
        let key = session.state().week_key();

        header(format!("{} (key {})", date::week_label(monday), key));

        if entries.is_empty() {
            println!("No entries for week {}", key);
            return Ok(());
        }

        print!("{}", ListLogic::week_table(monday, &entries).render());

        if entries.len() >= RESULT_LIMIT {
            warning(format!("Showing the first {} entries only.", RESULT_LIMIT));
        }

        let free = ListLogic::free_days(&entries);
        if !free.is_empty() {
            println!(
                "\nFree days: {}",
                free.iter().map(|d| d.name()).collect::<Vec<_>>().join(", ")
            );
        }
    }
    Ok(())
}
