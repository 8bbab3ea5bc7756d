use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::codes::KNOWN_CODES;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Codes) {
        let mut table = Table::new(vec![
            Column::new("Description"),
            Column::new("IAN"),
            Column::new("Activity"),
            Column::new("Object"),
        ]);

        for c in KNOWN_CODES.iter() {
            table.add_row(vec![
                c.description.to_string(),
                c.ian.to_string(),
                c.activity.to_string(),
                c.object.to_string(),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
