use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::week_key::{WeekKey, WeekKeyFormat};
use crate::utils::date;
use chrono::Datelike;

/// Print the ISO week of a date with both key layouts.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { date: d } = cmd {
        let monday = date::resolve_week(d.as_ref())?;
        let iso = monday.iso_week();

        println!("ISO week : {} of {}", iso.week(), iso.year());
        println!(
            "Key      : {} ({})",
            WeekKey::from_date(monday, cfg.week_key_format),
            cfg.week_key_format.as_str()
        );

        let other = match cfg.week_key_format {
            WeekKeyFormat::Legacy => WeekKeyFormat::Padded,
            WeekKeyFormat::Padded => WeekKeyFormat::Legacy,
        };
        println!(
            "           {} ({})",
            WeekKey::from_date(monday, other),
            other.as_str()
        );

        for (day, d) in date::week_days(monday) {
            println!("{:<9}: {}", day.name(), d.format("%Y-%m-%d"));
        }
    }

    Ok(())
}
