use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) COUNTS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
    let weeks: i64 = pool
        .conn
        .query_row("SELECT COUNT(DISTINCT week) FROM entries", [], |row| {
            row.get(0)
        })?;
    let owners: i64 = pool
        .conn
        .query_row("SELECT COUNT(DISTINCT owner_id) FROM entries", [], |row| {
            row.get(0)
        })?;

    println!("{}• Total entries:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);
    println!("{}• Weeks:{} {}", CYAN, RESET, weeks);
    println!("{}• Owners:{} {}", CYAN, RESET, owners);

    //
    // 3) CREATION RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM entries ORDER BY created_at ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM entries ORDER BY created_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Created:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE ENTRIES/WEEK
    //
    if weeks > 0 {
        let avg = count as f64 / weeks as f64;
        println!("{}• Average entries/week:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
