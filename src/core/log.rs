use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap());

const OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// ANSI colour for each kind of operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// A row of the internal `log` table.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub id: i32,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn load(pool: &mut DbPool) -> AppResult<Vec<LogLine>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogLine {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let lines = Self::load(pool)?;

        if lines.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = lines
            .iter()
            .map(|l| l.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = lines.iter().map(|l| l.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for l in lines {
            let color = color_for_operation(&l.operation);

            // Only the operation is coloured; the target is truncated so
            // that the visible width stays within OP_WIDTH.
            let mut visible = if l.target.is_empty() {
                l.operation.clone()
            } else {
                format!("{} ({})", l.operation, l.target)
            };
            if visible.chars().count() > OP_WIDTH {
                visible = visible.chars().take(OP_WIDTH - 3).collect::<String>() + "...";
            }

            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(OP_WIDTH.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                l.id,
                l.date,
                colored,
                padding,
                l.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
