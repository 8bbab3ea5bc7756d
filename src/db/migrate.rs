use crate::errors::{AppError, AppResult};
use crate::models::week_key::{WeekKey, WeekKeyFormat};
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result, params};

const PAD_WEEK_KEYS: &str = "20260301_0002_pad_week_keys";

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `entries` table exists.
fn entries_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='entries'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `entries` table and its week index.
fn create_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id         TEXT PRIMARY KEY,
            week       TEXT NOT NULL,
            ian        TEXT NOT NULL,
            activity   TEXT NOT NULL,
            object     TEXT NOT NULL,
            monday     INTEGER NOT NULL DEFAULT 0 CHECK(monday IN (0,1)),
            tuesday    INTEGER NOT NULL DEFAULT 0 CHECK(tuesday IN (0,1)),
            wednesday  INTEGER NOT NULL DEFAULT 0 CHECK(wednesday IN (0,1)),
            thursday   INTEGER NOT NULL DEFAULT 0 CHECK(thursday IN (0,1)),
            friday     INTEGER NOT NULL DEFAULT 0 CHECK(friday IN (0,1)),
            owner_id   TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_week ON entries(week);
        "#,
    )?;
    Ok(())
}

pub fn is_migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_migration_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        params![version, message],
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create entries table if missing
    if !entries_table_exists(conn)? {
        create_entries_table(conn)?;
        success("Created entries table.");
    } else {
        conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_entries_week ON entries(week);")?;
    }

    Ok(())
}

/// Rewrite every stored legacy week key ("32024") in the padded layout
/// ("032024"). Runs once; later calls are no-ops returning 0.
///
/// A zip copy of the database is written next to it first (file-backed
/// databases only). Keys that cannot be parsed are left untouched.
pub fn pad_week_keys(conn: &mut Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    if is_migration_applied(conn, PAD_WEEK_KEYS)? {
        return Ok(0);
    }

    let db_path: String =
        conn.query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))?;

    if db_path.is_empty() {
        warning("Could not determine DB path, backup skipped.");
    } else {
        crate::core::backup::zip_file(
            std::path::Path::new(&db_path),
            "backup_db_pre_pad_keys",
        )?;
    }

    let weeks: Vec<String> = {
        let mut stmt = conn.prepare("SELECT DISTINCT week FROM entries")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut v = Vec::new();
        for r in rows {
            v.push(r?);
        }
        v
    };

    let tx = conn.transaction()?;
    let mut rewritten = 0;

    for raw in weeks {
        let padded = match WeekKey::from_raw(raw.as_str()).to_format(WeekKeyFormat::Padded) {
            Ok(k) => k,
            Err(AppError::InvalidWeekKey(k)) => {
                warning(format!("Skipping unparsable week key '{}'", k));
                continue;
            }
            Err(e) => return Err(e),
        };

        if padded.as_str() == raw {
            continue;
        }

        rewritten += tx.execute(
            "UPDATE entries SET week = ?1 WHERE week = ?2",
            params![padded.as_str(), raw],
        )?;
    }

    mark_migration_applied(
        &tx,
        PAD_WEEK_KEYS,
        &format!("Padded week keys on {} entries", rewritten),
    )?;
    tx.commit()?;

    success(format!(
        "Migration applied: {} → {} entries rewritten",
        PAD_WEEK_KEYS, rewritten
    ));

    Ok(rewritten)
}
