use crate::errors::AppResult;
use crate::models::days::WeekDays;
use crate::models::entry::{Entry, EntryFields};
use crate::models::week_key::WeekKey;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_ENTRY: &str = "SELECT id, week, ian, activity, object,
        monday, tuesday, wednesday, thursday, friday,
        owner_id, created_at
     FROM entries";

pub fn map_row(row: &Row) -> Result<Entry> {
    let flag = |name: &str| -> Result<bool> { Ok(row.get::<_, i32>(name)? == 1) };

    Ok(Entry {
        id: row.get("id")?,
        week: WeekKey::from_raw(row.get::<_, String>("week")?),
        ian: row.get("ian")?,
        activity: row.get("activity")?,
        object: row.get("object")?,
        days: WeekDays {
            monday: flag("monday")?,
            tuesday: flag("tuesday")?,
            wednesday: flag("wednesday")?,
            thursday: flag("thursday")?,
            friday: flag("friday")?,
        },
        owner_id: row.get("owner_id")?,
        created_at: row.get("created_at")?,
    })
}

fn as_int(b: bool) -> i32 {
    if b { 1 } else { 0 }
}

/// Entries stored under `week`, at most `limit` rows, in insertion order.
pub fn load_entries_by_week(conn: &Connection, week: &WeekKey, limit: usize) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_ENTRY}
         WHERE week = ?1
         ORDER BY created_at ASC, rowid ASC
         LIMIT ?2"
    ))?;

    let rows = stmt.query_map(params![week.as_str(), limit as i64], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_entry_by_id(conn: &Connection, id: &str) -> AppResult<Option<Entry>> {
    let mut stmt = conn.prepare(&format!("{SELECT_ENTRY} WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// Every stored entry, oldest first.
pub fn load_all_entries(conn: &Connection) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare(&format!("{SELECT_ENTRY} ORDER BY created_at ASC, rowid ASC"))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_entry(conn: &Connection, e: &Entry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO entries (id, week, ian, activity, object,
                              monday, tuesday, wednesday, thursday, friday,
                              owner_id, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            e.id,
            e.week.as_str(),
            e.ian,
            e.activity,
            e.object,
            as_int(e.days.monday),
            as_int(e.days.tuesday),
            as_int(e.days.wednesday),
            as_int(e.days.thursday),
            as_int(e.days.friday),
            e.owner_id,
            e.created_at,
        ],
    )?;
    Ok(())
}

/// Replace week, codes and day flags of an entry (never owner_id).
/// Returns the number of rows touched.
pub fn update_entry(conn: &Connection, id: &str, f: &EntryFields) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE entries
         SET week = ?1, ian = ?2, activity = ?3, object = ?4,
             monday = ?5, tuesday = ?6, wednesday = ?7,
             thursday = ?8, friday = ?9
         WHERE id = ?10",
        params![
            f.week.as_str(),
            f.ian,
            f.activity,
            f.object,
            as_int(f.days.monday),
            as_int(f.days.tuesday),
            as_int(f.days.wednesday),
            as_int(f.days.thursday),
            as_int(f.days.friday),
            id,
        ],
    )?;
    Ok(n)
}

pub fn delete_entry(conn: &Connection, id: &str) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM entries WHERE id = ?1", [id])?)
}
