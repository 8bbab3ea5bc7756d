use crate::db::pool::DbPool;
use crate::db::queries::load_all_entries;
use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::week_key::{WeekKey, WeekKeyFormat};
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flat row shared by CSV and JSON.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: String,
    pub week: String,
    pub ian: String,
    pub activity: String,
    pub object: String,
    pub description: String,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub owner_id: String,
    pub created_at: String,
}

impl From<&Entry> for EntryExport {
    fn from(e: &Entry) -> Self {
        Self {
            id: e.id.clone(),
            week: e.week.to_string(),
            ian: e.ian.clone(),
            activity: e.activity.clone(),
            object: e.object.clone(),
            description: e.description().to_string(),
            monday: e.days.monday,
            tuesday: e.days.tuesday,
            wednesday: e.days.wednesday,
            thursday: e.days.thursday,
            friday: e.days.friday,
            owner_id: e.owner_id.clone(),
            created_at: e.created_at.clone(),
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export the entries of one week (or all of them) to `file`.
    /// Returns the number of rows written, 0 if the user declined to
    /// overwrite an existing file.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        week: Option<NaiveDate>,
        key_format: WeekKeyFormat,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if path.exists()
            && !force
            && !ask_confirmation(&format!("The file '{}' already exists. Overwrite it?", path.display()))
        {
            info("Export cancelled: existing file not overwritten.");
            return Ok(0);
        }

        let entries = match week {
            Some(d) => pool.list_for_week(&WeekKey::from_date(d, key_format))?,
            None => load_all_entries(&pool.conn)?,
        };
        let rows: Vec<EntryExport> = entries.iter().map(EntryExport::from).collect();

        match format {
            ExportFormat::Csv => write_csv(path, &rows)?,
            ExportFormat::Json => write_json(path, &rows)?,
        }

        crate::db::log::audit(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} entries as {}", rows.len(), format.as_str()),
        );

        success(format!(
            "{} export completed: {} ({} entries)",
            format.as_str().to_uppercase(),
            path.display(),
            rows.len()
        ));

        Ok(rows.len())
    }
}

fn write_csv(path: &Path, rows: &[EntryExport]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;
    for r in rows {
        wtr.serialize(r).map_err(|e| AppError::Export(e.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_json(path: &Path, rows: &[EntryExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows).map_err(|e| AppError::Export(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}
