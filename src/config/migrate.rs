//! Configuration file upgrades: add parameters introduced after the file
//! was written, keeping whatever the user already set.

use super::{Config, default_owner};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Parameters every config file must carry, with their default value and
/// the comment written below them on migration.
fn expected_keys() -> Vec<(&'static str, Value, &'static str)> {
    vec![
        (
            "database",
            Value::String(Config::database_file().to_string_lossy().to_string()),
            "",
        ),
        ("owner", Value::String(default_owner()), ""),
        (
            "week_key_format",
            Value::String("padded".into()),
            "  # week_key_format options:\n\
             #   padded → week number on two digits (\"032024\")\n\
             #   legacy → unpadded week number (\"32024\")\n",
        ),
        (
            "conflict_scope",
            Value::String("week".into()),
            "  # conflict_scope options:\n\
             #   week  → a weekday can be claimed once per week, across all owners\n\
             #   owner → a weekday can be claimed once per week and per owner\n",
        ),
    ]
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;
    match yaml {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Names of the parameters missing from the config file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(expected_keys()
        .into_iter()
        .filter(|(k, _, _)| !map.contains_key(Value::String(k.to_string())))
        .map(|(k, _, _)| k)
        .collect())
}

/// Add missing parameters with their defaults.
/// Returns the names of the parameters that were added.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<&'static str>> {
    let mut map = read_mapping(path)?;
    let mut added = Vec::new();
    let mut comments = Vec::new();

    for (key, default, comment) in expected_keys() {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k) {
            map.insert(k, default);
            added.push(key);
            if !comment.is_empty() {
                comments.push((key, comment));
            }
        }
    }

    if added.is_empty() {
        info("Configuration file is up to date.");
        return Ok(added);
    }

    let serialized =
        serde_yaml::to_string(&Value::Mapping(map)).map_err(|_| AppError::ConfigSave)?;

    // Inject documentation comments right after the new parameters
    let mut new_content = String::new();
    for line in serialized.lines() {
        new_content.push_str(line);
        new_content.push('\n');

        for (key, comment) in &comments {
            if line.starts_with(&format!("{key}:")) {
                new_content.push_str(comment);
            }
        }
    }

    fs::write(path, new_content).map_err(|_| AppError::ConfigSave)?;

    success(format!(
        "Configuration migrated: added {}",
        added.join(", ")
    ));

    Ok(added)
}
