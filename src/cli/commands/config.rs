use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{migrate_config_file, missing_fields};
use crate::core::config::ConfigLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            if path.exists() {
                ConfigLogic::print(&path)?;
            } else {
                // Nothing on disk yet: show the effective values
                let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
                println!("{}", yaml);
            }
        }

        if (*check || *migrate || *edit_config) && !path.exists() {
            return Err(AppError::Config(format!(
                "{} not found, run `rclics init` first",
                path.display()
            )));
        }

        // ---- CHECK CONFIG ----
        if *check {
            let missing = missing_fields(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!(
                    "Missing fields: {} (run `rclics config --migrate`)",
                    missing.join(", ")
                ));
            }
        }

        // ---- MIGRATE CONFIG ----
        if *migrate {
            migrate_config_file(&path)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
        }
    }

    Ok(())
}
