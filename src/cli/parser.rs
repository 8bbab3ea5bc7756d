use crate::core::conflict::ConflictScope;
use crate::core::export::ExportFormat;
use crate::errors::{AppError, AppResult};
use crate::models::codes::find_by_description;
use crate::models::days::WeekDays;
use crate::models::entry::EntryForm;
use crate::models::week_key::WeekKeyFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rClics
/// CLI application to record weekly activity codes with SQLite
#[derive(Parser)]
#[command(
    name = "rclics",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple weekly timesheet CLI: record activity codes per working day, without double-booking a day",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user (defaults to the configured owner)
    #[arg(global = true, long = "owner")]
    pub owner: Option<String>,

    /// Override the week key layout from the configuration
    #[arg(global = true, long = "key-format", value_enum)]
    pub key_format: Option<WeekKeyFormat>,

    /// Override the conflict scope from the configuration
    #[arg(global = true, long = "scope", value_enum)]
    pub scope: Option<ConflictScope>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Code, day and field options shared by `add` and `edit`.
#[derive(Args, Debug, Clone, Default)]
pub struct EntryArgs {
    /// Fill IAN / activity / object from a known code (e.g. "Annual Leave")
    #[arg(long = "code")]
    pub code: Option<String>,

    /// IAN code (NN-NNN)
    #[arg(long = "ian")]
    pub ian: Option<String>,

    /// Activity code (NNNN)
    #[arg(long = "activity")]
    pub activity: Option<String>,

    /// Object code (NNNN)
    #[arg(long = "object")]
    pub object: Option<String>,

    /// Worked days, comma separated (mon,tue,wed,thu,fri)
    #[arg(long = "days", conflicts_with = "all")]
    pub days: Option<String>,

    /// All five working days
    #[arg(long = "all")]
    pub all: bool,
}

impl EntryArgs {
    /// Overlay the options given on the command line onto `form`.
    pub fn apply_to(&self, form: &mut EntryForm) -> AppResult<()> {
        if let Some(name) = &self.code {
            let code = find_by_description(name).ok_or_else(|| AppError::UnknownCode(name.clone()))?;
            form.apply_code(code);
        }

        if let Some(v) = &self.ian {
            form.ian = v.clone();
        }
        if let Some(v) = &self.activity {
            form.activity = v.clone();
        }
        if let Some(v) = &self.object {
            form.object = v.clone();
        }

        if self.all {
            form.days.set_all(true);
        } else if let Some(list) = &self.days {
            form.days = WeekDays::parse_list(list)?;
        }

        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(
            long = "pad-keys",
            help = "Rewrite legacy week keys (\"32024\") as padded keys (\"032024\")"
        )]
        pad_keys: bool,
    },

    /// Show the ISO week, its key and its working days
    Week {
        /// Any date of the week (YYYY-MM-DD), default today
        date: Option<String>,
    },

    /// List the entries of a week
    List {
        #[arg(long, short, help = "Any date of the week (YYYY-MM-DD), default today")]
        week: Option<String>,
    },

    /// Add an entry to a week
    Add {
        #[arg(long, short, help = "Any date of the week (YYYY-MM-DD), default today")]
        week: Option<String>,

        #[command(flatten)]
        entry: EntryArgs,
    },

    /// Edit an entry (options not given keep their stored value)
    Edit {
        /// Entry id, as shown by `list`
        id: String,

        #[arg(long, short, help = "Move the entry to the week of this date")]
        week: Option<String>,

        #[command(flatten)]
        entry: EntryArgs,
    },

    /// Delete an entry by id
    Del {
        id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show the known activity codes
    Codes,

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, help = "Export only the week of this date")]
        week: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
