use clap::{Parser, Subcommand};

/// Command-line interface definition for presenca
/// CLI application to track school attendance with SQLite
#[derive(Parser)]
#[command(
    name = "presenca",
    version = env!("CARGO_PKG_VERSION"),
    about = "A school attendance CLI: register badge scans and derive each student's daily presence using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or validate)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration, including the scan windows")]
        check: bool,
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
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Register a badge scan for a student
    Scan {
        /// The student's RA, as decoded from the badge QR code
        ra: String,

        /// Scan time (HH:MM); defaults to now
        #[arg(long = "time", help = "Scan time (HH:MM); defaults to the current time")]
        time: Option<String>,

        /// Scan date (YYYY-MM-DD); defaults to today
        #[arg(long = "date", help = "Scan date (YYYY-MM-DD); defaults to today")]
        date: Option<String>,
    },

    /// Show each student's derived presence status for a day
    Status {
        #[arg(long = "date", help = "Day to aggregate (YYYY-MM-DD); defaults to today")]
        date: Option<String>,

        #[arg(long = "turma", help = "Only show students of this class code")]
        turma: Option<String>,

        #[arg(long = "json", help = "Emit the rows as JSON instead of a table")]
        json: bool,
    },

    /// Register a new student
    Add {
        /// Student RA (unique badge identifier)
        ra: String,

        /// Student display name
        nome: String,

        /// Class-group code
        turma: String,

        #[arg(long = "inep", help = "Optional secondary identifier (INEP)")]
        inep: Option<String>,
    },

    /// Move a student to another class group
    SetClass {
        ra: String,
        turma: String,
    },

    /// Set or change a student's INEP
    SetInep {
        ra: String,
        inep: String,
    },

    /// Show a student's attendance history
    History {
        ra: String,
    },

    /// Import student rosters from per-class JSON files
    Import {
        #[arg(long = "dir", help = "Roster directory; defaults to the configured data_dir")]
        dir: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
