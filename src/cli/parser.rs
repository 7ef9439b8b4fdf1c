use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for Acculog
/// CLI application to record attendance events and compute shift remarks
#[derive(Parser)]
#[command(
    name = "acculog",
    version = env!("CARGO_PKG_VERSION"),
    about = "An attendance logging CLI: record geotagged login/logout events and compute late/overtime/undertime remarks",
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

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
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
    },

    /// Print the internal audit log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record an attendance event
    Add {
        /// Date of the event (YYYY-MM-DD)
        date: String,

        /// Employee reference id
        #[arg(long = "user", help = "Employee reference id")]
        user: String,

        /// Event kind: login or logout
        #[arg(long = "kind", help = "Event kind: login or logout")]
        kind: String,

        /// Capture time (HH:MM or HH:MM:SS)
        #[arg(long = "time", help = "Capture time (HH:MM or HH:MM:SS)")]
        time: String,

        /// Department (defaults to the configured one)
        #[arg(long = "dept", help = "Department name")]
        dept: Option<String>,

        /// Capture latitude (requires --lon)
        #[arg(long = "lat", help = "Capture latitude", requires = "lon")]
        lat: Option<f64>,

        /// Capture longitude (requires --lat)
        #[arg(long = "lon", help = "Capture longitude", requires = "lat")]
        lon: Option<f64>,

        /// Reverse-geocoded address of the capture
        #[arg(long = "address", help = "Resolved address of the capture")]
        address: Option<String>,

        /// Stored photo path or URL
        #[arg(long = "photo", help = "Stored photo path or URL")]
        photo: Option<String>,
    },

    /// Delete events for a date (all, or one by id)
    Del {
        date: String,

        #[arg(long = "id", help = "Event id to delete for the given date")]
        id: Option<i64>,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List events with their computed remarks
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "user", help = "Filter by employee reference id")]
        user: Option<String>,

        #[arg(long = "dept", help = "Filter by department")]
        dept: Option<String>,

        #[arg(long = "kind", help = "Filter by event kind (login/logout)")]
        kind: Option<String>,

        #[arg(long = "details", help = "Show location and photo columns")]
        details: bool,
    },

    /// Per-employee timekeeping report (late/overtime/undertime totals)
    Report {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "user", help = "Filter by employee reference id")]
        user: Option<String>,

        #[arg(long = "dept", help = "Filter by department")]
        dept: Option<String>,
    },

    /// Export attendance data with remarks
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
