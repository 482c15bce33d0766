use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for siteclock
/// CLI application for a face-identified punch clock backed by SQLite
#[derive(Parser)]
#[command(
    name = "siteclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A face-identified time clock: punch in/out, breaks and timesheets using SQLite",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

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

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Enroll a new subject into the gallery
    Enroll {
        /// Display name of the subject
        name: String,

        #[arg(
            long = "role",
            default_value = "worker",
            help = "Subject role: worker (face-identified) or admin"
        )]
        role: String,

        #[arg(
            long = "template",
            value_name = "FILE",
            help = "Face template file: JSON array of 128 floats (required for workers)"
        )]
        template: Option<String>,
    },

    /// Identify a subject from a captured face probe
    Identify {
        #[arg(
            long = "probe",
            value_name = "FILE",
            help = "Probe file: JSON array of 128 floats"
        )]
        probe: String,
    },

    /// Record a punch event
    Punch {
        /// Direction: in | out
        #[arg(value_parser = ["in", "out"])]
        direction: String,

        #[arg(long = "subject", help = "Subject id to punch for")]
        subject: Option<String>,

        #[arg(
            long = "probe",
            value_name = "FILE",
            help = "Identify the subject by face probe instead of id"
        )]
        probe: Option<String>,

        #[arg(
            long = "at",
            value_name = "RFC3339",
            help = "Explicit timestamp override (defaults to now)"
        )]
        at: Option<String>,
    },

    /// Record a break event
    #[command(name = "break")]
    Break {
        /// Direction: start | end
        #[arg(value_parser = ["start", "end"])]
        direction: String,

        #[arg(long = "subject", help = "Subject id to record the break for")]
        subject: Option<String>,

        #[arg(
            long = "probe",
            value_name = "FILE",
            help = "Identify the subject by face probe instead of id"
        )]
        probe: Option<String>,

        #[arg(
            long = "at",
            value_name = "RFC3339",
            help = "Explicit timestamp override (defaults to now)"
        )]
        at: Option<String>,
    },

    /// Show current punch state and weekly timesheet for a subject
    Status {
        #[arg(long = "subject", help = "Subject id")]
        subject: String,

        #[arg(long = "json", help = "Emit the report as JSON")]
        json: bool,
    },

    /// Per-day worked/break hours for a period
    Timesheet {
        #[arg(long = "subject", help = "Subject id")]
        subject: String,

        #[arg(long, short, help = "Period: YYYY, YYYY-MM, YYYY-MM-DD or start:end")]
        period: Option<String>,
    },

    /// List raw ledger events
    List {
        #[arg(long = "subject", help = "Subject id")]
        subject: String,

        #[arg(long, short, help = "Period: YYYY, YYYY-MM, YYYY-MM-DD or start:end")]
        period: Option<String>,
    },

    /// Export ledger data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Range: YYYY, YYYY-MM, YYYY-MM-DD, start:end or 'all'")]
        range: Option<String>,

        #[arg(long = "subject", help = "Restrict the export to one subject id")]
        subject: Option<String>,

        #[arg(long, help = "Overwrite the output file without asking")]
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
