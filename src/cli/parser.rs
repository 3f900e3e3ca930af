use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record student attendance (name, class, date, status) in a local SQLite database",
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// List all attendance records, newest date first
    List {
        #[arg(long = "json", help = "Print the records as JSON")]
        json: bool,
    },

    /// Add an attendance record
    Add {
        /// Student name
        name: String,

        /// Class (e.g. 10A)
        class: String,

        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(
            long = "status",
            short = 's',
            default_value = "Present",
            help = "Present, Excused, Sick or Absent (or Hadir, Izin, Sakit, Alfa)"
        )]
        status: String,
    },

    /// Update an attendance record; omitted fields keep their value
    Update {
        /// Record id (see `list`)
        id: i64,

        #[arg(long = "name", help = "New student name")]
        name: Option<String>,

        #[arg(long = "class", help = "New class")]
        class: Option<String>,

        #[arg(long = "date", help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "status", short = 's', help = "New status")]
        status: Option<String>,
    },

    /// Delete an attendance record by id
    Del {
        /// Record id (see `list`)
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Interactive form session (select rows, edit fields, add/update/delete)
    Form,
}
