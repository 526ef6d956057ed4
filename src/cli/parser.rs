use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timecard
/// CLI application to track per-client work sessions in plain-text logs
#[derive(Parser)]
#[command(
    name = "timecard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time tracking CLI: per-client work sessions and tasks in plain-text logs",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory holding the client book and the logs
    /// (useful for tests or portable setups)
    #[arg(global = true, long = "dir")]
    pub dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory, configuration and client book
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },

    /// Manage the client book
    Client {
        /// Register a new client under this slug
        #[arg(long = "add", value_name = "SLUG")]
        add: Option<String>,

        /// Full name for the new client (with --add)
        #[arg(long = "name", requires = "add", value_name = "NAME")]
        name: Option<String>,

        /// Hourly billing rate for the new client (with --add)
        #[arg(long = "rate", requires = "add")]
        rate: Option<f64>,

        /// List all clients in the book
        #[arg(long = "list")]
        list: bool,
    },

    /// Clock in: open a work session in the client's current log
    In {
        /// Client slug (default taken from the configuration)
        client: Option<String>,
    },

    /// Clock out: close the open work session
    Out {
        /// Client slug (default taken from the configuration)
        client: Option<String>,
    },

    /// Record a finished task in the open session
    Task {
        /// What was done
        description: String,

        /// Client slug (default taken from the configuration)
        client: Option<String>,

        /// Task start as today's wall-clock HH:MM (default: where the
        /// previous task ended, or clock-in)
        #[arg(long = "start", conflicts_with = "minutes", value_name = "HH:MM")]
        start: Option<String>,

        /// Task started this many minutes ago
        #[arg(long = "minutes", value_name = "N")]
        minutes: Option<i64>,
    },

    /// Show the open session for a client
    Status {
        /// Client slug (default taken from the configuration)
        client: Option<String>,
    },

    /// List sessions for a client
    List {
        /// Client slug (default taken from the configuration)
        client: Option<String>,

        /// Show one specific log period
        #[arg(long = "log", conflicts_with = "all", value_name = "N")]
        log: Option<u32>,

        /// Show every log period
        #[arg(long = "all")]
        all: bool,
    },

    /// Start the next numbered log period for a client
    Rotate {
        /// Client slug (default taken from the configuration)
        client: Option<String>,
    },

    /// Export task data in various formats
    Export {
        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Client slug (default taken from the configuration)
        client: Option<String>,

        /// Export every log period instead of only the current one
        #[arg(long = "all")]
        all: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a zip backup of the client book and all logs
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite destination file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
