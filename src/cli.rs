use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "returns")]
#[command(about = "Browse, search and create return records")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format shared by commands that print records
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List return records, newest pages first
    #[command(visible_alias = "ls")]
    List {
        /// Search text (tracking number, store or channel)
        #[arg(short, long)]
        search: Option<String>,

        /// Records per page (default: list.page_limit from config)
        #[arg(short, long)]
        limit: Option<u32>,

        /// Number of pages to load
        #[arg(short, long, default_value = "1", conflicts_with = "all")]
        pages: u32,

        /// Keep loading until every page is fetched
        #[arg(long)]
        all: bool,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Create a return record
    #[command(visible_alias = "c")]
    Create {
        /// Tracking number
        #[arg(short, long)]
        tracking: Option<String>,

        /// Channel id or code
        #[arg(long)]
        channel: Option<String>,

        /// Store id or code
        #[arg(long)]
        store: Option<String>,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// List stores, optionally filtered by code or name
    Stores {
        /// Case-insensitive substring of code or name
        filter: Option<String>,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// List channels, optionally filtered by code or name
    Channels {
        /// Case-insensitive substring of code or name
        filter: Option<String>,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Interactively search and page through returns
    ///
    /// Each input line is the current search text. `:more` loads the next
    /// page, `:refresh` reloads, `:quit` exits.
    Browse {
        /// Records per page (default: list.page_limit from config)
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Read decoded barcodes from stdin and print accepted tracking numbers
    Scan {
        /// Seconds to ignore further scans after one is accepted
        #[arg(long, default_value = "2")]
        cooldown: u64,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        #[command(flatten)]
        output: OutputOptions,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (e.g., list.page_limit)
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (e.g., api.base_url)
        key: String,
        /// Value to set
        value: String,
    },
}
