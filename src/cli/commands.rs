use clap::{Parser, Subcommand};

use crate::models::{SortField, SortOrder};

#[derive(Parser)]
#[command(
    name = "fscan",
    version,
    about = "File metadata query engine - scan, filter and sort directory trees",
    after_help = "Results are printed to stdout as JSON; logs go to stderr. \
                  Hidden entries, .pyc files and __init__.py are excluded by default; \
                  use --hidden/--pyc/--init to include them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan a directory and print the filtered, sorted file records.
    ///
    /// Directory names listed under `scan.exclude_dirs` in fscan.toml
    /// (default: venv) are pruned from the walk entirely.
    Scan {
        /// Directory to enumerate
        directory: String,
        /// Include hidden entries (names starting with ".")
        #[arg(long)]
        hidden: bool,
        /// Include compiled bytecode files (.pyc)
        #[arg(long)]
        pyc: bool,
        /// Include package init files (__init__.py)
        #[arg(long)]
        init: bool,
        /// Comma-separated extension allow-list, compared exactly as given
        /// (e.g. ".txt,.md")
        #[arg(short, long)]
        ext: Option<String>,
        /// Minimum file size in bytes
        #[arg(long)]
        min_size: Option<u64>,
        /// Maximum file size in bytes
        #[arg(long)]
        max_size: Option<u64>,
        /// Created-timestamp range START..END (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        created: Option<String>,
        /// Modified-timestamp range START..END
        #[arg(long)]
        modified: Option<String>,
        /// Accessed-timestamp range START..END
        #[arg(long)]
        accessed: Option<String>,
        /// Field to sort by
        #[arg(short, long, value_enum, default_value_t = SortField::Name)]
        sort_by: SortField,
        /// Sort direction
        #[arg(short = 'o', long, value_enum, default_value_t = SortOrder::Asc)]
        sort_order: SortOrder,
    },

    /// Execute a JSON scan request body (the POST /files/scan contract).
    ///
    /// Reads the body from the given file, or from stdin when the argument
    /// is "-". Prints the response rows the dashboard table consumes.
    Request {
        /// Path to the JSON body, or "-" for stdin
        #[arg(default_value = "-")]
        body: String,
    },

    /// Parse a finance CSV export into a transactions report.
    Finance {
        /// Path to the CSV file
        file: String,
    },
}
