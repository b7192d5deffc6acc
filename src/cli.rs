use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::chart::ChartKind;
use crate::config::{DEFAULT_DB_FILE, DEFAULT_TOP_TEAMS};

#[derive(Parser, Debug)]
#[command(name = "olympic-history")]
#[command(version, about = "Load the Olympic athlete-events dataset into SQLite and chart it")]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize a local CSV file into a new SQLite database
    Load {
        /// athlete_events.csv
        input: PathBuf,

        /// Output SQLite database path (replaced if it exists)
        #[arg(default_value = DEFAULT_DB_FILE)]
        output_db: PathBuf,

        /// Full-screen progress dashboard
        #[arg(long)]
        tui: bool,
    },

    /// Download the dataset (CSV or zip) into the cache
    Download {
        /// Dataset URL
        #[arg(long)]
        url: String,

        /// Cache directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Force re-download even if cached
        #[arg(short, long)]
        force: bool,
    },

    /// Download (if needed) and load
    Sync {
        /// Dataset URL
        #[arg(long)]
        url: String,

        /// Output SQLite database path (replaced if it exists)
        #[arg(default_value = DEFAULT_DB_FILE)]
        output_db: PathBuf,

        /// Force re-download even if cached
        #[arg(short, long)]
        force: bool,

        /// Custom cache directory
        #[arg(short, long)]
        cache_dir: Option<PathBuf>,

        /// Full-screen progress dashboard
        #[arg(long)]
        tui: bool,
    },

    /// Draw a bar chart from a loaded database
    Chart {
        kind: ChartKind,

        /// Filters in any order: summer|winter, NOC code, gold|silver|bronze|na, year
        tokens: Vec<String>,

        /// Database to query
        #[arg(long, default_value = DEFAULT_DB_FILE)]
        db: PathBuf,

        /// Number of teams shown by top-teams
        #[arg(long, default_value_t = DEFAULT_TOP_TEAMS)]
        top: usize,
    },

    /// List table names in load order
    ListTables,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
