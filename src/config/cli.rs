//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Browse the wger exercise database from the terminal.
///
/// Lists exercises, shows their detail and fetches their variations
/// one request at a time.
#[derive(Debug, Parser)]
#[command(name = "wger-exercises")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the wger API (e.g. <https://wger.de/api/v2>)
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Delay between variation requests in milliseconds
    #[arg(long = "pacing-delay-ms", global = true)]
    pub pacing_delay_ms: Option<u64>,

    /// HTTP request timeout in seconds
    #[arg(long = "timeout-secs", global = true)]
    pub timeout_secs: Option<u64>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for wger-exercises
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List exercises page by page
    List {
        /// Number of pages to fetch
        #[arg(long, default_value_t = super::defaults::PAGES)]
        pages: u32,
    },

    /// Show one exercise
    Show {
        /// Exercise ID
        id: i64,
    },

    /// Show one exercise together with its variations
    Variations {
        /// Exercise ID
        id: i64,
    },

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "wger-exercises.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
