//! Command-line surface.
//!
//! # Responsibility
//! - Declare the argument grammar; interpretation lives in `commands`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "horizon", version, about = "Multi-granularity planning journal")]
pub struct Cli {
    /// Database file (defaults to the platform data directory)
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Log directory (defaults to `logs` in the platform data directory)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the current planning window for each period
    Show {
        /// Limit output to one period (year|quarter|week|day)
        #[arg(long)]
        period: Option<String>,
    },
    /// Inspect or change per-period window amounts
    Config {
        /// Period to change (year|quarter|week|day)
        #[arg(long)]
        period: Option<String>,
        /// New window amount for that period
        #[arg(long)]
        amount: Option<usize>,
    },
    /// Build a fresh demo database full of generated goals
    Seed {
        /// How many days of history to generate
        #[arg(long, default_value_t = 1095)]
        days: u32,
    },
}
