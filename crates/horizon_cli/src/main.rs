//! One-shot command-line front end over `horizon_core`.
//!
//! # Responsibility
//! - Parse arguments and dispatch to the subcommand implementations.
//! - Default to the `show` snapshot when no subcommand is given.

mod cli;
mod commands;
mod seed;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let mut args = cli::Cli::parse();
    let command = args
        .command
        .take()
        .unwrap_or(cli::Command::Show { period: None });

    match command {
        cli::Command::Show { period } => commands::show(&args, period.as_deref()),
        cli::Command::Config { period, amount } => {
            commands::config(&args, period.as_deref(), amount)
        }
        cli::Command::Seed { days } => commands::seed(&args, days),
    }
}
