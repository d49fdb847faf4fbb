//! Subcommand implementations.
//!
//! # Responsibility
//! - Wire the environment (paths, logging, database) and drive the core
//!   repositories for each subcommand.
//!
//! # Invariants
//! - Logging is initialized before the database is opened.
//! - Every subcommand works on a migrated, schema-checked connection.

use crate::cli::Cli;
use crate::seed;
use anyhow::{anyhow, bail, Context, Result};
use directories::ProjectDirs;
use horizon_core::{
    default_log_level, init_logging, open_db, system_now, GoalsRepository, Period, PeriodAmounts,
    PeriodPanel, SettingsRepository, SqliteStorage,
};
use log::info;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn show(args: &Cli, period: Option<&str>) -> Result<()> {
    let storage = open_storage(args)?;
    info!("event=cli_run module=cli command=show");
    let goals = GoalsRepository::new(&storage, system_now);
    let settings = SettingsRepository::try_new(&storage, system_now, PeriodAmounts::default())?;

    let only = period.map(parse_period).transpose()?;
    let now = system_now();
    for period in Period::ALL {
        if only.is_some_and(|wanted| wanted != period) {
            continue;
        }
        print_period(period, &goals, &settings, now)?;
    }
    Ok(())
}

pub fn config(args: &Cli, period: Option<&str>, amount: Option<usize>) -> Result<()> {
    let storage = open_storage(args)?;
    info!("event=cli_run module=cli command=config");
    let mut settings = SettingsRepository::try_new(&storage, system_now, PeriodAmounts::default())?;

    match (period, amount) {
        (Some(raw), Some(amount)) => {
            if amount == 0 {
                bail!("amount must be at least 1");
            }
            let period = parse_period(raw)?;
            settings.set_amount_for(period, amount)?;
            println!("{} window amount set to {amount}", period.name());
        }
        (None, None) => {
            for period in Period::ALL {
                println!("{:<8} {}", period.name(), settings.amount_for(period));
            }
        }
        _ => bail!("--period and --amount must be given together"),
    }
    Ok(())
}

pub fn seed(args: &Cli, days: u32) -> Result<()> {
    // Seeding targets a scratch file, never the live journal by default.
    let db_path = args
        .db
        .clone()
        .unwrap_or_else(|| PathBuf::from("test.db"));
    if db_path.exists() {
        fs::remove_file(&db_path)
            .with_context(|| format!("removing old {}", db_path.display()))?;
    }

    let storage = open_storage_at(args, db_path.clone())?;
    info!("event=cli_run module=cli command=seed days={days}");

    let seeded = seed::run(&storage, days, system_now())?;
    println!(
        "Seeded {seeded} demo goals covering the last {days} days into {}",
        db_path.display()
    );
    Ok(())
}

fn print_period(
    period: Period,
    goals: &GoalsRepository<'_, SqliteStorage>,
    settings: &SettingsRepository<'_, SqliteStorage>,
    now: chrono::NaiveDateTime,
) -> Result<()> {
    let mut panel = PeriodPanel::new(period);
    let ids = panel.visible(goals, settings)?;

    println!("{} (showing {})", period.name(), ids.len());
    for id in ids {
        let editor = panel
            .editor(id)
            .context("rendered entry is missing its editor")?;
        let marker = if panel.focused_goal_id() == Some(id) {
            ">"
        } else {
            " "
        };
        println!("{marker} {}", editor.title(now));
        let preview = editor.content().lines().next().unwrap_or("").trim_end();
        if preview.is_empty() {
            println!("    (empty)");
        } else {
            println!("    {preview}");
        }
    }
    println!();
    Ok(())
}

fn open_storage(args: &Cli) -> Result<SqliteStorage> {
    let db_path = match &args.db {
        Some(path) => path.clone(),
        None => default_data_dir()?.join("horizon.db"),
    };
    open_storage_at(args, db_path)
}

fn open_storage_at(args: &Cli, db_path: PathBuf) -> Result<SqliteStorage> {
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }

    let log_dir = match &args.log_dir {
        Some(dir) => absolute(dir.clone())?,
        None => default_data_dir()?.join("logs"),
    };
    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    init_logging(&level, &log_dir.to_string_lossy()).map_err(|err| anyhow!(err))?;

    let conn =
        open_db(&db_path).with_context(|| format!("opening database {}", db_path.display()))?;
    let storage = SqliteStorage::try_new(conn)?;
    storage.vacuum()?;
    Ok(storage)
}

fn parse_period(input: &str) -> Result<Period> {
    match input.trim().to_ascii_lowercase().as_str() {
        "year" => Ok(Period::Year),
        "quarter" => Ok(Period::Quarter),
        "week" => Ok(Period::Week),
        "day" => Ok(Period::Day),
        other => Err(anyhow!(
            "unknown period `{other}` (use year|quarter|week|day)"
        )),
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "horizon").context("locating data directory")?;
    Ok(dirs.data_dir().to_path_buf())
}

fn absolute(dir: PathBuf) -> Result<PathBuf> {
    if dir.is_absolute() {
        Ok(dir)
    } else {
        Ok(env::current_dir()?.join(dir))
    }
}
