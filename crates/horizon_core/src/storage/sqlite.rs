//! SQLite-backed storage for goals and settings.
//!
//! # Responsibility
//! - Implement both storage traits over a single migrated connection.
//! - Reject connections whose schema is not ready instead of failing later.
//!
//! # Invariants
//! - Construction validates `PRAGMA user_version` and required tables.
//! - Timestamp columns round-trip through ISO-8601 text, so lexicographic
//!   `ORDER BY start DESC` is chronological.

use super::{GoalStore, SettingStore, StoreError, StoreResult};
use crate::db::migrations::latest_version;
use crate::model::goal::{Goal, GoalId};
use crate::model::period::Period;
use crate::model::setting::Setting;
use log::info;
use rusqlite::{params, Connection, Row};
use std::time::Instant;
use uuid::Uuid;

const GOAL_SELECT_SQL: &str = "SELECT id, period, content, start, updated FROM goals";

const REQUIRED_TABLES: [&str; 2] = ["goals", "settings"];

/// Single SQLite connection serving both the goal and the settings store.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Wraps a migrated connection after validating schema readiness.
    ///
    /// # Errors
    /// - `StoreError::UninitializedSchema` when migrations have not run.
    /// - `StoreError::MissingTable` when a required table is absent.
    pub fn try_new(conn: Connection) -> StoreResult<Self> {
        ensure_schema_ready(&conn)?;
        Ok(Self { conn })
    }

    /// Compacts the database file.
    ///
    /// # Side effects
    /// - Emits a `db_vacuum` logging event with duration.
    pub fn vacuum(&self) -> StoreResult<()> {
        let started_at = Instant::now();
        self.conn.execute_batch("VACUUM;")?;
        info!(
            "event=db_vacuum module=storage status=ok duration_ms={}",
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}

impl GoalStore for SqliteStorage {
    fn goals_for_period(&self, period: Period) -> StoreResult<Vec<Goal>> {
        let mut stmt = self.conn.prepare(&format!(
            "{GOAL_SELECT_SQL}
             WHERE period = ?1 AND content != ''
             ORDER BY start DESC;"
        ))?;

        let mut rows = stmt.query(params![period.as_tag()])?;
        let mut goals = Vec::new();
        while let Some(row) = rows.next()? {
            goals.push(parse_goal_row(row)?);
        }

        Ok(goals)
    }

    fn count_goals_for_period(&self, period: Period) -> StoreResult<usize> {
        let count: u32 = self.conn.query_row(
            "SELECT COUNT(*) FROM goals WHERE period = ?1 AND content != '';",
            params![period.as_tag()],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    fn upsert_goal(&self, goal: &Goal) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO goals (id, period, content, start, updated)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                goal.id.to_string(),
                goal.period.as_tag(),
                goal.content.as_str(),
                goal.start,
                goal.updated,
            ],
        )?;
        Ok(())
    }
}

impl SettingStore for SqliteStorage {
    fn settings(&self) -> StoreResult<Vec<Setting>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, value, updated FROM settings;")?;

        let mut rows = stmt.query([])?;
        let mut settings = Vec::new();
        while let Some(row) = rows.next()? {
            settings.push(Setting {
                id: row.get("id")?,
                value: row.get("value")?,
                updated: row.get("updated")?,
            });
        }

        Ok(settings)
    }

    fn upsert_setting(&self, setting: &Setting) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO settings (id, value, updated) VALUES (?1, ?2, ?3);",
            params![
                setting.id.as_str(),
                setting.value.as_str(),
                setting.updated,
            ],
        )?;
        Ok(())
    }
}

fn parse_goal_row(row: &Row<'_>) -> StoreResult<Goal> {
    let id_text: String = row.get("id")?;
    let id: GoalId = Uuid::parse_str(&id_text).map_err(|_| {
        StoreError::InvalidData(format!("invalid uuid value `{id_text}` in goals.id"))
    })?;

    let period_tag: i64 = row.get("period")?;
    let period = Period::from_tag(period_tag).ok_or_else(|| {
        StoreError::InvalidData(format!("invalid period tag `{period_tag}` in goals.period"))
    })?;

    Ok(Goal {
        id,
        period,
        content: row.get("content")?,
        start: row.get("start")?,
        updated: row.get("updated")?,
    })
}

fn ensure_schema_ready(conn: &Connection) -> StoreResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(StoreError::UninitializedSchema {
            expected_version,
            actual_version,
        });
    }

    for table in REQUIRED_TABLES {
        if !table_exists(conn, table)? {
            return Err(StoreError::MissingTable(table));
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> StoreResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
