//! Persistence contracts for goals and settings.
//!
//! # Responsibility
//! - Define the storage traits consumed by the repository layer.
//! - Keep SQL details behind the SQLite implementation.
//!
//! # Invariants
//! - Goal reads return persisted, non-empty goals only, newest start first.
//! - Writes are per-row upserts keyed by id; no partial row is ever visible.

use crate::db::DbError;
use crate::model::goal::Goal;
use crate::model::period::Period;
use crate::model::setting::Setting;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod sqlite;

pub use sqlite::SqliteStorage;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-boundary error for goal and settings persistence.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    UninitializedSchema {
        expected_version: u32,
        actual_version: u32,
    },
    MissingTable(&'static str),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedSchema {
                expected_version,
                actual_version,
            } => write!(
                f,
                "schema not ready: expected version {expected_version}, found {actual_version}"
            ),
            Self::MissingTable(table) => write!(f, "required table `{table}` is missing"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedSchema { .. } => None,
            Self::MissingTable(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Read/write access to persisted goals.
pub trait GoalStore {
    /// Returns persisted goals for `period` with non-empty content, ordered
    /// descending by start.
    fn goals_for_period(&self, period: Period) -> StoreResult<Vec<Goal>>;

    /// Counts persisted goals for `period` with non-empty content.
    fn count_goals_for_period(&self, period: Period) -> StoreResult<usize>;

    /// Inserts or replaces a goal keyed by its id.
    fn upsert_goal(&self, goal: &Goal) -> StoreResult<()>;
}

/// Read/write access to persisted settings.
pub trait SettingStore {
    /// Returns every persisted settings row.
    fn settings(&self) -> StoreResult<Vec<Setting>>;

    /// Inserts or replaces a setting keyed by its id.
    fn upsert_setting(&self, setting: &Setting) -> StoreResult<()>;
}
