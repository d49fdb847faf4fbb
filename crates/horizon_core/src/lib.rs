//! Core domain logic for Horizon, a multi-granularity planning journal.
//! This crate is the single source of truth for business invariants.

pub mod ai;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod storage;
pub mod view;

pub use ai::{GenerationChunk, GenerationError, TextGenerator};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::goal::{Goal, GoalId};
pub use model::period::Period;
pub use model::setting::Setting;
pub use repo::goals::GoalsRepository;
pub use repo::settings::{PeriodAmounts, SettingsRepository};
pub use repo::{system_now, Clock};
pub use storage::{GoalStore, SettingStore, SqliteStorage, StoreError, StoreResult};
pub use view::editor::GoalEditor;
pub use view::editor_cache::{EditorCache, EDITOR_CACHE_CAPACITY};
pub use view::panel::PeriodPanel;
pub use view::workspace::Workspace;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
