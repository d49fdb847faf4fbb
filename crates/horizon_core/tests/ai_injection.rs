use chrono::{NaiveDate, NaiveDateTime};
use horizon_core::db::open_db_in_memory;
use horizon_core::{
    GenerationChunk, GenerationError, GoalStore, GoalsRepository, Period, PeriodAmounts,
    SettingsRepository, SqliteStorage, TextGenerator, Workspace,
};
use std::sync::mpsc;

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 12, 10)
        .unwrap()
        .and_hms_opt(15, 30, 0)
        .unwrap()
}

/// Replays a fixed chunk script, closing the channel afterwards.
struct ScriptedGenerator {
    chunks: Vec<GenerationChunk>,
}

impl TextGenerator for ScriptedGenerator {
    fn generate(&self, _prompt: &str) -> mpsc::Receiver<GenerationChunk> {
        let (sender, receiver) = mpsc::channel();
        for chunk in self.chunks.clone() {
            sender.send(chunk).unwrap();
        }
        receiver
    }
}

#[test]
fn streamed_chunks_append_to_the_focused_editor() {
    let storage = storage();
    let goals = GoalsRepository::new(&storage, fixed_now);
    let settings = settings_repo(&storage);
    let mut workspace = Workspace::new();
    workspace.focused_panel().visible(&goals, &settings).unwrap();

    let generator = ScriptedGenerator {
        chunks: vec![
            Ok("* plan".to_string()),
            Ok(" the week".to_string()),
            Ok("\n".to_string()),
        ],
    };

    for chunk in generator.generate("draft my day plan") {
        let text = chunk.unwrap();
        let applied = workspace.inject_generated(&goals, &text).unwrap();
        assert!(applied, "the focused editor receives every chunk");
    }

    let focused = workspace.focused_panel().focused_goal_id().unwrap();
    let editor = workspace.panel(Period::Day).editor(focused).unwrap();
    assert_eq!(editor.content(), "* plan the week\n");
    assert!(!editor.is_dirty(), "each chunk is flushed on arrival");

    let persisted = storage.goals_for_period(Period::Day).unwrap();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].id, focused);
    assert_eq!(persisted[0].content, "* plan the week\n");
    assert_eq!(persisted[0].updated, fixed_now());
}

#[test]
fn an_error_chunk_ends_the_stream_after_partial_output() {
    let storage = storage();
    let goals = GoalsRepository::new(&storage, fixed_now);
    let settings = settings_repo(&storage);
    let mut workspace = Workspace::new();
    workspace.focused_panel().visible(&goals, &settings).unwrap();

    let generator = ScriptedGenerator {
        chunks: vec![
            Ok("* draft".to_string()),
            Err(GenerationError::Decode("truncated response".to_string())),
        ],
    };

    let mut failure = None;
    for chunk in generator.generate("continue") {
        match chunk {
            Ok(text) => {
                workspace.inject_generated(&goals, &text).unwrap();
            }
            Err(err) => {
                failure = Some(err);
                break;
            }
        }
    }

    let failure = failure.unwrap();
    assert!(matches!(failure, GenerationError::Decode(_)));
    assert_eq!(
        failure.to_string(),
        "generation response invalid: truncated response"
    );

    let persisted = storage.goals_for_period(Period::Day).unwrap();
    assert_eq!(persisted.len(), 1, "chunks before the error stay flushed");
    assert_eq!(persisted[0].content, "* draft");
}

#[test]
fn injection_without_focus_reports_false() {
    let storage = storage();
    let goals = GoalsRepository::new(&storage, fixed_now);
    let mut workspace = Workspace::new();

    let applied = workspace.inject_generated(&goals, "* orphan text").unwrap();

    assert!(!applied);
    assert_eq!(goals.count_for_period(Period::Day).unwrap(), 0);
}

fn storage() -> SqliteStorage {
    let conn = open_db_in_memory().unwrap();
    SqliteStorage::try_new(conn).unwrap()
}

fn settings_repo(storage: &SqliteStorage) -> SettingsRepository<'_, SqliteStorage> {
    SettingsRepository::try_new(storage, fixed_now, PeriodAmounts::default()).unwrap()
}
