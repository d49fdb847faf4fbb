use chrono::{NaiveDate, NaiveDateTime};
use horizon_core::db::open_db_in_memory;
use horizon_core::{Goal, GoalStore, GoalsRepository, Period, SqliteStorage};
use std::cmp::Ordering;
use uuid::Uuid;

// All tests pin "now" to Tuesday 2024-12-10 15:30.
fn tuesday_afternoon() -> NaiveDateTime {
    at(2024, 12, 10, 15, 30)
}

#[test]
fn empty_store_pads_upcoming_then_current_for_every_period() {
    let storage = storage();
    let repo = GoalsRepository::new(&storage, tuesday_afternoon);

    let expected: [(Period, [&str; 2]); 4] = [
        (Period::Day, ["2024-12-11 Wednesday", "2024-12-10 Tuesday"]),
        (Period::Week, ["2024-12-16 W51", "2024-12-09 W50"]),
        (Period::Quarter, ["2025 Q1", "2024 Q4"]),
        (Period::Year, ["2025", "2024"]),
    ];

    for (period, titles) in expected {
        let goals = repo.find_for_period(period).unwrap();
        assert_eq!(goals.len(), 2, "period {period}");
        assert_eq!(goals[0].title(), titles[0], "period {period}");
        assert_eq!(goals[1].title(), titles[1], "period {period}");
        assert!(goals.iter().all(Goal::is_empty));
    }
}

#[test]
fn persisted_current_goal_is_reused_not_duplicated() {
    let storage = storage();
    let repo = GoalsRepository::new(&storage, tuesday_afternoon);

    let current = persisted(Period::Day, at(2024, 12, 10, 0, 0), "* stand-up");
    storage.upsert_goal(&current).unwrap();

    let goals = repo.find_for_period(Period::Day).unwrap();
    assert_eq!(goals.len(), 2);
    assert!(goals[0].is_empty());
    assert_eq!(
        goals[0].compare_start(tuesday_afternoon()),
        Ordering::Greater
    );
    assert_eq!(goals[1].id, current.id);
    assert_eq!(goals[1].content, "* stand-up");
}

#[test]
fn persisted_upcoming_goal_suppresses_both_placeholders() {
    let storage = storage();
    let repo = GoalsRepository::new(&storage, tuesday_afternoon);

    let upcoming = persisted(Period::Week, at(2024, 12, 16, 0, 0), "* kickoff");
    storage.upsert_goal(&upcoming).unwrap();

    let goals = repo.find_for_period(Period::Week).unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].id, upcoming.id);
}

#[test]
fn stale_history_gets_both_placeholders_prepended() {
    let storage = storage();
    let repo = GoalsRepository::new(&storage, tuesday_afternoon);

    let last_week = persisted(Period::Day, at(2024, 12, 3, 0, 0), "* retro");
    let last_month = persisted(Period::Day, at(2024, 11, 20, 0, 0), "* plan");
    storage.upsert_goal(&last_week).unwrap();
    storage.upsert_goal(&last_month).unwrap();

    let goals = repo.find_for_period(Period::Day).unwrap();
    assert_eq!(goals.len(), 4);
    assert_eq!(
        goals[0].compare_start(tuesday_afternoon()),
        Ordering::Greater
    );
    assert_eq!(goals[1].compare_start(tuesday_afternoon()), Ordering::Equal);
    assert_eq!(goals[2].id, last_week.id);
    assert_eq!(goals[3].id, last_month.id);
}

#[test]
fn padding_is_stateless_and_never_persists() {
    let storage = storage();
    let repo = GoalsRepository::new(&storage, tuesday_afternoon);

    let first = repo.find_for_period(Period::Quarter).unwrap();
    let second = repo.find_for_period(Period::Quarter).unwrap();

    assert_eq!(repo.count_for_period(Period::Quarter).unwrap(), 0);
    assert_ne!(first[0].id, second[0].id, "placeholders are fresh each read");
    assert_eq!(first[0].start, second[0].start);
}

#[test]
fn update_stamps_the_goal_and_makes_the_placeholder_durable() {
    let storage = storage();
    let repo = GoalsRepository::new(&storage, tuesday_afternoon);

    let mut placeholder = repo.find_for_period(Period::Day).unwrap()[1].clone();
    placeholder.content = "* write the weekly review".to_string();

    let stamped = repo.update(placeholder.clone()).unwrap();
    assert_eq!(stamped.id, placeholder.id);
    assert_eq!(stamped.updated, tuesday_afternoon());

    assert_eq!(repo.count_for_period(Period::Day).unwrap(), 1);
    let goals = repo.find_for_period(Period::Day).unwrap();
    assert_eq!(goals.len(), 2);
    assert_eq!(goals[1].id, placeholder.id, "persisted row replaces the pad");
}

fn storage() -> SqliteStorage {
    let conn = open_db_in_memory().unwrap();
    SqliteStorage::try_new(conn).unwrap()
}

fn persisted(period: Period, start: NaiveDateTime, content: &str) -> Goal {
    Goal {
        id: Uuid::new_v4(),
        period,
        content: content.to_string(),
        start,
        updated: start,
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}
