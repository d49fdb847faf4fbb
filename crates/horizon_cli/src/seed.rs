//! Demo data generator.
//!
//! # Responsibility
//! - Fill every period with plausible bulleted history for trying the
//!   journal out.
//!
//! # Invariants
//! - Only past periods are written; the current and upcoming entries stay
//!   empty so the journal still opens on placeholders.

use anyhow::Result;
use chrono::{Duration, NaiveDateTime};
use horizon_core::{Goal, GoalStore, Period, SqliteStorage};
use rand::Rng;

const ACTIONS: &[&str] = &[
    "ship", "review", "draft", "refine", "plan", "close out", "prepare", "measure",
];

const SUBJECTS: &[&str] = &[
    "the roadmap",
    "the budget",
    "the release",
    "team notes",
    "the backlog",
    "next steps",
    "the retro",
    "the proposal",
];

/// Writes demo goals for every period reaching `days` into the past.
///
/// Returns how many goals were written.
pub fn run(storage: &SqliteStorage, days: u32, now: NaiveDateTime) -> Result<usize> {
    let cutoff = now - Duration::days(i64::from(days));
    let mut rng = rand::thread_rng();
    let mut seeded = 0usize;

    for period in Period::ALL {
        let mut start = previous_start(period, period.align_start(now));
        // A period counts as history while any part of it overlaps the range.
        while period.next_start(start) > cutoff {
            let mut goal = Goal::current_for(period, start);
            goal.content = demo_content(&mut rng);
            storage.upsert_goal(&goal)?;
            seeded += 1;
            start = previous_start(period, start);
        }
    }

    Ok(seeded)
}

/// Start of the period right before the one beginning at `start`.
fn previous_start(period: Period, start: NaiveDateTime) -> NaiveDateTime {
    period.align_start(start - Duration::seconds(1))
}

fn demo_content(rng: &mut impl Rng) -> String {
    let mut lines: Vec<String> = Vec::new();
    for _ in 0..rng.gen_range(2..=4) {
        lines.push(format!("* {} {}", pick(rng, ACTIONS), pick(rng, SUBJECTS)));
    }
    if rng.gen_bool(0.3) {
        lines.push(String::new());
        lines.push("--".to_string());
        lines.push(format!("Notes on {}.", pick(rng, SUBJECTS)));
    }
    lines.join("\n")
}

fn pick<'a>(rng: &mut impl Rng, pool: &'a [&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}
