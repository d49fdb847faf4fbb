//! Goals repository: padded period reads and stamped writes.
//!
//! # Responsibility
//! - Present each period as a gapless sequence headed by an upcoming and a
//!   current entry, synthesizing placeholders where rows are missing.
//! - Stamp writes with the injected clock before persisting.
//!
//! # Invariants
//! - Padding never overwrites or duplicates a persisted entry for the same
//!   aligned start; existing heads are reused as-is.
//! - Synthesized placeholders are returned only; nothing is persisted until
//!   a placeholder's content is first edited.
//! - `count_for_period` counts persisted goals only.

use crate::model::goal::Goal;
use crate::model::period::Period;
use crate::repo::Clock;
use crate::storage::{GoalStore, StoreResult};
use log::debug;
use std::cmp::Ordering;

/// Read/write facade over a [`GoalStore`] with placeholder padding.
pub struct GoalsRepository<'s, S: GoalStore> {
    store: &'s S,
    now: Clock,
}

impl<'s, S: GoalStore> GoalsRepository<'s, S> {
    pub fn new(store: &'s S, now: Clock) -> Self {
        Self { store, now }
    }

    /// Returns the padded goal sequence for `period`, newest first.
    ///
    /// Persisted rows arrive descending by start; the head is then padded so
    /// the sequence opens with an entry for the period after now, followed by
    /// one for the period containing now. A persisted row already in either
    /// slot is kept instead of synthesizing a placeholder.
    pub fn find_for_period(&self, period: Period) -> StoreResult<Vec<Goal>> {
        let now = (self.now)();
        let mut goals = self.store.goals_for_period(period)?;
        let persisted = goals.len();

        if goals
            .first()
            .map_or(true, |head| head.compare_start(now) == Ordering::Less)
        {
            goals.insert(0, Goal::current_for(period, now));
        }

        let next = period.next_start(now);
        if goals
            .first()
            .map_or(true, |head| head.compare_start(next) == Ordering::Less)
        {
            goals.insert(0, Goal::upcoming_for(period, now));
        }

        debug!(
            "event=goals_find module=repo period={period} persisted={persisted} padded={}",
            goals.len()
        );
        Ok(goals)
    }

    /// Counts persisted goals for `period`, placeholders excluded.
    pub fn count_for_period(&self, period: Period) -> StoreResult<usize> {
        self.store.count_goals_for_period(period)
    }

    /// Stamps `updated` with the current instant and upserts by id.
    ///
    /// Returns the stamped goal so callers can keep their copy in sync. This
    /// is the path that turns a placeholder into a durable row.
    pub fn update(&self, mut goal: Goal) -> StoreResult<Goal> {
        goal.updated = (self.now)();
        self.store.upsert_goal(&goal)?;
        debug!(
            "event=goals_update module=repo period={} id={}",
            goal.period, goal.id
        );
        Ok(goal)
    }
}
