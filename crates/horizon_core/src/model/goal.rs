//! Goal domain model.
//!
//! # Responsibility
//! - Define the canonical record rendered by every period column.
//! - Provide placeholder constructors for the current and upcoming period.
//!
//! # Invariants
//! - `id` is stable once a goal has been persisted; placeholders receive a
//!   fresh id every time they are synthesized and keep it on first edit.
//! - `start` is always exactly the alignment result for the goal's period.
//! - Content is empty for a not-yet-persisted placeholder.

use crate::model::period::Period;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// Stable identifier for a goal.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type GoalId = Uuid;

/// One planning entry at a single period granularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub period: Period,
    /// Free-form text, flushed to storage on every edit.
    pub content: String,
    /// Start of the period this goal belongs to, aligned per `Period`.
    pub start: NaiveDateTime,
    /// Last persisted modification instant.
    pub updated: NaiveDateTime,
}

impl Goal {
    /// Synthesizes an empty placeholder for the period containing `now`.
    pub fn current_for(period: Period, now: NaiveDateTime) -> Self {
        Self::placeholder(period, period.align_start(now), now)
    }

    /// Synthesizes an empty placeholder for the period right after `now`'s.
    pub fn upcoming_for(period: Period, now: NaiveDateTime) -> Self {
        Self::placeholder(period, period.next_start(now), now)
    }

    fn placeholder(period: Period, start: NaiveDateTime, now: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            period,
            content: String::new(),
            start,
            updated: now,
        }
    }

    /// Compares this goal's start against an instant at the goal's own
    /// granularity. `Less` means the goal lies in an earlier period.
    pub fn compare_start(&self, instant: NaiveDateTime) -> Ordering {
        self.period.compare(self.start, instant)
    }

    /// Whether nothing has been written into this goal yet.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Period-specific heading, e.g. `2024 Q4` or `2024-12-10 Tuesday`.
    pub fn title(&self) -> String {
        self.period.format_start(self.start)
    }
}
