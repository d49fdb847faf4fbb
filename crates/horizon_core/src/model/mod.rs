//! Domain model for the planning journal.
//!
//! # Responsibility
//! - Define canonical data structures shared by storage, repositories and
//!   views.
//! - Keep all calendar arithmetic for period granularities in one place.
//!
//! # Invariants
//! - Every goal is identified by a stable `GoalId`.
//! - Goal `start` values are aligned to their period's start.

pub mod goal;
pub mod period;
pub mod setting;
