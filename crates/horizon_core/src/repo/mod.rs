//! Repository layer over the storage contracts.
//!
//! # Responsibility
//! - Turn raw storage rows into the sequences and values the views consume.
//! - Own the clock used to stamp writes and to anchor padding.
//!
//! # Invariants
//! - Repositories borrow their store; they never open connections themselves.
//! - The clock is injected so tests can pin "now" to a fixed instant.

use chrono::NaiveDateTime;

pub mod goals;
pub mod settings;

/// Source of the current wall-clock instant.
pub type Clock = fn() -> NaiveDateTime;

/// Default clock reading local wall-clock time.
pub fn system_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
