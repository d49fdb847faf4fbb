//! Settings domain model.
//!
//! # Responsibility
//! - Define the persisted key/value settings record.
//! - Encode and decode the per-period window amount key family.
//!
//! # Invariants
//! - Window amount keys follow `period_to_amount_{tag}` using the period's
//!   stable wire tag; other keys are ignored by the settings repository.

use crate::model::period::Period;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Key prefix for the per-period window amount settings.
pub const PERIOD_AMOUNT_KEY_PREFIX: &str = "period_to_amount_";

/// One persisted settings row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub id: String,
    pub value: String,
    pub updated: NaiveDateTime,
}

/// Builds the settings key storing the window amount for `period`.
pub fn amount_key(period: Period) -> String {
    format!("{PERIOD_AMOUNT_KEY_PREFIX}{}", period.as_tag())
}

/// Recovers the period from a window amount settings key, if it is one.
pub fn period_for_amount_key(key: &str) -> Option<Period> {
    let tag = key.strip_prefix(PERIOD_AMOUNT_KEY_PREFIX)?;
    Period::from_tag(tag.parse().ok()?)
}
