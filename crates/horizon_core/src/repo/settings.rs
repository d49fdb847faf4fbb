//! Settings repository: per-period window amounts over a key/value store.
//!
//! # Responsibility
//! - Merge stored overrides over the configured defaults at construction.
//! - Serve amount lookups from memory; write through on change.
//!
//! # Invariants
//! - `amount_for` performs no I/O.
//! - A stored value that fails to parse is logged and the default kept;
//!   startup never fails on a corrupt value.
//! - `set_amount_for` updates memory first, then persists; a persistence
//!   failure propagates with the in-memory value already updated.

use crate::model::period::Period;
use crate::model::setting::{self, Setting};
use crate::repo::Clock;
use crate::storage::{SettingStore, StoreResult};
use log::{debug, warn};
use std::collections::HashMap;

/// Per-period window amounts, constructed once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodAmounts {
    pub year: usize,
    pub quarter: usize,
    pub week: usize,
    pub day: usize,
}

impl PeriodAmounts {
    pub fn amount_for(&self, period: Period) -> usize {
        match period {
            Period::Year => self.year,
            Period::Quarter => self.quarter,
            Period::Week => self.week,
            Period::Day => self.day,
        }
    }
}

impl Default for PeriodAmounts {
    fn default() -> Self {
        Self {
            year: 4,
            quarter: 4,
            week: 4,
            day: 5,
        }
    }
}

/// In-memory settings view over a [`SettingStore`].
pub struct SettingsRepository<'s, S: SettingStore> {
    store: &'s S,
    now: Clock,
    amounts: HashMap<Period, usize>,
}

impl<'s, S: SettingStore> SettingsRepository<'s, S> {
    /// Reads all stored settings once and merges recognized overrides over
    /// `defaults`.
    ///
    /// # Errors
    /// - Propagates the initial storage read failure; a repository that
    ///   cannot read its settings must not start.
    pub fn try_new(store: &'s S, now: Clock, defaults: PeriodAmounts) -> StoreResult<Self> {
        let mut amounts: HashMap<Period, usize> = Period::ALL
            .iter()
            .map(|&period| (period, defaults.amount_for(period)))
            .collect();

        for stored in store.settings()? {
            let Some(period) = setting::period_for_amount_key(&stored.id) else {
                continue;
            };
            match stored.value.parse::<usize>() {
                Ok(amount) => {
                    amounts.insert(period, amount);
                }
                Err(_) => warn!(
                    "event=settings_parse module=repo status=recovered key={} value={}",
                    stored.id, stored.value
                ),
            }
        }

        Ok(Self {
            store,
            now,
            amounts,
        })
    }

    /// Returns the window amount for `period`. Pure in-memory lookup.
    pub fn amount_for(&self, period: Period) -> usize {
        self.amounts[&period]
    }

    /// Updates the in-memory amount, then persists it.
    pub fn set_amount_for(&mut self, period: Period, amount: usize) -> StoreResult<()> {
        self.amounts.insert(period, amount);

        let stored = Setting {
            id: setting::amount_key(period),
            value: amount.to_string(),
            updated: (self.now)(),
        };
        self.store.upsert_setting(&stored)?;

        debug!("event=settings_set module=repo period={period} amount={amount}");
        Ok(())
    }
}
