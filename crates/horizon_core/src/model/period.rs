//! Period granularities and their calendar arithmetic.
//!
//! # Responsibility
//! - Define the four nested planning granularities and their stable wire tags.
//! - Keep every granularity rule (alignment, successor, comparison, title
//!   formatting) in one place so the rules cannot drift apart.
//!
//! # Invariants
//! - Wire tags are stable: year=0, quarter=1, week=2, day=3.
//! - Weeks start on Monday; Sunday belongs to the week that started six days
//!   earlier.
//! - `align_start` never moves an instant forward; `next_start` is always
//!   strictly after `align_start` for the same instant.
//! - `compare` and `align_start` agree: two instants compare equal exactly
//!   when they align to the same period start.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Time granularity of a planning goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Year,
    Quarter,
    Week,
    Day,
}

impl Period {
    /// All granularities, broadest first. This is the on-screen column order.
    pub const ALL: [Period; 4] = [Period::Year, Period::Quarter, Period::Week, Period::Day];

    /// Stable integer tag used in the `goals.period` column and settings keys.
    pub fn as_tag(self) -> i64 {
        match self {
            Period::Year => 0,
            Period::Quarter => 1,
            Period::Week => 2,
            Period::Day => 3,
        }
    }

    /// Parses a stable wire tag back into a granularity.
    pub fn from_tag(tag: i64) -> Option<Period> {
        match tag {
            0 => Some(Period::Year),
            1 => Some(Period::Quarter),
            2 => Some(Period::Week),
            3 => Some(Period::Day),
            _ => None,
        }
    }

    /// Column header shown above a period's goals.
    pub fn name(self) -> &'static str {
        match self {
            Period::Year => "Year",
            Period::Quarter => "Quarter",
            Period::Week => "Week",
            Period::Day => "Day",
        }
    }

    /// Aligns an instant down to the start of its enclosing period.
    pub fn align_start(self, t: NaiveDateTime) -> NaiveDateTime {
        match self {
            Period::Year => midnight(first_of(t.year(), 1)),
            Period::Quarter => {
                let month = (quarter_index(t) - 1) * 3 + 1;
                midnight(first_of(t.year(), month))
            }
            Period::Week => week_start(t),
            Period::Day => midnight(t.date()),
        }
    }

    /// Returns the start of the period immediately after the one holding `t`.
    pub fn next_start(self, t: NaiveDateTime) -> NaiveDateTime {
        match self {
            Period::Year => midnight(first_of(t.year() + 1, 1)),
            Period::Quarter => {
                let quarter = quarter_index(t);
                if quarter == 4 {
                    midnight(first_of(t.year() + 1, 1))
                } else {
                    midnight(first_of(t.year(), quarter * 3 + 1))
                }
            }
            Period::Week => week_start(t) + Duration::days(7),
            Period::Day => midnight(t.date() + Duration::days(1)),
        }
    }

    /// Compares two instants at this granularity's precision.
    ///
    /// Instants inside the same year / quarter / ISO week / calendar day
    /// compare equal for that granularity.
    pub fn compare(self, a: NaiveDateTime, b: NaiveDateTime) -> Ordering {
        match self {
            Period::Year => a.year().cmp(&b.year()),
            Period::Quarter => {
                (a.year(), quarter_index(a)).cmp(&(b.year(), quarter_index(b)))
            }
            Period::Week => {
                let (week_a, week_b) = (a.iso_week(), b.iso_week());
                (week_a.year(), week_a.week()).cmp(&(week_b.year(), week_b.week()))
            }
            Period::Day => a.date().cmp(&b.date()),
        }
    }

    /// Formats a period-aligned start for display, e.g. `2024 Q4` or
    /// `2024-12-09 W50`.
    pub fn format_start(self, start: NaiveDateTime) -> String {
        match self {
            Period::Year => start.format("%Y").to_string(),
            Period::Quarter => format!("{} Q{}", start.year(), quarter_index(start)),
            Period::Week => format!(
                "{} W{}",
                start.format("%Y-%m-%d"),
                start.iso_week().week()
            ),
            Period::Day => start.format("%Y-%m-%d %A").to_string(),
        }
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the 1-based quarter index of an instant's month.
pub fn quarter_index(t: NaiveDateTime) -> u32 {
    (t.month() - 1) / 3 + 1
}

fn week_start(t: NaiveDateTime) -> NaiveDateTime {
    let days_from_monday = i64::from(t.weekday().num_days_from_monday());
    midnight(t.date() - Duration::days(days_from_monday))
}

fn first_of(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("first day of a month is a valid date")
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).expect("midnight is a valid time")
}
