//! Date windows and fetch horizon clamping.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{BoardError, BoardResult};

/// Inclusive date window for event queries.
///
/// Invariant: `from <= to`. Construction through [`Horizon::clamp`] always
/// upholds this; windows parsed straight from user input may not until they
/// have been clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        DateWindow { from, to }
    }

    /// Parse both endpoints from YYYY-MM-DD strings.
    pub fn parse(from: &str, to: &str) -> BoardResult<Self> {
        Ok(DateWindow {
            from: parse_date(from)?,
            to: parse_date(to)?,
        })
    }
}

/// Parse YYYY-MM-DD into a date.
fn parse_date(s: &str) -> BoardResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        BoardError::InvalidDateRange(format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
    })
}

/// How far around today the board is allowed to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horizon {
    #[serde(default = "default_past_months")]
    pub past_months: u32,
    #[serde(default = "default_future_months")]
    pub future_months: u32,
}

fn default_past_months() -> u32 {
    3
}

fn default_future_months() -> u32 {
    12
}

impl Default for Horizon {
    fn default() -> Self {
        Horizon {
            past_months: default_past_months(),
            future_months: default_future_months(),
        }
    }
}

impl Horizon {
    /// Earliest and latest fetchable dates relative to `today`.
    pub fn bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        (
            today - Months::new(self.past_months),
            today + Months::new(self.future_months),
        )
    }

    /// Clamp a requested window into the fetchable bounds.
    ///
    /// Both endpoints are forced into `[min, max]`, then `to` is raised to
    /// `from` if the endpoints crossed. Pure and idempotent: clamping a
    /// clamped window is a no-op.
    pub fn clamp(&self, window: DateWindow, today: NaiveDate) -> DateWindow {
        let (min, max) = self.bounds(today);
        let from = window.from.clamp(min, max);
        let to = window.to.clamp(min, max).max(from);
        DateWindow { from, to }
    }

    /// The widest window the clamp permits; used when nothing was requested.
    pub fn default_window(&self, today: NaiveDate) -> DateWindow {
        let (from, to) = self.bounds(today);
        DateWindow { from, to }
    }
}
