//! Status side-channel values.
//!
//! Failures reach rendering clients as plain text through this channel,
//! never as faults. The engine publishes a new value at each step of a
//! refresh cycle; superseded cycles stay silent.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What the board is currently doing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BoardStatus {
    /// Nothing has been requested yet.
    Idle,
    Loading {
        from: NaiveDate,
        to: NaiveDate,
    },
    Ready {
        lanes: usize,
        events: usize,
    },
    /// The backend listed no calendars; the board was cleared.
    NoCalendars,
    InvalidDateRange {
        reason: String,
    },
    RefreshFailed {
        reason: String,
    },
    /// An event was created but could not be shown immediately; it will
    /// appear after the next refresh.
    CreateDeferred {
        calendar_url: String,
    },
}

impl fmt::Display for BoardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardStatus::Idle => write!(f, "Idle"),
            BoardStatus::Loading { from, to } => {
                write!(f, "Loading events from {} to {}...", from, to)
            }
            BoardStatus::Ready { lanes, events } => {
                write!(f, "Showing {} events across {} calendars", events, lanes)
            }
            BoardStatus::NoCalendars => write!(f, "No calendars connected"),
            BoardStatus::InvalidDateRange { reason } => {
                write!(f, "Invalid date range: {}", reason)
            }
            BoardStatus::RefreshFailed { reason } => write!(f, "Refresh failed: {}", reason),
            BoardStatus::CreateDeferred { calendar_url } => {
                write!(
                    f,
                    "Event saved to {}; it will appear after the next refresh",
                    calendar_url
                )
            }
        }
    }
}

impl BoardStatus {
    /// Whether this status reports a failure.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            BoardStatus::InvalidDateRange { .. } | BoardStatus::RefreshFailed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statuses_render_as_plain_text() {
        let loading = BoardStatus::Loading {
            from: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        };
        assert_eq!(
            loading.to_string(),
            "Loading events from 2025-06-01 to 2025-06-30..."
        );

        let ready = BoardStatus::Ready {
            lanes: 2,
            events: 14,
        };
        assert_eq!(ready.to_string(), "Showing 14 events across 2 calendars");
    }

    #[test]
    fn test_failure_classification() {
        assert!(
            BoardStatus::RefreshFailed {
                reason: "timeout".to_string()
            }
            .is_failure()
        );
        assert!(!BoardStatus::NoCalendars.is_failure());
        assert!(!BoardStatus::Idle.is_failure());
    }

    #[test]
    fn test_serializes_with_state_tag() {
        let json = serde_json::to_string(&BoardStatus::NoCalendars).unwrap();
        assert_eq!(json, "{\"state\":\"no_calendars\"}");

        let ready = serde_json::to_string(&BoardStatus::Ready {
            lanes: 1,
            events: 3,
        })
        .unwrap();
        assert_eq!(ready, "{\"state\":\"ready\",\"lanes\":1,\"events\":3}");
    }
}
