//! Renderable event records.
//!
//! These are the records the rendering layer reads from the store. They are
//! already display-shaped: lane-resolved, exclusive-end, with the composite
//! id precomputed by the transformer.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A calendar date or an exact UTC instant.
///
/// Serialized untagged: `"2025-06-01T09:00:00Z"` for instants, `"2025-06-01"`
/// for dates. The date-time variant comes first so RFC3339 strings never fall
/// through to date parsing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventStamp {
    DateTime(DateTime<Utc>),
    Date(NaiveDate),
}

impl EventStamp {
    /// Whether this is a date-only stamp (no time component).
    pub fn is_date(&self) -> bool {
        matches!(self, EventStamp::Date(_))
    }

    /// Shift the stamp by whole days, keeping the variant.
    pub fn plus_days(&self, days: i64) -> EventStamp {
        match self {
            EventStamp::DateTime(dt) => EventStamp::DateTime(*dt + Duration::days(days)),
            EventStamp::Date(d) => EventStamp::Date(*d + Duration::days(days)),
        }
    }

    /// Collapse to a UTC instant for ordering. Dates count as midnight UTC.
    pub fn to_utc(&self) -> DateTime<Utc> {
        match self {
            EventStamp::DateTime(dt) => *dt,
            EventStamp::Date(d) => d.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc(),
        }
    }

    /// The calendar date this stamp falls on (UTC for instants).
    pub fn date(&self) -> NaiveDate {
        match self {
            EventStamp::DateTime(dt) => dt.date_naive(),
            EventStamp::Date(d) => *d,
        }
    }
}

impl fmt::Display for EventStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventStamp::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            EventStamp::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

/// Where a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Came back from the backend through a full refresh cycle.
    Confirmed,
    /// Inserted locally right after an accepted create; replaced by the next
    /// successful cycle.
    Optimistic,
}

/// One displayable event on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Store-unique composite id: `{lane_id}-{calendar_url}/{event_uid}`.
    pub local_id: String,
    /// The backend's stable uid, used for updates and deletes.
    pub remote_uid: String,
    pub lane_id: String,
    pub title: String,
    pub start: EventStamp,
    /// Exclusive end: for all-day records this is one day past the last
    /// inclusive day reported by the backend.
    pub end: EventStamp,
    pub all_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Provider metadata carried through untouched.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    pub provenance: Provenance,
}

impl EventRecord {
    pub fn is_optimistic(&self) -> bool {
        self.provenance == Provenance::Optimistic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_deserializes_both_shapes() {
        let date: EventStamp = serde_json::from_str("\"2025-06-01\"").unwrap();
        assert!(date.is_date());

        let instant: EventStamp = serde_json::from_str("\"2025-06-01T09:30:00Z\"").unwrap();
        assert!(!instant.is_date());
        assert_eq!(instant.to_utc().to_rfc3339(), "2025-06-01T09:30:00+00:00");
    }

    #[test]
    fn test_stamp_serializes_back_to_same_shape() {
        let date = EventStamp::Date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2025-06-01\"");
    }

    #[test]
    fn test_plus_days_keeps_variant() {
        let date = EventStamp::Date(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
        let shifted = date.plus_days(1);
        assert!(shifted.is_date());
        assert_eq!(shifted.date(), NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert_eq!(shifted.plus_days(-1), date);
    }

    #[test]
    fn test_dates_order_as_midnight() {
        let date = EventStamp::Date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        let later: EventStamp = serde_json::from_str("\"2025-06-01T00:00:01Z\"").unwrap();
        assert!(date.to_utc() < later.to_utc());
    }
}
