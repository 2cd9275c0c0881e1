//! Defines the JSON protocol used for communication between the board and
//! the calendar backend over HTTP.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use reqwest::Method;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::record::EventStamp;

/// A typed backend operation: the struct is the request payload, the
/// associated type is what comes back inside the response envelope.
pub trait BackendCommand: Serialize {
    type Response: DeserializeOwned;
    fn method() -> Method;
    fn path(&self) -> String;
}

/// Response envelope used by the backend on every route.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response<T> {
    Success { data: T },
    Error { error: String },
}

// ============================================================================
// Resource Types
// ============================================================================

/// One calendar as listed by the backend. The URL is the stable identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteCalendar {
    pub url: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Lane row echoed by the backend's event query.
///
/// Carried for wire fidelity only: the board computes its own lanes from the
/// calendar list and ignores these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteLane {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One event as returned by the backend. All-day events carry date-only
/// stamps with an inclusive end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteItem {
    #[serde(default)]
    pub id: String,
    pub calendar_url: String,
    pub title: String,
    pub start: EventStamp,
    pub end: EventStamp,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

/// Fields for creating an event, in the backend's conventions (all-day ends
/// inclusive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub start: EventStamp,
    pub end: EventStamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

/// Partial update. `target_calendar` moves the event to another calendar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<EventStamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<EventStamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_calendar: Option<String>,
}

/// Confirmation of a create or update. Only `id` is guaranteed; the backend
/// may echo any subset of the event's fields alongside it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfirmedEvent {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Deletion acknowledgement. `success: false` means the backend kept the
/// event and the caller must not assume it is gone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeleteAck {
    pub success: bool,
}

/// Combined query response for the full calendar set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventQueryResponse {
    #[serde(default)]
    pub lanes: Vec<RemoteLane>,
    #[serde(default)]
    pub items: Vec<RemoteItem>,
}

// ============================================================================
// Commands
// ============================================================================

/// List all calendars visible to the account.
#[derive(Debug, Serialize)]
pub struct ListCalendars;

impl BackendCommand for ListCalendars {
    type Response = Vec<RemoteCalendar>;
    fn method() -> Method {
        Method::GET
    }
    fn path(&self) -> String {
        "/calendars".to_string()
    }
}

/// Query events across calendars within a date window. Never sent with an
/// empty calendar list.
#[derive(Debug, Serialize)]
pub struct QueryEvents {
    pub calendars: Vec<String>,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl BackendCommand for QueryEvents {
    type Response = EventQueryResponse;
    fn method() -> Method {
        Method::POST
    }
    fn path(&self) -> String {
        "/events/query".to_string()
    }
}

/// Create a new event in a calendar.
#[derive(Debug, Serialize)]
pub struct CreateEvent {
    pub calendar_url: String,
    #[serde(flatten)]
    pub draft: EventDraft,
}

impl BackendCommand for CreateEvent {
    type Response = ConfirmedEvent;
    fn method() -> Method {
        Method::POST
    }
    fn path(&self) -> String {
        "/events".to_string()
    }
}

/// Update an existing event by uid.
#[derive(Debug, Serialize)]
pub struct UpdateEvent {
    #[serde(skip)]
    pub uid: String,
    #[serde(flatten)]
    pub patch: EventPatch,
}

impl BackendCommand for UpdateEvent {
    type Response = ConfirmedEvent;
    fn method() -> Method {
        Method::PATCH
    }
    fn path(&self) -> String {
        format!("/events/{}", self.uid)
    }
}

/// Delete an event by uid.
#[derive(Debug, Serialize)]
pub struct DeleteEvent {
    #[serde(skip)]
    pub uid: String,
}

impl BackendCommand for DeleteEvent {
    type Response = DeleteAck;
    fn method() -> Method {
        Method::DELETE
    }
    fn path(&self) -> String {
        format!("/events/{}", self.uid)
    }
}
