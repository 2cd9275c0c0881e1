//! The calendar backend boundary.

use async_trait::async_trait;

use crate::error::BoardResult;
use crate::remote::protocol::{
    ConfirmedEvent, EventDraft, EventPatch, EventQueryResponse, RemoteCalendar,
};
use crate::window::DateWindow;

/// Request/response operations the calendar backend exposes.
///
/// Transport concerns (retries, timeouts, auth) live behind this boundary;
/// the engine only ever sees a final success or failure per call.
#[async_trait]
pub trait CalendarSource: Send + Sync {
    /// List all calendars visible to the account.
    async fn list_calendars(&self) -> BoardResult<Vec<RemoteCalendar>>;

    /// Query events across `calendars` within `window`. Callers must not
    /// pass an empty calendar list.
    async fn query_events(
        &self,
        calendars: &[String],
        window: DateWindow,
    ) -> BoardResult<EventQueryResponse>;

    /// Create an event; returns at least the assigned uid.
    async fn create_event(
        &self,
        calendar_url: &str,
        draft: &EventDraft,
    ) -> BoardResult<ConfirmedEvent>;

    /// Patch an event by uid. A `target_calendar` in the patch moves it.
    async fn update_event(&self, uid: &str, patch: &EventPatch) -> BoardResult<ConfirmedEvent>;

    /// Delete an event by uid. `Ok(false)` means the backend kept it.
    async fn delete_event(&self, uid: &str) -> BoardResult<bool>;
}
