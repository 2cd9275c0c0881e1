//! The scheduling board engine.
//!
//! One [`Board`] owns the local store, the lane maps and the generation
//! counter, and mediates every refresh against the calendar backend. Any
//! number of refreshes may be requested concurrently; only the last one
//! started is allowed to touch the store. Superseded cycles run their
//! fetches to completion and then discard the results silently.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::config::BoardConfig;
use crate::error::{BoardError, BoardResult};
use crate::generation::{Generation, GenerationGuard};
use crate::lane::LaneMap;
use crate::record::EventRecord;
use crate::remote::{
    CalendarSource, ConfirmedEvent, EventDraft, EventPatch, HttpCalendarSource, RemoteCalendar,
};
use crate::status::BoardStatus;
use crate::store::{BoardSnapshot, BoardStore};
use crate::transform::{provisional, transform};
use crate::window::DateWindow;

pub struct Board {
    source: Arc<dyn CalendarSource>,
    config: BoardConfig,
    store: BoardStore,
    generation: GenerationGuard,
    /// Lane maps from the last committed cycle. Lane ids in here are only
    /// valid against the store contents committed by that same cycle.
    lanes: RwLock<LaneMap>,
    /// Window of the last started refresh, as requested (pre-clamp). Reused
    /// by the strong-consistency paths after updates and deletes.
    last_window: RwLock<Option<DateWindow>>,
    /// Lane the operator last worked in; fallback for optimistic creates.
    last_lane: RwLock<Option<String>>,
    status_tx: watch::Sender<BoardStatus>,
}

impl Board {
    pub fn new(source: Arc<dyn CalendarSource>, config: BoardConfig) -> Board {
        let (status_tx, _) = watch::channel(BoardStatus::Idle);
        Board {
            source,
            config,
            store: BoardStore::new(),
            generation: GenerationGuard::new(),
            lanes: RwLock::new(LaneMap::default()),
            last_window: RwLock::new(None),
            last_lane: RwLock::new(None),
            status_tx,
        }
    }

    /// Board talking to the configured HTTP backend.
    pub fn from_config(config: BoardConfig) -> Board {
        let source = Arc::new(HttpCalendarSource::new(&config.backend_url));
        Board::new(source, config)
    }

    /// Point-in-time view of the board for rendering.
    pub fn snapshot(&self) -> BoardSnapshot {
        self.store.snapshot()
    }

    /// The most recently published status.
    pub fn status(&self) -> BoardStatus {
        self.status_tx.borrow().clone()
    }

    /// Subscribe to status changes.
    pub fn watch_status(&self) -> watch::Receiver<BoardStatus> {
        self.status_tx.subscribe()
    }

    /// The widest window the configured horizon permits, around today.
    pub fn default_window(&self) -> DateWindow {
        self.config.horizon.default_window(Utc::now().date_naive())
    }

    /// Record the lane the operator last worked in.
    pub fn remember_lane(&self, lane_id: &str) {
        *self.last_lane.write() = Some(lane_id.to_string());
    }

    /// Pass-through calendar listing for pickers. Does not touch the board.
    pub async fn calendars(&self) -> BoardResult<Vec<RemoteCalendar>> {
        self.source.list_calendars().await
    }

    /// Refresh the board for the given date strings (YYYY-MM-DD).
    ///
    /// Fire-and-forget: the outcome is observable only through the store and
    /// the status channel. Unparseable dates abort before any network call.
    /// The generation token is taken before parsing, so even a rejected
    /// request supersedes older in-flight cycles.
    pub async fn reconcile(&self, from: &str, to: &str) {
        let token = self.generation.begin();
        match DateWindow::parse(from, to) {
            Ok(window) => self.run_cycle(token, window).await,
            Err(e) => {
                debug!(error = %e, "rejected refresh with unparseable window");
                self.publish(token, BoardStatus::InvalidDateRange {
                    reason: e.to_string(),
                });
            }
        }
    }

    /// Refresh with the previously active window, or the full horizon if no
    /// refresh has run yet.
    pub async fn reconcile_last(&self) {
        let token = self.generation.begin();
        let window = (*self.last_window.read()).unwrap_or_else(|| self.default_window());
        self.run_cycle(token, window).await;
    }

    async fn run_cycle(&self, token: Generation, requested: DateWindow) {
        let window = self
            .config
            .horizon
            .clamp(requested, Utc::now().date_naive());
        {
            let mut last = self.last_window.write();
            if self.generation.is_current(token) {
                *last = Some(requested);
            }
        }
        self.publish(token, BoardStatus::Loading {
            from: window.from,
            to: window.to,
        });
        debug!(generation = ?token, from = %window.from, to = %window.to, "refresh cycle started");

        let listed = self.source.list_calendars().await;
        if !self.generation.is_current(token) {
            debug!(generation = ?token, "calendar list superseded; discarding");
            return;
        }
        let calendars = match listed {
            Ok(calendars) => calendars,
            Err(e) => {
                warn!(error = %e, "calendar list failed; keeping board contents");
                self.publish(token, BoardStatus::RefreshFailed {
                    reason: e.to_string(),
                });
                return;
            }
        };

        // An empty calendar list is not a valid event query input: clear the
        // board and stop here.
        if calendars.is_empty() {
            self.store.clear();
            *self.lanes.write() = LaneMap::default();
            self.publish(token, BoardStatus::NoCalendars);
            return;
        }

        let mapped = LaneMap::remap(&calendars);
        let urls: Vec<String> = calendars.iter().map(|c| c.url.clone()).collect();

        let queried = self.source.query_events(&urls, window).await;
        if !self.generation.is_current(token) {
            debug!(generation = ?token, "event query superseded; discarding");
            return;
        }
        let response = match queried {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "event query failed; keeping board contents");
                self.publish(token, BoardStatus::RefreshFailed {
                    reason: e.to_string(),
                });
                return;
            }
        };

        let records: Vec<EventRecord> = response
            .items
            .iter()
            .map(|item| transform(item, &mapped))
            .collect();

        self.apply(token, mapped, records).await;
    }

    /// Commit one cycle's results: clear once, lanes first, then records in
    /// chunks with a cooperative yield between them. The guard is re-checked
    /// before the clear and after every yield; going stale mid-apply just
    /// stops early, since the newer cycle will clear again anyway.
    async fn apply(&self, token: Generation, mapped: LaneMap, records: Vec<EventRecord>) {
        if !self.generation.is_current(token) {
            debug!(generation = ?token, "superseded before apply; discarding");
            return;
        }

        let lane_count = mapped.len();
        self.store.clear();
        self.store.insert_lanes(mapped.lanes().to_vec());
        *self.lanes.write() = mapped;

        let total = records.len();
        for chunk in records.chunks(self.config.insert_chunk.max(1)) {
            self.store.insert_items(chunk);
            tokio::task::yield_now().await;
            if !self.generation.is_current(token) {
                debug!(generation = ?token, "superseded mid-apply; stopping early");
                return;
            }
        }

        debug!(generation = ?token, lanes = lane_count, events = total, "refresh cycle committed");
        self.publish(token, BoardStatus::Ready {
            lanes: lane_count,
            events: total,
        });
    }

    /// Create an event remotely, then show it immediately.
    ///
    /// The provisional record bypasses the cycle machinery on purpose: it is
    /// pushed straight into the store and replaced wholesale by the next
    /// successful refresh. When no lane can be resolved (no cycle has
    /// committed yet and no lane was remembered) the insert is skipped and
    /// the event appears after the next refresh instead.
    pub async fn create_event(
        &self,
        calendar_url: &str,
        draft: &EventDraft,
    ) -> BoardResult<EventRecord> {
        let confirmed = self.source.create_event(calendar_url, draft).await?;
        let uid = if confirmed.id.is_empty() {
            format!("temp-{}", Utc::now().timestamp_millis())
        } else {
            confirmed.id.clone()
        };

        let lane = self
            .lanes
            .read()
            .lane_for_url(calendar_url)
            .map(str::to_string)
            .or_else(|| self.last_lane.read().clone());

        match lane {
            Some(lane_id) => {
                *self.last_lane.write() = Some(lane_id.clone());
                let record = provisional(draft, calendar_url, &uid, &lane_id);
                self.store.push_item(record.clone());
                debug!(uid = %record.remote_uid, lane = %lane_id, "optimistic record inserted");
                Ok(record)
            }
            None => {
                warn!(calendar = %calendar_url, "no lane known for calendar; event shows after next refresh");
                self.status_tx.send_replace(BoardStatus::CreateDeferred {
                    calendar_url: calendar_url.to_string(),
                });
                Ok(provisional(draft, calendar_url, &uid, calendar_url))
            }
        }
    }

    /// Patch an event, then refresh with the previously active window. No
    /// optimistic path for edits: the board shows the edit once the backend
    /// has confirmed and the refresh has committed.
    pub async fn update_event(
        &self,
        uid: &str,
        patch: &EventPatch,
    ) -> BoardResult<ConfirmedEvent> {
        let confirmed = self.source.update_event(uid, patch).await?;
        self.reconcile_last().await;
        Ok(confirmed)
    }

    /// Delete an event, then refresh. An unacknowledged delete is an error
    /// and triggers no refresh, since the mutation was not confirmed.
    pub async fn delete_event(&self, uid: &str) -> BoardResult<()> {
        let deleted = self.source.delete_event(uid).await?;
        if !deleted {
            return Err(BoardError::Remote(format!(
                "Backend refused to delete '{}'",
                uid
            )));
        }
        self.reconcile_last().await;
        Ok(())
    }

    /// Publish a status on behalf of one cycle, unless it went stale.
    fn publish(&self, token: Generation, status: BoardStatus) {
        if self.generation.is_current(token) {
            self.status_tx.send_replace(status);
        }
    }
}
