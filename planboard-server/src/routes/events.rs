//! Event mutation endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, patch, post},
};
use serde::Deserialize;

use planboard_core::{ConfirmedEvent, EventDraft, EventPatch, EventRecord};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", post(create_event))
        .route("/events/{uid}", patch(update_event))
        .route("/events/{uid}", delete(delete_event))
}

/// Request body for creating an event
#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub calendar_url: String,
    #[serde(flatten)]
    pub draft: EventDraft,
    /// Lane the operator was working in; lets the optimistic insert resolve
    /// a lane before the calendar has one committed.
    pub lane_hint: Option<String>,
}

/// POST /events - Create an event and show it optimistically
async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventRecord>), AppError> {
    let board = state.board();
    if let Some(lane) = &req.lane_hint {
        board.remember_lane(lane);
    }
    let record = board.create_event(&req.calendar_url, &req.draft).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// PATCH /events/:uid - Patch an event; include target_calendar to move it
async fn update_event(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    Json(patch): Json<EventPatch>,
) -> Result<Json<ConfirmedEvent>, AppError> {
    let confirmed = state.board().update_event(&uid, &patch).await?;
    Ok(Json(confirmed))
}

/// DELETE /events/:uid - Delete an event, refreshing the board on success
async fn delete_event(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<StatusCode, AppError> {
    state.board().delete_event(&uid).await?;
    Ok(StatusCode::NO_CONTENT)
}
