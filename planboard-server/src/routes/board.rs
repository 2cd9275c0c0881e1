//! Board snapshot, status and refresh endpoints

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use planboard_core::{BoardSnapshot, BoardStatus, RemoteCalendar};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/board", get(board_snapshot))
        .route("/status", get(board_status))
        .route("/refresh", post(refresh))
        .route("/calendars", get(list_calendars))
}

/// GET /board - Current lanes and records
async fn board_snapshot(State(state): State<AppState>) -> Json<BoardSnapshot> {
    Json(state.board().snapshot())
}

/// Status payload: the structured state plus its display string
#[derive(Serialize)]
pub struct StatusResponse {
    #[serde(flatten)]
    pub status: BoardStatus,
    pub message: String,
}

/// GET /status - What the board is currently doing
async fn board_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let status = state.board().status();
    let message = status.to_string();
    Json(StatusResponse { status, message })
}

/// Request body for a refresh. Missing endpoints fall back to the full
/// configured horizon.
#[derive(Deserialize)]
pub struct RefreshRequest {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// POST /refresh - Kick off a refresh cycle
///
/// Fire-and-forget: returns 202 immediately. Progress lands on /status and
/// the result on /board; a newer refresh silently supersedes this one.
async fn refresh(State(state): State<AppState>, Json(req): Json<RefreshRequest>) -> StatusCode {
    let board = state.board();
    tokio::spawn(async move {
        let window = board.default_window();
        let from = req.from.unwrap_or_else(|| window.from.to_string());
        let to = req.to.unwrap_or_else(|| window.to.to_string());
        board.reconcile(&from, &to).await;
    });
    StatusCode::ACCEPTED
}

/// GET /calendars - Pass-through calendar listing for pickers
async fn list_calendars(
    State(state): State<AppState>,
) -> Result<Json<Vec<RemoteCalendar>>, AppError> {
    let calendars = state.board().calendars().await?;
    Ok(Json(calendars))
}
