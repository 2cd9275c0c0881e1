use std::sync::Arc;

use planboard_core::Board;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    // One engine for the whole server; every request sees the same board
    board: Arc<Board>,
}

impl AppState {
    pub fn new(board: Board) -> Self {
        AppState {
            board: Arc::new(board),
        }
    }

    pub fn board(&self) -> Arc<Board> {
        self.board.clone()
    }
}
