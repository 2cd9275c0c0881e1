mod routes;
mod singleton;
mod state;

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use planboard_core::{Board, BoardConfig};

use crate::state::AppState;

const DEFAULT_PORT: u16 = 4311;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Ensure only one instance is running
    let _lock = singleton::acquire_lock()?;

    let config = BoardConfig::load()?;
    let board = Board::from_config(config);
    let state = AppState::new(board);

    // Warm the board up over the full horizon while the server comes up
    {
        let board = state.board();
        tokio::spawn(async move { board.reconcile_last().await });
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::board::router())
        .merge(routes::events::router())
        .with_state(state)
        .layer(cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT));
    println!("planboard-server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
