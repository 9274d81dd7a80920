use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{
    Router,
    extract::{State, WebSocketUpgrade},
    response::IntoResponse,
    routing::get,
};
use common::log;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::broadcaster::Broadcaster;
use crate::session_handler::SessionHandler;
use crate::ws_handler::handle_websocket;

#[derive(Clone)]
pub struct WebServerState {
    pub broadcaster: Broadcaster,
    pub session_handler: SessionHandler,
}

pub fn build_router(state: WebServerState, static_files_path: Option<PathBuf>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new().route("/ws", get(ws_upgrade_handler));
    if let Some(path) = static_files_path {
        log!("Serving static files from {}", path.display());
        app = app.nest_service("/ui", ServeDir::new(path));
    }

    app.layer(cors).with_state(state)
}

pub async fn run_web_server(
    state: WebServerState,
    addr: SocketAddr,
    static_files_path: Option<PathBuf>,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), String> {
    let app = build_router(state, static_files_path);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind web server address {}: {}", addr, e))?;
    log!("Web server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| format!("Web server error: {}", e))
}

async fn ws_upgrade_handler(
    ws: WebSocketUpgrade,
    State(state): State<WebServerState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}
