use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use common::{ClientMessage, ServerMessage, log};

use crate::identifiers::generate_client_id;
use crate::web_server::WebServerState;

pub async fn handle_websocket(socket: WebSocket, state: WebServerState) {
    let (mut ws_sender, mut ws_receiver) = socket.split();

    let (tx, mut rx) = mpsc::channel::<ServerMessage>(128);

    let client_id = generate_client_id();
    state.broadcaster.register(client_id.clone(), tx).await;
    log!(
        "WebSocket client connected: {} ({} connected)",
        client_id,
        state.broadcaster.client_count().await
    );

    let send_task = tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            let text = match message.encode() {
                Ok(text) => text,
                Err(e) => {
                    log!("{}", e);
                    continue;
                }
            };
            if ws_sender.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    while let Some(result) = ws_receiver.next().await {
        let text = match result {
            Ok(Message::Text(text)) => text,
            Ok(Message::Close(_)) => break,
            Ok(_) => continue,
            Err(e) => {
                log!("[ws:{}] WebSocket error: {}", client_id, e);
                break;
            }
        };

        match ClientMessage::decode(text.as_str()) {
            Ok(ClientMessage::Info(request)) => {
                state.session_handler.handle_info(request).await;
            }
            Err(e) => log!("[ws:{}] {}", client_id, e),
        }
    }

    log!("WebSocket connection ended for client: {}", client_id);
    state.broadcaster.unregister(&client_id).await;
    state.session_handler.handle_disconnect().await;

    send_task.abort();
}
