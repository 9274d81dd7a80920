use std::collections::HashMap;
use std::sync::Arc;

use common::{ServerMessage, log};
use tokio::sync::{Mutex, mpsc};

use crate::identifiers::ClientId;

pub type ClientSender = mpsc::Sender<ServerMessage>;

/// Fan-out of server events to every connected websocket.
#[derive(Clone)]
pub struct Broadcaster {
    clients: Arc<Mutex<HashMap<ClientId, ClientSender>>>,
}

impl std::fmt::Debug for Broadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Broadcaster").finish()
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Broadcaster {
    pub fn new() -> Self {
        Self {
            clients: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn register(&self, client_id: ClientId, sender: ClientSender) {
        self.clients.lock().await.insert(client_id, sender);
    }

    pub async fn unregister(&self, client_id: &ClientId) {
        self.clients.lock().await.remove(client_id);
    }

    pub async fn client_count(&self) -> usize {
        self.clients.lock().await.len()
    }

    /// Never waits on a client: one whose queue is full or closed is dropped
    /// from the fan-out so a stalled socket cannot hold up the match.
    pub async fn broadcast_to_all(&self, message: ServerMessage) {
        let mut clients = self.clients.lock().await;
        let mut dropped = Vec::new();
        for (client_id, sender) in clients.iter() {
            if let Err(e) = sender.try_send(message.clone()) {
                log!("Failed to broadcast to client {}: {}", client_id, e);
                dropped.push(client_id.clone());
            }
        }
        for client_id in dropped {
            clients.remove(&client_id);
            log!("Client {} dropped from broadcasts", client_id);
        }
    }
}
