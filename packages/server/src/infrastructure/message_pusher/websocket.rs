//! `MessagePusher` backed by per-connection bounded queues.
//!
//! The UI layer creates the queue when a WebSocket is upgraded and keeps the
//! receiving end in the task that writes to the socket. This type only holds
//! the sending ends and never awaits on them: `try_send` either queues the
//! message immediately or the message is dropped for that connection.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc::error::TrySendError};

use crate::domain::{ConnectionId, MessagePushError, MessagePusher, PusherChannel};

/// Default length of each connection's outbound queue
pub const DEFAULT_OUTBOUND_CAPACITY: usize = 64;

#[derive(Default)]
pub struct WebSocketMessagePusher {
    /// Outbound queue per open connection
    clients: Mutex<HashMap<ConnectionId, PusherChannel>>,
}

impl WebSocketMessagePusher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered connections
    pub async fn count_clients(&self) -> usize {
        self.clients.lock().await.len()
    }
}

fn try_push(
    connection: &ConnectionId,
    sender: &PusherChannel,
    content: &str,
) -> Result<(), MessagePushError> {
    sender
        .try_send(content.to_string())
        .map_err(|e| match e {
            TrySendError::Full(_) => MessagePushError::QueueFull(connection.to_string()),
            TrySendError::Closed(_) => MessagePushError::Closed(connection.to_string()),
        })
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, connection: ConnectionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        clients.insert(connection, sender);
        tracing::debug!("Connection '{}' registered to MessagePusher", connection);
    }

    async fn unregister_client(&self, connection: &ConnectionId) {
        let mut clients = self.clients.lock().await;
        clients.remove(connection);
        tracing::debug!("Connection '{}' unregistered from MessagePusher", connection);
    }

    async fn broadcast(&self, targets: Vec<ConnectionId>, content: &str) -> usize {
        let clients = self.clients.lock().await;
        let mut delivered = 0;

        for target in targets {
            let Some(sender) = clients.get(&target) else {
                tracing::debug!("Connection '{}' not registered, skipping", target);
                continue;
            };
            match try_push(&target, sender, content) {
                Ok(()) => delivered += 1,
                // Best effort: a slow or closing peer just misses this message.
                Err(e) => tracing::warn!("Skipped delivery: {}", e),
            }
        }

        delivered
    }
}
