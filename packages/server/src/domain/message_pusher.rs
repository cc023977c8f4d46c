//! Outbound delivery interface.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::ConnectionId;

/// Bounded queue feeding one connection's socket writer
pub type PusherChannel = mpsc::Sender<String>;

/// Delivers serialized envelopes to connections.
///
/// Delivery never waits: a connection whose queue is full or closed misses
/// the message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// Register the outbound queue of a newly opened connection
    async fn register_client(&self, connection: ConnectionId, sender: PusherChannel);

    /// Forget a connection's outbound queue
    async fn unregister_client(&self, connection: &ConnectionId);

    /// Queue `content` for every target, skipping the ones that cannot take it.
    ///
    /// Returns the number of connections the message was queued for.
    async fn broadcast(&self, targets: Vec<ConnectionId>, content: &str) -> usize;
}
