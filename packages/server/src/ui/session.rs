//! Protocol handling for one connection.
//!
//! A `Session` owns the connection's [`ConnectionState`] and turns each text
//! frame into a registry operation. It is transport agnostic: the WebSocket
//! handler feeds it frames and calls [`Session::close`] when the socket ends.
//!
//! Cleanup runs exactly once. `close` leaves the room and unregisters the
//! outbound queue; if the session is dropped without `close` (task aborted,
//! panic while processing a frame) the same cleanup is spawned from `Drop`.

use std::sync::Arc;

use crate::{
    domain::{
        ConnectionId, ConnectionState, IgnoreReason, InboundKind, PusherChannel, Transition,
    },
    infrastructure::dto::websocket::Envelope,
    ui::state::AppState,
};

pub struct Session {
    connection: ConnectionId,
    state: ConnectionState,
    app: Arc<AppState>,
    released: bool,
}

impl Session {
    /// Register the connection's outbound queue and start in `Unjoined`.
    pub async fn open(connection: ConnectionId, sender: PusherChannel, app: Arc<AppState>) -> Self {
        app.message_pusher.register_client(connection, sender).await;
        Self {
            connection,
            state: ConnectionState::Unjoined,
            app,
            released: false,
        }
    }

    pub fn connection(&self) -> ConnectionId {
        self.connection
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    /// Process one text frame.
    ///
    /// Frames that are not envelopes are discarded; the connection stays
    /// usable.
    pub async fn handle_text(&mut self, text: &str) {
        let envelope = match Envelope::parse(text) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(
                    "Discarding malformed message from '{}': {}",
                    self.connection,
                    e
                );
                return;
            }
        };

        match self.state.transition(InboundKind::from(&envelope)) {
            Transition::Join(room) => {
                match self
                    .app
                    .join_room_usecase
                    .execute(room.clone(), self.connection, &self.app.notices.user_joined)
                    .await
                {
                    Ok(_) => self.state.joined(room),
                    Err(e) => {
                        tracing::warn!("Join failed for '{}': {}", self.connection, e);
                    }
                }
            }
            Transition::Relay(room) => {
                // Forward the frame exactly as received.
                let delivered = self
                    .app
                    .broadcast_usecase
                    .execute(&room, &self.connection, text)
                    .await;
                tracing::debug!(
                    "Relayed '{}' from '{}' in room '{}' to {} members",
                    envelope.r#type,
                    self.connection,
                    room,
                    delivered
                );
            }
            Transition::Ignore(IgnoreReason::NotJoined) => {
                tracing::debug!(
                    "Ignoring '{}' from '{}': not joined to a room",
                    envelope.r#type,
                    self.connection
                );
            }
            Transition::Ignore(IgnoreReason::InvalidJoin) => {
                tracing::warn!(
                    "Discarding join without a valid roomName from '{}'",
                    self.connection
                );
            }
        }
    }

    /// Leave the bound room (if any) and unregister the outbound queue.
    pub async fn close(mut self) {
        self.released = true;
        let state = std::mem::take(&mut self.state);
        release(self.app.clone(), self.connection, state).await;
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        let state = std::mem::take(&mut self.state);
        let app = self.app.clone();
        let connection = self.connection;
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                tracing::warn!("Session '{}' dropped without close, releasing", connection);
                handle.spawn(release(app, connection, state));
            }
            Err(_) => {
                tracing::error!(
                    "Session '{}' dropped outside a runtime; membership not released",
                    connection
                );
            }
        }
    }
}

async fn release(app: Arc<AppState>, connection: ConnectionId, state: ConnectionState) {
    if let ConnectionState::Joined(room) = state {
        if let Err(e) = app
            .leave_room_usecase
            .execute(&room, &connection, &app.notices.user_left)
            .await
        {
            tracing::debug!("Nothing to leave for '{}': {}", connection, e);
        }
    }
    app.message_pusher.unregister_client(&connection).await;
}
