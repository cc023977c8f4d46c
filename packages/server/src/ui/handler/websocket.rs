//! WebSocket connection handler.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use tokio::sync::mpsc;

use crate::{
    domain::ConnectionId,
    ui::{session::Session, state::AppState},
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let connection = ConnectionId::generate();

    ws.on_failed_upgrade(move |e| {
        tracing::error!("WebSocket upgrade failed for '{}': {}", connection, e);
    })
    .on_upgrade(move |socket| handle_socket(socket, state, connection))
}

/// Spawns a task that drains the connection's outbound queue into the socket.
///
/// The task ends when the queue closes or a write fails.
fn pusher_loop(
    mut rx: mpsc::Receiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
    connection: ConnectionId,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if let Err(e) = sender.send(Message::Text(msg.into())).await {
                tracing::error!("WebSocket write error on '{}': {}", connection, e);
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, connection: ConnectionId) {
    tracing::info!("Client connected: '{}'", connection);

    let (tx, rx) = mpsc::channel(state.outbound_capacity);
    let mut session = Session::open(connection, tx, state).await;

    let (sender, mut receiver) = socket.split();
    let mut send_task = pusher_loop(rx, sender, connection);

    // Frames of this connection are processed one at a time, in arrival order.
    loop {
        tokio::select! {
            incoming = receiver.next() => match incoming {
                Some(Ok(Message::Text(text))) => session.handle_text(text.as_str()).await,
                Some(Ok(Message::Binary(bytes))) => {
                    tracing::warn!(
                        "Discarding {}-byte binary frame from '{}'",
                        bytes.len(),
                        connection
                    );
                }
                Some(Ok(Message::Close(_))) => {
                    tracing::info!("Client '{}' requested close", connection);
                    break;
                }
                // Ping/pong is answered by the WebSocket protocol layer
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::error!("WebSocket error on '{}': {}", connection, e);
                    break;
                }
                None => break,
            },
            _ = &mut send_task => {
                tracing::debug!("Writer for '{}' stopped", connection);
                break;
            }
        }
    }

    send_task.abort();
    session.close().await;

    tracing::info!("Client disconnected: '{}'", connection);
}
