//! Implementations of the `MessagePusher` trait.
//!
//! - `websocket`: bounded per-connection queues drained by the socket writer

pub mod websocket;

pub use websocket::WebSocketMessagePusher;
