//! Data Transfer Objects (DTOs).
//!
//! DTOs are organized by protocol:
//! - `websocket`: envelopes exchanged over the WebSocket
//! - `http`: HTTP API response bodies

pub mod conversion;
pub mod http;
pub mod websocket;
