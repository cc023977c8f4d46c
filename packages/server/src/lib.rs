//! Room-based WebSocket relay.
//!
//! Clients join a named room with a `join` envelope and every envelope they
//! send afterwards is fanned out to the other members of that room.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
