//! Server configuration.

use crate::infrastructure::message_pusher::websocket::DEFAULT_OUTBOUND_CAPACITY;

/// Default port the relay listens on
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,
    /// Port to bind to; `0` picks a free port
    pub port: u16,
    /// Length of each connection's outbound queue
    pub outbound_capacity: usize,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            outbound_capacity: DEFAULT_OUTBOUND_CAPACITY,
        }
    }
}
