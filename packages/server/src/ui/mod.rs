//! WebSocket relay server: HTTP routing, connection handling and startup.

mod config;
mod handler;
mod server;
mod session;
mod signal;
pub mod state;

pub use config::ServerConfig;
pub use server::Server;
pub use session::Session;
