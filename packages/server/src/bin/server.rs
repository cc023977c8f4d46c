//! Room relay server.
//!
//! Clients connect over WebSocket, send `{"type":"join","payload":{"roomName":...}}`
//! and from then on every envelope they send is relayed to the other members
//! of that room.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin roomrelay-server
//! cargo run --bin roomrelay-server -- --host 127.0.0.1 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;
use roomrelay_server::{
    infrastructure::{
        message_pusher::{WebSocketMessagePusher, websocket::DEFAULT_OUTBOUND_CAPACITY},
        repository::InMemoryRoomRepository,
    },
    ui::{Server, ServerConfig},
};
use roomrelay_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "roomrelay-server")]
#[command(about = "WebSocket relay that fans messages out to the members of a room", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value_t = 8080)]
    port: u16,

    /// Messages buffered per connection before deliveries to it are dropped
    #[arg(long, default_value_t = DEFAULT_OUTBOUND_CAPACITY)]
    outbound_capacity: usize,

    /// Default log level (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl From<&Args> for ServerConfig {
    fn from(args: &Args) -> Self {
        Self {
            host: args.host.clone(),
            port: args.port,
            outbound_capacity: args.outbound_capacity,
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // 1. Repository (in-memory room registry)
    let repository = Arc::new(InMemoryRoomRepository::default());

    // 2. MessagePusher (per-connection outbound queues)
    let message_pusher = Arc::new(WebSocketMessagePusher::new());

    // 3. Server
    let server = Server::new(repository, message_pusher, ServerConfig::from(&args));

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
