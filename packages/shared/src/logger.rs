//! Logging setup for the relay binaries.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the default filter directive for a binary.
///
/// Both the library crates and the binary target log at `default_level`
/// unless `RUST_LOG` says otherwise.
fn default_directive(binary_name: &str, default_level: &str) -> String {
    format!(
        "roomrelay_server={level},roomrelay_shared={level},{bin}={level},tower_http={level}",
        level = default_level,
        bin = binary_name.replace('-', "_"),
    )
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// The level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "roomrelay-server")
/// * `default_level` - The default log level (e.g., "debug", "info", "warn")
///
/// # Examples
///
/// ```no_run
/// use roomrelay_shared::logger::setup_logger;
///
/// setup_logger("roomrelay-server", "info");
/// ```
pub fn setup_logger(binary_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(binary_name, default_level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
