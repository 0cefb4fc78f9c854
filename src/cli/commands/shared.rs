//! Shared components for CLI commands

use tracing::debug;

use crate::Result;

/// Set up structured logging for a command at the given level.
///
/// Respects `RUST_LOG` when set; otherwise scopes the level to this crate.
/// Logs go to stderr so machine-readable stdout output stays clean.
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("trip_itinerary={log_level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {log_level}");
    Ok(())
}
