// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset: this crate at INFO, dependencies
/// only when they warn.
pub const DEFAULT_LOG_FILTER: &str = "warn,review_prep=info";

/// Installs a stderr subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`].
pub fn setup_logging() {
    fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Logging setup complete.");
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
