//! Logging setup.
//!
//! Development gets pretty, human-readable output at `debug`; production
//! gets flattened JSON at `info` for log aggregation. `RUST_LOG` overrides
//! the default filter in both cases (e.g. `RUST_LOG=debug,sqlx=info`).

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Environment;

const DEVELOPMENT_FILTER: &str = "debug,tower_http=debug,sqlx=warn";
const PRODUCTION_FILTER: &str = "info,tower_http=info,sqlx=warn";

/// Install the global subscriber for `env`.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(env: Environment) -> anyhow::Result<()> {
    let filter = |default: &str| {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };

    if env.is_development() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .pretty()
                    .with_filter(filter(DEVELOPMENT_FILTER)),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .flatten_event(true)
                    .with_target(true)
                    .with_filter(filter(PRODUCTION_FILTER)),
            )
            .try_init()?;
    }

    tracing::info!(environment = ?env, "Tracing initialized");
    Ok(())
}
