//! Tracing initialization: an fmt subscriber filtered by `RUST_LOG` (default `info`).
//!
//! sqlx reports statements through the `log` facade; `tracing-subscriber`'s default features
//! bridge those records into the same output, so `RUST_LOG=sqlx=debug` shows every statement
//! and slow statements appear at `warn`.

use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize tracing with console output
pub fn init_telemetry() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    info!("Telemetry initialized");

    Ok(())
}
