use anyhow::Context;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "voltworth-tui.log";

/// Sets up tracing to a log file. Stdout belongs to the terminal UI, so
/// nothing may ever be printed there. No-op unless logging is enabled in the
/// config; `RUST_LOG` overrides the default `info` filter.
pub fn init(enabled: bool) -> Result<(), anyhow::Error> {
    if !enabled {
        return Ok(());
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE)
        .with_context(|| format!("opening {LOG_FILE}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "voltworth-tui started");
    Ok(())
}
