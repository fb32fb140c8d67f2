use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use events_poller::{EventPoller, HttpEventSource, PollerConfig, PollingScheduler, TerminalSurface};

#[tokio::main]
async fn main() -> Result<()> {
    // stdout is the display, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "events_poller=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    dotenvy::dotenv().ok();
    let config = PollerConfig::from_env()?;

    tracing::info!("Polling {} every {:?}", config.events_url, config.poll_interval);

    let source = HttpEventSource::new(config.events_url.clone())
        .context("Failed to build HTTP client")?;
    let surface = TerminalSurface::stdout(&config.container_id, config.clear_screen);
    let poller = EventPoller::new(Arc::new(source), Arc::new(surface), &config.container_id);

    let handle = PollingScheduler::new(poller, config.poll_interval).spawn();

    tracing::info!("Events poller running. Press Ctrl+C to stop.");
    signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received, stopping...");

    handle.shutdown();

    tracing::info!("Events poller stopped");
    Ok(())
}
