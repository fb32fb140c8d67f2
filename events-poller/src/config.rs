use anyhow::{Context, Result};
use reqwest::Url;
use std::env;
use std::time::Duration;

/// Fixed refresh period of the events display
pub const POLL_INTERVAL: Duration = Duration::from_millis(15_000);

/// Identifier of the display container the events are rendered into
pub const EVENTS_CONTAINER_ID: &str = "events";

const DEFAULT_EVENTS_URL: &str = "http://localhost:5000/events";

#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub events_url: Url,
    pub container_id: String,
    pub poll_interval: Duration,
    pub clear_screen: bool,
}

impl PollerConfig {
    pub fn new(events_url: Url) -> Self {
        Self {
            events_url,
            container_id: EVENTS_CONTAINER_ID.to_string(),
            poll_interval: POLL_INTERVAL,
            clear_screen: true,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build the config from any variable lookup; `from_env` passes the process env.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let events_url = var("EVENTS_URL").unwrap_or_else(|| DEFAULT_EVENTS_URL.to_string());
        let events_url = Url::parse(&events_url).context("EVENTS_URL must be a valid URL")?;

        Ok(Self {
            clear_screen: var("EVENTS_CLEAR_SCREEN")
                .unwrap_or_else(|| "true".to_string())
                .parse()
                .context("EVENTS_CLEAR_SCREEN must be true or false")?,
            ..Self::new(events_url)
        })
    }
}
