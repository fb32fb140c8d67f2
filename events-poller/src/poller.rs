//! One poll cycle: fetch the snapshot, format it, replace the container.

use std::sync::Arc;

use shared::render_lines;
use tokio::sync::Mutex;

use crate::error::PollResult;
use crate::source::EventSource;
use crate::surface::Surface;

/// What a cycle did with its snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Container now holds `lines` children
    Rendered { lines: usize },
    /// A newer cycle already rendered; this snapshot was dropped
    Superseded { latest: u64 },
}

pub struct EventPoller {
    source: Arc<dyn EventSource>,
    surface: Arc<dyn Surface>,
    container_id: String,
    // Sequence number of the snapshot currently on display
    last_rendered: Mutex<u64>,
}

impl EventPoller {
    pub fn new(
        source: Arc<dyn EventSource>,
        surface: Arc<dyn Surface>,
        container_id: impl Into<String>,
    ) -> Self {
        Self {
            source,
            surface,
            container_id: container_id.into(),
            last_rendered: Mutex::new(0),
        }
    }

    /// Run cycle number `cycle`. Cycles may overlap; a snapshot older than the
    /// one on display is discarded rather than written.
    pub async fn run_cycle(&self, cycle: u64) -> PollResult<CycleOutcome> {
        let events = self.source.fetch_events().await?;

        let mut last_rendered = self.last_rendered.lock().await;
        if cycle < *last_rendered {
            return Ok(CycleOutcome::Superseded {
                latest: *last_rendered,
            });
        }

        let lines = render_lines(&events);
        self.surface.replace_children(&self.container_id, &lines)?;
        *last_rendered = cycle;

        Ok(CycleOutcome::Rendered { lines: lines.len() })
    }

    /// Run a cycle and log the result. Failures never escape.
    pub async fn poll(&self, cycle: u64) {
        tracing::debug!("Running poll cycle {}", cycle);

        match self.run_cycle(cycle).await {
            Ok(CycleOutcome::Rendered { lines }) => {
                tracing::info!("Cycle {} rendered {} events", cycle, lines);
            }
            Ok(CycleOutcome::Superseded { latest }) => {
                tracing::debug!(
                    "Cycle {} finished after cycle {} rendered, dropping snapshot",
                    cycle,
                    latest
                );
            }
            Err(e) if e.is_transport() => {
                tracing::error!("Cycle {} failed to fetch events: {}", cycle, e);
            }
            Err(e) => {
                tracing::error!("Cycle {} failed: {}", cycle, e);
            }
        }
    }
}
