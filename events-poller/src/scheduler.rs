use std::sync::Arc;
use std::time::Duration;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::poller::EventPoller;

pub struct PollingScheduler {
    poller: Arc<EventPoller>,
    interval: Duration,
}

/// Handle to a running scheduler. The schedule has no terminal state of its
/// own; it stops only through [`PollerHandle::shutdown`] or runtime shutdown.
pub struct PollerHandle {
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop ticking and abort every in-flight cycle.
    pub fn shutdown(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl PollingScheduler {
    pub fn new(poller: EventPoller, interval: Duration) -> Self {
        Self {
            poller: Arc::new(poller),
            interval,
        }
    }

    pub fn spawn(self) -> PollerHandle {
        PollerHandle {
            task: tokio::spawn(self.run()),
        }
    }

    /// Tick forever. Each tick spawns its cycle so a slow or hung request never
    /// delays the next tick; the first tick fires one full interval after start.
    /// Ticks missed during a stall collapse into one.
    pub async fn run(self) {
        let mut ticker = time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut cycles = JoinSet::new();
        let mut next_cycle: u64 = 0;

        tracing::info!("Events poller started (interval: {:?})", self.interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    next_cycle += 1;
                    let cycle = next_cycle;
                    let poller = Arc::clone(&self.poller);
                    cycles.spawn(async move { poller.poll(cycle).await });
                }
                Some(joined) = cycles.join_next(), if !cycles.is_empty() => {
                    if let Err(e) = joined {
                        if e.is_panic() {
                            tracing::warn!("Poll cycle panicked: {:?}", e);
                        }
                    }
                }
            }
        }
    }
}
