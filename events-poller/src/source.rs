//! Where snapshots of the event feed come from.

use async_trait::async_trait;
use reqwest::{Client, Url};
use shared::Event;

use crate::error::{PollError, PollResult};

/// Anything that can produce the current event snapshot.
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn fetch_events(&self) -> PollResult<Vec<Event>>;
}

/// Reads the feed with a plain `GET` against the events endpoint.
///
/// No timeout is configured: a hung request stalls only the cycle that issued it.
pub struct HttpEventSource {
    client: Client,
    url: Url,
}

impl HttpEventSource {
    pub fn new(url: Url) -> PollResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl EventSource for HttpEventSource {
    async fn fetch_events(&self) -> PollResult<Vec<Event>> {
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::Status(status));
        }

        let body = response.bytes().await?;
        let events: Vec<Event> = serde_json::from_slice(&body)?;

        tracing::debug!("Fetched {} events from {}", events.len(), self.url);
        Ok(events)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use reqwest::StatusCode;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    pub enum Reply {
        Events(Vec<Event>),
        Fail(StatusCode),
        Panic,
    }

    /// One scripted reply; `delay` is awaited before answering.
    pub struct Step {
        pub delay: Duration,
        pub reply: Reply,
    }

    impl Step {
        pub fn ok(events: Vec<Event>) -> Self {
            Self {
                delay: Duration::ZERO,
                reply: Reply::Events(events),
            }
        }

        pub fn fail(status: StatusCode) -> Self {
            Self {
                delay: Duration::ZERO,
                reply: Reply::Fail(status),
            }
        }

        pub fn panic() -> Self {
            Self {
                delay: Duration::ZERO,
                reply: Reply::Panic,
            }
        }

        pub fn delayed(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }
    }

    /// Replays scripted steps in order, then repeats `fallback` forever.
    pub struct ScriptedSource {
        steps: Mutex<VecDeque<Step>>,
        fallback: Vec<Event>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        pub fn new(steps: Vec<Step>) -> Self {
            Self {
                steps: Mutex::new(steps.into()),
                fallback: Vec::new(),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn repeating(events: Vec<Event>) -> Self {
            Self {
                steps: Mutex::new(VecDeque::new()),
                fallback: events,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl EventSource for ScriptedSource {
        async fn fetch_events(&self) -> PollResult<Vec<Event>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let step = self.steps.lock().unwrap().pop_front();
            match step {
                Some(step) => {
                    if !step.delay.is_zero() {
                        tokio::time::sleep(step.delay).await;
                    }
                    match step.reply {
                        Reply::Events(events) => Ok(events),
                        Reply::Fail(status) => Err(PollError::Status(status)),
                        Reply::Panic => panic!("event source blew up"),
                    }
                }
                None => Ok(self.fallback.clone()),
            }
        }
    }

    pub fn event(author: &str, action: &str, from: Option<&str>, to: &str, ts: &str) -> Event {
        Event {
            author: author.to_string(),
            action: action.to_string(),
            from_branch: from.map(str::to_string),
            to_branch: to.to_string(),
            timestamp: ts.to_string(),
        }
    }
}
