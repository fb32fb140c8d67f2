//! Polls the `/events` feed on a fixed interval and renders each snapshot as
//! one line per event into a display container.

pub mod config;
pub mod error;
pub mod poller;
pub mod scheduler;
pub mod source;
pub mod surface;

pub use config::PollerConfig;
pub use error::{PollError, PollResult};
pub use poller::{CycleOutcome, EventPoller};
pub use scheduler::{PollerHandle, PollingScheduler};
pub use source::{EventSource, HttpEventSource};
pub use surface::{MemorySurface, Surface, TerminalSurface};
