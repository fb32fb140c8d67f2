//! Failure taxonomy for a single poll cycle.
//!
//! Every variant is local to the cycle that produced it: the scheduler logs it
//! and keeps ticking, and whatever was rendered last stays on screen.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PollError {
    /// Endpoint unreachable, connection dropped, or body could not be read
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP error: {0}")]
    Status(StatusCode),

    /// Body was not a JSON array of event records
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Display surface has no container with this id
    #[error("Container '{0}' not found")]
    ContainerNotFound(String),

    /// Writing to the display surface failed
    #[error("Failed to write to display: {0}")]
    Io(#[from] std::io::Error),
}

impl PollError {
    /// Network-side failures, as opposed to decode or display failures
    pub fn is_transport(&self) -> bool {
        matches!(self, PollError::Transport(_) | PollError::Status(_))
    }
}

pub type PollResult<T> = Result<T, PollError>;
