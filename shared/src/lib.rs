//! Types shared between the events poller and anything that produces or
//! consumes the `/events` feed.

pub mod models;

pub use models::{render_lines, Event, MISSING_BRANCH};
