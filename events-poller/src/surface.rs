//! Display surfaces the poller renders into.
//!
//! A surface owns one or more containers addressed by id. Rendering always
//! replaces every child of a container; nothing is patched in place.

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

use crate::error::{PollError, PollResult};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

pub trait Surface: Send + Sync {
    /// Drop every child of `container_id` and append `lines` in order.
    fn replace_children(&self, container_id: &str, lines: &[String]) -> PollResult<()>;
}

/// Escape control characters so server text can't drive the terminal or
/// split one child into several lines.
fn inert(line: &str) -> String {
    line.chars()
        .map(|c| {
            if c.is_control() {
                c.escape_default().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-memory surface; containers must be registered before they can be rendered.
#[derive(Debug, Default)]
pub struct MemorySurface {
    containers: Mutex<HashMap<String, Vec<String>>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(id: impl Into<String>) -> Self {
        let surface = Self::new();
        surface.add_container(id);
        surface
    }

    pub fn add_container(&self, id: impl Into<String>) {
        lock(&self.containers).entry(id.into()).or_default();
    }

    /// Current children of a container, `None` if it does not exist
    pub fn lines(&self, id: &str) -> Option<Vec<String>> {
        lock(&self.containers).get(id).cloned()
    }
}

impl Surface for MemorySurface {
    fn replace_children(&self, container_id: &str, lines: &[String]) -> PollResult<()> {
        let mut containers = lock(&self.containers);
        let children = containers
            .get_mut(container_id)
            .ok_or_else(|| PollError::ContainerNotFound(container_id.to_string()))?;

        children.clear();
        children.extend(lines.iter().cloned());
        Ok(())
    }
}

/// Renders a single container as a frame of text lines on a writer.
pub struct TerminalSurface<W> {
    container_id: String,
    out: Mutex<W>,
    clear_screen: bool,
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout(container_id: impl Into<String>, clear_screen: bool) -> Self {
        Self::new(container_id, io::stdout(), clear_screen)
    }
}

impl<W: Write + Send> TerminalSurface<W> {
    pub fn new(container_id: impl Into<String>, out: W, clear_screen: bool) -> Self {
        Self {
            container_id: container_id.into(),
            out: Mutex::new(out),
            clear_screen,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> Surface for TerminalSurface<W> {
    fn replace_children(&self, container_id: &str, lines: &[String]) -> PollResult<()> {
        if container_id != self.container_id {
            return Err(PollError::ContainerNotFound(container_id.to_string()));
        }

        let mut out = lock(&self.out);
        if self.clear_screen {
            out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        for line in lines {
            writeln!(out, "{}", inert(line))?;
        }
        out.flush()?;
        Ok(())
    }
}
