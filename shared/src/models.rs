use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Placeholder rendered when an event has no source branch (e.g. a push)
pub const MISSING_BRANCH: &str = "-";

/// Branch activity record as returned by `GET /events`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub author: String,
    pub action: String, // "PUSH", "PULL_REQUEST", "MERGE", ...
    #[serde(default)]
    pub from_branch: Option<String>,
    pub to_branch: String,
    #[serde(deserialize_with = "verbatim")]
    pub timestamp: String,
}

impl Event {
    /// Source branch for display, `-` when absent or empty
    pub fn from_branch_or_placeholder(&self) -> &str {
        match self.from_branch.as_deref() {
            Some(branch) if !branch.is_empty() => branch,
            _ => MISSING_BRANCH,
        }
    }

    /// One display line: `{author} {action} from {from} to {to} on {timestamp}`
    pub fn summary(&self) -> String {
        format!(
            "{} {} from {} to {} on {}",
            self.author,
            self.action.to_lowercase(),
            self.from_branch_or_placeholder(),
            self.to_branch,
            self.timestamp
        )
    }
}

/// Format a snapshot, one line per event, in the order received.
pub fn render_lines(events: &[Event]) -> Vec<String> {
    events.iter().map(Event::summary).collect()
}

/// Accepts any JSON scalar; strings keep their contents, everything else its JSON text.
fn verbatim<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        other => Ok(other.to_string()),
    }
}
