//! Console Event Logger
//!
//! Structured records of what happened in a console session, written through
//! `tracing` under the `console_events` target.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::redact::redact_sensitive_data;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConsoleEvent {
    PlaybackStarted { playback: String, lines: usize },
    PlaybackStopped { playback: String },
    CommandAccepted { input: String },
    CommandRejected { input: String, reason: String },
    MailQueued { to: String, body_len: usize },
    AssistantReply { question: String, rule: Option<usize> },
}

impl ConsoleEvent {
    fn redacted(self) -> Self {
        match self {
            Self::CommandAccepted { input } => {
                Self::CommandAccepted { input: redact_sensitive_data(&input) }
            }
            Self::CommandRejected { input, reason } => Self::CommandRejected {
                input: redact_sensitive_data(&input),
                reason,
            },
            Self::MailQueued { to, body_len } => {
                Self::MailQueued { to: redact_sensitive_data(&to), body_len }
            }
            Self::AssistantReply { question, rule } => Self::AssistantReply {
                question: redact_sensitive_data(&question),
                rule,
            },
            other => other,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EventLogEntry {
    pub session_id: String,
    pub timestamp: DateTime<Utc>,
    pub event: ConsoleEvent,
}

/// Emits events tagged with one session id per process run.
#[derive(Debug, Clone)]
pub struct EventLogger {
    session_id: String,
}

impl EventLogger {
    pub fn new() -> Self {
        Self { session_id: Uuid::new_v4().to_string() }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Build the redacted, timestamped entry for `event`.
    pub fn entry(&self, event: ConsoleEvent) -> EventLogEntry {
        EventLogEntry {
            session_id: self.session_id.clone(),
            timestamp: Utc::now(),
            event: event.redacted(),
        }
    }

    pub fn log(&self, event: ConsoleEvent) {
        let entry = self.entry(event);
        let json = serde_json::to_string(&entry).unwrap_or_default();
        info!(target: "console_events", session = %entry.session_id, event = %json, "Console event");
    }
}

impl Default for EventLogger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_redacted() {
        let logger = EventLogger::new();
        let entry = logger.entry(ConsoleEvent::CommandAccepted {
            input: r#"send_message("a@b.com", "hi")"#.into(),
        });
        let ConsoleEvent::CommandAccepted { input } = &entry.event else {
            panic!("wrong variant");
        };
        assert!(!input.contains("a@b.com"));
        assert_eq!(entry.session_id, logger.session_id());
    }

    #[test]
    fn test_entry_serializes_with_type_tag() {
        let logger = EventLogger::new();
        let entry = logger.entry(ConsoleEvent::AssistantReply {
            question: "flutter?".into(),
            rule: Some(0),
        });
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["event"]["type"], "assistant_reply");
        assert_eq!(json["event"]["rule"], 0);
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        assert_ne!(EventLogger::new().session_id(), EventLogger::new().session_id());
    }
}
