//! Append-only display history of the contact console.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a submitted command was accepted or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

/// A single transcript record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TranscriptEntry {
    /// Seed text shown before any command was issued.
    Notice { text: String },
    /// The literal input the user submitted.
    Issued { input: String },
    /// The outcome of the preceding `Issued` entry.
    Result { outcome: Outcome, text: String },
}

impl TranscriptEntry {
    pub fn is_issued(&self) -> bool {
        matches!(self, Self::Issued { .. })
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Result { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }
}

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Notice { text } => write!(f, "> {text}"),
            Self::Issued { input } => write!(f, "$ {input}"),
            Self::Result { outcome: Outcome::Success, text } => write!(f, "✓ {text}"),
            Self::Result { outcome: Outcome::Failure, text } => write!(f, "✖ {text}"),
        }
    }
}

/// Ordered transcript. Entries can only be appended, and results are only
/// ever recorded together with the input they answer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Start a transcript with a seed notice.
    pub fn seeded(notice: impl Into<String>) -> Self {
        Self {
            entries: vec![TranscriptEntry::Notice { text: notice.into() }],
        }
    }

    /// Append an issued command and its outcome as one unit.
    pub fn record(&mut self, input: impl Into<String>, outcome: Outcome, text: impl Into<String>) {
        self.entries.push(TranscriptEntry::Issued { input: input.into() });
        self.entries.push(TranscriptEntry::Result {
            outcome,
            text: text.into(),
        });
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display lines, one per entry.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_appends_issued_then_result() {
        let mut t = Transcript::seeded("Type something");
        t.record("foo", Outcome::Failure, "nope");
        assert_eq!(t.len(), 3);
        assert!(t.entries()[1].is_issued());
        assert_eq!(t.last().and_then(TranscriptEntry::outcome), Some(Outcome::Failure));
    }

    #[test]
    fn display_prefixes() {
        let mut t = Transcript::seeded("hello");
        t.record("ls", Outcome::Success, "done");
        let lines: Vec<String> = t.lines().collect();
        assert_eq!(lines, vec!["> hello", "$ ls", "✓ done"]);
    }
}
