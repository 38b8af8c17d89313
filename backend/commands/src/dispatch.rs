/// Command dispatch — parse a submission, record it in the transcript, and
/// route recognized commands to the registered handler.
use std::sync::Arc;

use anyhow::Result;
use labconsole_core::{Outcome, Transcript};
use tracing::{debug, info, warn};

use crate::grammar;
use crate::types::{CommandMatch, SendMessage};

/// Default example recipient shown in the console's hint and diagnostic.
pub const DEFAULT_CONTACT: &str = "hello@albari.dev";

// ---------------------------------------------------------------------------
// Handler trait
// ---------------------------------------------------------------------------

/// Side effect run for every recognized `send_message`. Must not block: hand
/// long-running work off (see [`crate::MailOutbox`]).
pub trait CommandHandler: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    fn handle(&self, cmd: &SendMessage) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Console
// ---------------------------------------------------------------------------

/// Fixed display texts of a console.
#[derive(Debug, Clone)]
pub struct ConsoleTexts {
    pub seed: String,
    pub success: String,
    pub diagnostic: String,
}

impl ConsoleTexts {
    pub fn for_contact(contact: &str) -> Self {
        Self {
            seed: format!("Type {}", grammar::usage(contact, "Let's collaborate")),
            success: "Opening mail client...".to_string(),
            diagnostic: format!("Unknown command. Try: {}", grammar::usage(contact, "message")),
        }
    }
}

impl Default for ConsoleTexts {
    fn default() -> Self {
        Self::for_contact(DEFAULT_CONTACT)
    }
}

/// The contact console: owns its transcript and one handler.
pub struct CommandConsole {
    transcript: Transcript,
    handler: Arc<dyn CommandHandler>,
    texts: ConsoleTexts,
}

impl CommandConsole {
    /// Console with the default texts and a seeded transcript.
    pub fn new(handler: Arc<dyn CommandHandler>) -> Self {
        Self::with_texts(handler, ConsoleTexts::default())
    }

    pub fn with_texts(handler: Arc<dyn CommandHandler>, texts: ConsoleTexts) -> Self {
        Self {
            transcript: Transcript::seeded(texts.seed.clone()),
            handler,
            texts,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Submit one line of input.
    ///
    /// Blank input is ignored and returns `None`. Anything else appends the
    /// input and exactly one outcome entry, and returns the grammar match;
    /// the handler runs only when the grammar matched. Handler errors are
    /// logged, never recorded.
    pub fn submit(&mut self, raw: &str) -> Option<CommandMatch> {
        if raw.trim().is_empty() {
            return None;
        }

        let matched = grammar::parse(raw);
        match &matched {
            CommandMatch::Recognized(cmd) => {
                self.transcript
                    .record(raw, Outcome::Success, self.texts.success.clone());
                info!(
                    handler = self.handler.name(),
                    body_len = cmd.body.len(),
                    "[Commands] Dispatching send_message"
                );
                if let Err(e) = self.handler.handle(cmd) {
                    warn!(handler = self.handler.name(), error = %e, "[Commands] Handler failed");
                }
            }
            CommandMatch::Unrecognized(reason) => {
                debug!(reason = %reason, "[Commands] Rejected input");
                self.transcript
                    .record(raw, Outcome::Failure, self.texts.diagnostic.clone());
            }
        }
        Some(matched)
    }
}
