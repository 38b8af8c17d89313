/// Built-in command handlers.
use anyhow::Result;
use labconsole_core::{MailIntent, DEFAULT_SUBJECT};

use crate::dispatch::CommandHandler;
use crate::outbox::MailOutbox;
use crate::types::SendMessage;

// ---------------------------------------------------------------------------
// send_message
// ---------------------------------------------------------------------------

/// Builds a mail intent from the parsed arguments and queues it on the outbox.
pub struct SendMessageHandler {
    outbox: MailOutbox,
    subject: String,
}

impl SendMessageHandler {
    pub fn new(outbox: MailOutbox) -> Self {
        Self { outbox, subject: DEFAULT_SUBJECT.to_string() }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn intent_for(&self, cmd: &SendMessage) -> MailIntent {
        MailIntent::new(cmd.email.clone(), cmd.body.clone()).with_subject(self.subject.clone())
    }
}

impl CommandHandler for SendMessageHandler {
    fn name(&self) -> &str {
        "send_message"
    }

    fn handle(&self, cmd: &SendMessage) -> Result<()> {
        self.outbox.enqueue(self.intent_for(cmd))?;
        Ok(())
    }
}
