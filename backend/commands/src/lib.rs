pub mod dispatch;
pub mod grammar;
pub mod handlers;
pub mod outbox;
pub mod types;

pub use dispatch::{CommandConsole, CommandHandler, ConsoleTexts, DEFAULT_CONTACT};
pub use grammar::{parse, parse_send_message, usage, COMMAND_NAME};
pub use handlers::SendMessageHandler;
pub use outbox::{LogTransport, MailOutbox, MailTransport, SystemMailClient};
pub use types::{CommandMatch, GrammarMismatch, SendMessage};

use std::sync::Arc;

/// Build a console wired to a fresh outbox over `transport`, using the texts
/// for `contact`. Returns the outbox worker handle alongside.
pub fn build_contact_console(
    transport: Arc<dyn MailTransport>,
    contact: &str,
    subject: &str,
) -> (CommandConsole, tokio::task::JoinHandle<usize>) {
    let (outbox, worker) = MailOutbox::spawn(transport);
    let handler = SendMessageHandler::new(outbox).with_subject(subject);
    let console = CommandConsole::with_texts(Arc::new(handler), ConsoleTexts::for_contact(contact));
    (console, worker)
}
