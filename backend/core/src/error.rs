use thiserror::Error;

/// Top-level error type for the LabConsole engine and its hosts.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("mail dispatch failed ({transport}): {message}")]
    MailDispatch { transport: String, message: String },

    #[error("mail outbox closed")]
    OutboxClosed,
}
