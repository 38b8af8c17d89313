//! Structured logging for LabConsole.
//!
//! Handles subscriber setup (rolling NDJSON files, optional console output),
//! email redaction, and console event records.

pub mod event_logger;
pub mod logger;
pub mod redact;

pub use event_logger::{ConsoleEvent, EventLogEntry, EventLogger};
pub use logger::{init_logger, LoggerOptions, LOG_ENV};
pub use redact::redact_sensitive_data;
