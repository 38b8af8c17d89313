pub mod error;
pub mod mail;
pub mod transcript;

pub use error::ConsoleError;
pub use mail::{MailIntent, DEFAULT_SUBJECT};
pub use transcript::{Outcome, Transcript, TranscriptEntry};
