//! Typewriter playback scheduler.
//!
//! Reveals an ordered sequence of lines one character at a time, holding
//! between lines, and publishes every intermediate state on a watch channel.
//! Each session runs as a single Tokio task carrying its own cancellation
//! token.

pub mod playback;
pub mod session;

pub use playback::Typewriter;
pub use session::{PlaybackConfig, PlaybackFrame, SessionId, DEFAULT_PAUSE, DEFAULT_SPEED};
