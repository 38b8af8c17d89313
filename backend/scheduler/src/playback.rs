//! Typewriter playback — owns at most one active session and the frame
//! channel hosts subscribe to.

use std::sync::Arc;

use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, info};

use crate::session::{FrameSender, PlaybackConfig, PlaybackFrame, PlaybackSession, SessionId};

/// Plays line sequences back as a live-typed stream.
///
/// Starting a new sequence, changing the timing, calling [`Typewriter::stop`]
/// or dropping the typewriter cancels the active session. Must be used from
/// within a Tokio runtime.
pub struct Typewriter {
    config: PlaybackConfig,
    lines: Option<Arc<[String]>>,
    frames: FrameSender,
    next_id: u64,
    active: Option<PlaybackSession>,
}

impl Typewriter {
    pub fn new(config: PlaybackConfig) -> Self {
        let (tx, _rx) = watch::channel(PlaybackFrame::default());
        Self {
            config,
            lines: None,
            frames: Arc::new(tx),
            next_id: 1,
            active: None,
        }
    }

    /// Receiver of every published frame.
    pub fn subscribe(&self) -> watch::Receiver<PlaybackFrame> {
        self.frames.subscribe()
    }

    /// Frames as a stream, starting with the current one.
    pub fn stream(&self) -> WatchStream<PlaybackFrame> {
        WatchStream::new(self.subscribe())
    }

    /// Snapshot of the latest frame.
    pub fn frame(&self) -> PlaybackFrame {
        self.frames.borrow().clone()
    }

    /// Start a new session over `lines`, cancelling any active one.
    pub fn play(&mut self, lines: impl Into<Arc<[String]>>) -> SessionId {
        let lines = lines.into();
        self.lines = Some(Arc::clone(&lines));
        self.start(lines)
    }

    /// Restart the last supplied sequence from the beginning.
    pub fn replay(&mut self) -> Option<SessionId> {
        let lines = self.lines.clone()?;
        Some(self.start(lines))
    }

    /// Change timing. A changed config restarts the current sequence.
    pub fn reconfigure(&mut self, config: PlaybackConfig) -> Option<SessionId> {
        if config == self.config {
            return None;
        }
        debug!(speed = ?config.speed, pause = ?config.pause, "Playback timing changed");
        self.config = config;
        self.replay()
    }

    /// Cancel the active session, leaving the last frame in place.
    pub fn stop(&mut self) {
        if let Some(session) = self.active.take() {
            self.frames.send_if_modified(|_| {
                session.cancel();
                false
            });
            debug!(session = %session.id, "Playback stopped");
        }
    }

    /// True while a session task is still revealing or pausing.
    pub fn is_playing(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|s| !s.is_cancelled() && !s.is_finished())
    }

    pub fn active_session(&self) -> Option<SessionId> {
        self.active.as_ref().map(|s| s.id)
    }

    /// Wait until the active session finishes or is cancelled.
    pub async fn finished(&mut self) {
        if let Some(session) = self.active.as_mut() {
            session.finished().await;
        }
    }

    fn start(&mut self, lines: Arc<[String]>) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;

        // Cancel the previous session and reset the frame atomically, so no
        // reveal from it can land after this point.
        let previous = self.active.take();
        self.frames.send_modify(|frame| {
            if let Some(prev) = &previous {
                prev.cancel();
            }
            *frame = PlaybackFrame { session: id, lines: Vec::new() };
        });
        if let Some(prev) = previous {
            debug!(session = %prev.id, replaced_by = %id, "Playback session replaced");
        }

        info!(
            session = %id,
            lines = lines.len(),
            speed_ms = self.config.speed.as_millis() as u64,
            pause_ms = self.config.pause.as_millis() as u64,
            "Playback started"
        );

        self.active = Some(PlaybackSession::spawn(
            id,
            lines,
            self.config,
            Arc::clone(&self.frames),
        ));
        id
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

impl Drop for Typewriter {
    fn drop(&mut self) {
        self.stop();
    }
}
