/// A single playback session — one cooperative task revealing a fixed line
/// sequence into the shared frame channel.
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::debug;

// ---------------------------------------------------------------------------
// Identity and frames
// ---------------------------------------------------------------------------

/// Monotonic per-typewriter session number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "playback-{}", self.0)
    }
}

/// The observable playback state: revealed text of every started line,
/// empty lines removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackFrame {
    pub session: SessionId,
    pub lines: Vec<String>,
}

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

/// Per-character reveal interval.
pub const DEFAULT_SPEED: Duration = Duration::from_millis(26);

/// Hold after a line finishes revealing.
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
    pub speed: Duration,
    pub pause: Duration,
}

impl PlaybackConfig {
    pub fn from_millis(speed_ms: u64, pause_ms: u64) -> Self {
        Self {
            speed: Duration::from_millis(speed_ms),
            pause: Duration::from_millis(pause_ms),
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { speed: DEFAULT_SPEED, pause: DEFAULT_PAUSE }
    }
}

// ---------------------------------------------------------------------------
// Session handle
// ---------------------------------------------------------------------------

pub(crate) type FrameSender = Arc<watch::Sender<PlaybackFrame>>;

/// Handle to a running (or finished) session task.
pub(crate) struct PlaybackSession {
    pub(crate) id: SessionId,
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl PlaybackSession {
    pub(crate) fn spawn(
        id: SessionId,
        lines: Arc<[String]>,
        config: PlaybackConfig,
        frames: FrameSender,
    ) -> Self {
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run(id, lines, config, cancel.clone(), frames));
        Self { id, cancel, handle: Some(handle) }
    }

    pub(crate) fn cancel(&self) {
        self.cancel.cancel();
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Wait for the session task to exit. Safe to call again after it returns.
    pub(crate) async fn finished(&mut self) {
        if let Some(handle) = self.handle.as_mut() {
            if let Err(e) = handle.await {
                debug!(session = %self.id, error = %e, "Playback task ended abnormally");
            }
            self.handle = None;
        }
    }
}

// ---------------------------------------------------------------------------
// Reveal loop
// ---------------------------------------------------------------------------

async fn run(
    id: SessionId,
    lines: Arc<[String]>,
    config: PlaybackConfig,
    cancel: CancellationToken,
    frames: FrameSender,
) {
    let mut revealed: Vec<String> = Vec::with_capacity(lines.len());

    for line in lines.iter() {
        revealed.push(String::with_capacity(line.len()));

        for ch in line.chars() {
            if let Some(current) = revealed.last_mut() {
                current.push(ch);
            }
            if !publish(&frames, &cancel, id, &revealed) || !hold(&cancel, config.speed).await {
                debug!(session = %id, "Playback cancelled mid-line");
                return;
            }
        }

        if !hold(&cancel, config.pause).await {
            debug!(session = %id, "Playback cancelled during pause");
            return;
        }
    }

    debug!(session = %id, lines = lines.len(), "Playback complete");
}

/// Publish the current frame unless the session was cancelled. The check runs
/// under the channel's write lock, the same lock `Typewriter` cancels under.
fn publish(
    frames: &watch::Sender<PlaybackFrame>,
    cancel: &CancellationToken,
    id: SessionId,
    revealed: &[String],
) -> bool {
    frames.send_if_modified(|frame| {
        if cancel.is_cancelled() {
            return false;
        }
        frame.session = id;
        frame.lines = revealed.iter().filter(|l| !l.is_empty()).cloned().collect();
        true
    })
}

/// Sleep for `duration`; returns false if cancelled first.
async fn hold(cancel: &CancellationToken, duration: Duration) -> bool {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => false,
        _ = time::sleep(duration) => true,
    }
}
