//! Background feeds into the UI event channel: hero playback frames and
//! delayed assistant replies.

use std::time::Duration;

use futures_util::StreamExt;
use labconsole_scheduler::PlaybackFrame;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::WatchStream;

use crate::terminal::AppEvent;

/// Forward every playback frame until the typewriter or the UI goes away.
pub fn forward_frames(
    mut frames: WatchStream<PlaybackFrame>,
    tx: UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = frames.next().await {
            if tx.send(AppEvent::Frame(frame)).is_err() {
                break;
            }
        }
    })
}

/// Deliver `response` as a reply event after `delay`.
pub fn schedule_reply(
    response: String,
    delay: Duration,
    tx: UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(AppEvent::Reply(response));
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::EventHandler;
    use labconsole_scheduler::{PlaybackConfig, Typewriter};
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_delay() {
        let mut events = EventHandler::detached();
        let start = Instant::now();
        schedule_reply("pong".into(), Duration::from_millis(400), events.sender());

        let Some(AppEvent::Reply(text)) = events.next().await else {
            panic!("expected reply");
        };
        assert_eq!(text, "pong");
        assert!(start.elapsed() >= Duration::from_millis(400));
    }

    #[tokio::test(start_paused = true)]
    async fn test_frames_are_forwarded() {
        let mut events = EventHandler::detached();
        let mut tw = Typewriter::new(PlaybackConfig::from_millis(1, 1));
        forward_frames(tw.stream(), events.sender());
        tw.play(vec!["ok".to_string()]);
        tw.finished().await;

        let mut last = None;
        while let Ok(event) =
            tokio::time::timeout(Duration::from_millis(50), events.next()).await
        {
            match event {
                Some(AppEvent::Frame(frame)) => last = Some(frame),
                _ => break,
            }
        }
        assert_eq!(last.unwrap().lines, vec!["ok".to_string()]);
    }
}
