//! `labconsole play` — run the typewriter on stdout.

use std::io;

use anyhow::Result;
use futures::StreamExt;
use labconsole_logging::{ConsoleEvent, EventLogger};
use labconsole_scheduler::{PlaybackConfig, Typewriter};
use tracing::info;

use crate::terminal_output::FrameWriter;

pub async fn run(lines: Vec<String>, config: PlaybackConfig, log: &EventLogger) -> Result<()> {
    let mut typewriter = Typewriter::new(config);
    let mut frames = typewriter.stream();
    let mut writer = FrameWriter::new(io::stdout(), "$ ");

    let id = typewriter.play(lines.clone());
    log.log(ConsoleEvent::PlaybackStarted { playback: id.to_string(), lines: lines.len() });

    let mut interrupted = false;
    loop {
        tokio::select! {
            biased;
            Some(frame) = frames.next() => writer.render(&frame)?,
            _ = typewriter.finished() => break,
            _ = tokio::signal::ctrl_c() => {
                interrupted = true;
                break;
            }
        }
    }
    if interrupted {
        typewriter.stop();
    }

    // The last reveal may land between the final poll and completion.
    writer.render(&typewriter.frame())?;
    writer.finish()?;

    if interrupted {
        log.log(ConsoleEvent::PlaybackStopped { playback: id.to_string() });
        info!(session = %id, "Playback interrupted");
    }
    Ok(())
}
