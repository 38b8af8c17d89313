//! Terminal UI for LabConsole.
//!
//! Exposes the ratatui panes and the event loop behind `labconsole ui`.

pub mod app;
pub mod input;
pub mod render;
pub mod streaming;
pub mod terminal;

pub use app::{AppState, ChatLine, Focus, PendingReply, Speaker};
pub use input::{Action, handle_key_event};
pub use render::draw_ui;
pub use streaming::{forward_frames, schedule_reply};
pub use terminal::{AppEvent, EventHandler, Tui};

use std::time::Duration;

use anyhow::Result;
use labconsole_commands::{CommandConsole, CommandMatch};
use labconsole_logging::{ConsoleEvent, EventLogger};
use labconsole_responder::ResponseSelector;
use labconsole_scheduler::{PlaybackConfig, Typewriter};
use tracing::info;

/// Everything the UI needs, already resolved from config by the caller.
pub struct UiOptions {
    pub hero_lines: Vec<String>,
    pub playback: PlaybackConfig,
    pub console: CommandConsole,
    pub selector: ResponseSelector,
    pub greeting: String,
    pub reply_delay: Duration,
    pub events: EventLogger,
}

/// Run the UI until the user quits. The terminal is restored on every exit
/// path, including panics.
pub async fn run(options: UiOptions) -> Result<()> {
    terminal::install_panic_hook();
    let mut tui = terminal::init()?;
    let result = event_loop(&mut tui, options).await;
    terminal::restore()?;
    result
}

async fn event_loop(tui: &mut Tui, options: UiOptions) -> Result<()> {
    let UiOptions { hero_lines, playback, console, selector, greeting, reply_delay, events: log } =
        options;

    let mut state = AppState::new(console, selector, &greeting);
    let mut events = EventHandler::new();

    let mut typewriter = Typewriter::new(playback);
    forward_frames(typewriter.stream(), events.sender());
    let id = typewriter.play(hero_lines.clone());
    log.log(ConsoleEvent::PlaybackStarted { playback: id.to_string(), lines: hero_lines.len() });

    while !state.should_quit {
        tui.draw(|f| draw_ui(f, &state))?;

        let Some(event) = events.next().await else { break };
        match event {
            AppEvent::Key(key) => match handle_key_event(key, &mut state) {
                Action::None | Action::Quit => {}
                Action::ReplayHero => {
                    if let Some(id) = typewriter.replay() {
                        log.log(ConsoleEvent::PlaybackStarted {
                            playback: id.to_string(),
                            lines: hero_lines.len(),
                        });
                    }
                }
                Action::Ask(reply) => {
                    log.log(ConsoleEvent::AssistantReply {
                        question: reply.question,
                        rule: reply.rule,
                    });
                    schedule_reply(reply.response, reply_delay, events.sender());
                }
                Action::Submitted { input, matched } => log_submission(&log, input, matched),
            },
            AppEvent::Resize(..) => {}
            AppEvent::Frame(frame) => state.apply_frame(frame),
            AppEvent::Reply(text) => state.receive_reply(text),
        }
    }

    if let Some(id) = typewriter.active_session() {
        log.log(ConsoleEvent::PlaybackStopped { playback: id.to_string() });
    }
    typewriter.stop();
    info!("UI closed");
    Ok(())
}

fn log_submission(log: &EventLogger, input: String, matched: CommandMatch) {
    match matched {
        CommandMatch::Recognized(cmd) => {
            log.log(ConsoleEvent::MailQueued { to: cmd.email, body_len: cmd.body.len() });
            log.log(ConsoleEvent::CommandAccepted { input });
        }
        CommandMatch::Unrecognized(reason) => {
            log.log(ConsoleEvent::CommandRejected { input, reason: reason.to_string() });
        }
    }
}
