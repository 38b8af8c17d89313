//! `labconsole send` — submit one line to the contact console.

use anyhow::{Context, Result};
use labconsole_commands::{build_contact_console, CommandMatch};
use labconsole_core::Outcome;
use labconsole_logging::{ConsoleEvent, EventLogger};
use tokio::task::JoinHandle;

use crate::config::Settings;
use crate::terminal_output::{note_info, note_warn, styled_entry};

/// Returns the outcome so `main` can pick the exit code.
pub async fn run(
    settings: &Settings,
    input: &str,
    dry_run: bool,
    log: &EventLogger,
) -> Result<Option<Outcome>> {
    let transport = settings.mail_transport(dry_run);
    let (mut console, worker) =
        build_contact_console(transport, &settings.contact, &settings.subject);

    let before = console.transcript().len();
    let matched = console.submit(input);
    let outcome = matched.as_ref().map(CommandMatch::outcome);

    for entry in &console.transcript().entries()[before..] {
        println!("{}", styled_entry(entry));
    }

    match matched {
        None => note_warn("Nothing to run."),
        Some(CommandMatch::Recognized(cmd)) => {
            log.log(ConsoleEvent::MailQueued { to: cmd.email, body_len: cmd.body.len() });
            log.log(ConsoleEvent::CommandAccepted { input: input.to_string() });
        }
        Some(CommandMatch::Unrecognized(reason)) => {
            log.log(ConsoleEvent::CommandRejected {
                input: input.to_string(),
                reason: reason.to_string(),
            });
        }
    }

    // Dropping the console closes the outbox; the worker drains and exits.
    drop(console);
    let delivered = drain_outbox(worker).await?;
    if outcome == Some(Outcome::Success) {
        if dry_run {
            note_info("Dry run: mail intent logged, not opened.");
        } else if delivered == 0 {
            note_warn("The mail client could not be opened.");
        }
    }
    Ok(outcome)
}

/// Wait for the outbox worker to finish delivering. Every console holding
/// the outbox must be dropped first.
pub async fn drain_outbox(worker: JoinHandle<usize>) -> Result<usize> {
    worker.await.context("Outbox worker failed")
}
