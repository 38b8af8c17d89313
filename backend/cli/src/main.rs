mod ask_cmd;
mod config;
mod config_cmd;
mod play_cmd;
mod send_cmd;
mod terminal_output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use labconsole_commands::build_contact_console;
use labconsole_config::{config_dir, config_file_path, load_resolved, prepare, LabConsoleConfig};
use labconsole_core::Outcome;
use labconsole_logging::{init_logger, EventLogger, LoggerOptions, LOG_ENV};
use labconsole_scheduler::PlaybackConfig;
use labconsole_tui::UiOptions;

use config::Settings;
use terminal_output::note_error;

#[derive(Parser)]
#[command(name = "labconsole")]
#[command(about = "LabConsole: typewriter hero, lab assistant and contact console in your terminal")]
#[command(version)]
struct Cli {
    /// Config file (defaults to $LABCONSOLE_CONFIG_DIR/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive terminal UI (default)
    Ui,
    /// Type lines out on stdout
    Play {
        /// Lines to play; the configured hero lines when omitted
        lines: Vec<String>,
        /// Milliseconds per character
        #[arg(long)]
        speed: Option<u64>,
        /// Milliseconds to hold after each line
        #[arg(long)]
        pause: Option<u64>,
    },
    /// Run one contact console command, e.g. send_message("a@b.c", "hi")
    Send {
        command: String,
        /// Log the mail intent instead of opening the mail client
        #[arg(long)]
        dry_run: bool,
    },
    /// Ask the lab assistant a question
    Ask {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config
    Show,
    /// Write a config file with all defaults
    Init {
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(e) => {
            note_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let dir = config_dir();
    let path = cli.config.unwrap_or_else(|| config_file_path(&dir));
    let command = cli.command.unwrap_or(Commands::Ui);

    if let Commands::Config { action: ConfigAction::Init { force } } = command {
        config_cmd::init(&path, force).await?;
        return Ok(ExitCode::SUCCESS);
    }

    // Logging comes up before defaults and validation so their warnings land.
    let resolved = load_resolved(&path).await?;
    init_logging(&resolved, &dir, matches!(command, Commands::Ui));
    let prepared = prepare(resolved)?;
    let settings = Settings::from_config(&prepared);
    let log = EventLogger::new();
    info!(session = log.session_id(), config = %path.display(), "LabConsole starting");

    match command {
        Commands::Ui => {
            let (console, worker) = build_contact_console(
                settings.mail_transport(false),
                &settings.contact,
                &settings.subject,
            );
            labconsole_tui::run(UiOptions {
                hero_lines: settings.hero_lines,
                playback: settings.playback,
                console,
                selector: settings.selector,
                greeting: settings.greeting,
                reply_delay: settings.reply_delay,
                events: log,
            })
            .await?;
            let delivered = send_cmd::drain_outbox(worker).await?;
            info!(delivered, "Outbox drained");
        }
        Commands::Play { lines, speed, pause } => {
            let lines = if lines.is_empty() { settings.hero_lines } else { lines };
            let timing = PlaybackConfig {
                speed: speed.map_or(settings.playback.speed, std::time::Duration::from_millis),
                pause: pause.map_or(settings.playback.pause, std::time::Duration::from_millis),
            };
            play_cmd::run(lines, timing, &log).await?;
        }
        Commands::Send { command, dry_run } => {
            let outcome = send_cmd::run(&settings, &command, dry_run, &log).await?;
            if outcome != Some(Outcome::Success) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Ask { text } => ask_cmd::run(&settings.selector, &text.join(" "), &log),
        Commands::Config { action: ConfigAction::Show } => config_cmd::show(&prepared, &path)?,
        Commands::Config { action: ConfigAction::Init { .. } } => {}
    }

    Ok(ExitCode::SUCCESS)
}

/// File logs always; console logs only for one-shot commands when
/// `LABCONSOLE_LOG` asks for them, since the UI owns the terminal.
fn init_logging(config: &LabConsoleConfig, dir: &std::path::Path, ui: bool) {
    let logging = config.logging.clone().unwrap_or_default();
    init_logger(&LoggerOptions {
        level: logging.level.unwrap_or_else(|| "info".to_string()),
        log_dir: Some(logging.dir.map(PathBuf::from).unwrap_or_else(|| dir.join("logs"))),
        console: !ui && std::env::var(LOG_ENV).is_ok(),
    });
}
