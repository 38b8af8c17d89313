//! Config defaults: fills every section the file left out.

use crate::schema::{
    AssistantConfig, ContactConfig, LabConsoleConfig, LoggingConfig, MailTransportKind,
    PlaybackConfig,
};

/// Milliseconds between revealed characters.
pub const DEFAULT_SPEED_MS: u64 = 26;

/// Milliseconds held after each line.
pub const DEFAULT_PAUSE_MS: u64 = 600;

/// Delay before the assistant's reply appears.
pub const DEFAULT_REPLY_DELAY_MS: u64 = 400;

pub const DEFAULT_CONTACT_ADDRESS: &str = "hello@albari.dev";

pub const DEFAULT_SUBJECT: &str = "Portfolio Contact";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Hero terminal script.
pub const DEFAULT_HERO_LINES: &[&str] = &[
    "> Hello, I'm Albari Yasir Wahid — building the bridge between Flutter, AI, and Hardware.",
    "> Mission: Craft smart systems that respond, not just react.",
];

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: LabConsoleConfig) -> LabConsoleConfig {
    let config = apply_playback_defaults(config);
    let config = apply_assistant_defaults(config);
    let config = apply_contact_defaults(config);
    apply_logging_defaults(config)
}

fn apply_playback_defaults(mut config: LabConsoleConfig) -> LabConsoleConfig {
    let playback = config.playback.get_or_insert_with(PlaybackConfig::default);
    playback.speed_ms.get_or_insert(DEFAULT_SPEED_MS);
    playback.pause_ms.get_or_insert(DEFAULT_PAUSE_MS);
    playback
        .lines
        .get_or_insert_with(|| DEFAULT_HERO_LINES.iter().map(|l| l.to_string()).collect());
    config
}

/// Leaves `greeting`, `rules` and `fallback` unset; hosts fall back to the
/// built-in assistant for those.
fn apply_assistant_defaults(mut config: LabConsoleConfig) -> LabConsoleConfig {
    let assistant = config.assistant.get_or_insert_with(AssistantConfig::default);
    assistant.reply_delay_ms.get_or_insert(DEFAULT_REPLY_DELAY_MS);
    config
}

fn apply_contact_defaults(mut config: LabConsoleConfig) -> LabConsoleConfig {
    let contact = config.contact.get_or_insert_with(ContactConfig::default);
    contact
        .address
        .get_or_insert_with(|| DEFAULT_CONTACT_ADDRESS.to_string());
    contact.subject.get_or_insert_with(|| DEFAULT_SUBJECT.to_string());
    contact.transport.get_or_insert(MailTransportKind::System);
    config
}

fn apply_logging_defaults(mut config: LabConsoleConfig) -> LabConsoleConfig {
    let logging = config.logging.get_or_insert_with(LoggingConfig::default);
    logging.level.get_or_insert_with(|| DEFAULT_LOG_LEVEL.to_string());
    config
}
