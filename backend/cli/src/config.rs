//! Effective runtime settings: the prepared config file mapped onto the
//! engine types.

use std::sync::Arc;
use std::time::Duration;

use labconsole_commands::{LogTransport, MailTransport, SystemMailClient};
use labconsole_config::{
    defaults, AssistantRule, KeywordMode, LabConsoleConfig, MailTransportKind,
};
use labconsole_responder::{Matcher, ResponseRule, ResponseSelector};
use labconsole_scheduler::PlaybackConfig;

/// LabConsole runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub hero_lines: Vec<String>,
    pub playback: PlaybackConfig,
    pub greeting: String,
    pub selector: ResponseSelector,
    pub reply_delay: Duration,
    pub contact: String,
    pub subject: String,
    pub transport: MailTransportKind,
}

impl Settings {
    /// Map a prepared config (defaults already applied). Sections still
    /// missing fall back to the built-in values.
    pub fn from_config(config: &LabConsoleConfig) -> Self {
        let playback = config.playback.clone().unwrap_or_default();
        let assistant = config.assistant.clone().unwrap_or_default();
        let contact = config.contact.clone().unwrap_or_default();

        let rules = match &assistant.rules {
            Some(rules) => rules.iter().map(response_rule).collect(),
            None => labconsole_responder::lab_assistant_rules(),
        };
        let fallback = assistant
            .fallback
            .unwrap_or_else(|| labconsole_responder::FALLBACK.to_string());

        Self {
            hero_lines: playback.lines.unwrap_or_else(|| {
                defaults::DEFAULT_HERO_LINES.iter().map(|l| l.to_string()).collect()
            }),
            playback: PlaybackConfig::from_millis(
                playback.speed_ms.unwrap_or(defaults::DEFAULT_SPEED_MS),
                playback.pause_ms.unwrap_or(defaults::DEFAULT_PAUSE_MS),
            ),
            greeting: assistant
                .greeting
                .unwrap_or_else(|| labconsole_responder::GREETING.to_string()),
            selector: ResponseSelector::new(rules, fallback),
            reply_delay: Duration::from_millis(
                assistant.reply_delay_ms.unwrap_or(defaults::DEFAULT_REPLY_DELAY_MS),
            ),
            contact: contact
                .address
                .unwrap_or_else(|| defaults::DEFAULT_CONTACT_ADDRESS.to_string()),
            subject: contact.subject.unwrap_or_else(|| defaults::DEFAULT_SUBJECT.to_string()),
            transport: contact.transport.unwrap_or(MailTransportKind::System),
        }
    }

    /// Transport for accepted commands. `dry_run` forces the log-only one.
    pub fn mail_transport(&self, dry_run: bool) -> Arc<dyn MailTransport> {
        match (dry_run, self.transport) {
            (false, MailTransportKind::System) => Arc::new(SystemMailClient),
            _ => Arc::new(LogTransport),
        }
    }
}

fn response_rule(rule: &AssistantRule) -> ResponseRule {
    let matcher = match rule.mode {
        KeywordMode::Any => Matcher::any_of(&rule.keywords),
        KeywordMode::All => Matcher::all_of(&rule.keywords),
    };
    ResponseRule::new(matcher, rule.response.clone())
}
