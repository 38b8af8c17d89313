//! Config validation with field paths in every message.

use crate::schema::LabConsoleConfig;
use thiserror::Error;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// Errors and warnings found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError { path: path.into(), message: message.into() });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError { path: path.into(), message: message.into() });
    }
}

pub fn validate(config: &LabConsoleConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_playback(config, &mut report);
    validate_assistant(config, &mut report);
    validate_contact(config, &mut report);
    validate_logging(config, &mut report);
    report
}

fn validate_playback(config: &LabConsoleConfig, report: &mut ValidationReport) {
    let Some(playback) = &config.playback else { return };
    if playback.speed_ms == Some(0) {
        report.warn("playback.speedMs", "0 reveals every line at once");
    }
    if let Some(lines) = &playback.lines {
        if lines.iter().all(|l| l.is_empty()) {
            report.warn("playback.lines", "No visible lines; the hero terminal stays blank");
        }
    }
}

fn validate_assistant(config: &LabConsoleConfig, report: &mut ValidationReport) {
    let Some(assistant) = &config.assistant else { return };
    let Some(rules) = &assistant.rules else { return };

    if rules.is_empty() {
        report.warn("assistant.rules", "No rules; every message gets the fallback");
    }
    for (i, rule) in rules.iter().enumerate() {
        let path = format!("assistant.rules[{i}]");
        if rule.keywords.is_empty() {
            report.error(format!("{path}.keywords"), "At least one keyword is required");
        }
        if rule.keywords.iter().any(|k| k.trim().is_empty()) {
            report.error(format!("{path}.keywords"), "Keywords cannot be blank");
        }
        if rule.response.trim().is_empty() {
            report.error(format!("{path}.response"), "Response cannot be empty");
        }
    }
    if assistant.fallback.as_deref().is_some_and(|f| f.trim().is_empty()) {
        report.error("assistant.fallback", "Fallback cannot be empty");
    }
}

fn validate_contact(config: &LabConsoleConfig, report: &mut ValidationReport) {
    let Some(contact) = &config.contact else { return };
    if let Some(address) = &contact.address {
        if address.is_empty() {
            report.error("contact.address", "Address cannot be empty");
        } else if address.contains('"') {
            report.error("contact.address", "Address cannot contain '\"'");
        } else if !address.contains('@') {
            report.warn("contact.address", "Address does not look like an email");
        }
    }
}

fn validate_logging(config: &LabConsoleConfig, report: &mut ValidationReport) {
    let Some(level) = config.logging.as_ref().and_then(|l| l.level.as_deref()) else {
        return;
    };
    if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        report.error(
            "logging.level",
            format!("Unknown level '{level}'; expected one of {}", LOG_LEVELS.join(", ")),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::apply_all_defaults;
    use crate::schema::{AssistantConfig, AssistantRule, KeywordMode, LoggingConfig};

    #[test]
    fn test_defaults_are_valid() {
        let report = validate(&apply_all_defaults(LabConsoleConfig::default()));
        assert!(report.is_valid(), "{:?}", report.errors);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_blank_rule_parts_are_errors() {
        let cfg = LabConsoleConfig {
            assistant: Some(AssistantConfig {
                rules: Some(vec![AssistantRule {
                    keywords: vec![],
                    response: " ".into(),
                    mode: KeywordMode::Any,
                }]),
                ..Default::default()
            }),
            ..Default::default()
        };
        let report = validate(&cfg);
        let paths: Vec<_> = report.errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["assistant.rules[0].keywords", "assistant.rules[0].response"]);
    }

    #[test]
    fn test_unknown_log_level() {
        let cfg = LabConsoleConfig {
            logging: Some(LoggingConfig { level: Some("loud".into()), dir: None }),
            ..Default::default()
        };
        let report = validate(&cfg);
        assert!(!report.is_valid());
        assert!(report.errors[0].to_string().contains("logging.level"));
    }

    #[test]
    fn test_zero_speed_warns() {
        let mut cfg = apply_all_defaults(LabConsoleConfig::default());
        if let Some(p) = cfg.playback.as_mut() {
            p.speed_ms = Some(0);
        }
        let report = validate(&cfg);
        assert!(report.is_valid());
        assert_eq!(report.warnings[0].path, "playback.speedMs");
    }
}
