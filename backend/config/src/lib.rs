//! `labconsole-config` — LabConsole runtime configuration.
//!
//! Provides:
//! - Typed config schema (playback, assistant, contact, logging)
//! - YAML read/write with atomic replace
//! - `${ENV_VAR}` substitution
//! - Default value application
//! - Validation with per-field reports

pub mod defaults;
pub mod env;
pub mod io;
pub mod schema;
pub mod validation;

pub use defaults::apply_all_defaults;
pub use env::{resolve_env_vars, resolve_env_vars_with, MissingEnvVarError};
pub use io::{config_dir, config_file_path, load_config, write_config, CONFIG_DIR_ENV};
pub use schema::{
    AssistantConfig, AssistantRule, ContactConfig, KeywordMode, LabConsoleConfig, LoggingConfig,
    MailTransportKind, PlaybackConfig,
};
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::warn;

/// Load, substitute env vars, apply defaults and validate a config file.
///
/// Warnings are logged; any validation error fails the load.
pub async fn load_and_prepare(path: &Path) -> Result<LabConsoleConfig> {
    prepare(load_resolved(path).await?)
}

/// Load a config file and substitute `${VAR}` references, nothing more.
pub async fn load_resolved(path: &Path) -> Result<LabConsoleConfig> {
    let raw = load_config(path).await?;
    let value: Value =
        serde_json::to_value(&raw).context("Failed to serialize config for processing")?;
    let value = resolve_env_vars(&value).context("Failed to resolve env vars in config")?;
    serde_json::from_value(value).context("Config invalid after env substitution")
}

/// Apply defaults and validate an already-parsed config.
pub fn prepare(config: LabConsoleConfig) -> Result<LabConsoleConfig> {
    let config = apply_all_defaults(config);
    let report = validate(&config);
    for w in &report.warnings {
        warn!(path = %w.path, "{}", w.message);
    }
    if let Some(first) = report.errors.first() {
        bail!("{first} ({} error(s) total)", report.errors.len());
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_and_prepare_missing_file() {
        let dir = TempDir::new().unwrap();
        let cfg = load_and_prepare(&config_file_path(dir.path())).await.unwrap();
        assert_eq!(cfg.playback.unwrap().speed_ms, Some(defaults::DEFAULT_SPEED_MS));
    }

    #[tokio::test]
    async fn test_load_and_prepare_rejects_invalid() {
        let dir = TempDir::new().unwrap();
        let path = config_file_path(dir.path());
        std::fs::write(&path, "logging:\n  level: shouty\n").unwrap();
        let err = load_and_prepare(&path).await.unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }

    #[tokio::test]
    async fn test_load_resolved_substitutes_without_defaults() {
        let dir = TempDir::new().unwrap();
        let path = config_file_path(dir.path());
        std::env::set_var("LABCONSOLE_TEST_CONTACT", "me@example.org");
        std::fs::write(&path, "contact:\n  address: \"${LABCONSOLE_TEST_CONTACT}\"\n").unwrap();
        let cfg = load_resolved(&path).await.unwrap();
        assert_eq!(cfg.contact.unwrap().address.as_deref(), Some("me@example.org"));
        assert!(cfg.playback.is_none());
    }
}
