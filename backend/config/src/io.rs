//! Config file read/write.

use crate::schema::LabConsoleConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Config file name within the config directory.
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Env var overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "LABCONSOLE_CONFIG_DIR";

/// Resolve the config directory.
/// Priority: `LABCONSOLE_CONFIG_DIR` env > platform config dir > `./.labconsole`
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .map(|d| d.join("labconsole"))
        .unwrap_or_else(|| PathBuf::from(".labconsole"))
}

pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Load and parse the config from disk.
///
/// Returns `Ok(Default::default())` if the file doesn't exist.
pub async fn load_config(path: &Path) -> Result<LabConsoleConfig> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        debug!(path = %path.display(), "Config file does not exist; using defaults");
        return Ok(LabConsoleConfig::default());
    }

    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    // An empty file parses as YAML null.
    if raw.trim().is_empty() {
        return Ok(LabConsoleConfig::default());
    }

    let config: LabConsoleConfig = serde_yaml::from_str(&raw)
        .with_context(|| format!("Failed to parse config YAML at: {}", path.display()))?;

    info!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Write config to disk atomically (temp file, then rename).
pub async fn write_config(config: &LabConsoleConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.with_context(|| {
            format!("Failed to create config directory: {}", parent.display())
        })?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    let tmp = path.with_extension("yaml.tmp");
    fs::write(&tmp, yaml.as_bytes())
        .await
        .with_context(|| format!("Failed to write temp config: {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .await
        .with_context(|| format!("Failed to move config into place: {}", path.display()))?;

    info!(path = %path.display(), "Config written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ContactConfig;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let cfg = load_config(&config_file_path(dir.path())).await.unwrap();
        assert_eq!(cfg, LabConsoleConfig::default());
    }

    #[tokio::test]
    async fn test_empty_file_is_default() {
        let dir = TempDir::new().unwrap();
        let path = config_file_path(dir.path());
        std::fs::write(&path, "\n").unwrap();
        assert_eq!(load_config(&path).await.unwrap(), LabConsoleConfig::default());
    }

    #[tokio::test]
    async fn test_write_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let cfg = LabConsoleConfig {
            contact: Some(ContactConfig {
                address: Some("me@example.org".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        write_config(&cfg, &path).await.unwrap();
        assert!(!path.with_extension("yaml.tmp").exists());
        assert_eq!(load_config(&path).await.unwrap(), cfg);
    }

    #[tokio::test]
    async fn test_malformed_yaml_is_error() {
        let dir = TempDir::new().unwrap();
        let path = config_file_path(dir.path());
        std::fs::write(&path, "playback: [unclosed").unwrap();
        let err = load_config(&path).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config YAML"));
    }
}
