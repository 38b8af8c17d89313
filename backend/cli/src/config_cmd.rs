//! `labconsole config` — inspect or initialize the config file.

use std::path::Path;

use anyhow::{Context, Result};
use labconsole_config::{apply_all_defaults, write_config, LabConsoleConfig};

use crate::terminal_output::{note_info, note_warn};

/// Print the effective config as YAML.
pub fn show(config: &LabConsoleConfig, path: &Path) -> Result<()> {
    note_info(&format!("Config file: {}", path.display()));
    let yaml = serde_yaml::to_string(config).context("Failed to render config")?;
    print!("{yaml}");
    Ok(())
}

/// Write a config with every default filled in. An existing file is kept
/// unless `force` is set.
pub async fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        note_warn(&format!(
            "{} already exists; pass --force to overwrite",
            path.display()
        ));
        return Ok(());
    }
    let config = apply_all_defaults(LabConsoleConfig::default());
    write_config(&config, path).await?;
    note_info(&format!("Wrote {}", path.display()));
    Ok(())
}
