//! Structured Logger
//!
//! Wraps `tracing` with a daily-rolling NDJSON file layer and an optional
//! console layer. The TUI turns the console layer off since it owns stdout.

use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var holding a filter directive; wins over the configured level.
pub const LOG_ENV: &str = "LABCONSOLE_LOG";

#[derive(Debug, Clone)]
pub struct LoggerOptions {
    /// Filter used when `LABCONSOLE_LOG` is unset, e.g. `info` or `labconsole_commands=debug`.
    pub level: String,
    /// Directory for `labconsole.log.YYYY-MM-DD`; no file layer when `None`.
    pub log_dir: Option<PathBuf>,
    /// Log human-readable lines to stderr.
    pub console: bool,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self { level: "info".into(), log_dir: None, console: true }
    }
}

/// Build the filter: `LABCONSOLE_LOG` first, then `level`, then `info`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global subscriber. A second call is a no-op.
pub fn init_logger(options: &LoggerOptions) {
    let file_layer = options
        .log_dir
        .as_deref()
        .and_then(file_appender)
        .map(|appender| fmt::layer().json().with_writer(appender).with_ansi(false).boxed());

    let console_layer = options.console.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(true)
            .boxed()
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter(&options.level))
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Daily-rolling appender in `dir`. An unusable directory disables file
/// logging with a note on stderr instead of aborting the command.
fn file_appender(dir: &Path) -> Option<RollingFileAppender> {
    match RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("labconsole.log")
        .build(dir)
    {
        Ok(appender) => Some(appender),
        Err(e) => {
            eprintln!("warning: file logging disabled, cannot use {}: {e}", dir.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_level_falls_back() {
        // Must not panic on an unparsable directive.
        let filter = env_filter("=[");
        assert!(!filter.to_string().is_empty());
    }

    #[test]
    fn test_unusable_log_dir_skips_file_layer() {
        let dir = Path::new("/dev/null/labconsole/logs");
        assert!(file_appender(dir).is_none());

        init_logger(&LoggerOptions {
            log_dir: Some(dir.to_path_buf()),
            console: false,
            ..Default::default()
        });
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let options = LoggerOptions { console: false, ..Default::default() };
        init_logger(&options);
        init_logger(&options);
    }
}
