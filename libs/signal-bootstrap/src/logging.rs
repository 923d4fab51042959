//! Logging initialization.
//!
//! Filter precedence: `logging.filter` from config, then the level derived from
//! `-v` flags, then `RUST_LOG`, then `logging.level`.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Base level (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    pub format: LogFormat,
    /// Full `EnvFilter` directive; takes precedence over `level` and `RUST_LOG`.
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
            filter: None,
        }
    }
}

fn level_for_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Resolve the filter directive to install.
///
/// `rust_log` is the value of `RUST_LOG`, passed in so the resolution stays pure.
fn resolve_directive(cfg: &LoggingConfig, verbose: u8, rust_log: Option<String>) -> String {
    if let Some(filter) = cfg.filter.as_ref().filter(|f| !f.trim().is_empty()) {
        return filter.clone();
    }
    if let Some(level) = level_for_verbosity(verbose) {
        return level.to_owned();
    }
    rust_log
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| cfg.level.clone())
}

/// Install the global `tracing` subscriber.
///
/// # Errors
/// Returns an error if the filter directive is invalid or a global subscriber
/// has already been installed.
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) -> anyhow::Result<()> {
    let directive = resolve_directive(cfg, verbose, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directive)?;

    let (text, json) = match cfg.format {
        LogFormat::Text => (
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json)
        .try_init()?;

    tracing::debug!(%directive, format = ?cfg.format, "logging initialized");
    Ok(())
}
