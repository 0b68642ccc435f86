//! Centralized logging configuration for Cartlet binaries
//!
//! All log output goes to stderr so the terminal UI on stdout stays clean.
//! Format and level come from `CARTLET_LOG_FORMAT` / `CARTLET_LOG_LEVEL`
//! unless a caller configures them explicitly.

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output (no colors, for piping)
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Pretty-printed with colors (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Configuration for logging initialization
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
}

impl LoggingConfig {
    pub fn new(format: LogFormat, level: String) -> Self {
        Self { format, level }
    }

    /// Initialize logging with the configured settings
    ///
    /// # Panics
    ///
    /// Panics if a logging subscriber has already been initialized
    pub fn init(&self) {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format {
            LogFormat::Json => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::fmt()
                    .pretty()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .init();
            }
            LogFormat::Text => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_ansi(false)
                    .init();
            }
        }
    }
}

/// Initialize logging from `CARTLET_LOG_FORMAT` and `CARTLET_LOG_LEVEL`.
///
/// Falls back to text format at the `error` level, which keeps the UI
/// usable while still surfacing the silent-failure log channel.
pub fn init_default() {
    let format = std::env::var("CARTLET_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LogFormat::Text);

    let level = std::env::var("CARTLET_LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

    LoggingConfig::new(format, level).init();
}
