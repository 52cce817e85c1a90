//! Structured logging setup.
//!
//! Wraps `tracing-subscriber` with a small config surface: text for
//! terminals, JSON for log aggregation, with TTY auto-detection when the
//! operator does not choose.

use std::io::IsTerminal;

use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard single-line text format
    Text,
    /// Compact single-line format without timestamp details
    Compact,
    /// JSON format (for production log aggregation)
    Json,
}

impl Default for LogFormat {
    fn default() -> Self {
        if std::io::stdout().is_terminal() { LogFormat::Text } else { LogFormat::Json }
    }
}

/// Configuration for logging behavior
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Output format
    pub format: LogFormat,
    /// Whether to include the target module
    pub include_target: bool,
    /// Whether to use ANSI colors (None = auto-detect based on TTY)
    pub ansi: Option<bool>,
    /// Environment filter (e.g., "info,rupkala=debug")
    pub filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { format: LogFormat::default(), include_target: false, ansi: None, filter: None }
    }
}

/// Initialize structured logging.
///
/// Fails if the filter string does not parse or a global subscriber is
/// already installed.
pub fn init_logging(config: LogConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = if let Some(filter) = &config.filter {
        EnvFilter::try_new(filter)?
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,rupkala=debug"))
    };

    let ansi = config.ansi.unwrap_or_else(|| std::io::stdout().is_terminal());

    match config.format {
        LogFormat::Text => {
            let fmt_layer = fmt::layer()
                .with_ansi(ansi)
                .with_target(config.include_target)
                .with_filter(env_filter);

            tracing_subscriber::registry().with(fmt_layer).try_init()?;
        },
        LogFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_ansi(ansi)
                .with_target(config.include_target)
                .with_filter(env_filter);

            tracing_subscriber::registry().with(fmt_layer).try_init()?;
        },
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_target(config.include_target)
                .with_current_span(true)
                .with_span_list(true)
                .with_filter(env_filter);

            tracing_subscriber::registry().with(fmt_layer).try_init()?;
        },
    }

    tracing::debug!(format = ?config.format, ansi, "Logging initialized");

    Ok(())
}

/// Initialize logging from a level string and a JSON toggle.
///
/// Convenience wrapper used by the server binary; failures are reported on
/// stderr and otherwise ignored so a broken filter string never takes the
/// process down.
pub fn init(log_level: &str, json: bool) {
    let log_config = LogConfig {
        format: if json { LogFormat::Json } else { LogFormat::Text },
        filter: Some(log_level.to_string()),
        include_target: json,
        ansi: None,
    };

    if let Err(e) = init_logging(log_config) {
        eprintln!("Failed to initialize logging: {e}");
    }
}
