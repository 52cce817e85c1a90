//! # Rupkala Configuration
//!
//! CLI-first configuration for the Rupkala backend. Uses `clap::Parser` for
//! argument parsing with environment variable fallbacks, and `bon::Builder`
//! for ergonomic test construction without CLI/env interference.
//!
//! ```no_run
//! use rupkala_config::{Cli, Config};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! let config = cli.config;
//! config.validate().expect("invalid configuration");
//! ```
//!
//! ```no_run
//! use rupkala_config::Config;
//!
//! let config = Config::builder()
//!     .jwt_secret("dev-secret")
//!     .client_url("http://localhost:5173")
//!     .build();
//! ```

#![deny(unsafe_code)]

use std::net::SocketAddr;

use bon::Builder;
use clap::Parser;
use rupkala_types::error::{Error, Result};

/// Default HTTP listen address.
const DEFAULT_LISTEN: &str = "127.0.0.1:8080";

/// Default log level filter string.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    /// Automatically detect: JSON for non-TTY stdout, text otherwise.
    #[default]
    Auto,
    /// JSON structured logging (recommended for production).
    Json,
    /// Human-readable text format.
    Text,
}

/// Command-line interface for the Rupkala backend.
#[derive(Debug, Parser)]
#[command(name = "rupkala-server")]
#[command(version)]
pub struct Cli {
    /// Server configuration (flattened so flags appear at top level).
    #[command(flatten)]
    pub config: Config,
}

/// Configuration for the Rupkala backend.
///
/// All fields are configurable via CLI flags or environment variables.
/// Precedence: CLI arg > env var > default value.
///
/// The signing secret uses `hide_env_values` to prevent leaking it in
/// `--help` output.
#[derive(Debug, Clone, Builder, Parser)]
#[command(name = "rupkala-server")]
#[command(version)]
#[builder(on(String, into))]
pub struct Config {
    // ── Server ───────────────────────────────────────────────────────
    /// HTTP bind address.
    #[arg(long = "listen", env = "RUPKALA__LISTEN", default_value = DEFAULT_LISTEN)]
    #[builder(default = default_listen())]
    pub listen: SocketAddr,

    /// Tracing-subscriber filter string (e.g., info, debug, trace).
    #[arg(long = "log-level", env = "RUPKALA__LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    #[builder(default = DEFAULT_LOG_LEVEL.to_string())]
    pub log_level: String,

    /// Log output format: auto, json, or text.
    #[arg(
        long = "log-format",
        env = "RUPKALA__LOG_FORMAT",
        value_enum,
        default_value = "auto"
    )]
    #[builder(default)]
    pub log_format: LogFormat,

    // ── Authentication ───────────────────────────────────────────────
    /// Session token signing secret. Required; startup fails without it.
    #[arg(long = "jwt-secret", env = "RUPKALA__JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    // ── Frontend ─────────────────────────────────────────────────────
    /// Front-end base URL. Seeds the cross-origin allow-list and the
    /// session cookie domain. Required; startup fails without it.
    #[arg(long = "client-url", env = "RUPKALA__CLIENT_URL")]
    pub client_url: String,

    // ── Mode Flags ───────────────────────────────────────────────────
    /// Force development mode: in-memory entity store and mock object
    /// storage. No environment variable — this must be an explicit choice.
    #[arg(long = "dev-mode")]
    #[builder(default)]
    pub dev_mode: bool,
}

fn default_listen() -> SocketAddr {
    #[allow(clippy::expect_used)]
    DEFAULT_LISTEN.parse().expect("valid default listen address")
}

impl Config {
    /// Validate cross-field business rules.
    ///
    /// Must be called after parsing and before using the config. Both rules
    /// here are startup-fatal: the process must not begin serving with an
    /// empty secret or an absent/garbled client URL, because the first would
    /// make every issued token forgeable-by-default and the second would
    /// leave the origin allow-list empty.
    pub fn validate(&self) -> Result<()> {
        if self.jwt_secret.is_empty() {
            return Err(Error::config("--jwt-secret must not be empty"));
        }

        if self.client_url.is_empty() {
            return Err(Error::config("--client-url is required"));
        }

        if !self.client_url.starts_with("http://") && !self.client_url.starts_with("https://") {
            return Err(Error::config("--client-url must start with http:// or https://"));
        }

        if self.client_url.contains("localhost") || self.client_url.contains("127.0.0.1") {
            tracing::warn!(
                "--client-url contains localhost — this should only be used in development"
            );
        }

        Ok(())
    }

    /// Returns whether dev-mode is enabled.
    pub fn is_dev_mode(&self) -> bool {
        self.dev_mode
    }
}
