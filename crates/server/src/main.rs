use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use rupkala_api::AppState;
use rupkala_config::{Cli, LogFormat};
use rupkala_core::{MediaService, MockBlobStore, OriginPolicy, TokenCodec, logging};
use rupkala_storage::Backend;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config;

    config.validate()?;

    // Initialize structured logging
    let log_config = logging::LogConfig {
        format: match config.log_format {
            LogFormat::Json => logging::LogFormat::Json,
            LogFormat::Text => logging::LogFormat::Text,
            LogFormat::Auto => logging::LogFormat::default(),
        },
        filter: Some(config.log_level.clone()),
        ..Default::default()
    };

    if let Err(e) = logging::init_logging(log_config) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Rupkala backend");

    if config.is_dev_mode() {
        tracing::info!("Development mode enabled via --dev-mode flag: using memory storage");
    }

    // Only the in-memory backend ships with this fragment; a persistent
    // store plugs in behind the same trait.
    let storage = Arc::new(Backend::memory());

    // Session token codec over the configured secret
    let token_codec = Arc::new(TokenCodec::new(&config.jwt_secret));

    // Derive the origin allow-list and cookie domain from the client URL
    let origin_policy = Arc::new(OriginPolicy::derive(&config.client_url, &[])?);
    tracing::info!(
        allow_list = ?origin_policy.allow_list(),
        cookie_domain = origin_policy.cookie_domain(),
        "Origin policy derived"
    );

    // Object storage: mock provider in this fragment, swapped behind the
    // BlobStore trait in production deployments.
    let media = Arc::new(MediaService::new(Box::new(MockBlobStore::new())));

    let listen = config.listen;
    let state = AppState::builder()
        .storage(storage)
        .config(Arc::new(config))
        .token_codec(token_codec)
        .origin_policy(origin_policy)
        .media(media)
        .build();

    rupkala_api::serve(state, listen).await?;

    tracing::info!("Shutting down gracefully");
    Ok(())
}
