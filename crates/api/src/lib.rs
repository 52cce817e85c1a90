//! # Rupkala API
//!
//! REST API handlers, session guards, and routes for the Rupkala backend.
//!
//! ## AppState Builder
//!
//! The [`AppState`] struct uses a builder for server initialization:
//!
//! ```no_run
//! use std::sync::Arc;
//! use rupkala_api::AppState;
//! use rupkala_core::{MediaService, MockBlobStore, OriginPolicy, TokenCodec};
//!
//! # async fn example(storage: Arc<rupkala_storage::Backend>, config: Arc<rupkala_config::Config>) {
//! let policy = OriginPolicy::derive(&config.client_url, &[]).unwrap();
//! let state = AppState::builder()
//!     .storage(storage)
//!     .config(Arc::clone(&config))
//!     .token_codec(Arc::new(TokenCodec::new(&config.jwt_secret)))
//!     .origin_policy(Arc::new(policy))
//!     .media(Arc::new(MediaService::new(Box::new(MockBlobStore::new()))))
//!     .build();
//! # }
//! ```

#![deny(unsafe_code)]

use std::net::SocketAddr;

use tracing::info;

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod session;

pub use handlers::auth::{ApiError, AppState};
pub use middleware::{
    RequestIdentity, enforce_origin_policy, logging_middleware, require_admin, require_user,
};
pub use routes::create_router_with_state;
pub use rupkala_types::dto::ErrorResponse;

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, initiating shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM signal, initiating shutdown");
        }
    }
}

/// Start the HTTP server and run until a shutdown signal arrives.
pub async fn serve(state: AppState, listen: SocketAddr) -> std::io::Result<()> {
    let app = create_router_with_state(state);

    let listener = tokio::net::TcpListener::bind(listen).await?;
    info!(%listen, "HTTP server listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await
}
