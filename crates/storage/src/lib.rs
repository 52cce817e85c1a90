//! # Rupkala Storage
//!
//! The entity-store collaborator, expressed as an async key-value trait.
//! The auth subsystem neither defines nor validates the store's schema;
//! repositories in `rupkala-core` serialize entities onto this interface.
//!
//! # Types
//!
//! - [`StorageBackend`] - Core trait for key-value storage operations
//! - [`MemoryBackend`] - In-memory implementation for tests and dev mode
//! - [`Backend`] - Enum wrapper selecting a concrete backend
//! - [`StorageError`] / [`StorageResult`] - Canonical storage errors

#![deny(unsafe_code)]

use async_trait::async_trait;
use bytes::Bytes;
use snafu::Snafu;

pub mod memory;

pub use memory::MemoryBackend;

/// Errors surfaced by storage backends
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum StorageError {
    /// The backend could not complete the operation
    #[snafu(display("Storage operation failed: {message}"))]
    Operation { message: String },

    /// The backend is unreachable or unhealthy
    #[snafu(display("Storage backend unavailable: {message}"))]
    Unavailable { message: String },
}

/// Result type alias for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Core trait for key-value storage operations.
///
/// Implementations must be safe for concurrent use; callers hold the
/// backend behind `Arc` and clone freely.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Get the value stored under `key`, if any
    async fn get(&self, key: &[u8]) -> StorageResult<Option<Bytes>>;

    /// Store `value` under `key`, replacing any existing value
    async fn set(&self, key: Vec<u8>, value: Vec<u8>) -> StorageResult<()>;

    /// Delete the value under `key`. Deleting a missing key is not an error.
    async fn delete(&self, key: &[u8]) -> StorageResult<()>;

    /// Verify the backend is reachable
    async fn health_check(&self) -> StorageResult<()>;
}

/// Concrete backend selection.
///
/// Only the in-memory backend ships with this fragment; production
/// deployments plug a persistent store in behind the same trait.
#[derive(Debug, Clone)]
pub enum Backend {
    /// In-memory storage (data lost on restart)
    Memory(MemoryBackend),
}

impl Backend {
    /// Create an in-memory backend
    pub fn memory() -> Self {
        Backend::Memory(MemoryBackend::new())
    }
}

#[async_trait]
impl StorageBackend for Backend {
    async fn get(&self, key: &[u8]) -> StorageResult<Option<Bytes>> {
        match self {
            Backend::Memory(inner) => inner.get(key).await,
        }
    }

    async fn set(&self, key: Vec<u8>, value: Vec<u8>) -> StorageResult<()> {
        match self {
            Backend::Memory(inner) => inner.set(key, value).await,
        }
    }

    async fn delete(&self, key: &[u8]) -> StorageResult<()> {
        match self {
            Backend::Memory(inner) => inner.delete(key).await,
        }
    }

    async fn health_check(&self) -> StorageResult<()> {
        match self {
            Backend::Memory(inner) => inner.health_check().await,
        }
    }
}
