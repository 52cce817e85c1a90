//! Object storage collaborator for product media.
//!
//! The backend never serves file bytes itself: uploads stream to an
//! external object store and the stored entity keeps only the returned
//! `{id, url}` pair. The provider is abstracted behind [`BlobStore`] so
//! tests and dev-mode run against [`MockBlobStore`].

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use rupkala_types::dto::UploadedBlob;
use rupkala_types::error::{Error, Result};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Trait for object storage providers.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Upload a blob, returning its provider-assigned identifier and
    /// public URL.
    async fn upload(&self, bytes: Bytes, mime: &str) -> Result<UploadedBlob>;

    /// Delete blobs by identifier.
    ///
    /// Idempotent per identifier: unknown identifiers are ignored.
    /// Transport failures still surface as errors.
    async fn delete(&self, ids: &[String]) -> Result<()>;
}

/// Facade over a [`BlobStore`] that owns input validation.
///
/// Handlers call this, never the store directly, so validation rules
/// hold regardless of provider.
pub struct MediaService {
    store: Box<dyn BlobStore>,
}

impl MediaService {
    pub fn new(store: Box<dyn BlobStore>) -> Self {
        Self { store }
    }

    /// Upload a single media file.
    ///
    /// Provider failures propagate unmasked; an upload that did not
    /// complete must never report success.
    pub async fn upload(&self, bytes: Bytes, mime: &str) -> Result<UploadedBlob> {
        if bytes.is_empty() || mime.is_empty() {
            return Err(Error::validation("Invalid file provided"));
        }

        let blob = self.store.upload(bytes, mime).await?;
        tracing::info!(blob_id = %blob.id, mime, "uploaded media blob");
        Ok(blob)
    }

    /// Delete media blobs by identifier. An empty list is a no-op.
    pub async fn delete(&self, ids: &[String]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }

        self.store.delete(ids).await?;
        tracing::info!(count = ids.len(), "deleted media blobs");
        Ok(())
    }
}

/// In-memory object store for tests and dev-mode.
#[derive(Clone, Default)]
pub struct MockBlobStore {
    should_fail: bool,
    stored: Arc<Mutex<HashSet<String>>>,
}

impl MockBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails, for exercising provider-outage
    /// paths.
    pub fn new_failing() -> Self {
        Self { should_fail: true, ..Self::default() }
    }

    /// Identifiers currently held by the store.
    pub async fn stored_ids(&self) -> Vec<String> {
        self.stored.lock().await.iter().cloned().collect()
    }
}

#[async_trait]
impl BlobStore for MockBlobStore {
    async fn upload(&self, _bytes: Bytes, _mime: &str) -> Result<UploadedBlob> {
        if self.should_fail {
            return Err(Error::upload("mock provider unavailable"));
        }

        let id = Uuid::new_v4().to_string();
        self.stored.lock().await.insert(id.clone());
        Ok(UploadedBlob {
            url: format!("https://blobs.rupkala.example/{id}"),
            id,
        })
    }

    async fn delete(&self, ids: &[String]) -> Result<()> {
        if self.should_fail {
            return Err(Error::upload("mock provider unavailable"));
        }

        let mut stored = self.stored.lock().await;
        for id in ids {
            stored.remove(id);
        }
        Ok(())
    }
}
