//! Principal repositories over the entity store.
//!
//! Users and admins share the same record shape but live under distinct
//! key prefixes, so one generic repository covers both. Key schema:
//!
//! - `{prefix}:{id}` - serialized record
//! - `{prefix}:email:{email}` - secondary index mapping email to id
//!
//! Emails are lowercased before indexing so lookups are case-insensitive.

use std::marker::PhantomData;
use std::sync::Arc;

use rupkala_storage::StorageBackend;
use rupkala_types::entities::{Admin, User};
use rupkala_types::error::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record type the generic repository can persist.
pub trait PrincipalRecord:
    Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
    /// Key-space prefix for this record type
    fn key_prefix() -> &'static str;

    /// Opaque unique identifier
    fn id(&self) -> &str;

    /// Login email
    fn email(&self) -> &str;
}

impl PrincipalRecord for User {
    fn key_prefix() -> &'static str {
        "user"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn email(&self) -> &str {
        &self.email
    }
}

impl PrincipalRecord for Admin {
    fn key_prefix() -> &'static str {
        "admin"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn email(&self) -> &str {
        &self.email
    }
}

/// Generic repository for principal records.
pub struct PrincipalRepository<S, T> {
    storage: Arc<S>,
    _record: PhantomData<T>,
}

/// Repository handle for [`User`] records.
pub type UserRepository<S> = PrincipalRepository<S, User>;

/// Repository handle for [`Admin`] records.
pub type AdminRepository<S> = PrincipalRepository<S, Admin>;

impl<S, T> Clone for PrincipalRepository<S, T> {
    fn clone(&self) -> Self {
        Self { storage: Arc::clone(&self.storage), _record: PhantomData }
    }
}

impl<S: StorageBackend, T: PrincipalRecord> PrincipalRepository<S, T> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage, _record: PhantomData }
    }

    fn record_key(id: &str) -> Vec<u8> {
        format!("{}:{}", T::key_prefix(), id).into_bytes()
    }

    fn email_key(email: &str) -> Vec<u8> {
        format!("{}:email:{}", T::key_prefix(), email.to_lowercase()).into_bytes()
    }

    /// Persist a new record.
    ///
    /// Fails with a validation error if another record already holds the
    /// same email.
    pub async fn create(&self, record: &T) -> Result<()> {
        let email_key = Self::email_key(record.email());

        let existing = self
            .storage
            .get(&email_key)
            .await
            .map_err(|e| Error::storage(e.to_string()))?;
        if existing.is_some() {
            return Err(Error::validation(format!(
                "Email already registered: {}",
                record.email()
            )));
        }

        let bytes = serde_json::to_vec(record)
            .map_err(|e| Error::internal(format!("Failed to serialize record: {e}")))?;

        self.storage
            .set(Self::record_key(record.id()), bytes)
            .await
            .map_err(|e| Error::storage(e.to_string()))?;
        self.storage
            .set(email_key, record.id().as_bytes().to_vec())
            .await
            .map_err(|e| Error::storage(e.to_string()))?;

        Ok(())
    }

    /// Fetch a record by id.
    pub async fn get(&self, id: &str) -> Result<Option<T>> {
        let bytes = self
            .storage
            .get(&Self::record_key(id))
            .await
            .map_err(|e| Error::storage(e.to_string()))?;

        match bytes {
            Some(bytes) => {
                let record = serde_json::from_slice(&bytes)
                    .map_err(|e| Error::internal(format!("Failed to deserialize record: {e}")))?;
                Ok(Some(record))
            },
            None => Ok(None),
        }
    }

    /// Fetch a record by email via the secondary index.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<T>> {
        let id_bytes = self
            .storage
            .get(&Self::email_key(email))
            .await
            .map_err(|e| Error::storage(e.to_string()))?;

        match id_bytes {
            Some(id_bytes) => {
                let id = String::from_utf8(id_bytes.to_vec())
                    .map_err(|e| Error::internal(format!("Corrupt email index entry: {e}")))?;
                self.get(&id).await
            },
            None => Ok(None),
        }
    }

    /// Delete a record and its email index entry. Missing records are a
    /// no-op.
    pub async fn delete(&self, id: &str) -> Result<()> {
        if let Some(record) = self.get(id).await? {
            self.storage
                .delete(&Self::email_key(record.email()))
                .await
                .map_err(|e| Error::storage(e.to_string()))?;
            self.storage
                .delete(&Self::record_key(id))
                .await
                .map_err(|e| Error::storage(e.to_string()))?;
        }
        Ok(())
    }
}
