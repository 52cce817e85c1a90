#![deny(unsafe_code)]

//! # Rupkala Core
//!
//! Core business logic for the Rupkala backend: the session token codec,
//! origin policy derivation, credential hashing, principal repositories,
//! and the object-storage collaborator.
//!
//! ## Imports
//!
//! Import types from their source crates:
//! - Entity types and DTOs: `rupkala_types`
//! - Errors: `rupkala_types::Error`
//! - Config: `rupkala_config::Config`
//! - Storage trait: `rupkala_storage::StorageBackend`

pub mod auth;
pub mod jwt;
pub mod logging;
pub mod media;
pub mod origin;
pub mod repository;

pub use auth::{hash_password, verify_password};
pub use jwt::{SessionClaims, TokenCodec};
pub use media::{BlobStore, MediaService, MockBlobStore};
pub use origin::{OriginPolicy, cookie_domain};
pub use repository::{AdminRepository, PrincipalRecord, PrincipalRepository, UserRepository};
