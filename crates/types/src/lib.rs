//! # Rupkala Types
//!
//! Shared type definitions for the Rupkala backend.
//!
//! This crate provides the error taxonomy, principal entities, and
//! request/response DTOs used across the workspace, ensuring a single
//! source of truth and preventing circular dependencies.
//!
//! ## Builder Patterns
//!
//! Entity types use the [`bon`](https://docs.rs/bon) crate for builder
//! generation. Types with validation put `#[builder]` on `new()` and return
//! `Result<Self>`:
//!
//! ```
//! use rupkala_types::entities::User;
//!
//! let user = User::builder()
//!     .name("Asha")
//!     .email("asha@example.com")
//!     .password_hash("argon2hash")
//!     .build()
//!     .expect("valid user");
//! ```

#![deny(unsafe_code)]

pub mod dto;
pub mod entities;
pub mod error;

pub use dto::{
    DeleteMediaRequest, ErrorResponse, LoginRequest, LoginResponse, MeResponse,
    MediaUploadResponse, MessageResponse, Profile, UploadedBlob,
};
pub use entities::{Admin, SessionRole, User};
pub use error::{Error, Result};
