use bon::bon;
use chrono::{DateTime, Utc};
use rupkala_const::auth::{ADMIN_SESSION_COOKIE, USER_SESSION_COOKIE};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The credential tier a session belongs to.
///
/// The two tiers are separated purely by cookie name: a token presented
/// under the wrong cookie is never read by the other tier's guard, even
/// though it would verify. Everything role-specific (cookie name, rejection
/// message) hangs off this enum so the two guards cannot drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionRole {
    /// Regular storefront user
    User,
    /// Administrator
    Admin,
}

impl SessionRole {
    /// Name of the session cookie this role reads and writes
    pub fn cookie_name(self) -> &'static str {
        match self {
            SessionRole::User => USER_SESSION_COOKIE,
            SessionRole::Admin => ADMIN_SESSION_COOKIE,
        }
    }

    /// Message returned when a request is rejected for lacking this role
    pub fn rejection_message(self) -> &'static str {
        match self {
            SessionRole::User => "Please login to access this route",
            SessionRole::Admin => "Only Admin can access this route",
        }
    }
}

/// A storefront user principal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Opaque unique identifier (UUID v4)
    pub id: String,

    /// Display name
    pub name: String,

    /// Login email, unique across users
    pub email: String,

    /// Argon2 password hash (never serialized to clients)
    pub password_hash: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

#[bon]
impl User {
    /// Create a new user
    ///
    /// The id defaults to a fresh UUID; `created_at` defaults to now.
    /// Fails if the email is empty or missing an `@`.
    #[builder(on(String, into))]
    pub fn new(
        #[builder(default = new_id())] id: String,
        name: String,
        email: String,
        password_hash: String,
    ) -> Result<Self> {
        validate_email(&email)?;
        Ok(Self { id, name, email, password_hash, created_at: Utc::now() })
    }
}

/// An administrator principal.
///
/// Stored separately from users; admin records are looked up only by the
/// admin login flow and the admin guard's `/me` resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Admin {
    /// Opaque unique identifier (UUID v4)
    pub id: String,

    /// Display name
    pub name: String,

    /// Login email, unique across admins
    pub email: String,

    /// Argon2 password hash (never serialized to clients)
    pub password_hash: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

#[bon]
impl Admin {
    /// Create a new admin
    #[builder(on(String, into))]
    pub fn new(
        #[builder(default = new_id())] id: String,
        name: String,
        email: String,
        password_hash: String,
    ) -> Result<Self> {
        validate_email(&email)?;
        Ok(Self { id, name, email, password_hash, created_at: Utc::now() })
    }
}

/// Generate a fresh opaque principal identifier
fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Validates that an email is non-empty and has a single `@` with text on
/// both sides. Schema validation beyond that belongs to the entity store.
fn validate_email(email: &str) -> Result<()> {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(Error::validation(format!("Invalid email address: {email}"))),
    }
}
