use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use rupkala_types::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// JWT claims for session tokens
///
/// The payload is a single opaque principal reference plus the standard
/// timestamp claims. Once signed, the claims are immutable: any mutation
/// of the encoded token invalidates the signature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject: opaque identifier of the user or admin principal
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    /// Create claims for a principal with the given time-to-live
    pub fn new(principal_id: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: principal_id.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Check if the claims have expired
    pub fn is_expired(&self) -> bool {
        self.exp <= Utc::now().timestamp()
    }

    /// Get expiration time as DateTime
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Get issued at time as DateTime
    pub fn issued_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.iat, 0).unwrap_or_else(Utc::now)
    }
}

/// Session token codec: HMAC-SHA256 signing and verification with the
/// process-wide secret.
///
/// The secret is loaded once at startup (a missing secret is a startup-fatal
/// configuration error, enforced by `Config::validate`). Verification
/// applies zero leeway: clock skew is not compensated, so an expired token
/// never re-validates regardless of retry.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Create a codec over the given signing secret
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Sign a token for the given principal with an absolute expiry of
    /// now + `ttl`
    pub fn sign(&self, principal_id: &str, ttl: Duration) -> Result<String> {
        let claims = SessionClaims::new(principal_id, ttl);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| Error::internal(format!("Failed to sign session token: {e}")))
    }

    /// Verify a token and extract its claims.
    ///
    /// Fails with [`Error::TokenExpired`] when the signature is valid but
    /// the expiry has passed, and [`Error::TokenInvalid`] for everything
    /// else (malformed, tampered, empty, wrong secret). Callers that face
    /// the network must collapse both into a uniform 401.
    pub fn verify(&self, token: &str) -> Result<SessionClaims> {
        if token.is_empty() {
            return Err(Error::token_invalid());
        }

        match decode::<SessionClaims>(token, &self.decoding, &self.validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(Error::token_expired()),
                _ => Err(Error::token_invalid()),
            },
        }
    }
}
