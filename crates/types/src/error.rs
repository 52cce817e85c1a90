use std::backtrace::Backtrace;

use snafu::Snafu;

/// Result type alias for Rupkala operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the Rupkala backend
///
/// All variants include backtraces for debugging. Use the constructor methods
/// (e.g., `Error::config("message")`) to create errors.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Configuration errors (startup-fatal: the process must not start)
    #[snafu(display("Configuration error: {message}"))]
    Config { message: String, backtrace: Backtrace },

    /// Token failed signature or structural validation
    #[snafu(display("Invalid session token"))]
    TokenInvalid { backtrace: Backtrace },

    /// Token signature is valid but the expiry has passed
    #[snafu(display("Session token expired"))]
    TokenExpired { backtrace: Backtrace },

    /// Authentication required or failed
    #[snafu(display("{message}"))]
    Unauthenticated { message: String, backtrace: Backtrace },

    /// Request origin rejected by the cross-origin policy
    #[snafu(display("Origin not allowed by CORS policy: {origin}"))]
    CorsRejected { origin: String, backtrace: Backtrace },

    /// Entity store errors
    #[snafu(display("Storage error: {message}"))]
    Storage { message: String, backtrace: Backtrace },

    /// Object storage upload/delete failures (propagated, never masked)
    #[snafu(display("Upload error: {message}"))]
    Upload { message: String, backtrace: Backtrace },

    /// Validation errors
    #[snafu(display("Validation error: {message}"))]
    Validation { message: String, backtrace: Backtrace },

    /// Resource not found
    #[snafu(display("Resource not found: {message}"))]
    NotFound { message: String, backtrace: Backtrace },

    /// Internal system errors
    #[snafu(display("Internal error: {message}"))]
    Internal { message: String, backtrace: Backtrace },
}

impl Error {
    // =========================================================================
    // Constructors - capture backtraces at the point of creation
    // =========================================================================

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        ConfigSnafu { message: message.into() }.build()
    }

    /// Create a token-invalid error
    pub fn token_invalid() -> Self {
        TokenInvalidSnafu.build()
    }

    /// Create a token-expired error
    pub fn token_expired() -> Self {
        TokenExpiredSnafu.build()
    }

    /// Create an unauthenticated error
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        UnauthenticatedSnafu { message: message.into() }.build()
    }

    /// Create a CORS rejection error
    pub fn cors_rejected(origin: impl Into<String>) -> Self {
        CorsRejectedSnafu { origin: origin.into() }.build()
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        StorageSnafu { message: message.into() }.build()
    }

    /// Create an upload error
    pub fn upload(message: impl Into<String>) -> Self {
        UploadSnafu { message: message.into() }.build()
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        ValidationSnafu { message: message.into() }.build()
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        NotFoundSnafu { message: message.into() }.build()
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        InternalSnafu { message: message.into() }.build()
    }

    // =========================================================================
    // Metadata accessors
    // =========================================================================

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Config { .. } => 500,
            Error::TokenInvalid { .. } => 401,
            Error::TokenExpired { .. } => 401,
            Error::Unauthenticated { .. } => 401,
            Error::CorsRejected { .. } => 403,
            Error::Storage { .. } => 500,
            Error::Upload { .. } => 502,
            Error::Validation { .. } => 400,
            Error::NotFound { .. } => 404,
            Error::Internal { .. } => 500,
        }
    }

    /// Get error code for client consumption
    pub fn error_code(&self) -> &str {
        match self {
            Error::Config { .. } => "CONFIGURATION_ERROR",
            Error::TokenInvalid { .. } => "TOKEN_INVALID",
            Error::TokenExpired { .. } => "TOKEN_EXPIRED",
            Error::Unauthenticated { .. } => "UNAUTHENTICATED",
            Error::CorsRejected { .. } => "CORS_REJECTED",
            Error::Storage { .. } => "STORAGE_ERROR",
            Error::Upload { .. } => "UPLOAD_ERROR",
            Error::Validation { .. } => "VALIDATION_ERROR",
            Error::NotFound { .. } => "NOT_FOUND",
            Error::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn token_errors_map_to_401() {
        assert_eq!(Error::token_invalid().status_code(), 401);
        assert_eq!(Error::token_expired().status_code(), 401);
        assert_eq!(Error::unauthenticated("login required").status_code(), 401);
    }

    #[test]
    fn cors_rejection_maps_to_403() {
        let err = Error::cors_rejected("https://evil.example");
        assert_eq!(err.status_code(), 403);
        assert!(err.to_string().contains("https://evil.example"));
    }

    #[test]
    fn config_errors_are_server_side() {
        assert_eq!(Error::config("missing secret").status_code(), 500);
        assert_eq!(Error::error_code(&Error::config("x")), "CONFIGURATION_ERROR");
    }

    #[test]
    fn token_error_display_does_not_leak_sub_reason() {
        // Both token failures render as generic session-token messages;
        // neither exposes signature bytes or claim contents.
        assert_eq!(Error::token_invalid().to_string(), "Invalid session token");
        assert_eq!(Error::token_expired().to_string(), "Session token expired");
    }

    #[test]
    fn upload_errors_surface_as_bad_gateway() {
        let err = Error::upload("provider timeout");
        assert_eq!(err.status_code(), 502);
        assert_eq!(err.error_code(), "UPLOAD_ERROR");
    }
}
