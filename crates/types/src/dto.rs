use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::entities::{Admin, User};

/// Public-facing principal record: what login and `/me` responses expose.
///
/// Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for Profile {
    fn from(user: &User) -> Self {
        Self { id: user.id.clone(), name: user.name.clone(), email: user.email.clone() }
    }
}

impl From<&Admin> for Profile {
    fn from(admin: &Admin) -> Self {
        Self { id: admin.id.clone(), name: admin.name.clone(), email: admin.email.clone() }
    }
}

/// Login request body (user and admin logins share the shape)
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response; accompanied by exactly one `Set-Cookie`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: Profile,
    pub message: String,
}

/// Generic success envelope for operations with no payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Uniform error body: `{"success": false, "message": ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

/// `/me` response for either role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub success: bool,
    pub user: Profile,
}

/// A blob stored by the external object-storage provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadedBlob {
    /// Provider-side public identifier
    pub id: String,
    /// Publicly reachable URL for the stored object
    pub url: String,
}

/// Response to a media upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaUploadResponse {
    pub success: bool,
    pub media: UploadedBlob,
    pub message: String,
}

/// Batch media deletion request
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
pub struct DeleteMediaRequest {
    pub ids: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::entities::User;

    #[test]
    fn profile_omits_password_hash() {
        let user = User::builder()
            .name("Asha")
            .email("asha@example.com")
            .password_hash("argon2-secret")
            .build()
            .unwrap();

        let json = serde_json::to_value(Profile::from(&user)).unwrap();
        assert_eq!(json["email"], "asha@example.com");
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("argon2-secret"));
    }

    #[test]
    fn error_response_shape() {
        let json = serde_json::to_value(ErrorResponse::new("nope")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "nope");
    }

    #[test]
    fn login_request_builder() {
        let req = LoginRequest::builder().email("a@b.example").password("pw").build();
        assert_eq!(req.email, "a@b.example");
    }
}
