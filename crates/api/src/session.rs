//! Session cookie issuance.
//!
//! Every session cookie carries the same fixed attribute set: 24-hour
//! `Max-Age`, `SameSite=None` (the front-end lives on another origin),
//! `HttpOnly`, `Secure`, `Path=/`, and a `Domain` derived from the
//! configured client URL. `SameSite=None` without `Secure` is rejected by
//! browsers, so the two travel together.

use axum_extra::extract::cookie::{Cookie, SameSite};
use rupkala_const::auth::SESSION_TTL_SECONDS;
use rupkala_types::entities::SessionRole;
use time::Duration;

/// Build the session cookie for a freshly signed token.
pub fn issue_session(role: SessionRole, token: &str, domain: &str) -> Cookie<'static> {
    Cookie::build((role.cookie_name(), token.to_string()))
        .max_age(Duration::seconds(SESSION_TTL_SECONDS))
        .same_site(SameSite::None)
        .http_only(true)
        .secure(true)
        .path("/")
        .domain(domain.to_string())
        .build()
}

/// Build the removal cookie that clears a session.
///
/// Scoping attributes must match issuance exactly or the browser treats
/// the removal cookie as a different cookie and keeps the session.
pub fn clear_session(role: SessionRole, domain: &str) -> Cookie<'static> {
    Cookie::build((role.cookie_name(), ""))
        .max_age(Duration::ZERO)
        .same_site(SameSite::None)
        .http_only(true)
        .secure(true)
        .path("/")
        .domain(domain.to_string())
        .build()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn issued_cookie_carries_full_attribute_set() {
        let cookie = issue_session(SessionRole::User, "tok123", ".shop.example.com");

        assert_eq!(cookie.name(), "rupkalaid");
        assert_eq!(cookie.value(), "tok123");
        assert_eq!(cookie.max_age(), Some(Duration::seconds(24 * 60 * 60)));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.domain(), Some(".shop.example.com"));
    }

    #[test]
    fn admin_cookie_uses_admin_name() {
        let cookie = issue_session(SessionRole::Admin, "tok", ".shop.example.com");
        assert_eq!(cookie.name(), "rupkala-admin");
    }

    #[test]
    fn removal_cookie_matches_issuance_scoping() {
        let issued = issue_session(SessionRole::User, "tok", ".shop.example.com");
        let removal = clear_session(SessionRole::User, ".shop.example.com");

        assert_eq!(removal.name(), issued.name());
        assert_eq!(removal.path(), issued.path());
        assert_eq!(removal.domain(), issued.domain());
        assert_eq!(removal.value(), "");
        assert_eq!(removal.max_age(), Some(Duration::ZERO));
    }
}
