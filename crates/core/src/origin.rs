//! Origin policy derivation for cross-origin requests and cookie scoping.
//!
//! The front-end base URL configured at startup seeds two things: the
//! cross-origin allow-list enforced by the origin filter middleware, and
//! the `Domain` attribute stamped onto session cookies. Both are derived
//! once at startup and shared read-only for the process lifetime.

use rupkala_const::auth::{FALLBACK_COOKIE_DOMAIN, KNOWN_ORIGINS};
use rupkala_types::error::{Error, Result};
use url::Url;

/// Derive the session cookie `Domain` attribute from the front-end URL.
///
/// Produces a leading-dot domain (`.example.com`) so the cookie is shared
/// with subdomains. This function never fails: if the URL does not parse or
/// has no host, the statically known fallback domain is used and the event
/// is logged at error level. A wrong cookie domain degrades to cookies the
/// browser silently drops; it never grants access.
pub fn cookie_domain(frontend_url: &str) -> String {
    match Url::parse(frontend_url) {
        Ok(url) => match url.host_str() {
            Some(host) => format!(".{host}"),
            None => {
                tracing::error!(
                    frontend_url,
                    fallback = FALLBACK_COOKIE_DOMAIN,
                    "client URL has no host, using fallback cookie domain"
                );
                FALLBACK_COOKIE_DOMAIN.to_string()
            }
        },
        Err(e) => {
            tracing::error!(
                frontend_url,
                error = %e,
                fallback = FALLBACK_COOKIE_DOMAIN,
                "failed to parse client URL, using fallback cookie domain"
            );
            FALLBACK_COOKIE_DOMAIN.to_string()
        }
    }
}

/// Startup-derived origin policy: the cross-origin allow-list and the
/// cookie domain, computed once from configuration.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    allowed: Vec<String>,
    cookie_domain: String,
}

impl OriginPolicy {
    /// Derive the policy from the configured front-end URL plus any extra
    /// statically known origins.
    ///
    /// The front-end URL is normalized by stripping at most one trailing
    /// slash, then unioned with `extra` and the built-in known origins.
    /// Order is preserved and duplicates removed. An absent front-end URL
    /// is a configuration error: the allow-list must never silently derive
    /// empty.
    pub fn derive(frontend_url: &str, extra: &[&str]) -> Result<Self> {
        if frontend_url.is_empty() {
            return Err(Error::config(
                "client URL is required to derive the origin allow-list",
            ));
        }

        let normalized = frontend_url.strip_suffix('/').unwrap_or(frontend_url);

        let mut allowed: Vec<String> = vec![normalized.to_string()];
        for origin in extra.iter().chain(KNOWN_ORIGINS.iter()) {
            if !allowed.iter().any(|a| a == origin) {
                allowed.push((*origin).to_string());
            }
        }

        Ok(Self {
            allowed,
            cookie_domain: cookie_domain(frontend_url),
        })
    }

    /// Check whether a request origin is admitted.
    ///
    /// An absent `Origin` header is admitted: same-origin and non-browser
    /// clients (curl, server-to-server) carry no origin and are not subject
    /// to the browser cross-origin model. A present origin is admitted when
    /// it prefix-matches any allow-list entry.
    pub fn is_allowed(&self, origin: Option<&str>) -> bool {
        match origin {
            None => true,
            Some(origin) => self.allowed.iter().any(|a| origin.starts_with(a.as_str())),
        }
    }

    /// The derived allow-list, in derivation order.
    pub fn allow_list(&self) -> &[String] {
        &self.allowed
    }

    /// The derived session cookie `Domain` attribute.
    pub fn cookie_domain(&self) -> &str {
        &self.cookie_domain
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn cookie_domain_prepends_dot_to_host() {
        assert_eq!(cookie_domain("https://shop.example.com"), ".shop.example.com");
        assert_eq!(cookie_domain("https://shop.example.com/store"), ".shop.example.com");
    }

    #[test]
    fn cookie_domain_falls_back_on_unparseable_url() {
        assert_eq!(cookie_domain("not a url"), FALLBACK_COOKIE_DOMAIN);
        assert_eq!(cookie_domain(""), FALLBACK_COOKIE_DOMAIN);
    }

    #[test]
    fn derive_strips_single_trailing_slash() {
        let policy = OriginPolicy::derive("https://shop.example.com/", &[]).unwrap();
        assert_eq!(policy.allow_list()[0], "https://shop.example.com");
    }

    #[test]
    fn derive_unions_known_origins_without_duplicates() {
        let policy =
            OriginPolicy::derive("https://rupkala-iota.vercel.app/", &[]).unwrap();
        // The normalized client URL equals the known origin, so it appears once.
        assert_eq!(policy.allow_list(), &["https://rupkala-iota.vercel.app"]);

        let policy = OriginPolicy::derive("https://shop.example.com", &[]).unwrap();
        assert_eq!(
            policy.allow_list(),
            &["https://shop.example.com", "https://rupkala-iota.vercel.app"]
        );
    }

    #[test]
    fn derive_fails_on_empty_client_url() {
        let err = OriginPolicy::derive("", &[]).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn absent_origin_is_admitted() {
        let policy = OriginPolicy::derive("https://shop.example.com", &[]).unwrap();
        assert!(policy.is_allowed(None));
    }

    #[test]
    fn exact_origin_is_admitted() {
        let policy = OriginPolicy::derive("https://shop.example.com", &[]).unwrap();
        assert!(policy.is_allowed(Some("https://shop.example.com")));
    }

    #[test]
    fn prefix_extension_of_allowed_origin_is_admitted() {
        // Prefix matching admits origins that extend an allow-list entry.
        let policy = OriginPolicy::derive("https://shop.example.com", &[]).unwrap();
        assert!(policy.is_allowed(Some("https://shop.example.com.attacker.example")));
    }

    #[test]
    fn unrelated_origin_is_rejected() {
        let policy = OriginPolicy::derive("https://shop.example.com", &[]).unwrap();
        assert!(!policy.is_allowed(Some("https://evil.example")));
        assert!(!policy.is_allowed(Some("http://shop.example.com")));
    }

    #[test]
    fn extra_origins_are_admitted() {
        let policy = OriginPolicy::derive(
            "https://shop.example.com",
            &["https://staging.example.com"],
        )
        .unwrap();
        assert!(policy.is_allowed(Some("https://staging.example.com")));
    }
}
