//! Authentication constants for session cookies and origin policy.

/// Session cookie name used for regular user authentication.
///
/// Stores the signed session token for logged-in storefront users.
/// Must be consistent across every handler that reads or writes
/// user session state.
pub const USER_SESSION_COOKIE: &str = "rupkalaid";

/// Session cookie name used for administrator authentication.
///
/// Deliberately distinct from [`USER_SESSION_COOKIE`]: the two cookies are
/// the only thing separating the user and admin credential tiers, so they
/// are never interchangeable.
pub const ADMIN_SESSION_COOKIE: &str = "rupkala-admin";

/// Session lifetime in seconds (24 hours).
///
/// Both the token expiry claim and the cookie `Max-Age` attribute use this
/// value. There is no revocation list; expiry is the only termination
/// mechanism short of rotating the signing secret.
pub const SESSION_TTL_SECONDS: i64 = 24 * 60 * 60;

/// Fallback cookie domain used when the configured client URL fails to parse.
///
/// Cookie issuance must never hard-fail on malformed configuration. If this
/// fallback is wrong for a deployment, cross-domain cookies are simply not
/// received by the client; no privilege is leaked.
pub const FALLBACK_COOKIE_DOMAIN: &str = ".rupkala-iota.vercel.app";

/// Statically known deployment origins, always present in the allow-list
/// regardless of the configured client URL.
pub const KNOWN_ORIGINS: &[&str] = &["https://rupkala-iota.vercel.app"];
