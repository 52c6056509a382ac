//! Well-known storage keys shared by the session container.

/// Bearer token issued at login/registration.
pub const ACCESS_TOKEN: &str = "access_token";

/// Serialized last-known user record. Best-effort cache only — always
/// re-validated against the server on load.
pub const USER: &str = "user";
