//! Backend base-URL resolution.
//!
//! # Design
//! The client is deployed to several environments without per-environment
//! rebuilds, so the backend address falls back through three tiers: an
//! explicit override, a well-known local-development address when the page
//! is served from the development hostname, and a hard-coded production
//! address. `resolve` takes both inputs as explicit parameters instead of
//! reading ambient globals, so the tiers are unit-testable in isolation.

/// Base address of the backend when developing against a local instance.
pub const LOCAL_BASE: &str = "http://127.0.0.1:5000";

/// Production backend address, used when nothing else matches.
pub const PRODUCTION_BASE: &str = "https://ai4u-top10-backend.vercel.app";

/// Hostname that selects the local-development base.
pub const DEV_HOSTNAME: &str = "localhost";

/// Resolve the backend base URL from an optional override and the hostname
/// the client is served from.
///
/// Total and deterministic: a non-empty override wins verbatim, then the
/// development hostname selects [`LOCAL_BASE`], and anything else falls back
/// to [`PRODUCTION_BASE`]. The result never ends with a trailing slash and
/// does not include the route suffix; appending the route is the request
/// client's concern, keeping this function environment-only.
pub fn resolve(override_base: Option<&str>, hostname: &str) -> String {
    if let Some(base) = override_base {
        let base = base.trim();
        if !base.is_empty() {
            return base.trim_end_matches('/').to_string();
        }
    }
    if hostname == DEV_HOSTNAME {
        LOCAL_BASE.to_string()
    } else {
        PRODUCTION_BASE.to_string()
    }
}
