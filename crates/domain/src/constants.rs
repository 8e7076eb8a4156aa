//! Client constants
//!
//! Centralized location for constants shared by the access layer.

// Session persistence
pub const SESSION_STORAGE_KEY: &str = "promohub.session";
pub const KEYCHAIN_SERVICE_NAME: &str = "PromoHub.session";

// User-facing messages
pub const BACKEND_UNREACHABLE_MESSAGE: &str =
    "Unable to reach the PromoHub server. Check your connection and try again.";
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";
pub const NO_CANDIDATE_PATHS_MESSAGE: &str = "No API endpoints configured for this operation";

// HTTP
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const DEFAULT_TOKEN_TYPE: &str = "Bearer";
pub const DEFAULT_RETRYABLE_STATUSES: &[u16] = &[404];

/// Lowercase fragments that mark a failure message as "route not found".
pub const NOT_FOUND_PHRASES: &[&str] =
    &["not found", "404", "no static resource", "no handler found", "does not exist"];
