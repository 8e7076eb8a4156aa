//! # PromoHub Core
//!
//! Request semantics for the PromoHub client - no transport or storage code.
//!
//! This crate contains:
//! - Port interfaces (traits) for session storage, request execution and
//!   token refresh
//! - Response normalization (envelope vs. bare payloads)
//! - Endpoint resolution across candidate routes
//!
//! ## Architecture Principles
//! - Only depends on `promohub-domain`
//! - No HTTP, filesystem or keychain code
//! - All external effects via traits

pub mod api;
pub mod session;

pub use api::ports::{RequestExecutor, SessionRefresher};
pub use api::resolution::{
    find_business_direct, find_owned_business, is_advanceable, request_with_fallback, resolve,
    resolve_as, scan_for_owned_business,
};
pub use api::response::{decode_value, normalize_response, ResponseShape};
pub use session::memory::InMemorySessionStore;
pub use session::ports::SessionStore;
