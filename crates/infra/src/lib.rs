//! # PromoHub Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - HTTP transport and the authenticated request executor
//! - Token refresh and named marketplace operations
//! - Session stores (file, OS keychain)
//! - Configuration loading and tracing setup
//!
//! ## Architecture
//! - Implements traits defined in `promohub-core`
//! - Depends on `promohub-domain` and `promohub-core`
//! - Contains all "impure" code (network, filesystem, keychain)

pub mod api;
pub mod config;
pub mod context;
pub mod errors;
pub mod http;
pub mod observability;
pub mod session;

// Re-export commonly used items
pub use api::{ApiClient, HttpSessionRefresher, PromoHubApi, PromotionQuery, UrlResolver};
pub use context::{build_session_store, ClientContext};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use observability::init_tracing;
pub use session::{FileSessionStore, KeychainSessionStore};
