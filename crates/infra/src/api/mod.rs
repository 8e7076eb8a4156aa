//! Authenticated access to the PromoHub backend
//!
//! - [`url`]: relative path → absolute URL, honoring the dev proxy
//! - [`client`]: the request executor (auth header, refresh-on-401, replay)
//! - [`auth`]: token refresh over HTTP
//! - [`commands`]: named marketplace operations

pub mod auth;
pub mod client;
pub mod commands;
pub mod url;

pub use auth::HttpSessionRefresher;
pub use client::{ApiClient, ApiClientBuilder};
pub use commands::{PromoHubApi, PromotionQuery};
pub use url::UrlResolver;
