//! Port interfaces for talking to the backend

use async_trait::async_trait;
use promohub_domain::{ApiError, RequestOptions, Session};
use serde_json::Value;

/// Performs one logical request and returns the normalized payload.
///
/// Implementations own authentication, refresh-on-401 and response
/// normalization; callers only see the unwrapped `data` or a classified
/// [`ApiError`].
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(&self, path: &str, options: &RequestOptions) -> Result<Value, ApiError>;
}

/// Exchanges a refresh token for a new session.
///
/// Total: any failure (transport, non-2xx, envelope failure, missing tokens)
/// yields `None`.
#[async_trait]
pub trait SessionRefresher: Send + Sync {
    async fn refresh(&self, refresh_token: &str) -> Option<Session>;
}
