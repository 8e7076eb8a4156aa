//! Named API operations
//!
//! [`PromoHubApi`] is the surface the UI calls. Each operation is a thin
//! wrapper that picks a route (or candidate routes), builds the request
//! options and maps the normalized payload onto a domain type.

mod account;
mod admin;
mod businesses;
mod events;
pub mod promotions;
mod reports;
mod users;

use std::sync::Arc;

use promohub_core::{decode_value, RequestExecutor};
use promohub_domain::{unwrap_items, unwrap_page, ApiError, HttpMethod, Page, RequestOptions};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub use promotions::PromotionQuery;

use super::client::ApiClient;

/// API commands for marketplace operations
#[derive(Clone)]
pub struct PromoHubApi {
    client: Arc<ApiClient>,
}

impl PromoHubApi {
    /// Create a new commands instance
    ///
    /// # Arguments
    ///
    /// * `client` - API client
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Underlying request executor
    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    async fn fetch(&self, path: &str, options: RequestOptions) -> Result<Value, ApiError> {
        self.client.execute(path, &options).await
    }

    async fn fetch_as<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T, ApiError> {
        decode_value(self.fetch(path, options).await?)
    }

    async fn fetch_items<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Vec<T>, ApiError> {
        let value = self.fetch(path, options).await?;
        unwrap_items(value).map_err(listing_error)
    }

    async fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Page<T>, ApiError> {
        let value = self.fetch(path, options).await?;
        unwrap_page(value).map_err(listing_error)
    }

    async fn send_unit(&self, path: &str, options: RequestOptions) -> Result<(), ApiError> {
        self.fetch(path, options).await.map(|_| ())
    }
}

/// Options for a request carrying `body` as JSON
fn json_request<B: Serialize + ?Sized>(method: HttpMethod, body: &B) -> Result<RequestOptions, ApiError> {
    let value = serde_json::to_value(body)
        .map_err(|e| ApiError::Internal(format!("Failed to serialize body: {e}")))?;
    Ok(RequestOptions::with_json(method, value))
}

fn listing_error(err: serde_json::Error) -> ApiError {
    ApiError::Decode { status: 200, message: format!("Unexpected listing format: {err}") }
}
