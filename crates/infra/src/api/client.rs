//! Request executor with refresh-on-401
//!
//! One logical request is an explicit two-step state machine:
//!
//! 1. attempt with the stored session's credentials
//! 2. on 401, refresh once and replay once with `skip_refresh` set
//!
//! The replay never refreshes again, so a request costs at most two HTTP
//! calls plus one refresh call.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use promohub_core::{normalize_response, RequestExecutor, SessionRefresher, SessionStore};
use promohub_core::InMemorySessionStore;
use promohub_domain::constants::CONTENT_TYPE_JSON;
use promohub_domain::{ApiConfig, ApiError, HttpMethod, RequestOptions, Session};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::auth::HttpSessionRefresher;
use super::url::UrlResolver;
use crate::http::HttpClient;

/// Raw outcome of a single HTTP call
#[derive(Debug, Clone)]
struct RawResponse {
    status: StatusCode,
    body: String,
}

impl RawResponse {
    fn normalize(self) -> Result<Value, ApiError> {
        let status_text = self.status.canonical_reason().unwrap_or_default();
        normalize_response(&self.body, self.status.as_u16(), status_text)
    }
}

/// Authenticated client for the PromoHub backend
pub struct ApiClient {
    http_client: Arc<HttpClient>,
    urls: UrlResolver,
    sessions: Arc<dyn SessionStore>,
    refresher: Arc<dyn SessionRefresher>,
}

impl ApiClient {
    /// Create a client with the default HTTP stack and refresher.
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] if a configured URL is malformed or the
    /// HTTP client cannot be built.
    pub fn new(config: &ApiConfig, sessions: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        Self::builder().config(config.clone()).sessions(sessions).build()
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Session store shared with the refresh flow
    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    /// URL resolver in use
    pub fn urls(&self) -> &UrlResolver {
        &self.urls
    }

    async fn attempt(
        &self,
        path: &str,
        options: &RequestOptions,
        session: Option<&Session>,
    ) -> Result<RawResponse, ApiError> {
        let url = self.urls.resolve(path)?;
        let mut request = self.http_client.request(to_method(options.method), &url);

        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &options.body {
            if !options.has_content_type() {
                request = request.header(CONTENT_TYPE, CONTENT_TYPE_JSON);
            }
            request = request.body(body.to_string());
        }

        if !options.skip_auth {
            if let Some(session) = session.filter(|s| !s.access_token.is_empty()) {
                request = request.header(AUTHORIZATION, session.authorization_header());
            }
        }

        let response = self.http_client.send(request).await.map_err(|err| {
            warn!(path = %path, error = %err, "Backend unreachable");
            ApiError::from(err)
        })?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                warn!(path = %path, %status, error = %err, "Failed to read response body");
                String::new()
            }
        };

        debug!(path = %path, status = status.as_u16(), "Response received");
        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl RequestExecutor for ApiClient {
    #[instrument(skip(self, options), fields(path = %path, method = %options.method))]
    async fn execute(&self, path: &str, options: &RequestOptions) -> Result<Value, ApiError> {
        let session = if options.skip_auth { None } else { self.sessions.load() };
        debug!(has_session = session.is_some(), skip_auth = options.skip_auth, "Dispatching request");

        let first = self.attempt(path, options, session.as_ref()).await?;

        if first.status != StatusCode::UNAUTHORIZED || options.skip_refresh {
            return first.normalize();
        }

        let Some(refresh_token) = session.as_ref().and_then(Session::refresh_token) else {
            return first.normalize();
        };

        info!("Access token rejected, refreshing session");
        match self.refresher.refresh(refresh_token).await {
            Some(refreshed) => {
                self.sessions.save(Some(&refreshed));
                let replay = options.for_replay();
                self.attempt(path, &replay, Some(&refreshed)).await?.normalize()
            }
            None => {
                warn!("Session refresh failed, clearing stored session");
                self.sessions.clear();
                first.normalize()
            }
        }
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiConfig>,
    http_client: Option<Arc<HttpClient>>,
    sessions: Option<Arc<dyn SessionStore>>,
    refresher: Option<Arc<dyn SessionRefresher>>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Shorthand for a config with only a base URL
    pub fn base_url(self, base_url: impl Into<String>) -> Self {
        self.config(ApiConfig::with_base_url(base_url))
    }

    /// Use a preconfigured HTTP client
    pub fn http_client(mut self, client: Arc<HttpClient>) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set the session store (in-memory when unset)
    pub fn sessions(mut self, sessions: Arc<dyn SessionStore>) -> Self {
        self.sessions = Some(sessions);
        self
    }

    /// Override the token refresher
    pub fn refresher(mut self, refresher: Arc<dyn SessionRefresher>) -> Self {
        self.refresher = Some(refresher);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if a configured URL is malformed or the HTTP client
    /// cannot be created
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = HttpClient::builder();
                if let Some(secs) = config.timeout_secs {
                    builder = builder.timeout(Duration::from_secs(secs));
                }
                if let Some(agent) = &config.user_agent {
                    builder = builder.user_agent(agent.clone());
                }
                Arc::new(builder.build().map_err(|e| {
                    ApiError::Config(format!("Failed to build HttpClient: {e}"))
                })?)
            }
        };

        let urls = UrlResolver::from_config(&config)?;
        let refresher = self.refresher.unwrap_or_else(|| {
            Arc::new(HttpSessionRefresher::new(http_client.clone(), urls.clone()))
        });
        let sessions = self.sessions.unwrap_or_else(|| Arc::new(InMemorySessionStore::new()));

        Ok(ApiClient { http_client, urls, sessions, refresher })
    }
}
