//! Single-shot HTTP transport
//!
//! The API layer owns the only replay it allows (the post-refresh retry), so
//! this client sends each request exactly once.

use std::time::Duration;

use promohub_domain::PromoHubError;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

use crate::errors::InfraError;

/// reqwest wrapper that maps transport failures onto [`PromoHubError`]
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Client with reqwest's defaults (no timeout, default user agent).
    ///
    /// # Errors
    /// [`PromoHubError::Config`] if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, PromoHubError> {
        Self::builder().build()
    }

    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Send `builder` once.
    ///
    /// Any response, whatever its status, is `Ok`; only a transport failure
    /// is an error.
    ///
    /// # Errors
    /// [`PromoHubError::Network`] for connect, timeout and I/O failures,
    /// [`PromoHubError::Config`] for a request that cannot be built.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, PromoHubError> {
        let request = builder.build().map_err(InfraError::from)?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, %path, status = response.status().as_u16(), "HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %path, error = %err, "HTTP request failed");
                Err(InfraError::from(err).into())
            }
        }
    }
}

/// Builder for [`HttpClient`]
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HttpClientBuilder {
    /// Whole-request timeout; unset leaves reqwest's default (none).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// # Errors
    /// [`PromoHubError::Config`] if reqwest rejects the settings.
    pub fn build(self) -> Result<HttpClient, PromoHubError> {
        let mut builder = ReqwestClient::builder().no_proxy();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(InfraError::from)?;
        Ok(HttpClient { client })
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use reqwest::StatusCode;
    use wiremock::matchers::{header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_server_error_is_sent_once_and_returned() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let response = client.send(client.request(Method::GET, server.uri())).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_user_agent_is_applied() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", "promohub-test/1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::builder().user_agent("promohub-test/1").build().unwrap();
        let response = client.send(client.request(Method::GET, server.uri())).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_timeout_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let client = HttpClient::builder().timeout(Duration::from_millis(50)).build().unwrap();
        let result = client.send(client.request(Method::GET, server.uri())).await;

        assert!(matches!(result, Err(PromoHubError::Network(_))), "got {result:?}");
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpClient::new().unwrap();
        let result = client.send(client.request(Method::GET, format!("http://{addr}"))).await;

        assert!(matches!(result, Err(PromoHubError::Network(_))), "got {result:?}");
    }
}
