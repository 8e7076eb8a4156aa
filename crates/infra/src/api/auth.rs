//! Token refresh against `POST /api/auth/refresh`
//!
//! The refresh call is issued straight through [`HttpClient`], never through
//! the request executor, so it cannot carry credentials or trigger another
//! refresh.

use std::sync::Arc;

use async_trait::async_trait;
use promohub_core::{ResponseShape, SessionRefresher};
use promohub_domain::constants::CONTENT_TYPE_JSON;
use promohub_domain::{routes, Session};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use tracing::{debug, instrument, warn};

use super::url::UrlResolver;
use crate::http::HttpClient;

/// Refreshes sessions over HTTP
pub struct HttpSessionRefresher {
    http_client: Arc<HttpClient>,
    urls: UrlResolver,
}

impl HttpSessionRefresher {
    pub fn new(http_client: Arc<HttpClient>, urls: UrlResolver) -> Self {
        Self { http_client, urls }
    }
}

#[async_trait]
impl SessionRefresher for HttpSessionRefresher {
    #[instrument(skip_all)]
    async fn refresh(&self, refresh_token: &str) -> Option<Session> {
        let url = match self.urls.resolve(&routes::refresh(refresh_token)) {
            Ok(url) => url,
            Err(err) => {
                warn!(error = %err, "Cannot build refresh URL");
                return None;
            }
        };

        let request =
            self.http_client.request(Method::POST, &url).header(CONTENT_TYPE, CONTENT_TYPE_JSON);

        let response = match self.http_client.send(request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "Refresh request failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "Refresh rejected");
            return None;
        }

        let body = response.text().await.ok()?;
        let ResponseShape::Envelope { success: true, data, .. } = ResponseShape::decode(&body) else {
            debug!("Refresh response was not a successful envelope");
            return None;
        };

        match serde_json::from_value::<Session>(data) {
            Ok(mut session) if !session.access_token.is_empty() => {
                // Backends that do not rotate refresh tokens omit the field.
                if session.refresh_token().is_none() {
                    session.refresh_token = refresh_token.to_string();
                }
                debug!(user_id = session.user_id, "Session refreshed");
                Some(session)
            }
            Ok(_) => None,
            Err(err) => {
                warn!(error = %err, "Refresh payload is not a session");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn refresher(server: &MockServer) -> HttpSessionRefresher {
        HttpSessionRefresher::new(
            Arc::new(HttpClient::new().unwrap()),
            UrlResolver::new(&server.uri(), None).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_refresh_returns_new_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/refresh"))
            .and(query_param("refreshToken", "r+1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": {"accessToken": "new", "refreshToken": "r2", "tokenType": "Bearer", "userId": 4}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let session = refresher(&server).refresh("r+1").await.unwrap();
        assert_eq!(session.access_token, "new");
        assert_eq!(session.user_id, 4);

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_unrotated_refresh_token_is_carried_forward() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/refresh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": {"accessToken": "new", "refreshToken": null, "userId": 4}
            })))
            .mount(&server)
            .await;

        let session = refresher(&server).refresh("keep-me").await.unwrap();
        assert_eq!(session.access_token, "new");
        assert_eq!(session.refresh_token(), Some("keep-me"));
    }

    #[tokio::test]
    async fn test_refresh_failures_yield_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/refresh"))
            .and(query_param("refreshToken", "expired"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/auth/refresh"))
            .and(query_param("refreshToken", "rejected"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"success": false, "message": "Revoked"})),
            )
            .mount(&server)
            .await;

        let refresher = refresher(&server);
        assert!(refresher.refresh("expired").await.is_none());
        assert!(refresher.refresh("rejected").await.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_backend_yields_none() {
        let refresher = HttpSessionRefresher::new(
            Arc::new(HttpClient::new().unwrap()),
            UrlResolver::new("http://127.0.0.1:9", None).unwrap(),
        );
        assert!(refresher.refresh("token").await.is_none());
    }
}
