//! Shared fixtures for infra integration tests

#![allow(dead_code)]

use std::sync::Arc;

use promohub_core::{InMemorySessionStore, SessionStore};
use promohub_infra::{ApiClient, PromoHubApi};
use promohub_domain::Session;
use serde_json::{json, Value};
use wiremock::MockServer;

/// Client, store and named operations pointed at a mock backend
pub struct TestBackend {
    pub server: MockServer,
    pub sessions: Arc<InMemorySessionStore>,
    pub client: Arc<ApiClient>,
    pub api: PromoHubApi,
}

impl TestBackend {
    /// Backend with no stored session
    pub async fn start() -> Self {
        Self::start_with(None).await
    }

    /// Backend whose store already holds `session`
    pub async fn start_with(session: Option<Session>) -> Self {
        let server = MockServer::start().await;
        let sessions = Arc::new(match session {
            Some(session) => InMemorySessionStore::with_session(session),
            None => InMemorySessionStore::new(),
        });
        let store: Arc<dyn SessionStore> = sessions.clone();
        let client = Arc::new(
            ApiClient::builder()
                .base_url(server.uri())
                .sessions(store)
                .build()
                .expect("client should build"),
        );
        let api = PromoHubApi::new(Arc::clone(&client));
        Self { server, sessions, client, api }
    }

    pub fn stored(&self) -> Option<Session> {
        self.sessions.load()
    }
}

/// Session with the given token pair for user 42
pub fn session(access: &str, refresh: &str) -> Session {
    Session {
        access_token: access.to_string(),
        refresh_token: refresh.to_string(),
        token_type: "Bearer".to_string(),
        user_id: 42,
        email: "owner@example.com".to_string(),
        full_name: "Ada Owner".to_string(),
        user_role: "BUSINESS_OWNER".to_string(),
        verified: true,
    }
}

/// Wire form of a session as the backend returns it
pub fn session_json(access: &str, refresh: &str) -> Value {
    json!({
        "accessToken": access,
        "refreshToken": refresh,
        "tokenType": "Bearer",
        "userId": 42,
        "email": "owner@example.com",
        "fullName": "Ada Owner",
        "userRole": "BUSINESS_OWNER",
        "verified": true
    })
}

/// `{success: true, data}` envelope
pub fn envelope(data: Value) -> Value {
    json!({ "success": true, "message": "OK", "data": data })
}
