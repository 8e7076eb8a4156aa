//! Wiring of configuration into a ready-to-use client

use std::path::PathBuf;
use std::sync::Arc;

use promohub_core::{InMemorySessionStore, SessionStore};
use promohub_domain::constants::KEYCHAIN_SERVICE_NAME;
use promohub_domain::{ApiError, Config, SessionBackend, SessionConfig};
use tracing::info;

use crate::api::{ApiClient, PromoHubApi};
use crate::session::{FileSessionStore, KeychainSessionStore};

/// Default directory of the file session backend, relative to the working directory
const DEFAULT_SESSION_DIR: &str = ".promohub";

/// Session store selected by `config.backend`
pub fn build_session_store(config: &SessionConfig) -> Arc<dyn SessionStore> {
    match config.backend {
        SessionBackend::File => {
            let directory = config
                .directory
                .as_deref()
                .map_or_else(|| PathBuf::from(DEFAULT_SESSION_DIR), PathBuf::from);
            Arc::new(FileSessionStore::new(directory, &config.storage_key))
        }
        SessionBackend::Keychain => {
            Arc::new(KeychainSessionStore::new(KEYCHAIN_SERVICE_NAME, config.storage_key.clone()))
        }
        SessionBackend::Memory => Arc::new(InMemorySessionStore::new()),
    }
}

/// Client, session store and named operations built from one [`Config`]
#[derive(Clone)]
pub struct ClientContext {
    pub api: PromoHubApi,
    pub sessions: Arc<dyn SessionStore>,
}

impl ClientContext {
    /// # Errors
    /// [`ApiError::Config`] if a configured URL is malformed or the HTTP
    /// transport cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let sessions = build_session_store(&config.session);
        let client = ApiClient::new(&config.api, Arc::clone(&sessions))?;
        info!(
            base_url = %config.api.base_url,
            proxied = config.api.proxy_target.is_some(),
            backend = ?config.session.backend,
            "Client context ready"
        );
        Ok(Self { api: PromoHubApi::new(Arc::new(client)), sessions })
    }
}

#[cfg(test)]
mod tests {
    use promohub_domain::{ApiConfig, Session};
    use tempfile::TempDir;

    use super::*;

    fn session() -> Session {
        Session {
            access_token: "a".into(),
            refresh_token: "r".into(),
            token_type: "Bearer".into(),
            user_id: 1,
            email: String::new(),
            full_name: String::new(),
            user_role: "CONSUMER".into(),
            verified: true,
        }
    }

    #[test]
    fn test_file_backend_uses_configured_directory() {
        let dir = TempDir::new().unwrap();
        let config = SessionConfig {
            backend: SessionBackend::File,
            directory: Some(dir.path().to_string_lossy().into_owned()),
            storage_key: "ctx".into(),
        };
        build_session_store(&config).save(Some(&session()));
        assert!(dir.path().join("ctx.json").exists());
        assert_eq!(build_session_store(&config).load(), Some(session()));
    }

    #[test]
    fn test_context_shares_store_with_api() {
        let config = Config {
            api: ApiConfig::with_base_url("http://localhost:8080"),
            session: SessionConfig { backend: SessionBackend::Memory, ..SessionConfig::default() },
            ..Config::default()
        };
        let context = ClientContext::from_config(&config).unwrap();
        context.sessions.save(Some(&session()));
        assert!(context.api.is_authenticated());
    }

    #[test]
    fn test_context_rejects_malformed_base_url() {
        let config = Config {
            api: ApiConfig::with_base_url("localhost:8080/api"),
            session: SessionConfig { backend: SessionBackend::Memory, ..SessionConfig::default() },
            ..Config::default()
        };
        assert!(matches!(ClientContext::from_config(&config), Err(ApiError::Config(_))));
    }
}
