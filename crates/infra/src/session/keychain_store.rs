//! Session persisted in the platform keychain

use keyring::{Entry, Error as KeyringError};
use promohub_core::SessionStore;
use promohub_domain::{PromoHubError, Session};
use tracing::{debug, warn};

use crate::errors::InfraError;

/// Stores the serialized session as the password of one keychain entry
/// (`service_name` / `storage_key`).
#[derive(Debug, Clone)]
pub struct KeychainSessionStore {
    service_name: String,
    account: String,
}

impl KeychainSessionStore {
    pub fn new(service_name: impl Into<String>, account: impl Into<String>) -> Self {
        Self { service_name: service_name.into(), account: account.into() }
    }

    fn entry(&self) -> Result<Entry, PromoHubError> {
        Entry::new(&self.service_name, &self.account).map_err(|e| InfraError::from(e).into())
    }

    fn read(&self) -> Result<Option<Session>, PromoHubError> {
        let secret = match self.entry()?.get_password() {
            Ok(secret) => secret,
            Err(KeyringError::NoEntry) => return Ok(None),
            Err(err) => return Err(InfraError::from(err).into()),
        };
        let session = serde_json::from_str(&secret).map_err(InfraError::from)?;
        Ok(Some(session))
    }

    fn write(&self, session: &Session) -> Result<(), PromoHubError> {
        let secret = serde_json::to_string(session).map_err(InfraError::from)?;
        self.entry()?.set_password(&secret).map_err(InfraError::from)?;
        Ok(())
    }

    fn remove(&self) -> Result<(), PromoHubError> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(KeyringError::NoEntry) => Ok(()),
            Err(err) => Err(InfraError::from(err).into()),
        }
    }
}

impl SessionStore for KeychainSessionStore {
    fn load(&self) -> Option<Session> {
        match self.read() {
            Ok(session) => session,
            Err(err) => {
                warn!(service = %self.service_name, error = %err, "Ignoring unreadable keychain session");
                None
            }
        }
    }

    fn save(&self, session: Option<&Session>) {
        let Some(session) = session else {
            self.clear();
            return;
        };
        match self.write(session) {
            Ok(()) => debug!(service = %self.service_name, "Session saved to keychain"),
            Err(err) => warn!(service = %self.service_name, error = %err, "Failed to save session"),
        }
    }

    fn clear(&self) {
        if let Err(err) = self.remove() {
            warn!(service = %self.service_name, error = %err, "Failed to clear keychain session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Platform keychains are unavailable on CI; only the total contract is
    // checked here.
    #[test]
    #[ignore = "requires a platform keychain"]
    fn test_keychain_round_trip() {
        let store = KeychainSessionStore::new("PromoHub.session.test", "round-trip");
        let session: Session = serde_json::from_value(serde_json::json!({
            "accessToken": "a",
            "refreshToken": "r",
            "userId": 1
        }))
        .unwrap();

        store.save(Some(&session));
        assert_eq!(store.load(), Some(session));
        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_operations_never_panic() {
        let store = KeychainSessionStore::new("PromoHub.session.test", "total");
        store.clear();
        let _ = store.load();
    }
}
