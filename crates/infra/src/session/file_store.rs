//! Session persisted as a JSON file named after the storage key

use std::path::{Path, PathBuf};

use promohub_core::SessionStore;
use promohub_domain::{PromoHubError, Session};
use tracing::{debug, warn};

use crate::errors::InfraError;

/// Stores the session at `<directory>/<storage_key>.json`.
///
/// Unreadable or malformed files load as "no session".
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(directory: impl AsRef<Path>, storage_key: &str) -> Self {
        Self { path: directory.as_ref().join(format!("{storage_key}.json")) }
    }

    /// Location of the session file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<Session>, PromoHubError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(InfraError::from(err).into()),
        };
        let session = serde_json::from_str(&contents).map_err(InfraError::from)?;
        Ok(Some(session))
    }

    fn write(&self, session: &Session) -> Result<(), PromoHubError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(InfraError::from)?;
        }
        let contents = serde_json::to_string(session).map_err(InfraError::from)?;
        std::fs::write(&self.path, contents).map_err(InfraError::from)?;
        Ok(())
    }

    fn remove(&self) -> Result<(), PromoHubError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(InfraError::from(err).into()),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Session> {
        match self.read() {
            Ok(session) => session,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Ignoring unreadable session file");
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
            Ok(()) => debug!(path = %self.path.display(), "Session saved"),
            Err(err) => warn!(path = %self.path.display(), error = %err, "Failed to save session"),
        }
    }

    fn clear(&self) {
        if let Err(err) = self.remove() {
            warn!(path = %self.path.display(), error = %err, "Failed to clear session");
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn session() -> Session {
        serde_json::from_value(serde_json::json!({
            "accessToken": "a",
            "refreshToken": "r",
            "tokenType": "Bearer",
            "userId": 3,
            "email": "owner@example.com",
            "fullName": "Owner",
            "userRole": "BUSINESS_OWNER",
            "verified": true
        }))
        .unwrap()
    }

    #[test]
    fn test_round_trip_and_clear() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path(), "promohub.session");

        assert!(store.load().is_none());
        store.save(Some(&session()));
        assert_eq!(store.load(), Some(session()));

        store.save(None);
        assert!(store.load().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_malformed_file_is_absent() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path(), "promohub.session");
        std::fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().is_none());

        std::fs::write(store.path(), r#"{"accessToken": "only"}"#).unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_missing_directory_is_created_on_save() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested/deeper"), "s");
        store.save(Some(&session()));
        assert!(store.load().is_some());
    }

    #[test]
    fn test_clear_without_file_is_harmless() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path(), "s");
        store.clear();
        assert!(store.load().is_none());
    }
}
