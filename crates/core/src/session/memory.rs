//! Process-local session store

use parking_lot::RwLock;
use promohub_domain::Session;

use super::ports::SessionStore;

/// Session held in memory only; lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    slot: RwLock<Option<Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `session`
    pub fn with_session(session: Session) -> Self {
        Self { slot: RwLock::new(Some(session)) }
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.slot.read().clone()
    }

    fn save(&self, session: Option<&Session>) {
        *self.slot.write() = session.cloned();
    }

    fn clear(&self) {
        *self.slot.write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(token: &str) -> Session {
        serde_json::from_value(serde_json::json!({
            "accessToken": token,
            "refreshToken": "r",
            "userId": 1
        }))
        .unwrap()
    }

    #[test]
    fn test_save_then_load() {
        let store = InMemorySessionStore::new();
        assert!(store.load().is_none());
        store.save(Some(&session("a")));
        assert_eq!(store.load().unwrap().access_token, "a");
    }

    #[test]
    fn test_save_none_clears() {
        let store = InMemorySessionStore::with_session(session("a"));
        store.save(None);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = InMemorySessionStore::with_session(session("a"));
        store.clear();
        store.clear();
        assert!(store.load().is_none());
    }
}
