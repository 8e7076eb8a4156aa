//! Port interface for session persistence
//!
//! Every operation is total: storage failures are logged by the adapter and
//! surface as "no session" rather than as errors. Malformed stored data is
//! indistinguishable from an absent session.

use promohub_domain::Session;

/// Durable slot holding at most one [`Session`]
pub trait SessionStore: Send + Sync {
    /// Current session, or `None` if nothing usable is stored
    fn load(&self) -> Option<Session>;

    /// Persist `session`; `None` behaves exactly like [`SessionStore::clear`]
    fn save(&self, session: Option<&Session>);

    /// Remove the stored session
    fn clear(&self);
}
