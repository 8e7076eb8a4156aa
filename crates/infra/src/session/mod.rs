//! Durable session stores

pub mod file_store;
pub mod keychain_store;

pub use file_store::FileSessionStore;
pub use keychain_store::KeychainSessionStore;
