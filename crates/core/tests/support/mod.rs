//! Shared test helpers for `promohub-core` integration tests.
//!
//! A scripted executor stands in for the HTTP layer so resolution tests can
//! focus on which routes are tried and in what order.

pub mod executor;
