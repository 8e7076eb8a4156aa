//! Request semantics shared by every API adapter

pub mod ports;
pub mod resolution;
pub mod response;
