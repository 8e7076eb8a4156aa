//! Session persistence

pub mod memory;
pub mod ports;
