//! Transport layer

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
