//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::NOT_FOUND_PHRASES;

/// Main error type for non-request concerns (config, persistence, setup)
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum PromoHubError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for PromoHub setup operations
pub type Result<T> = std::result::Result<T, PromoHubError>;

/// Categories of API failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Backend could not be reached at all
    Network,
    /// 401/403
    Authentication,
    /// 404
    NotFound,
    /// Other 4xx
    Client,
    /// 5xx
    Server,
    /// `success: false` envelope or an unmappable payload
    Application,
    /// Misconfiguration or programmer error
    Config,
}

/// Classified failure of an API operation.
///
/// `Display` renders only the human-readable message so callers can show it
/// to users unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ApiError {
    /// Connection refused, DNS failure, TLS failure and the like.
    #[error("{message}")]
    Transport { message: String },

    /// Non-2xx response.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// `{ "success": false }` envelope, usually with a 2xx status.
    #[error("{message}")]
    Envelope { status: u16, message: String },

    /// The payload was delivered but does not match the expected shape.
    #[error("{message}")]
    Decode { status: u16, message: String },

    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Human-readable message
    pub fn message(&self) -> &str {
        match self {
            Self::Transport { message }
            | Self::Http { message, .. }
            | Self::Envelope { message, .. }
            | Self::Decode { message, .. } => message,
            Self::Config(message) | Self::Internal(message) => message,
        }
    }

    /// HTTP status attached to the failure, if a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } | Self::Envelope { status, .. } | Self::Decode { status, .. } => {
                Some(*status)
            }
            Self::Transport { .. } | Self::Config(_) | Self::Internal(_) => None,
        }
    }

    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Transport { .. } => ApiErrorCategory::Network,
            Self::Http { status, .. } => match status {
                401 | 403 => ApiErrorCategory::Authentication,
                404 => ApiErrorCategory::NotFound,
                500..=599 => ApiErrorCategory::Server,
                _ => ApiErrorCategory::Client,
            },
            Self::Envelope { .. } | Self::Decode { .. } => ApiErrorCategory::Application,
            Self::Config(_) | Self::Internal(_) => ApiErrorCategory::Config,
        }
    }

    /// Whether the message text reads like a "not found" condition.
    ///
    /// Some backends wrap missing routes in a 200 envelope or a 400/500, so
    /// the status alone is not enough to recognise them.
    pub fn is_not_found_like(&self) -> bool {
        let lower = self.message().to_ascii_lowercase();
        NOT_FOUND_PHRASES.iter().any(|phrase| lower.contains(phrase))
    }

    /// True for a 401 response
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401, .. })
    }
}

impl From<PromoHubError> for ApiError {
    fn from(err: PromoHubError) -> Self {
        match err {
            PromoHubError::Config(message) | PromoHubError::InvalidInput(message) => {
                Self::Config(message)
            }
            PromoHubError::Network(_) => {
                Self::Transport { message: crate::constants::BACKEND_UNREACHABLE_MESSAGE.into() }
            }
            PromoHubError::Storage(message)
            | PromoHubError::Serialization(message)
            | PromoHubError::Internal(message) => Self::Internal(message),
        }
    }
}
