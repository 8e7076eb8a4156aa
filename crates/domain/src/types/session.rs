//! Authentication session
//!
//! The access/refresh token pair plus cached identity fields, exactly as the
//! backend returns them from login, registration and refresh.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::de::null_as_default;
use crate::constants::DEFAULT_TOKEN_TYPE;

/// Current authentication session
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: String,
    /// Empty when the backend did not issue (or rotate) a refresh token
    #[serde(default, deserialize_with = "null_as_default")]
    pub refresh_token: String,
    #[serde(default = "default_token_type", deserialize_with = "null_as_default")]
    pub token_type: String,
    pub user_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub verified: bool,
}

impl Session {
    /// Value for the `Authorization` header.
    ///
    /// Falls back to `Bearer` when the backend omitted the token type.
    pub fn authorization_header(&self) -> String {
        let token_type = self.token_type.trim();
        let token_type = if token_type.is_empty() { DEFAULT_TOKEN_TYPE } else { token_type };
        format!("{token_type} {}", self.access_token)
    }

    /// Refresh token, if one was issued
    pub fn refresh_token(&self) -> Option<&str> {
        let token = self.refresh_token.trim();
        (!token.is_empty()).then_some(token)
    }

    /// Parsed role, if the backend used a known value
    pub fn role(&self) -> Option<super::UserRole> {
        self.user_role.parse().ok()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("user_role", &self.user_role)
            .field("verified", &self.verified)
            .finish()
    }
}

fn default_token_type() -> String {
    DEFAULT_TOKEN_TYPE.to_string()
}
