//! Moderation reports

use serde::{Deserialize, Serialize};

use super::de::null_as_default;

/// A user's report against a promotion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub promotion_id: i64,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Report as seen by moderators
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Report {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub promotion_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub promotion_title: String,
    pub reporter_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub reason: String,
    pub details: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub resolution_notes: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    pub resolved_at: Option<String>,
}
