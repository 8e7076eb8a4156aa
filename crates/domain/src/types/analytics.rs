//! Analytics snapshots and audit records

use serde::{Deserialize, Serialize};

use super::de::null_as_default;

/// Platform-wide counters for the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformAnalytics {
    #[serde(deserialize_with = "null_as_default")]
    pub total_users: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_businesses: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub verified_businesses: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub pending_businesses: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub rejected_businesses: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_promotions: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub pending_promotions: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub approved_promotions: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub rejected_promotions: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub active_promotions: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub flagged_promotions: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_reports: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub open_reports: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub resolved_reports: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub promotion_views: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub promotion_clicks: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub promotion_redemptions: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub click_through_rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub redemption_rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub platform_trust_score: f64,
}

/// Per-business counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessAnalytics {
    #[serde(deserialize_with = "null_as_default")]
    pub business_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_promotions: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub active_promotions: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub promotion_views: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub promotion_clicks: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub promotion_redemptions: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub click_through_rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub redemption_rate: f64,
}

/// Security audit trail entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecurityAuditLog {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub user_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    pub details: Option<String>,
    pub ip_address: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
}
