//! Business profiles and verification

use serde::{Deserialize, Serialize};

use super::de::null_as_default;

/// Business profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Business {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub owner_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub owner_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub business_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contact_email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    pub website_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    pub logo_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub business_verification_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub verified: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    pub verified_at: Option<String>,
}

/// Payload for registering a business
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessCreateRequest {
    pub owner_id: i64,
    pub business_name: String,
    pub description: String,
    pub contact_email: String,
    pub phone_number: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    pub address: String,
    pub logo_url: String,
    pub city: String,
    pub country: String,
}

/// Verification documents submitted by an owner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessVerificationRequest {
    pub business_id: i64,
    pub vat_number: String,
    pub tin_number: String,
    pub owner_national_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_documents_url: Option<String>,
}

/// Verification record as reviewed by admins
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessVerification {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub business_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub business_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub review_notes: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub submitted_at: String,
    pub reviewed_at: Option<String>,
}

/// How the caller's business was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupSource {
    /// An identity-scoped or owner-query route answered directly
    Direct,
    /// Degraded mode: the full collection was fetched and scanned by owner id
    CollectionScan,
}

/// Result of resolving the current user's business
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedBusiness {
    pub business: Business,
    pub source: LookupSource,
}
