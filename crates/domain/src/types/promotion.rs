//! Promotion records and requests

use serde::{Deserialize, Serialize};

use super::de::null_as_default;

/// A promotion as returned by the backend.
///
/// Older deployments only fill `status`; newer ones add
/// `verification_status`. Use [`crate::effective_verification_status`] rather
/// than reading either field directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Promotion {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub business_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub business_name: String,
    pub category_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub category_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub promo_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub discount_type: String,
    pub discount_value: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub terms_and_conditions: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub verification_status: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub flagged: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// Payload for creating or updating a promotion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionRequest {
    pub business_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,
    pub discount_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_and_conditions: Option<String>,
    pub location: String,
}

/// Promotion category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
}

/// View/click/redemption counters for one promotion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromotionEngagement {
    #[serde(deserialize_with = "null_as_default")]
    pub promotion_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub views: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub clicks: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub redemptions: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub click_through_rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub redemption_rate: f64,
}

/// Saved-promotion bookmark
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavedPromotion {
    #[serde(deserialize_with = "null_as_default")]
    pub promotion_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub promotion_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub business_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub saved_at: String,
}
