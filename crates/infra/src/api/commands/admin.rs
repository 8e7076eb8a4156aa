//! Analytics and admin review queues

use promohub_core::resolve;
use promohub_domain::constants::DEFAULT_RETRYABLE_STATUSES;
use promohub_domain::{
    routes, unwrap_items, ApiError, Business, BusinessAnalytics, Event, HttpMethod,
    PlatformAnalytics, Promotion, RequestOptions, SecurityAuditLog,
};
use serde_json::json;

use super::{json_request, listing_error, PromoHubApi};

impl PromoHubApi {
    pub async fn platform_analytics(&self) -> Result<PlatformAnalytics, ApiError> {
        self.fetch_as(routes::PLATFORM_ANALYTICS, RequestOptions::get()).await
    }

    pub async fn business_analytics(&self, business_id: i64) -> Result<BusinessAnalytics, ApiError> {
        self.fetch_as(&routes::business_analytics(business_id), RequestOptions::get()).await
    }

    /// Promotions awaiting review, from the pending queue or the full admin list
    pub async fn admin_promotions(&self) -> Result<Vec<Promotion>, ApiError> {
        let paths = routes::admin_promotions_paths();
        let value =
            resolve(self.client.as_ref(), &paths, &RequestOptions::get(), DEFAULT_RETRYABLE_STATUSES).await?;
        unwrap_items(value).map_err(listing_error)
    }

    pub async fn admin_events(&self) -> Result<Vec<Event>, ApiError> {
        self.fetch_items(&routes::admin("events"), RequestOptions::get()).await
    }

    pub async fn admin_businesses(&self) -> Result<Vec<Business>, ApiError> {
        self.fetch_items(&routes::admin("businesses"), RequestOptions::get()).await
    }

    pub async fn approve_promotion(&self, id: i64) -> Result<Promotion, ApiError> {
        let path = routes::admin(&format!("promotions/{id}/approve"));
        self.fetch_as(&path, RequestOptions::post()).await
    }

    pub async fn reject_promotion(&self, id: i64, notes: &str) -> Result<Promotion, ApiError> {
        let path = routes::admin(&format!("promotions/{id}/reject"));
        let options = json_request(HttpMethod::Post, &json!({ "notes": notes }))?;
        self.fetch_as(&path, options).await
    }

    pub async fn security_audit_logs(&self) -> Result<Vec<SecurityAuditLog>, ApiError> {
        self.fetch_items(&routes::admin("security/audit-logs"), RequestOptions::get()).await
    }
}
