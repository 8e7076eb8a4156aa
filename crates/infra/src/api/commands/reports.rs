//! Promotion abuse reports

use promohub_domain::{routes, ApiError, HttpMethod, Report, ReportRequest, RequestOptions};
use serde_json::json;

use super::{json_request, PromoHubApi};

impl PromoHubApi {
    /// Report a promotion
    pub async fn create_report(&self, request: &ReportRequest) -> Result<Report, ApiError> {
        self.fetch_as(routes::REPORTS, json_request(HttpMethod::Post, request)?).await
    }

    pub async fn list_reports(&self) -> Result<Vec<Report>, ApiError> {
        self.fetch_items(routes::REPORTS, RequestOptions::get()).await
    }

    pub async fn get_report(&self, id: i64) -> Result<Report, ApiError> {
        self.fetch_as(&routes::item(routes::REPORTS, id), RequestOptions::get()).await
    }

    pub async fn resolve_report(&self, id: i64, notes: &str) -> Result<Report, ApiError> {
        let path = routes::item_action(routes::REPORTS, id, "resolve");
        let options = json_request(HttpMethod::Put, &json!({ "resolutionNotes": notes }))?;
        self.fetch_as(&path, options).await
    }
}
