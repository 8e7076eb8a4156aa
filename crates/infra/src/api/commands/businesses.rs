//! Businesses and their verification workflow

use promohub_core::find_owned_business;
use promohub_domain::{
    routes, ApiError, Business, BusinessCreateRequest, BusinessVerification,
    BusinessVerificationRequest, HttpMethod, LookupSource, OwnedBusiness, RequestOptions,
};
use serde_json::json;
use tracing::{info, instrument};

use super::{json_request, PromoHubApi};

impl PromoHubApi {
    /// All businesses; array and page answers both yield a list
    pub async fn list_businesses(&self) -> Result<Vec<Business>, ApiError> {
        self.fetch_items(routes::BUSINESSES, RequestOptions::get().public()).await
    }

    pub async fn get_business(&self, id: i64) -> Result<Business, ApiError> {
        self.fetch_as(&routes::item(routes::BUSINESSES, id), RequestOptions::get().public())
            .await
    }

    pub async fn create_business(&self, request: &BusinessCreateRequest) -> Result<Business, ApiError> {
        self.fetch_as(routes::BUSINESSES, json_request(HttpMethod::Post, request)?).await
    }

    pub async fn delete_business(&self, id: i64) -> Result<(), ApiError> {
        self.send_unit(&routes::item(routes::BUSINESSES, id), RequestOptions::delete()).await
    }

    /// The signed-in owner's business.
    ///
    /// `owner_id` defaults to the stored session's user. The result records
    /// whether it came from a direct route or the full-collection scan.
    #[instrument(skip(self))]
    pub async fn current_user_business(&self, owner_id: Option<i64>) -> Result<OwnedBusiness, ApiError> {
        let owner_id = owner_id.or_else(|| self.current_session().map(|session| session.user_id));
        let owned = find_owned_business(self.client.as_ref(), owner_id).await?;
        if owned.source == LookupSource::CollectionScan {
            info!(business_id = owned.business.id, "Business found by collection scan");
        }
        Ok(owned)
    }

    pub async fn request_business_verification(
        &self,
        request: &BusinessVerificationRequest,
    ) -> Result<BusinessVerification, ApiError> {
        let options = json_request(HttpMethod::Post, request)?;
        self.fetch_as(routes::BUSINESS_VERIFICATION, options).await
    }

    /// Latest verification record of a business
    pub async fn business_verification(&self, business_id: i64) -> Result<BusinessVerification, ApiError> {
        let path = routes::item(&format!("{}/business", routes::BUSINESS_VERIFICATION), business_id);
        self.fetch_as(&path, RequestOptions::get()).await
    }

    pub async fn approve_business_verification(&self, id: i64) -> Result<BusinessVerification, ApiError> {
        let path = routes::item_action(routes::BUSINESS_VERIFICATION, id, "approve");
        self.fetch_as(&path, RequestOptions::post()).await
    }

    pub async fn reject_business_verification(
        &self,
        id: i64,
        notes: &str,
    ) -> Result<BusinessVerification, ApiError> {
        let path = routes::item_action(routes::BUSINESS_VERIFICATION, id, "reject");
        let options = json_request(HttpMethod::Post, &json!({ "reviewNotes": notes }))?;
        self.fetch_as(&path, options).await
    }
}
