//! Promotion catalogue, engagement tracking and categories

use promohub_core::{request_with_fallback, resolve};
use promohub_domain::constants::DEFAULT_RETRYABLE_STATUSES;
use promohub_domain::{
    normalize_discount_type, routes, unwrap_items, ApiError, Category, HttpMethod, Page, Promotion,
    PromotionEngagement, PromotionRequest, RequestOptions, VerificationBucket,
};
use tracing::debug;

use super::{json_request, listing_error, PromoHubApi};

/// Catalogue listing filters; unset fields are left out of the query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromotionQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub sort: Option<String>,
}

impl PromotionQuery {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            params.push(("size", size.to_string()));
        }
        let text = [
            ("search", &self.search),
            ("category", &self.category),
            ("location", &self.location),
            ("sort", &self.sort),
        ];
        for (key, value) in text {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                params.push((key, value.to_string()));
            }
        }
        params
    }
}

/// Path with the query string for `params` appended
fn query_path(path: &str, params: &[(&'static str, String)]) -> String {
    let borrowed: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
    routes::with_query(path, &borrowed)
}

impl PromoHubApi {
    /// Public catalogue listing; array and page answers both yield a page
    pub async fn list_promotions(&self, query: &PromotionQuery) -> Result<Page<Promotion>, ApiError> {
        let path = query_path(routes::PROMOTIONS, &query.to_params());
        self.fetch_page(&path, RequestOptions::get().public()).await
    }

    pub async fn get_promotion(&self, id: i64) -> Result<Promotion, ApiError> {
        self.fetch_as(&routes::item(routes::PROMOTIONS, id), RequestOptions::get().public())
            .await
    }

    /// Create a promotion; the discount type is sent in canonical form
    pub async fn create_promotion(&self, request: &PromotionRequest) -> Result<Promotion, ApiError> {
        let options = json_request(HttpMethod::Post, &canonical(request))?;
        self.fetch_as(routes::PROMOTIONS, options).await
    }

    pub async fn update_promotion(&self, id: i64, request: &PromotionRequest) -> Result<Promotion, ApiError> {
        let options = json_request(HttpMethod::Put, &canonical(request))?;
        self.fetch_as(&routes::item(routes::PROMOTIONS, id), options).await
    }

    pub async fn delete_promotion(&self, id: i64) -> Result<(), ApiError> {
        self.send_unit(&routes::item(routes::PROMOTIONS, id), RequestOptions::delete()).await
    }

    pub async fn track_promotion_view(&self, id: i64) -> Result<(), ApiError> {
        self.track(id, "view").await
    }

    pub async fn track_promotion_click(&self, id: i64) -> Result<(), ApiError> {
        self.track(id, "click").await
    }

    pub async fn track_promotion_redeem(&self, id: i64) -> Result<(), ApiError> {
        self.track(id, "redeem").await
    }

    async fn track(&self, id: i64, action: &str) -> Result<(), ApiError> {
        let path = routes::item_action(routes::PROMOTIONS, id, action);
        self.send_unit(&path, RequestOptions::post().public()).await
    }

    pub async fn promotion_engagement(&self, id: i64) -> Result<PromotionEngagement, ApiError> {
        let path = routes::item_action(routes::PROMOTIONS, id, "engagement");
        self.fetch_as(&path, RequestOptions::get()).await
    }

    /// Categories, served by the current route or its legacy alias
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let options = RequestOptions::get().public();
        let value =
            request_with_fallback(self.client.as_ref(), routes::CATEGORIES, routes::LEGACY_CATEGORIES, &options)
                .await?;
        unwrap_items(value).map_err(listing_error)
    }

    /// A business's promotions in one review bucket.
    ///
    /// The listing is filtered locally as well, so backends that ignore the
    /// `status` parameter still yield the right bucket.
    pub async fn business_promotions_by_status(
        &self,
        business_id: i64,
        bucket: VerificationBucket,
    ) -> Result<Vec<Promotion>, ApiError> {
        let paths = routes::business_promotions_by_status_paths(business_id, bucket.query_value());
        let value =
            resolve(self.client.as_ref(), &paths, &RequestOptions::get(), DEFAULT_RETRYABLE_STATUSES).await?;
        let promotions: Vec<Promotion> = unwrap_items(value).map_err(listing_error)?;
        let total = promotions.len();

        let filtered: Vec<Promotion> = promotions
            .into_iter()
            .filter(|promotion| bucket.matches(promotion))
            .filter(|promotion| promotion.business_id == 0 || promotion.business_id == business_id)
            .collect();
        debug!(business_id, bucket = bucket.query_value(), total, kept = filtered.len(), "Filtered business promotions");
        Ok(filtered)
    }
}

fn canonical(request: &PromotionRequest) -> PromotionRequest {
    let mut request = request.clone();
    request.discount_type = request.discount_type.as_deref().map(normalize_discount_type);
    request
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_skips_blank_filters() {
        let query = PromotionQuery {
            page: Some(0),
            size: Some(12),
            search: Some("  ".to_string()),
            category: Some("Food & Drink".to_string()),
            ..PromotionQuery::default()
        };
        assert_eq!(
            query_path(routes::PROMOTIONS, &query.to_params()),
            "/api/promotions?page=0&size=12&category=Food%20%26%20Drink"
        );
        assert_eq!(query_path(routes::PROMOTIONS, &PromotionQuery::default().to_params()), "/api/promotions");
    }

    #[test]
    fn test_canonical_discount_type() {
        let request = PromotionRequest {
            business_id: 1,
            category_id: None,
            category_name: None,
            title: "Two for one".to_string(),
            description: String::new(),
            image_url: None,
            start_date: "2026-01-01".to_string(),
            end_date: "2026-02-01".to_string(),
            promo_code: None,
            discount_type: Some("fixed_amount".to_string()),
            discount_value: 5.0,
            terms_and_conditions: None,
            location: "Kigali".to_string(),
        };
        assert_eq!(canonical(&request).discount_type.as_deref(), Some("FLAT"));
        let untyped = PromotionRequest { discount_type: None, ..request };
        assert_eq!(canonical(&untyped).discount_type, None);
    }
}
