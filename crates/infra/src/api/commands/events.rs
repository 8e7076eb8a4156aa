//! Business events

use promohub_domain::{routes, ApiError, Event, EventRequest, HttpMethod, Page, RequestOptions};

use super::{json_request, PromoHubApi};

impl PromoHubApi {
    /// Public event listing; array and page answers both yield a page
    pub async fn list_events(&self, page: Option<u32>, size: Option<u32>) -> Result<Page<Event>, ApiError> {
        let page = page.map(|p| p.to_string());
        let size = size.map(|s| s.to_string());
        let params: Vec<(&str, &str)> = [("page", page.as_deref()), ("size", size.as_deref())]
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect();
        let path = routes::with_query(routes::EVENTS, &params);
        self.fetch_page(&path, RequestOptions::get().public()).await
    }

    pub async fn get_event(&self, id: i64) -> Result<Event, ApiError> {
        self.fetch_as(&routes::item(routes::EVENTS, id), RequestOptions::get().public()).await
    }

    pub async fn create_event(&self, request: &EventRequest) -> Result<Event, ApiError> {
        self.fetch_as(routes::EVENTS, json_request(HttpMethod::Post, request)?).await
    }

    pub async fn update_event(&self, id: i64, request: &EventRequest) -> Result<Event, ApiError> {
        let options = json_request(HttpMethod::Put, request)?;
        self.fetch_as(&routes::item(routes::EVENTS, id), options).await
    }

    pub async fn delete_event(&self, id: i64) -> Result<(), ApiError> {
        self.send_unit(&routes::item(routes::EVENTS, id), RequestOptions::delete()).await
    }
}
