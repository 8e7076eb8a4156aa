//! Backend route table.
//!
//! Operations that have been deployed under more than one route expose an
//! ordered candidate list; the first entry is the primary route.

use std::fmt::Display;

use urlencoding::encode as encode_component;

pub const AUTH_LOGIN: &str = "/api/auth/login";
pub const AUTH_REGISTER: &str = "/api/auth/register";
pub const AUTH_LOGOUT: &str = "/api/auth/logout";
pub const AUTH_REFRESH: &str = "/api/auth/refresh";
pub const AUTH_PASSWORD_RESET_REQUEST: &str = "/api/auth/password-reset/request";
pub const AUTH_PASSWORD_RESET_CONFIRM: &str = "/api/auth/password-reset/confirm";
pub const AUTH_MFA_SETUP: &str = "/api/auth/mfa/setup";
pub const AUTH_MFA_ENABLE: &str = "/api/auth/mfa/enable";
pub const AUTH_MFA_DISABLE: &str = "/api/auth/mfa/disable";

pub const PROMOTIONS: &str = "/api/promotions";
pub const BUSINESS_PROMOTIONS: &str = "/api/business/promotions";
pub const EVENTS: &str = "/api/events";
pub const BUSINESSES: &str = "/api/businesses";
pub const BUSINESS_VERIFICATION: &str = "/api/business-verification";
pub const CATEGORIES: &str = "/api/categories";
pub const LEGACY_CATEGORIES: &str = "/api/promotions/categories";
pub const USERS: &str = "/api/users";
pub const SAVED_PROMOTIONS: &str = "/api/users/saved-promotions";
pub const NOTIFICATIONS: &str = "/api/users/notifications";
pub const NOTIFICATION_SUBSCRIPTIONS: &str = "/api/users/notification-subscriptions";
pub const REPORTS: &str = "/api/reports";
pub const PLATFORM_ANALYTICS: &str = "/api/analytics/platform";
pub const ADMIN: &str = "/api/admin";

/// `POST /api/auth/refresh?refreshToken=<token>`
pub fn refresh(refresh_token: &str) -> String {
    format!("{AUTH_REFRESH}?refreshToken={}", encode_component(refresh_token))
}

/// `<collection>/<id>`
pub fn item(collection: &str, id: impl Display) -> String {
    format!("{collection}/{id}")
}

/// `<collection>/<id>/<action>`
pub fn item_action(collection: &str, id: impl Display, action: &str) -> String {
    format!("{collection}/{id}/{action}")
}

/// `/api/analytics/business/<id>`
pub fn business_analytics(business_id: impl Display) -> String {
    format!("/api/analytics/business/{business_id}")
}

/// `/api/admin/<section>`
pub fn admin(section: &str) -> String {
    format!("{ADMIN}/{section}")
}

/// Append a query string built from `params` (empty params → bare path).
pub fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect();
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}{}", query.join("&"))
}

/// Routes scoped to the caller's identity that return their business.
pub fn current_business_identity_paths() -> Vec<String> {
    vec![
        format!("{BUSINESSES}/me"),
        format!("{BUSINESSES}/my-business"),
        "/api/business/me".to_string(),
    ]
}

/// Routes that look a business up by owner id.
pub fn current_business_owner_paths(owner_id: i64) -> Vec<String> {
    vec![
        format!("{BUSINESSES}/owner/{owner_id}"),
        format!("{BUSINESSES}/user/{owner_id}"),
        with_query(BUSINESSES, &[("ownerId", &owner_id.to_string())]),
    ]
}

/// Candidate routes listing a business's promotions filtered by status.
pub fn business_promotions_by_status_paths(business_id: i64, status: &str) -> Vec<String> {
    let query = [("status", status)];
    vec![
        with_query(BUSINESS_PROMOTIONS, &query),
        with_query(&format!("{BUSINESSES}/{business_id}/promotions"), &query),
        with_query(&format!("{PROMOTIONS}/business/{business_id}"), &query),
    ]
}

/// Candidate routes for the admin promotion review queue.
pub fn admin_promotions_paths() -> Vec<String> {
    vec![admin("promotions/pending"), admin("promotions")]
}
