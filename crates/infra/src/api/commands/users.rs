//! Users, saved promotions and notifications

use promohub_domain::{
    routes, ApiError, ChangePasswordRequest, HttpMethod, NotificationItem,
    NotificationSubscription, NotificationSubscriptionRequest, RequestOptions, SavedPromotion, User,
};

use super::{json_request, PromoHubApi};

impl PromoHubApi {
    pub async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.fetch_as(&routes::item(routes::USERS, id), RequestOptions::get()).await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<User, ApiError> {
        let path = routes::item(&format!("{}/email", routes::USERS), urlencoding::encode(email));
        self.fetch_as(&path, RequestOptions::get()).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.fetch_items(routes::USERS, RequestOptions::get()).await
    }

    pub async fn verify_user(&self, id: i64) -> Result<User, ApiError> {
        let path = routes::item_action(routes::USERS, id, "verify");
        self.fetch_as(&path, RequestOptions::method(HttpMethod::Put)).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.send_unit(&routes::item(routes::USERS, id), RequestOptions::delete()).await
    }

    pub async fn change_password(&self, id: i64, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        let path = routes::item_action(routes::USERS, id, "password");
        self.send_unit(&path, json_request(HttpMethod::Put, request)?).await
    }

    pub async fn saved_promotions(&self) -> Result<Vec<SavedPromotion>, ApiError> {
        self.fetch_items(routes::SAVED_PROMOTIONS, RequestOptions::get()).await
    }

    pub async fn save_promotion(&self, promotion_id: i64) -> Result<(), ApiError> {
        let path = routes::item(routes::SAVED_PROMOTIONS, promotion_id);
        self.send_unit(&path, RequestOptions::post()).await
    }

    pub async fn remove_saved_promotion(&self, promotion_id: i64) -> Result<(), ApiError> {
        let path = routes::item(routes::SAVED_PROMOTIONS, promotion_id);
        self.send_unit(&path, RequestOptions::delete()).await
    }

    pub async fn notifications(&self) -> Result<Vec<NotificationItem>, ApiError> {
        self.fetch_items(routes::NOTIFICATIONS, RequestOptions::get()).await
    }

    pub async fn mark_notification_read(&self, id: i64) -> Result<(), ApiError> {
        let path = routes::item_action(routes::NOTIFICATIONS, id, "read");
        self.send_unit(&path, RequestOptions::method(HttpMethod::Put)).await
    }

    pub async fn notification_subscriptions(&self) -> Result<Vec<NotificationSubscription>, ApiError> {
        self.fetch_items(routes::NOTIFICATION_SUBSCRIPTIONS, RequestOptions::get()).await
    }

    pub async fn create_notification_subscription(
        &self,
        request: &NotificationSubscriptionRequest,
    ) -> Result<NotificationSubscription, ApiError> {
        let options = json_request(HttpMethod::Post, request)?;
        self.fetch_as(routes::NOTIFICATION_SUBSCRIPTIONS, options).await
    }

    pub async fn delete_notification_subscription(&self, id: i64) -> Result<(), ApiError> {
        let path = routes::item(routes::NOTIFICATION_SUBSCRIPTIONS, id);
        self.send_unit(&path, RequestOptions::delete()).await
    }
}
