//! Session lifecycle: login, registration, logout and account security

use promohub_domain::{
    routes, ApiError, HttpMethod, LoginRequest, MfaSetup, PasswordResetConfirmRequest,
    RegisterRequest, RequestOptions, Session, UpdateUserRequest, User,
};
use serde_json::json;
use tracing::{debug, info, instrument, warn};

use super::{json_request, PromoHubApi};

impl PromoHubApi {
    /// Authenticate and persist the returned session.
    ///
    /// Sent without credentials even if a stale session is stored.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        let options = json_request(HttpMethod::Post, request)?.public();
        let session: Session = self.fetch_as(routes::AUTH_LOGIN, options).await?;
        self.client.sessions().save(Some(&session));
        info!(user_id = session.user_id, "Signed in");
        Ok(session)
    }

    /// Create an account and persist the returned session.
    #[instrument(skip(self, request), fields(email = %request.email, role = %request.role))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<Session, ApiError> {
        let options = json_request(HttpMethod::Post, request)?.public();
        let session: Session = self.fetch_as(routes::AUTH_REGISTER, options).await?;
        self.client.sessions().save(Some(&session));
        info!(user_id = session.user_id, "Registered");
        Ok(session)
    }

    /// Revoke the refresh token server-side and drop the local session.
    ///
    /// The local session is cleared whatever the outcome; the server's error,
    /// if any, is still returned.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let sessions = self.client.sessions();
        let result = match sessions.load() {
            Some(session) => {
                let body = json!({ "refreshToken": session.refresh_token });
                self.send_unit(routes::AUTH_LOGOUT, RequestOptions::with_json(HttpMethod::Post, body))
                    .await
            }
            None => Ok(()),
        };
        sessions.clear();

        if let Err(err) = &result {
            warn!(error = %err, "Logout request failed; local session cleared anyway");
        }
        result
    }

    /// Currently stored session, if any
    pub fn current_session(&self) -> Option<Session> {
        self.client.sessions().load()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_session().is_some()
    }

    /// Update a user's profile.
    ///
    /// When the stored session belongs to `id`, its cached full name is
    /// rewritten to the updated value.
    pub async fn update_user(&self, id: i64, request: &UpdateUserRequest) -> Result<User, ApiError> {
        let options = json_request(HttpMethod::Put, request)?;
        let user: User = self.fetch_as(&routes::item(routes::USERS, id), options).await?;

        let sessions = self.client.sessions();
        if let Some(mut session) = sessions.load() {
            if session.user_id == id {
                session.full_name = if user.full_name.is_empty() {
                    request.full_name.clone()
                } else {
                    user.full_name.clone()
                };
                sessions.save(Some(&session));
                debug!(user_id = id, "Session profile rewritten");
            }
        }
        Ok(user)
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        let options = json_request(HttpMethod::Post, &json!({ "email": email }))?.public();
        self.send_unit(routes::AUTH_PASSWORD_RESET_REQUEST, options).await
    }

    pub async fn confirm_password_reset(&self, request: &PasswordResetConfirmRequest) -> Result<(), ApiError> {
        let options = json_request(HttpMethod::Post, request)?.public();
        self.send_unit(routes::AUTH_PASSWORD_RESET_CONFIRM, options).await
    }

    /// Start MFA enrollment; returns the shared secret and provisioning URL
    pub async fn setup_mfa(&self) -> Result<MfaSetup, ApiError> {
        self.fetch_as(routes::AUTH_MFA_SETUP, RequestOptions::post()).await
    }

    /// Confirm MFA enrollment with a one-time code
    pub async fn enable_mfa(&self, code: &str) -> Result<(), ApiError> {
        let options = json_request(HttpMethod::Post, &json!({ "code": code }))?;
        self.send_unit(routes::AUTH_MFA_ENABLE, options).await
    }

    pub async fn disable_mfa(&self, code: &str) -> Result<(), ApiError> {
        let options = json_request(HttpMethod::Post, &json!({ "code": code }))?;
        self.send_unit(routes::AUTH_MFA_DISABLE, options).await
    }
}
