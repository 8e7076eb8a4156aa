//! Domain types and models

pub mod analytics;
pub mod de;
pub mod business;
pub mod envelope;
pub mod event;
pub mod promotion;
pub mod report;
pub mod request;
pub mod session;
pub mod user;

pub use analytics::{BusinessAnalytics, PlatformAnalytics, SecurityAuditLog};
pub use business::{
    Business, BusinessCreateRequest, BusinessVerification, BusinessVerificationRequest,
    LookupSource, OwnedBusiness,
};
pub use envelope::{ApiResponse, Page};
pub use event::{Event, EventRequest};
pub use promotion::{Category, Promotion, PromotionEngagement, PromotionRequest, SavedPromotion};
pub use report::{Report, ReportRequest};
pub use request::{HttpMethod, RequestOptions};
pub use session::Session;
pub use user::{
    ChangePasswordRequest, LoginRequest, MfaSetup, NotificationItem, NotificationSubscription,
    NotificationSubscriptionRequest, PasswordResetConfirmRequest, RegisterRequest,
    UpdateUserRequest, User, UserRole,
};
