//! # PromoHub Domain
//!
//! Plain data types and pure rules for the PromoHub marketplace client.
//!
//! This crate contains:
//! - Session, envelope, page and marketplace record types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Route tables and constants
//! - Normalizers for inconsistent backend vocabulary
//!
//! ## Architecture
//! - No dependencies on other PromoHub crates
//! - Only external dependencies allowed
//! - No I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod routes;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::discount_type::{normalize_discount_type, DiscountKind};
pub use utils::format::{format_date, format_date_range, format_discount};
pub use utils::pagination::{unwrap_items, unwrap_page};
pub use utils::promotion_status::{
    effective_verification_status, is_approved_promotion, is_pending_promotion,
    is_rejected_promotion, VerificationBucket,
};
