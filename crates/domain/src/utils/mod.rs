//! Pure normalizers for inconsistent backend data

pub mod discount_type;
pub mod format;
pub mod pagination;
pub mod promotion_status;
