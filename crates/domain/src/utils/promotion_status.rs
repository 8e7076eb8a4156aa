//! Promotion verification status derivation.
//!
//! A promotion carries a legacy `status` and a newer `verificationStatus`.
//! The effective status prefers `verificationStatus` whenever it is
//! non-blank. The three predicates below are mutually exclusive but not
//! exhaustive (`DRAFT`, `EXPIRED`, ... match none of them).

use crate::types::Promotion;

/// Review bucket of a promotion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationBucket {
    Pending,
    Approved,
    Rejected,
}

impl VerificationBucket {
    /// Status value to request from status-filtered endpoints
    pub fn query_value(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Whether `promotion` falls into this bucket
    pub fn matches(self, promotion: &Promotion) -> bool {
        bucket_of(promotion) == Some(self)
    }
}

/// Effective status: trimmed, uppercased `verificationStatus` if non-empty,
/// otherwise the trimmed, uppercased `status`.
pub fn effective_verification_status(promotion: &Promotion) -> String {
    let verification = promotion
        .verification_status
        .as_deref()
        .map(normalize_status)
        .unwrap_or_default();
    if verification.is_empty() {
        normalize_status(&promotion.status)
    } else {
        verification
    }
}

/// `PENDING` or `SUBMITTED`
pub fn is_pending_promotion(promotion: &Promotion) -> bool {
    bucket_of(promotion) == Some(VerificationBucket::Pending)
}

/// `APPROVED` or `ACTIVE`
pub fn is_approved_promotion(promotion: &Promotion) -> bool {
    bucket_of(promotion) == Some(VerificationBucket::Approved)
}

/// `REJECTED`
pub fn is_rejected_promotion(promotion: &Promotion) -> bool {
    bucket_of(promotion) == Some(VerificationBucket::Rejected)
}

/// Bucket for the effective status, if any
pub fn bucket_of(promotion: &Promotion) -> Option<VerificationBucket> {
    match effective_verification_status(promotion).as_str() {
        "PENDING" | "SUBMITTED" => Some(VerificationBucket::Pending),
        "APPROVED" | "ACTIVE" => Some(VerificationBucket::Approved),
        "REJECTED" => Some(VerificationBucket::Rejected),
        _ => None,
    }
}

fn normalize_status(value: &str) -> String {
    value.trim().to_ascii_uppercase()
}
