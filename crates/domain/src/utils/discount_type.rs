//! Discount-type canonicalisation.
//!
//! Backends and older clients have spelled the same discount kinds many ways
//! ("fixed", "FIXED_AMOUNT", "flat amount", "Percent"). Everything sent to or
//! compared against the API goes through [`normalize_discount_type`], which
//! maps known synonyms to exactly one token per kind:
//!
//! | kind        | canonical token |
//! |-------------|-----------------|
//! | fixed/flat  | `FLAT`          |
//! | percentage  | `PERCENTAGE`    |
//!
//! Unknown values pass through in their cleaned form (uppercase, runs of
//! punctuation/whitespace collapsed to `_`), so novel backend vocabulary
//! never causes a failure.

use once_cell::sync::Lazy;
use regex::Regex;

/// Canonical token for fixed-amount discounts
pub const FLAT: &str = "FLAT";
/// Canonical token for percentage discounts
pub const PERCENTAGE: &str = "PERCENTAGE";

const FLAT_SYNONYMS: &[&str] = &["FIXED", "FIXED_AMOUNT", "FLAT", "FLAT_AMOUNT", "AMOUNT"];
const PERCENTAGE_SYNONYMS: &[&str] = &["PERCENT", "PERCENTAGE", "PERCENT_OFF", "PCT"];

#[allow(clippy::expect_used)]
static NON_ALPHANUMERIC_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("static pattern is valid"));

/// Recognised discount kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscountKind {
    Flat,
    Percentage,
    /// Cleaned but unrecognised token
    Other(String),
}

impl DiscountKind {
    /// Classify free text
    pub fn parse(value: &str) -> Option<Self> {
        let token = clean(value);
        if token.is_empty() {
            return None;
        }
        Some(if FLAT_SYNONYMS.contains(&token.as_str()) {
            Self::Flat
        } else if PERCENTAGE_SYNONYMS.contains(&token.as_str()) {
            Self::Percentage
        } else {
            Self::Other(token)
        })
    }

    /// Wire token
    pub fn as_token(&self) -> &str {
        match self {
            Self::Flat => FLAT,
            Self::Percentage => PERCENTAGE,
            Self::Other(token) => token,
        }
    }
}

/// Normalize free-text discount type to the API vocabulary.
///
/// Empty or punctuation-only input yields an empty string.
pub fn normalize_discount_type(value: &str) -> String {
    DiscountKind::parse(value).map(|kind| kind.as_token().to_string()).unwrap_or_default()
}

fn clean(value: &str) -> String {
    NON_ALPHANUMERIC_RUN.replace_all(value.trim(), "_").trim_matches('_').to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_synonyms_collapse_to_flat() {
        for input in ["fixed", "FIXED_AMOUNT ,", "Flat amount", "flat-amount", " FLAT "] {
            assert_eq!(normalize_discount_type(input), FLAT, "input {input:?}");
        }
    }

    #[test]
    fn test_percentage_synonyms() {
        assert_eq!(normalize_discount_type("percent"), PERCENTAGE);
        assert_eq!(normalize_discount_type("PERCENTAGE"), PERCENTAGE);
        assert_eq!(normalize_discount_type(" Percent ,"), PERCENTAGE);
    }

    #[test]
    fn test_unknown_values_pass_through_cleaned() {
        assert_eq!(normalize_discount_type("buy one, get one"), "BUY_ONE_GET_ONE");
        assert_eq!(normalize_discount_type("__free--shipping__"), "FREE_SHIPPING");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_discount_type(""), "");
        assert_eq!(normalize_discount_type("  ,, "), "");
        assert!(DiscountKind::parse("--").is_none());
    }

    #[test]
    fn test_idempotent() {
        for input in ["fixed", "percent", "Buy 2 get 1!", "", "flat_amount", "ÄÖ mix"] {
            let once = normalize_discount_type(input);
            assert_eq!(normalize_discount_type(&once), once, "input {input:?}");
        }
    }
}
