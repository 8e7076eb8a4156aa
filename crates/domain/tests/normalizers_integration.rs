//! Integration tests for the domain normalizers
//!
//! Exercises the vocabulary rules the way the API layer consumes them:
//! decoded backend records in, canonical values out.

use promohub_domain::{
    effective_verification_status, format_discount, is_approved_promotion, is_pending_promotion,
    is_rejected_promotion, normalize_discount_type, unwrap_items, unwrap_page, Business, Page,
    Promotion, Session, VerificationBucket,
};
use serde_json::json;

fn promotion(status: &str, verification_status: Option<&str>) -> Promotion {
    Promotion {
        id: 1,
        title: "Spring sale".into(),
        status: status.into(),
        verification_status: verification_status.map(str::to_string),
        ..Promotion::default()
    }
}

// ============================================================================
// Discount types
// ============================================================================

#[test]
fn test_discount_type_is_idempotent_for_every_known_spelling() {
    let inputs = [
        "fixed", "FIXED", "fixed amount", "FIXED_AMOUNT", "flat", "Flat-Amount", "percent",
        "Percentage", "PERCENT_OFF", "bogo", "free shipping", "",
    ];
    for input in inputs {
        let once = normalize_discount_type(input);
        assert_eq!(normalize_discount_type(&once), once, "input {input:?}");
    }
}

#[test]
fn test_fixed_and_flat_share_one_token() {
    let fixed = normalize_discount_type("fixed");
    let flat = normalize_discount_type("FLAT_AMOUNT");
    assert_eq!(fixed, flat);
    assert_eq!(fixed, "FLAT");
    assert_eq!(normalize_discount_type("percent"), "PERCENTAGE");
}

#[test]
fn test_promotion_payload_round_trips_through_display() {
    let payload = json!({
        "id": 9,
        "title": "Ten off",
        "discountType": "fixed_amount",
        "discountValue": 10,
        "status": "ACTIVE"
    });
    let promotion: Promotion = serde_json::from_value(payload).unwrap();
    let canonical = normalize_discount_type(&promotion.discount_type);
    assert_eq!(format_discount(Some(&canonical), promotion.discount_value), "10 OFF");
}

// ============================================================================
// Verification status
// ============================================================================

#[test]
fn test_verification_status_prefers_newer_field() {
    let p = promotion("ACTIVE", Some(" rejected "));
    assert_eq!(effective_verification_status(&p), "REJECTED");
    assert!(is_rejected_promotion(&p));
    assert!(!is_approved_promotion(&p));
}

#[test]
fn test_blank_verification_status_falls_back_to_status() {
    let p = promotion("submitted", Some("   "));
    assert!(is_pending_promotion(&p));
    assert!(VerificationBucket::Pending.matches(&p));
}

#[test]
fn test_predicates_are_mutually_exclusive() {
    let statuses = ["PENDING", "SUBMITTED", "APPROVED", "ACTIVE", "REJECTED", "DRAFT", "EXPIRED", ""];
    for status in statuses {
        let p = promotion(status, None);
        let hits = [is_pending_promotion(&p), is_approved_promotion(&p), is_rejected_promotion(&p)]
            .into_iter()
            .filter(|hit| *hit)
            .count();
        assert!(hits <= 1, "status {status:?} matched {hits} buckets");
    }
}

// ============================================================================
// Listing shapes
// ============================================================================

#[test]
fn test_bare_promotion_list_becomes_page() {
    let payload = json!([
        {"id": 1, "title": "a"},
        {"id": 2, "title": "b"},
        {"id": 3, "title": "c"}
    ]);
    let page: Page<Promotion> = unwrap_page(payload).unwrap();
    assert_eq!(page.content.len(), 3);
    assert_eq!(
        (page.page_number, page.page_size, page.total_elements, page.total_pages, page.last),
        (0, 3, 3, 1, true)
    );
}

#[test]
fn test_server_page_metadata_is_kept() {
    let payload = json!({
        "content": [{"id": 4}],
        "pageNumber": 1,
        "pageSize": 1,
        "totalElements": 2,
        "totalPages": 2,
        "last": true
    });
    let page: Page<Promotion> = unwrap_page(payload.clone()).unwrap();
    assert_eq!(page.page_number, 1);
    assert_eq!(page.total_pages, 2);

    let items: Vec<Promotion> = unwrap_items(payload).unwrap();
    assert_eq!(items[0].id, 4);
}

// ============================================================================
// Session
// ============================================================================

#[test]
fn test_session_debug_never_prints_tokens() {
    let session: Session = serde_json::from_value(json!({
        "accessToken": "secret-access",
        "refreshToken": "secret-refresh",
        "userId": 5,
        "email": "a@b.c"
    }))
    .unwrap();
    let rendered = format!("{session:?}");
    assert!(!rendered.contains("secret-access"));
    assert!(!rendered.contains("secret-refresh"));
    assert_eq!(session.authorization_header(), "Bearer secret-access");
}

// ============================================================================
// Null-valued fields
// ============================================================================

#[test]
fn test_promotion_with_null_strings_decodes() {
    let promotion: Promotion = serde_json::from_value(json!({
        "id": 1,
        "title": "X",
        "status": "ACTIVE",
        "promoCode": null,
        "imageUrl": null,
        "discountType": null,
        "flagged": null
    }))
    .unwrap();
    assert_eq!(promotion.promo_code, "");
    assert_eq!(promotion.image_url, "");
    assert!(!promotion.flagged);
    assert!(is_approved_promotion(&promotion));
}

#[test]
fn test_null_status_fields_fall_into_no_bucket() {
    let promotion: Promotion =
        serde_json::from_value(json!({"id": 2, "status": null, "verificationStatus": null})).unwrap();
    assert_eq!(effective_verification_status(&promotion), "");
    assert!(!is_pending_promotion(&promotion));
}

#[test]
fn test_listing_survives_records_with_null_fields() {
    let businesses: Vec<Business> = unwrap_items(json!([
        {"id": 3, "ownerId": 7, "businessName": "Cafe", "description": null, "phoneNumber": null},
        {"id": 4, "ownerId": null, "businessName": null, "verified": null}
    ]))
    .unwrap();
    assert_eq!(businesses.len(), 2);
    assert_eq!(businesses[0].description, "");
    assert_eq!(businesses[1].owner_id, 0);
    assert_eq!(businesses[1].business_name, "");
}
