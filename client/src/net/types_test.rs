use super::*;

// =============================================================
// Helpers
// =============================================================

fn decode(json: serde_json::Value) -> Listing {
    serde_json::from_value(json).unwrap()
}

// =============================================================
// ListingId
// =============================================================

#[test]
fn listing_id_accepts_numbers_and_strings() {
    let numeric = decode(serde_json::json!({ "product_id": 42 }));
    assert_eq!(numeric.product_id, Some(ListingId::new("42")));

    let text = decode(serde_json::json!({ "product_id": "SKU-7" }));
    assert_eq!(text.product_id.unwrap().to_string(), "SKU-7");
}

// =============================================================
// Listing decode
// =============================================================

#[test]
fn listing_decodes_string_decimals_and_nulls() {
    let listing = decode(serde_json::json!({
        "title": "Silver Ring",
        "item_sku": "RING-1",
        "standard_price": "1299.50",
        "sale_price": null,
        "quantity": "12",
        "weight": 3.2,
        "gem_type": null,
        "ring_size": 7.0,
    }));
    assert_eq!(listing.title, "Silver Ring");
    assert!((listing.standard_price - 1299.5).abs() < f64::EPSILON);
    assert_eq!(listing.sale_price, None);
    assert_eq!(listing.quantity, 12);
    assert!((listing.weight - 3.2).abs() < f64::EPSILON);
    assert_eq!(listing.gem_type, "");
    assert_eq!(listing.ring_size, 7);
}

#[test]
fn listing_decodes_backend_spellings() {
    let listing = decode(serde_json::json!({
        "fullfilled_by": "amazon",
        "ocassion": "Party",
        "department_name": "kids",
    }));
    assert_eq!(listing.fulfilled_by, Some(FulfilledBy::Amazon));
    assert_eq!(listing.occasion, "Party");
    assert_eq!(listing.department, Some(Department::Kids));
}

#[test]
fn listing_status_is_case_insensitive_and_unknown_is_absent() {
    assert_eq!(decode(serde_json::json!({ "status": "ACTIVE" })).status, Some(Status::Active));
    assert_eq!(decode(serde_json::json!({ "status": "archived" })).status, None);
    assert_eq!(decode(serde_json::json!({})).status, None);
}

#[test]
fn listing_missing_fields_default() {
    let listing = decode(serde_json::json!({}));
    assert_eq!(listing, Listing::default());
}

#[test]
fn listing_serializes_wire_names_and_null_sale_price() {
    let listing = Listing {
        status: Some(Status::Inactive),
        fulfilled_by: Some(FulfilledBy::Merchant),
        procurement_type: Some(ProcurementType::InStock),
        product_id_type: Some(ProductIdType::Ean),
        department: Some(Department::Unisex),
        occasion: "Formal".to_owned(),
        ..Listing::default()
    };
    let json = serde_json::to_value(&listing).unwrap();
    assert_eq!(json["status"], "inactive");
    assert_eq!(json["fullfilled_by"], "merchant");
    assert_eq!(json["procurement_type"], "in_stock");
    assert_eq!(json["product_id_type"], "EAN");
    assert_eq!(json["department_name"], "unisex");
    assert_eq!(json["ocassion"], "Formal");
    assert!(json["sale_price"].is_null());
    assert!(json.get("product_id").is_none());
}

#[test]
fn listing_carries_unmodelled_fields_through_serialization() {
    let listing = decode(serde_json::json!({
        "product_id": 9,
        "title": "Cuff",
        "created_at": "2026-01-02T03:04:05Z",
        "seller_notes": { "tier": 2 },
    }));
    assert_eq!(listing.product_id, Some(ListingId::new("9")));
    assert_eq!(listing.extra.len(), 2);
    assert!(!listing.extra.contains_key("title"));

    let json = serde_json::to_value(&listing).unwrap();
    assert_eq!(json["created_at"], "2026-01-02T03:04:05Z");
    assert_eq!(json["seller_notes"]["tier"], 2);
    assert_eq!(json["title"], "Cuff");
}

#[test]
fn image_urls_puts_main_first_and_skips_blanks() {
    let listing = Listing {
        main_image_url: "https://cdn/main.jpg".to_owned(),
        additional_image_urls: vec![String::new(), "https://cdn/2.jpg".to_owned()],
        ..Listing::default()
    };
    assert_eq!(listing.image_urls(), vec!["https://cdn/main.jpg", "https://cdn/2.jpg"]);
}

// =============================================================
// ListingsEnvelope
// =============================================================

#[test]
fn envelope_accepts_bare_array() {
    let envelope = ListingsEnvelope::decode(serde_json::json!([{ "title": "A" }, { "title": "B" }]));
    assert!(matches!(envelope, ListingsEnvelope::Bare(ref items) if items.len() == 2));
}

#[test]
fn envelope_accepts_results_object() {
    let envelope = ListingsEnvelope::decode(serde_json::json!({ "count": 1, "results": [{ "title": "A" }] }));
    let listings = envelope.into_listings();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].title, "A");
}

#[test]
fn envelope_falls_back_to_empty() {
    assert_eq!(ListingsEnvelope::decode(serde_json::json!({ "detail": "nope" })), ListingsEnvelope::FallbackEmpty);
    assert_eq!(ListingsEnvelope::decode(serde_json::json!("text")), ListingsEnvelope::FallbackEmpty);
    assert!(ListingsEnvelope::decode(serde_json::json!({ "results": "x" })).into_listings().is_empty());
}

#[test]
fn envelope_skips_non_object_items() {
    let listings = ListingsEnvelope::decode(serde_json::json!([{ "title": "A" }, 7, "junk"])).into_listings();
    assert_eq!(listings.len(), 1);
}

// =============================================================
// ImageUploadResponse
// =============================================================

#[test]
fn image_upload_response_lists_main_then_extras() {
    let response: ImageUploadResponse = serde_json::from_value(serde_json::json!({
        "main_image_url": "m.jpg",
        "extra_image_urls": ["a.jpg", "b.jpg"],
    }))
    .unwrap();
    assert_eq!(response.uploaded_images(), vec!["m.jpg", "a.jpg", "b.jpg"]);
    assert!(response.listing.is_none());
}

#[test]
fn image_upload_response_carries_suggestion() {
    let response: ImageUploadResponse = serde_json::from_value(serde_json::json!({
        "main_image_url": "m.jpg",
        "extra_image_urls": null,
        "listing": { "title": "Gold Hoops", "status": "active" },
    }))
    .unwrap();
    assert!(response.extra_image_urls.is_empty());
    let suggestion = response.listing.unwrap();
    assert_eq!(suggestion.title, "Gold Hoops");
    assert_eq!(suggestion.status, Some(Status::Active));
}

// =============================================================
// ExportFormat
// =============================================================

#[test]
fn export_format_splits_platform_and_extension() {
    assert_eq!(ExportFormat::ShopifyCsv.platform(), "shopify");
    assert_eq!(ExportFormat::ShopifyCsv.extension(), "csv");
    assert_eq!(ExportFormat::AmazonTsv.extension(), "tsv");
    assert_eq!(ExportFormat::FlipkartXlsx.platform(), "flipkart");
    assert_eq!(ExportFormat::FlipkartXlsx.extension(), "xlsx");
    assert_eq!(ExportFormat::MyntraCsv.as_str(), "myntra.csv");
}

// =============================================================
// Choice
// =============================================================

#[test]
fn choice_parse_trims_and_ignores_case() {
    assert_eq!(ProcurementType::parse(" IN_STOCK "), Some(ProcurementType::InStock));
    assert_eq!(ProductIdType::parse("upc"), Some(ProductIdType::Upc));
    assert_eq!(Department::parse("pets"), None);
}
