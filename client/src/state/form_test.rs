use super::*;

fn options_of<T: Choice>() -> Vec<(&'static str, &'static str)> {
    T::ALL.iter().map(|c| (c.as_str(), c.label())).collect()
}

// =============================================================
// Coercion
// =============================================================

#[test]
fn pad_bullet_points_fills_and_truncates() {
    assert_eq!(pad_bullet_points(vec!["a".into()]), vec!["a", "", "", "", ""]);
    let long: Vec<String> = (0..7).map(|i| i.to_string()).collect();
    assert_eq!(pad_bullet_points(long), vec!["0", "1", "2", "3", "4"]);
}

#[test]
fn submitted_bullet_points_drops_blank_and_trims() {
    let points = vec!["  Hand polished ".to_owned(), String::new(), "   ".to_owned(), "Nickel free".to_owned()];
    assert_eq!(submitted_bullet_points(&points), vec!["Hand polished", "Nickel free"]);
}

#[test]
fn coerce_int_truncates_and_defaults_to_zero() {
    assert_eq!(coerce_int("12"), 12);
    assert_eq!(coerce_int(" 7.9 "), 7);
    assert_eq!(coerce_int("abc"), 0);
    assert_eq!(coerce_int(""), 0);
}

#[test]
fn coerce_uses_leading_numeric_prefix() {
    assert_eq!(coerce_int("1e3"), 1);
    assert_eq!(coerce_int("12kg"), 12);
    assert_eq!(coerce_int("-4"), -4);
    assert_eq!(coerce_int("-"), 0);
    assert_eq!(coerce_optional_decimal("1e3"), Some(1000.0));
    assert_eq!(coerce_optional_decimal("12.5g"), Some(12.5));
    assert_eq!(coerce_optional_decimal("3.2.1"), Some(3.2));
    assert_eq!(coerce_optional_decimal("e5"), None);
}

#[test]
fn coerce_decimal_defaults_to_zero() {
    assert!((coerce_decimal("12.5") - 12.5).abs() < f64::EPSILON);
    assert!(coerce_decimal("twelve").abs() < f64::EPSILON);
    assert_eq!(coerce_optional_decimal(""), None);
    assert_eq!(coerce_optional_decimal("x"), None);
    assert_eq!(coerce_optional_decimal("99"), Some(99.0));
}

// =============================================================
// Descriptors
// =============================================================

#[test]
fn every_field_belongs_to_exactly_one_section() {
    let total: usize = FormSection::ALL.iter().map(|s| s.fields().count()).sum();
    assert_eq!(total, FormField::ALL.len());
}

#[test]
fn field_names_are_unique() {
    let mut names: Vec<&str> = FormField::ALL.iter().map(|f| f.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), FormField::ALL.len());
}

fn select_options(field: FormField) -> Vec<(&'static str, &'static str)> {
    match field.kind() {
        FieldKind::Select(options) => options.to_vec(),
        other => panic!("{field:?} is not a select: {other:?}"),
    }
}

#[test]
fn select_options_match_choice_sets() {
    assert_eq!(select_options(FormField::Status), options_of::<Status>());
    assert_eq!(select_options(FormField::Department), options_of::<Department>());
    assert_eq!(select_options(FormField::FulfilledBy), options_of::<FulfilledBy>());
    assert_eq!(select_options(FormField::ProcurementType), options_of::<ProcurementType>());
    assert_eq!(select_options(FormField::ProductIdType), options_of::<ProductIdType>());
}

#[test]
fn required_flags_match_form_markers() {
    assert!(FormField::ItemSku.required(FormScreen::Create));
    assert!(FormField::HsnCode.required(FormScreen::Create));
    assert!(FormField::Weight.required(FormScreen::Create));
    assert!(!FormField::SalePrice.required(FormScreen::Create));
    assert!(!FormField::GemType.required(FormScreen::Create));
    assert!(!FormField::Status.required(FormScreen::Create));
}

#[test]
fn edit_screen_requires_only_identifying_fields() {
    let required: Vec<&str> = FormField::ALL
        .iter()
        .filter(|f| f.required(FormScreen::Edit))
        .map(|f| f.name())
        .collect();
    assert_eq!(
        required,
        vec!["item_sku", "title", "brand", "product_type", "quantity", "description", "standard_price", "hsn_code"]
    );
}

#[test]
fn labels_and_sections() {
    assert_eq!(FormField::StandardPrice.label(), "Standard Price (INR)");
    assert_eq!(FormField::Weight.section(), FormSection::Details);
    assert_eq!(FormSection::Classification.title(), "Category & Classification");
    assert_eq!(FormField::Occasion.name(), "ocassion");
}

// =============================================================
// ListingForm
// =============================================================

#[test]
fn default_form_has_documented_initial_values() {
    let form = ListingForm::default();
    assert_eq!(form.quantity, "0");
    assert_eq!(form.ring_size, "0");
    assert_eq!(form.ring_sizing_system, "India");
    assert_eq!(form.bullet_points.len(), BULLET_SLOTS);
    assert_eq!(form.status, Status::Pending);
    assert_eq!(form.fulfilled_by, FulfilledBy::Merchant);
    assert_eq!(form.procurement_type, ProcurementType::InStock);
    assert_eq!(form.department, Department::Womens);
    assert_eq!(form.product_id_type, ProductIdType::Asin);
}

#[test]
fn get_and_set_round_through_text_and_select_fields() {
    let mut form = ListingForm::default();
    form.set(FormField::Title, "Gold Hoops");
    form.set(FormField::Status, "active");
    form.set(FormField::Department, "bogus");
    assert_eq!(form.get(FormField::Title), "Gold Hoops");
    assert_eq!(form.get(FormField::Status), "active");
    assert_eq!(form.department, Department::Womens);
}

#[test]
fn set_bullet_point_ignores_out_of_range() {
    let mut form = ListingForm::default();
    form.set_bullet_point(2, "Tarnish resistant");
    form.set_bullet_point(9, "ignored");
    assert_eq!(form.bullet_points[2], "Tarnish resistant");
    assert_eq!(form.bullet_points.len(), BULLET_SLOTS);
}

#[test]
fn to_payload_coerces_numbers_and_drops_blank_bullets() {
    let mut form = ListingForm::default();
    form.set(FormField::Quantity, "-3");
    form.set(FormField::StandardPrice, "1499.5");
    form.set(FormField::SalePrice, "");
    form.set(FormField::Weight, "heavy");
    form.set(FormField::RingSize, "7.5");
    form.set_bullet_point(0, "Handmade");

    let payload = form.to_payload();
    assert_eq!(payload.quantity, 0);
    assert!((payload.standard_price - 1499.5).abs() < f64::EPSILON);
    assert_eq!(payload.sale_price, None);
    assert!(payload.weight.abs() < f64::EPSILON);
    assert_eq!(payload.ring_size, 7);
    assert_eq!(payload.bullet_points, vec!["Handmade"]);
    assert_eq!(payload.status, Some(Status::Pending));
    assert_eq!(payload.product_id, None);
}

#[test]
fn from_listing_prefills_and_pads() {
    let listing = Listing {
        product_id: Some(ListingId::new("11")),
        title: "Pearl Studs".to_owned(),
        quantity: 4,
        standard_price: 899.0,
        sale_price: Some(799.0),
        bullet_points: vec!["Freshwater".to_owned()],
        status: Some(Status::Active),
        ..Listing::default()
    };
    let form = ListingForm::from_listing(&listing);
    assert_eq!(form.product_id, Some(ListingId::new("11")));
    assert_eq!(form.quantity, "4");
    assert_eq!(form.standard_price, "899");
    assert_eq!(form.sale_price, "799");
    assert_eq!(form.weight, "0");
    assert_eq!(form.bullet_points.len(), BULLET_SLOTS);
    assert_eq!(form.status, Status::Active);
    assert_eq!(form.to_payload().product_id, Some(ListingId::new("11")));
}

#[test]
fn from_listing_leaves_no_edit_required_field_blank() {
    let listing = Listing {
        product_id: Some(ListingId::new("5")),
        item_sku: "SKU-5".to_owned(),
        title: "Plain Band".to_owned(),
        brand: "Acme".to_owned(),
        product_type: "Ring".to_owned(),
        description: "Simple band".to_owned(),
        hsn_code: "7113".to_owned(),
        standard_price: 0.0,
        weight: 0.0,
        material_care: String::new(),
        ..Listing::default()
    };
    let form = ListingForm::from_listing(&listing);

    let blank: Vec<&str> = FormField::ALL
        .iter()
        .filter(|f| f.required(FormScreen::Edit) && form.get(**f).trim().is_empty())
        .map(|f| f.name())
        .collect();
    assert!(blank.is_empty(), "blank required fields: {blank:?}");
    assert_eq!(form.standard_price, "0");
    assert!(form.to_payload().standard_price.abs() < f64::EPSILON);
}

#[test]
fn edit_payload_keeps_unmodelled_backend_fields() {
    let mut listing = Listing { product_id: Some(ListingId::new("3")), ..Listing::default() };
    listing.extra.insert("created_at".to_owned(), serde_json::json!("2026-01-02"));
    let mut form = ListingForm::from_listing(&listing);
    form.set(FormField::Title, "Renamed");

    let payload = form.to_payload();
    assert_eq!(payload.title, "Renamed");
    assert_eq!(payload.extra.get("created_at"), Some(&serde_json::json!("2026-01-02")));
}

#[test]
fn apply_suggestion_blanks_undetected_measurements() {
    let mut form = ListingForm::default();
    form.apply_suggestion(&Listing { weight: 0.0, length: 2.5, ..Listing::default() });
    assert_eq!(form.weight, "");
    assert_eq!(form.length, "2.5");
}

#[test]
fn apply_suggestion_keeps_user_entered_identifiers() {
    let mut form = ListingForm::default();
    form.set(FormField::ItemSku, "SKU-1");
    form.set(FormField::HsnCode, "7113");
    form.set(FormField::StandardPrice, "500");
    form.set(FormField::ProductIdType, "EAN");

    let suggestion = Listing {
        title: "Silver Chain".to_owned(),
        item_sku: "IGNORED".to_owned(),
        standard_price: 1.0,
        quantity: 3,
        ring_sizing_system: String::new(),
        chain_type: "Rope Chain".to_owned(),
        ..Listing::default()
    };
    form.apply_suggestion(&suggestion);

    assert_eq!(form.title, "Silver Chain");
    assert_eq!(form.quantity, "3");
    assert_eq!(form.chain_type, "Rope Chain");
    assert_eq!(form.ring_sizing_system, "India");
    assert_eq!(form.status, Status::Pending);
    assert_eq!(form.item_sku, "SKU-1");
    assert_eq!(form.hsn_code, "7113");
    assert_eq!(form.standard_price, "500");
    assert_eq!(form.product_id_type, ProductIdType::Ean);
}
