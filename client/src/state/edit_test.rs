use super::*;
use crate::state::form::{BULLET_POINTS_KEY, FormField, field_messages};

fn loaded() -> EditState {
    let mut state = EditState::default();
    state.begin_load();
    state.finish_load(Ok(Listing {
        product_id: Some(ListingId::new("5")),
        title: "Amethyst Ring".to_owned(),
        bullet_points: (0..7).map(|i| format!("point {i}")).collect(),
        ..Listing::default()
    }));
    state
}

#[test]
fn finish_load_prefills_form() {
    let state = loaded();
    assert!(!state.loading);
    let form = state.form.unwrap();
    assert_eq!(form.title, "Amethyst Ring");
    assert_eq!(form.bullet_points.len(), 5);
    assert_eq!(form.bullet_points[4], "point 4");
}

#[test]
fn finish_load_failure_records_message() {
    let mut state = EditState::default();
    state.begin_load();
    state.finish_load(Err(ApiError::Server {
        status: 404,
        message: None,
    }));
    assert!(state.form.is_none());
    assert_eq!(state.load_error.as_deref(), Some(LOAD_FAILED_MESSAGE));
}

#[test]
fn begin_save_requires_loaded_form_and_blocks_reentry() {
    assert!(EditState::default().begin_save().is_none());
    let mut state = loaded();
    let payload = state.begin_save().unwrap();
    assert_eq!(payload.product_id, Some(ListingId::new("5")));
    assert!(state.saving);
    assert!(state.begin_save().is_none());
}

#[test]
fn validation_failure_keeps_summary_and_field_messages() {
    let mut state = loaded();
    state.begin_save();
    let mut fields = FieldErrors::new();
    fields.insert("item_sku".to_owned(), vec!["This field may not be blank.".to_owned()]);
    fields.insert(
        "hsn_code".to_owned(),
        vec!["Required.".to_owned(), "Must be numeric.".to_owned()],
    );

    let next = state.finish_save(&ListingId::new("5"), Err(ApiError::Validation(fields)));
    assert_eq!(next, None);
    assert_eq!(state.save_error.as_deref(), Some(VALIDATION_SUMMARY));
    assert_eq!(
        field_messages(&state.field_errors, FormField::ItemSku.name()).as_deref(),
        Some("This field may not be blank.")
    );
    assert_eq!(
        field_messages(&state.field_errors, FormField::HsnCode.name()).as_deref(),
        Some("Required. Must be numeric.")
    );
    assert_eq!(field_messages(&state.field_errors, FormField::Title.name()), None);
    assert!(state.form.is_some());
    assert!(!state.saving);
}

#[test]
fn other_failures_prefer_server_then_transport_then_fallback() {
    let id = ListingId::new("5");
    let mut state = loaded();

    state.begin_save();
    state.finish_save(&id, Err(ApiError::Server { status: 500, message: Some("Database down".to_owned()) }));
    assert_eq!(state.save_error.as_deref(), Some("Database down"));

    state.begin_save();
    state.finish_save(&id, Err(ApiError::Transport("connection refused".to_owned())));
    assert_eq!(state.save_error.as_deref(), Some("connection refused"));

    state.begin_save();
    state.finish_save(&id, Err(ApiError::Server { status: 502, message: None }));
    assert_eq!(state.save_error.as_deref(), Some(UPDATE_FAILED_MESSAGE));
    assert!(state.field_errors.is_empty());
}

#[test]
fn successful_save_returns_detail_id() {
    let mut state = loaded();
    state.begin_save();
    assert_eq!(state.finish_save(&ListingId::new("5"), Ok(())), Some(ListingId::new("5")));
    assert!(state.save_error.is_none());
}

#[test]
fn bullet_point_errors_are_reported_separately() {
    let mut state = loaded();
    state.begin_save();
    let mut fields = FieldErrors::new();
    fields.insert("bullet_points".to_owned(), vec!["Too long.".to_owned()]);
    fields.insert("title".to_owned(), Vec::new());
    state.finish_save(&ListingId::new("5"), Err(ApiError::Validation(fields)));
    assert_eq!(field_messages(&state.field_errors, BULLET_POINTS_KEY).as_deref(), Some("Too long."));
    assert_eq!(field_messages(&state.field_errors, FormField::Title.name()), None);
}
