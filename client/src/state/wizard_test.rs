use super::*;
use crate::net::types::Status;
#[cfg(not(feature = "hydrate"))]
use crate::util::object_url::object_url_test::released_count;

fn image(name: &str, mime: &str) -> SelectedImage {
    SelectedImage {
        name: name.to_owned(),
        mime: mime.to_owned(),
        bytes: Arc::from(vec![1_u8, 2, 3]),
        preview: ObjectUrl::from_raw(format!("blob:wizard/{name}")),
    }
}

fn server_error(message: &str) -> ApiError {
    ApiError::Server {
        status: 500,
        message: Some(message.to_owned()),
    }
}

fn at_details() -> WizardState {
    let mut state = WizardState::default();
    state.add_images(vec![image("a.jpg", "image/jpeg")], 0);
    state.begin_upload();
    state.finish_upload(Ok(ImageUploadResponse {
        main_image_url: "https://cdn/a.jpg".to_owned(),
        ..ImageUploadResponse::default()
    }));
    state
}

// =============================================================
// Steps
// =============================================================

#[test]
fn step_classes_mark_active_and_completed() {
    assert_eq!(WizardStep::Upload.css_class(WizardStep::Details), "wizard__step wizard__step--done");
    assert_eq!(WizardStep::Details.css_class(WizardStep::Details), "wizard__step wizard__step--active");
    assert_eq!(WizardStep::Complete.css_class(WizardStep::Details), "wizard__step");
}

// =============================================================
// Image selection
// =============================================================

#[test]
fn accepted_image_types() {
    assert!(is_accepted_image("image/jpeg"));
    assert!(is_accepted_image("image/JPG"));
    assert!(is_accepted_image("image/png"));
    assert!(is_accepted_image("image/webp"));
    assert!(!is_accepted_image("image/gif"));
    assert!(!is_accepted_image("application/pdf"));
}

#[test]
fn add_images_appends_and_skips_unsupported() {
    let mut state = WizardState::default();
    state.add_images(vec![image("a.png", "image/png")], 0);
    state.add_images(vec![image("b.gif", "image/gif"), image("c.webp", "image/webp")], 0);
    assert_eq!(state.images.len(), 2);
    assert_eq!(state.images[1].name, "c.webp");
    assert_eq!(state.error.as_deref(), Some(UNSUPPORTED_IMAGE_MESSAGE));
}

#[test]
fn add_images_caps_at_max() {
    let mut state = WizardState::default();
    let batch: Vec<_> = (0..12).map(|i| image(&format!("{i}.jpg"), "image/jpeg")).collect();
    state.add_images(batch, 0);
    assert_eq!(state.images.len(), MAX_IMAGES);
    assert_eq!(state.error.as_deref(), Some(TOO_MANY_IMAGES_MESSAGE));
}

#[test]
fn add_images_reports_caller_rejections() {
    let mut state = WizardState::default();
    state.add_images(Vec::new(), 2);
    assert_eq!(state.error.as_deref(), Some(UNSUPPORTED_IMAGE_MESSAGE));
}

#[test]
#[cfg(not(feature = "hydrate"))]
fn remove_image_releases_preview() {
    let mut state = WizardState::default();
    state.add_images(vec![image("gone.jpg", "image/jpeg"), image("kept.jpg", "image/jpeg")], 0);
    state.remove_image(0);
    state.remove_image(5);
    assert_eq!(state.images.len(), 1);
    assert_eq!(released_count("blob:wizard/gone.jpg"), 1);
    assert_eq!(released_count("blob:wizard/kept.jpg"), 0);
}

#[test]
#[cfg(not(feature = "hydrate"))]
fn reset_releases_every_preview_once() {
    let mut state = WizardState::default();
    state.add_images(vec![image("reset.jpg", "image/jpeg")], 0);
    let snapshot = state.clone();
    state.reset();
    assert_eq!(released_count("blob:wizard/reset.jpg"), 0);
    drop(snapshot);
    assert_eq!(released_count("blob:wizard/reset.jpg"), 1);
    assert_eq!(state.step, WizardStep::Upload);
    assert!(state.images.is_empty());
}

// =============================================================
// Upload
// =============================================================

#[test]
fn begin_upload_without_images_sets_error_and_stays() {
    let mut state = WizardState::default();
    assert!(state.begin_upload().is_none());
    assert_eq!(state.error.as_deref(), Some(NO_IMAGES_MESSAGE));
    assert_eq!(state.step, WizardStep::Upload);
    assert!(!state.loading);
}

#[test]
fn begin_upload_flags_loading_and_blocks_reentry() {
    let mut state = WizardState::default();
    state.add_images(vec![image("a.jpg", "image/jpeg")], 0);
    assert_eq!(state.begin_upload().map(|images| images.len()), Some(1));
    assert!(state.loading);
    assert!(state.begin_upload().is_none());
}

#[test]
fn finish_upload_merges_suggestion_and_advances() {
    let mut state = WizardState::default();
    state.add_images(vec![image("a.jpg", "image/jpeg")], 0);
    state.form.item_sku = "SKU-9".to_owned();
    state.begin_upload();
    state.finish_upload(Ok(ImageUploadResponse {
        main_image_url: "https://cdn/main.jpg".to_owned(),
        extra_image_urls: vec!["https://cdn/2.jpg".to_owned()],
        listing: Some(Listing {
            title: "Opal Pendant".to_owned(),
            status: Some(Status::Active),
            ..Listing::default()
        }),
    }));

    assert_eq!(state.step, WizardStep::Details);
    assert!(!state.loading);
    assert_eq!(state.uploaded_images, vec!["https://cdn/main.jpg", "https://cdn/2.jpg"]);
    assert_eq!(state.form.title, "Opal Pendant");
    assert_eq!(state.form.status, Status::Active);
    assert_eq!(state.form.item_sku, "SKU-9");
    assert_eq!(state.form.main_image_url, "https://cdn/main.jpg");
    assert_eq!(state.form.additional_image_urls, vec!["https://cdn/2.jpg"]);
}

#[test]
fn finish_upload_failure_uses_server_message_or_fallback() {
    let mut state = WizardState::default();
    state.add_images(vec![image("a.jpg", "image/jpeg")], 0);
    state.begin_upload();
    state.finish_upload(Err(server_error("Image too large")));
    assert_eq!(state.error.as_deref(), Some("Image too large"));
    assert_eq!(state.step, WizardStep::Upload);

    state.begin_upload();
    state.finish_upload(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(state.error.as_deref(), Some(UPLOAD_FAILED_MESSAGE));
}

// =============================================================
// Submit and navigation
// =============================================================

#[test]
fn submit_success_completes_and_keeps_payload() {
    let mut state = at_details();
    state.form.title = "Ruby Ring".to_owned();
    let payload = state.begin_submit().unwrap();
    assert!(state.loading);
    state.finish_submit(payload, Ok(()));
    assert_eq!(state.step, WizardStep::Complete);
    assert_eq!(state.submitted.as_ref().map(|l| l.title.as_str()), Some("Ruby Ring"));
}

#[test]
fn submit_failure_keeps_draft_on_details() {
    let mut state = at_details();
    state.form.title = "Ruby Ring".to_owned();
    let payload = state.begin_submit().unwrap();
    state.finish_submit(payload, Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(state.step, WizardStep::Details);
    assert_eq!(state.error.as_deref(), Some(SUBMIT_FAILED_MESSAGE));
    assert_eq!(state.form.title, "Ruby Ring");
    assert!(!state.loading);
}

#[test]
fn begin_submit_only_from_details() {
    let mut state = WizardState::default();
    assert!(state.begin_submit().is_none());
}

#[test]
fn previous_moves_back_only_from_details() {
    let mut state = at_details();
    state.previous();
    assert_eq!(state.step, WizardStep::Upload);
    state.previous();
    assert_eq!(state.step, WizardStep::Upload);

    let mut done = at_details();
    let payload = done.begin_submit().unwrap();
    done.finish_submit(payload, Ok(()));
    done.previous();
    assert_eq!(done.step, WizardStep::Complete);
}

#[test]
fn step_numbers() {
    assert_eq!(WizardStep::Upload.number(), 1);
    assert_eq!(WizardStep::Complete.number(), 3);
}
