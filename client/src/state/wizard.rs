//! Creation wizard state: upload images, review the generated draft, submit.
//!
//! DESIGN
//! ======
//! Network calls stay in the page; this module only owns transitions. Each
//! async action is split into `begin_*` (validate, flip `loading`, hand back
//! what to send) and `finish_*` (apply the outcome), so every transition is
//! testable without a browser.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use std::sync::Arc;

use super::form::ListingForm;
use crate::net::error::ApiError;
use crate::net::types::{ImageUploadResponse, Listing};
use crate::util::object_url::ObjectUrl;

/// Most images one listing may carry.
pub const MAX_IMAGES: usize = 10;

pub const NO_IMAGES_MESSAGE: &str = "Please upload at least one image";
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload images";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit form";
pub const UNSUPPORTED_IMAGE_MESSAGE: &str = "Some files were skipped: only JPEG, PNG and WEBP images are accepted";
pub const TOO_MANY_IMAGES_MESSAGE: &str = "You can upload up to 10 images";

const ACCEPTED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Whether a file with this MIME type may be selected.
pub fn is_accepted_image(mime: &str) -> bool {
    ACCEPTED_MIME_TYPES
        .iter()
        .any(|accepted| accepted.eq_ignore_ascii_case(mime.trim()))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Upload,
    Details,
    Complete,
}

impl WizardStep {
    /// 1-based position shown in the progress indicator.
    pub fn number(self) -> u8 {
        match self {
            Self::Upload => 1,
            Self::Details => 2,
            Self::Complete => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Upload => "Upload Images",
            Self::Details => "Product Details",
            Self::Complete => "Complete",
        }
    }

    /// Progress-indicator classes for this step while `current` is shown.
    pub fn css_class(self, current: Self) -> &'static str {
        if self == current {
            "wizard__step wizard__step--active"
        } else if current.number() > self.number() {
            "wizard__step wizard__step--done"
        } else {
            "wizard__step"
        }
    }
}

/// A locally selected image awaiting upload.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedImage {
    pub name: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
    pub preview: ObjectUrl,
}

#[derive(Clone, Debug, Default)]
pub struct WizardState {
    pub step: WizardStep,
    pub images: Vec<SelectedImage>,
    /// Stored URLs returned by the upload, main image first.
    pub uploaded_images: Vec<String>,
    pub form: ListingForm,
    /// The payload last sent, shown on the completion summary.
    pub submitted: Option<Listing>,
    pub loading: bool,
    pub error: Option<String>,
}

impl WizardState {
    /// Append newly picked images.
    ///
    /// Unsupported types and anything past `MAX_IMAGES` are dropped and
    /// reported through `error`; `rejected` counts files the caller already
    /// filtered out before reading them.
    pub fn add_images(&mut self, images: Vec<SelectedImage>, rejected: usize) {
        let mut unsupported = rejected > 0;
        let mut overflow = false;
        for image in images {
            if !is_accepted_image(&image.mime) {
                unsupported = true;
            } else if self.images.len() >= MAX_IMAGES {
                overflow = true;
            } else {
                self.images.push(image);
            }
        }
        self.error = if overflow {
            Some(TOO_MANY_IMAGES_MESSAGE.to_owned())
        } else if unsupported {
            Some(UNSUPPORTED_IMAGE_MESSAGE.to_owned())
        } else {
            None
        };
    }

    /// Drop the image at `index`; its preview is released with the last handle.
    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    /// Validate and start the upload. Returns the images to send, or `None`
    /// when nothing is selected or a request is already running.
    pub fn begin_upload(&mut self) -> Option<Vec<SelectedImage>> {
        if self.loading {
            return None;
        }
        if self.images.is_empty() {
            self.error = Some(NO_IMAGES_MESSAGE.to_owned());
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(self.images.clone())
    }

    pub fn finish_upload(&mut self, result: Result<ImageUploadResponse, ApiError>) {
        self.loading = false;
        match result {
            Ok(response) => {
                if let Some(suggestion) = &response.listing {
                    self.form.apply_suggestion(suggestion);
                }
                self.form
                    .set_images(&response.main_image_url, &response.extra_image_urls);
                self.uploaded_images = response.uploaded_images();
                self.step = WizardStep::Details;
            }
            Err(err) => {
                self.error = Some(err.message_or(UPLOAD_FAILED_MESSAGE));
            }
        }
    }

    /// Start submitting the draft. Returns the payload to `POST`.
    pub fn begin_submit(&mut self) -> Option<Listing> {
        if self.loading || self.step != WizardStep::Details {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(self.form.to_payload())
    }

    pub fn finish_submit(&mut self, payload: Listing, result: Result<(), ApiError>) {
        self.loading = false;
        match result {
            Ok(()) => {
                self.submitted = Some(payload);
                self.step = WizardStep::Complete;
            }
            Err(err) => {
                self.error = Some(err.message_or(SUBMIT_FAILED_MESSAGE));
            }
        }
    }

    /// Step back from the details form to the upload step.
    pub fn previous(&mut self) {
        if self.step == WizardStep::Details && !self.loading {
            self.step = WizardStep::Upload;
            self.error = None;
        }
    }

    /// Start over with a blank wizard.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
