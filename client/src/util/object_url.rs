//! Reference-counted browser object URLs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Image previews and export downloads both mint `blob:` URLs. A URL is
//! revoked when the last `ObjectUrl` handle pointing at it drops, so state
//! snapshots cloned out of signals never revoke a preview that is still on
//! screen, and nothing outlives its owner.

#[cfg(test)]
#[path = "object_url_test.rs"]
pub(crate) mod object_url_test;

use std::sync::Arc;

#[derive(Debug, PartialEq, Eq)]
struct Handle {
    url: String,
}

impl Drop for Handle {
    fn drop(&mut self) {
        release(&self.url);
    }
}

/// Shared handle to a `blob:` URL; the URL is revoked exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectUrl(Arc<Handle>);

impl ObjectUrl {
    /// Take ownership of an already-minted URL.
    pub fn from_raw(url: impl Into<String>) -> Self {
        Self(Arc::new(Handle { url: url.into() }))
    }

    /// Mint a URL for `blob`.
    #[cfg(feature = "hydrate")]
    pub fn for_blob(blob: &web_sys::Blob) -> Option<Self> {
        web_sys::Url::create_object_url_with_blob(blob)
            .ok()
            .map(Self::from_raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0.url
    }
}

/// Build a typed `Blob` from raw bytes.
///
/// # Errors
///
/// Returns the JS exception if the browser refuses to construct the blob.
#[cfg(feature = "hydrate")]
pub fn bytes_to_blob(bytes: &[u8], mime: &str) -> Result<web_sys::Blob, wasm_bindgen::JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}

#[cfg(feature = "hydrate")]
fn release(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

#[cfg(all(test, not(feature = "hydrate")))]
fn release(url: &str) {
    object_url_test::record_release(url);
}

#[cfg(not(any(test, feature = "hydrate")))]
fn release(url: &str) {
    let _ = url;
}
