//! REST API helpers for the `/listing_api` backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Transport` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-success statuses are
//! classified from the response body so pages can tell field validation
//! failures apart from other server errors.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{ExportFormat, ImageUploadResponse, Listing, ListingId};
use crate::state::wizard::SelectedImage;

#[cfg(feature = "hydrate")]
use super::types::ListingsEnvelope;

/// Backend origin baked in at build time; empty means same-origin.
fn api_base() -> &'static str {
    option_env!("LISTING_API_BASE_URL")
        .unwrap_or_default()
        .trim_end_matches('/')
}

#[cfg(any(test, feature = "hydrate"))]
fn listings_endpoint(base: &str) -> String {
    format!("{base}/listing_api/listings/")
}

#[cfg(any(test, feature = "hydrate"))]
fn listing_endpoint(base: &str, id: &ListingId) -> String {
    format!("{base}/listing_api/listings/{id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn listings_export_endpoint(base: &str, format: ExportFormat) -> String {
    format!("{base}/listing_api/listings/export/{}", format.as_str())
}

#[cfg(any(test, feature = "hydrate"))]
fn listing_export_endpoint(base: &str, id: &ListingId, format: ExportFormat) -> String {
    format!("{base}/listing_api/listings/{id}/export/{}", format.as_str())
}

#[cfg(any(test, feature = "hydrate"))]
fn images_endpoint(base: &str) -> String {
    format!("{base}/listing_api/images/")
}

#[cfg(feature = "hydrate")]
async fn check(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &body))
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Transport("not available on server".to_owned())
}

/// Fetch every listing from `GET /listing_api/listings/`.
///
/// Unrecognised response shapes decode as an empty collection.
///
/// # Errors
///
/// Returns an error if the request fails or the server answers non-2xx.
pub async fn fetch_listings() -> Result<Vec<Listing>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&listings_endpoint(api_base()))
            .send()
            .await?;
        let body: serde_json::Value = check(resp)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(ListingsEnvelope::decode(body).into_listings())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api_base();
        Err(unavailable())
    }
}

/// Fetch one listing from `GET /listing_api/listings/{id}/`.
///
/// # Errors
///
/// Returns an error if the request fails, the server answers non-2xx or the
/// body is not a listing object.
pub async fn fetch_listing(id: &ListingId) -> Result<Listing, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&listing_endpoint(api_base(), id))
            .send()
            .await?;
        check(resp)
            .await?
            .json::<Listing>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(unavailable())
    }
}

/// Create a listing via `POST /listing_api/listings/`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the payload.
pub async fn create_listing(listing: &Listing) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&listings_endpoint(api_base()))
            .json(listing)?
            .send()
            .await?;
        check(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = listing;
        Err(unavailable())
    }
}

/// Replace a listing via `PUT /listing_api/listings/{id}/`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the payload;
/// HTTP 400 field maps surface as `ApiError::Validation`.
pub async fn update_listing(id: &ListingId, listing: &Listing) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&listing_endpoint(api_base(), id))
            .json(listing)?
            .send()
            .await?;
        check(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, listing);
        Err(unavailable())
    }
}

/// Delete a listing via `DELETE /listing_api/listings/{id}/`.
///
/// # Errors
///
/// Returns an error if the request fails or the server answers non-2xx.
pub async fn delete_listing(id: &ListingId) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&listing_endpoint(api_base(), id))
            .send()
            .await?;
        check(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(unavailable())
    }
}

/// Download the whole collection rendered in `format`.
///
/// # Errors
///
/// Returns an error if the request fails or the server answers non-2xx.
pub async fn export_listings(format: ExportFormat) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        download(&listings_export_endpoint(api_base(), format)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = format;
        Err(unavailable())
    }
}

/// Download one listing rendered in `format`.
///
/// # Errors
///
/// Returns an error if the request fails or the server answers non-2xx.
pub async fn export_listing(id: &ListingId, format: ExportFormat) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        download(&listing_export_endpoint(api_base(), id, format)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, format);
        Err(unavailable())
    }
}

#[cfg(feature = "hydrate")]
async fn download(url: &str) -> Result<Vec<u8>, ApiError> {
    let resp = gloo_net::http::Request::get(url).send().await?;
    check(resp)
        .await?
        .binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Upload product images via multipart `POST /listing_api/images/`.
///
/// Each image is sent as an `images` part under its original file name. The
/// response carries the stored URLs and, when analysis succeeded, a draft
/// listing suggestion.
///
/// # Errors
///
/// Returns an error if the form cannot be built, the request fails or the
/// server answers non-2xx.
pub async fn upload_images(images: &[SelectedImage]) -> Result<ImageUploadResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let js_err = |e: wasm_bindgen::JsValue| ApiError::Transport(format!("{e:?}"));
        let form = web_sys::FormData::new().map_err(js_err)?;
        for image in images {
            let blob = crate::util::object_url::bytes_to_blob(&image.bytes, &image.mime).map_err(js_err)?;
            form.append_with_blob_and_filename("images", &blob, &image.name)
                .map_err(js_err)?;
        }
        let resp = gloo_net::http::Request::post(&images_endpoint(api_base()))
            .body(form)?
            .send()
            .await?;
        check(resp)
            .await?
            .json::<ImageUploadResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = images;
        Err(unavailable())
    }
}
