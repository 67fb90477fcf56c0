//! Listing API pass-through.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser talks to `/listing_api/*` on the same origin it was served
//! from. This module forwards those calls to the configured backend so the
//! UI never needs cross-origin access. Request method, query string, body,
//! `content-type` and `accept` travel upstream; the upstream status,
//! `content-type`, `content-disposition` and body come back unchanged.
//!
//! DESIGN
//! ======
//! Forwarding is a thin byte shuttle. Nothing is parsed, retried, or cached:
//! validation errors (400 + field map) and binary export bodies must reach
//! the client exactly as the backend produced them.

use std::time::Duration;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::config::ProxyTimeouts;
use crate::state::AppState;

/// Request headers copied to the upstream call.
const FORWARDED_REQUEST_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::ACCEPT];

/// Response headers copied back to the browser.
const FORWARDED_RESPONSE_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::CONTENT_DISPOSITION];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// No `LISTING_API_URL` was configured at startup.
    #[error("listing API upstream is not configured")]
    NotConfigured,

    /// The upstream could not be reached or its body could not be read.
    #[error("listing API upstream failed: {0}")]
    Upstream(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client build error: {0}")]
    ClientBuild(String),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::ClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "message": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// HTTP client bound to one upstream base URL.
pub struct Upstream {
    http: reqwest::Client,
    base_url: String,
}

impl Upstream {
    /// Build a client for `base_url` (already stripped of its trailing `/`).
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::ClientBuild`] if the TLS backend cannot be
    /// initialised.
    pub fn new(base_url: impl Into<String>, timeouts: ProxyTimeouts) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.into() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, method: Method, uri: &Uri, headers: &HeaderMap, body: Bytes) -> Result<Response, ProxyError> {
        let url = upstream_url(&self.base_url, uri.path(), uri.query());

        let mut request = self.http.request(method.clone(), &url);
        for name in &FORWARDED_REQUEST_HEADERS {
            if let Some(value) = headers.get(name) {
                request = request.header(name.clone(), value.clone());
            }
        }
        if !body.is_empty() {
            request = request.body(body);
        }

        let upstream = request.send().await.map_err(|e| ProxyError::Upstream(e.to_string()))?;
        let status = upstream.status();
        tracing::debug!(%method, %url, %status, "listing api forwarded");

        let mut out = HeaderMap::new();
        for name in &FORWARDED_RESPONSE_HEADERS {
            if let Some(value) = upstream.headers().get(name) {
                out.insert(name.clone(), value.clone());
            }
        }
        let bytes = upstream.bytes().await.map_err(|e| ProxyError::Upstream(e.to_string()))?;

        Ok((status, out, bytes).into_response())
    }
}

/// Join the upstream base with the incoming path and query string.
#[must_use]
pub fn upstream_url(base_url: &str, path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{base_url}{path}?{q}"),
        _ => format!("{base_url}{path}"),
    }
}

/// `ANY /listing_api/{*path}`: forward the request to the listing backend.
///
/// # Errors
///
/// Returns [`ProxyError::NotConfigured`] (503) without an upstream and
/// [`ProxyError::Upstream`] (502) when the backend is unreachable.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let Some(upstream) = state.upstream.as_ref() else {
        return Err(ProxyError::NotConfigured);
    };
    upstream.send(method.clone(), &uri, &headers, body).await.inspect_err(|e| {
        tracing::warn!(%method, path = uri.path(), error = %e, "listing api forward failed");
    })
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
