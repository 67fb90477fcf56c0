//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host server keeps no listing data of its own; it only holds the upstream
//! client used by the `/listing_api` pass-through.

use std::sync::Arc;

use crate::config::{Config, DEFAULT_MAX_UPLOAD_BYTES};
use crate::proxy::{ProxyError, Upstream};

#[derive(Clone)]
pub struct AppState {
    /// Listing backend client; `None` when `LISTING_API_URL` is unset.
    pub upstream: Option<Arc<Upstream>>,
    /// Request body limit applied to forwarded calls.
    pub max_upload_bytes: usize,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: Option<Upstream>, max_upload_bytes: usize) -> Self {
        Self { upstream: upstream.map(Arc::new), max_upload_bytes }
    }

    /// Build state from parsed configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::ClientBuild`] if the upstream client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, ProxyError> {
        let upstream = config
            .listing_api_url
            .as_deref()
            .map(|url| Upstream::new(url, config.timeouts))
            .transpose()?;
        Ok(Self::new(upstream, config.max_upload_bytes))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(None, DEFAULT_MAX_UPLOAD_BYTES)
    }
}
