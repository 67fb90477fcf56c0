//! Host server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_PROXY_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// `LISTING_API_URL` is set but is not an http(s) URL.
    #[error("invalid LISTING_API_URL: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Upstream listing API base URL without a trailing slash. `None`
    /// disables forwarding.
    pub listing_api_url: Option<String>,
    pub timeouts: ProxyTimeouts,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            listing_api_url: None,
            timeouts: ProxyTimeouts {
                request_secs: DEFAULT_PROXY_TIMEOUT_SECS,
                connect_secs: DEFAULT_PROXY_CONNECT_TIMEOUT_SECS,
            },
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `LISTING_API_URL`: upstream base URL; empty or absent disables forwarding
    /// - `PROXY_TIMEOUT_SECS`: default 60
    /// - `PROXY_CONNECT_TIMEOUT_SECS`: default 10
    /// - `MAX_UPLOAD_BYTES`: default 52428800
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `PORT` or `LISTING_API_URL` is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let listing_api_url = parse_upstream(std::env::var("LISTING_API_URL").ok().as_deref())?;
        let timeouts = ProxyTimeouts {
            request_secs: env_parse_u64("PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS),
            connect_secs: env_parse_u64("PROXY_CONNECT_TIMEOUT_SECS", DEFAULT_PROXY_CONNECT_TIMEOUT_SECS),
        };
        let max_upload_bytes = std::env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Ok(Self { port, listing_api_url, timeouts, max_upload_bytes })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_upstream(raw: Option<&str>) -> Result<Option<String>, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl(value.to_owned()));
    }
    Ok(Some(value.trim_end_matches('/').to_owned()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
