//! Error taxonomy for listing API calls.
//!
//! ERROR HANDLING
//! ==============
//! Pages catch every failure at the call site and render a message inline,
//! so the only job here is to classify a failed response well enough that
//! the edit view can tell field-level validation apart from everything else.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

/// Field name → messages, as returned with an HTTP 400.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// A failed listing API call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),

    /// The backend rejected specific fields.
    #[error("validation failed for {}", field_list(.0))]
    Validation(FieldErrors),

    /// Any other non-success response.
    #[error("{}", server_display(.status, .message))]
    Server { status: u16, message: Option<String> },

    /// A success response whose body could not be decoded.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
        let message = parsed.as_ref().and_then(message_field);

        if status == 400
            && message.is_none()
            && let Some(serde_json::Value::Object(map)) = &parsed
            && !map.is_empty()
        {
            let fields = map
                .iter()
                .map(|(field, value)| (field.clone(), field_messages(value)))
                .collect();
            return Self::Validation(fields);
        }

        Self::Server { status, message }
    }

    /// The backend's own explanation, when it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Server message when present, otherwise `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

fn message_field(value: &serde_json::Value) -> Option<String> {
    ["message", "detail"]
        .into_iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(str::to_owned)
}

fn field_messages(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map_or_else(|| item.to_string(), str::to_owned))
            .collect(),
        serde_json::Value::String(s) => vec![s.clone()],
        other => vec![other.to_string()],
    }
}

fn field_list(fields: &FieldErrors) -> String {
    fields.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
}

#[allow(clippy::trivially_copy_pass_by_ref, clippy::ref_option)]
fn server_display(status: &u16, message: &Option<String>) -> String {
    message
        .clone()
        .unwrap_or_else(|| format!("request failed with status {status}"))
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
