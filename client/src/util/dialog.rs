//! Native `alert`/`confirm` wrappers.
//!
//! SSR paths log instead of prompting, and `confirm` answers `false` so no
//! destructive action can run without a browser user agreeing to it.

/// Show a blocking alert.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::warn!("alert: {message}");
    }
}

/// Ask the user to confirm; `false` when no browser is available.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
