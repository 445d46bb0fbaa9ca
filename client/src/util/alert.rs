//! Blocking browser alert for validation prompts.
//!
//! Validation failures (empty title, missing selection) interrupt the user
//! with a native alert dialog. SSR paths safely no-op to keep server
//! rendering deterministic.

/// Show a blocking alert dialog. No-op outside the browser.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
