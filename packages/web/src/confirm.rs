//! Confirmation prompt for destructive actions.

/// Ask the user to confirm before going through with a destructive action.
/// Uses the browser's native confirm dialog on the web target; headless
/// builds confirm silently.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|window| window.confirm_with_message(message).unwrap_or(false))
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        true
    }
}
