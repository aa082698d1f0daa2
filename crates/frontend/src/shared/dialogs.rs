/// Blocking browser prompts used by the workflows.
pub trait Dialogs {
    /// Yes/no question; false when no answer can be obtained.
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// `window.confirm` / `window.alert`.
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(w) = web_sys::window() {
            let _ = w.alert_with_message(message);
        }
    }
}
