//! Browser confirmation and prompt dialogs.
//!
//! Implements `tasks::UiEffects` with `window.confirm` / `window.prompt`.
//! Without a browser every dialog reads as declined, so nothing destructive
//! can happen by accident.

#[cfg(test)]
#[path = "dialogs_test.rs"]
mod dialogs_test;

use tasks::UiEffects;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserDialogs;

impl UiEffects for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(message).ok())
                .unwrap_or(false)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = message;
            false
        }
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            web_sys::window()?
                .prompt_with_message_and_default(message, default)
                .ok()
                .flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (message, default);
            None
        }
    }
}
