//! Confirmation and prompt dialogs, abstracted away from any real UI.

/// Dialogs a view can ask the user to answer before a destructive call.
pub trait UiEffects {
    /// Ask a yes/no question; `true` means proceed.
    fn confirm(&self, message: &str) -> bool;

    /// Ask for a line of text pre-filled with `default`; `None` means the user
    /// cancelled.
    fn prompt(&self, message: &str, default: &str) -> Option<String>;
}

impl<U: UiEffects + ?Sized> UiEffects for &U {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        (**self).prompt(message, default)
    }
}
