//! Notification seam for user-visible messages.
//!
//! The loader reports failures through this trait instead of reaching for an
//! ambient global, so the collaborator is visible wherever a loader is built.

/// Category of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyCategory {
    Error,
    Warning,
    Info,
}

impl NotifyCategory {
    /// Stable lowercase label for sinks that render the category as text.
    pub fn label(&self) -> &'static str {
        match self {
            NotifyCategory::Error => "error",
            NotifyCategory::Warning => "warning",
            NotifyCategory::Info => "info",
        }
    }
}

/// Collaborator that surfaces messages to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, category: NotifyCategory, message: &str);
}

/// Notifier that writes `[category] message` lines to stderr.
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, category: NotifyCategory, message: &str) {
        eprintln!("[{}] {}", category.label(), message);
    }
}
