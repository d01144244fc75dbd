//! User-facing notices

/// Blocking notice shown to the user (an alert dialog in a browser host)
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Show `message`; returns once the user dismissed it
    fn alert(&self, message: &str);
}

/// Notifier for headless hosts: logs each notice at warn level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn alert(&self, message: &str) {
        tracing::warn!(notice = message, "editor notice");
    }
}
