//! User-facing notification seam.
//!
//! Transport failures and mutation outcomes surface as transient
//! notifications; the controllers only depend on this trait, so the
//! rendering layer decides how they are shown. The default
//! implementation logs through `tracing`.

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

/// Sink for transient user-visible notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);

    fn success(&self, message: &str) {
        self.notify(NoticeKind::Success, message);
    }

    fn info(&self, message: &str) {
        self.notify(NoticeKind::Info, message);
    }

    fn error(&self, message: &str) {
        self.notify(NoticeKind::Error, message);
    }
}

/// Default sink: structured log records via `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => tracing::info!(notice = "success", "{message}"),
            NoticeKind::Info => tracing::info!(notice = "info", "{message}"),
            NoticeKind::Error => tracing::warn!(notice = "error", "{message}"),
        }
    }
}
