#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// Fire-and-forget user-facing notification surface (a toast in the web
/// storefront). Implementations must not block.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, title: &str, message: &str);
}

/// Default surface: structured log events.
#[derive(Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NoticeKind, title: &str, message: &str) {
        match kind {
            NoticeKind::Error => tracing::error!(title, message, "user notification"),
            NoticeKind::Success => tracing::info!(title, message, "user notification"),
            NoticeKind::Info => tracing::info!(title, message, "user notification"),
        }
    }
}
