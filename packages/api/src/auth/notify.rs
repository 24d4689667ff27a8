//! User-visible notifications raised by session operations.

/// Sink for the success and failure messages of login, registration and
/// logout. The UI plugs in its toast surface; the default only logs.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Writes notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(target: "notify", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!(target: "notify", "{message}");
    }
}
