use tracing::{info, warn};

/// Sink for the user-visible outcome of an action.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

/// Reports notifications as log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(notification = "success", "{message}");
    }

    fn failure(&self, message: &str) {
        warn!(notification = "failure", "{message}");
    }
}
