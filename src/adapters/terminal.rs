use crate::domain::ports::{Navigator, Notifier};

/// Alerts go to stderr; there is no dialog to block on.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        tracing::warn!("Alert: {}", message);
        eprintln!("⚠️  {}", message);
    }
}

/// A terminal has no history; navigation requests are only logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn history_back(&self) {
        tracing::info!("Navigation requested: history back");
    }

    fn navigate(&self, url: &str) {
        tracing::info!("Navigation requested: {}", url);
    }
}
