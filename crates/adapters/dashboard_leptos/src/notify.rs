//! Blocking `window.alert` adapter for the [`Notifier`] port.

use billsight_app::ports::Notifier;

/// Shows each message in a native alert dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        let shown = web_sys::window().is_some_and(|w| w.alert_with_message(message).is_ok());
        if !shown {
            leptos::logging::warn!("could not show alert: {message}");
        }
    }
}
