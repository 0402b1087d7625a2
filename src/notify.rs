//! User Notifications
//!
//! Blocking messages shown to the user, kept behind a trait so the
//! workflow can be exercised outside a browser.

use crate::models::Notice;

/// Surfaces a notice to the user
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// `window.alert` in the browser
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn notify(&self, notice: Notice) {
        let shown = web_sys::window().map(|window| window.alert_with_message(notice.message()));
        if !matches!(shown, Some(Ok(()))) {
            log::warn!("[Notify] could not show alert: {}", notice.message());
        }
    }
}
