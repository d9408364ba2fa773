//! Notification and loading overlays.

use std::time::Duration;

use tokio::time::Instant;

use crate::dom::{Dom, selectors};
use crate::views::{self, LoadingOverlayTemplate, NotificationTemplate, NotificationView};

/// Shows one notification at a time and tracks when it should dismiss
/// itself.
#[derive(Debug)]
pub struct Notifications {
    timeout: Duration,
    deadline: Option<Instant>,
    current: Option<NotificationView>,
}

impl Notifications {
    /// Notifications that dismiss themselves after `timeout`.
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            deadline: None,
            current: None,
        }
    }

    /// Replace any visible notification with `view`.
    pub fn show(&mut self, dom: &mut impl Dom, view: NotificationView) {
        dom.remove_overlay(selectors::NOTIFICATION_OVERLAY);

        let html = match views::render(&NotificationTemplate { notification: &view }) {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(error = %e, title = %view.title, "Failed to render notification");
                return;
            }
        };

        tracing::debug!(kind = view.kind.css_class(), title = %view.title, "Showing notification");
        dom.append_overlay(selectors::NOTIFICATION_OVERLAY, &html);
        self.deadline = Some(Instant::now() + self.timeout);
        self.current = Some(view);
    }

    /// Dismiss the visible notification (OK button or backdrop click).
    pub fn dismiss(&mut self, dom: &mut impl Dom) {
        dom.remove_overlay(selectors::NOTIFICATION_OVERLAY);
        self.deadline = None;
        self.current = None;
    }

    /// Dismiss the notification if its deadline has passed at `now`.
    /// Returns whether it was dismissed.
    pub fn expire(&mut self, dom: &mut impl Dom, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.dismiss(dom);
                true
            }
            _ => false,
        }
    }

    /// When the visible notification dismisses itself, if one is showing.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// The notification currently showing.
    #[must_use]
    pub const fn current(&self) -> Option<&NotificationView> {
        self.current.as_ref()
    }
}

/// Show the loading overlay, replacing an existing one.
pub fn show_loading(dom: &mut impl Dom, title: &str, message: &str) {
    dom.remove_overlay(selectors::LOADING_OVERLAY);
    match views::render(&LoadingOverlayTemplate { title, message }) {
        Ok(html) => dom.append_overlay(selectors::LOADING_OVERLAY, &html),
        Err(e) => tracing::error!(error = %e, "Failed to render loading overlay"),
    }
}

/// Remove the loading overlay if present.
pub fn hide_loading(dom: &mut impl Dom) {
    dom.remove_overlay(selectors::LOADING_OVERLAY);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;
    use crate::views::NotificationKind;

    fn added() -> NotificationView {
        NotificationView::new(
            NotificationKind::Success,
            "Product Added!",
            "Item has been successfully added to your cart.",
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_replaces_existing() {
        let mut dom = MemoryDom::new();
        let mut notifications = Notifications::new(Duration::from_secs(3));
        notifications.show(&mut dom, added());
        notifications.show(
            &mut dom,
            NotificationView::new(NotificationKind::Error, "Cart Empty!", "Add something first."),
        );
        let html = dom.overlay(selectors::NOTIFICATION_OVERLAY).unwrap();
        assert!(html.contains("Cart Empty!"));
        assert!(!html.contains("Product Added!"));
        assert_eq!(notifications.current().unwrap().title, "Cart Empty!");
    }

    #[tokio::test(start_paused = true)]
    async fn test_expire_only_after_deadline() {
        let mut dom = MemoryDom::new();
        let mut notifications = Notifications::new(Duration::from_secs(3));
        notifications.show(&mut dom, added());

        assert!(!notifications.expire(&mut dom, Instant::now() + Duration::from_secs(2)));
        assert!(dom.overlay(selectors::NOTIFICATION_OVERLAY).is_some());

        assert!(notifications.expire(&mut dom, Instant::now() + Duration::from_secs(3)));
        assert!(dom.overlay(selectors::NOTIFICATION_OVERLAY).is_none());
        assert!(notifications.deadline().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_notification_resets_deadline() {
        let mut dom = MemoryDom::new();
        let mut notifications = Notifications::new(Duration::from_secs(3));
        notifications.show(&mut dom, added());
        let first = notifications.deadline().unwrap();

        tokio::time::advance(Duration::from_secs(2)).await;
        notifications.show(&mut dom, added());

        assert!(!notifications.expire(&mut dom, first));
        assert!(dom.overlay(selectors::NOTIFICATION_OVERLAY).is_some());
    }

    #[test]
    fn test_loading_overlay_show_hide() {
        let mut dom = MemoryDom::new();
        show_loading(&mut dom, "Processing Your Order", "Please wait");
        assert!(dom.overlay(selectors::LOADING_OVERLAY).unwrap().contains("Processing Your Order"));
        hide_loading(&mut dom);
        assert!(dom.overlay(selectors::LOADING_OVERLAY).is_none());
    }
}
