//! Mobile navigation toggle.
//!
//! The open state lives in the document: `active` on both the hamburger and
//! the navigation list.

use crate::dom::{ACTIVE_CLASS, Dom, selectors};

/// Controls the mobile navigation menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuController;

impl MenuController {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Whether the navigation list is open.
    #[must_use]
    pub fn is_open(&self, dom: &impl Dom) -> bool {
        dom.has_class(selectors::NAV_MENU, ACTIVE_CLASS)
    }

    /// Hamburger click: flip the menu.
    pub fn toggle(&self, dom: &mut impl Dom) {
        if !dom.exists(selectors::NAV_MENU) {
            tracing::debug!("No navigation menu on page; ignoring toggle");
            return;
        }
        let open = !self.is_open(&*dom);
        Self::set_open(dom, open);
        tracing::debug!(open, "Menu toggled");
    }

    /// Navigation link click: close the menu.
    pub fn link_clicked(&self, dom: &mut impl Dom) {
        Self::set_open(dom, false);
    }

    /// Click anywhere outside the navigation and hamburger: close the menu.
    pub fn outside_click(&self, dom: &mut impl Dom) {
        if self.is_open(&*dom) {
            Self::set_open(dom, false);
            tracing::debug!("Menu closed by outside click");
        }
    }

    fn set_open(dom: &mut impl Dom, open: bool) {
        for selector in [selectors::HAMBURGER, selectors::NAV_MENU] {
            if open {
                dom.add_class(selector, ACTIVE_CLASS);
            } else {
                dom.remove_class(selector, ACTIVE_CLASS);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;

    #[test]
    fn test_toggle_sets_class_pair() {
        let mut dom = MemoryDom::storefront();
        let menu = MenuController::new();

        menu.toggle(&mut dom);
        assert!(dom.has_class(selectors::HAMBURGER, ACTIVE_CLASS));
        assert!(dom.has_class(selectors::NAV_MENU, ACTIVE_CLASS));

        menu.toggle(&mut dom);
        assert!(!dom.has_class(selectors::HAMBURGER, ACTIVE_CLASS));
        assert!(!dom.has_class(selectors::NAV_MENU, ACTIVE_CLASS));
    }

    #[test]
    fn test_link_click_closes() {
        let mut dom = MemoryDom::storefront();
        let menu = MenuController::new();
        menu.toggle(&mut dom);
        menu.link_clicked(&mut dom);
        assert!(!menu.is_open(&dom));
        assert!(!dom.has_class(selectors::HAMBURGER, ACTIVE_CLASS));
    }

    #[test]
    fn test_outside_click_closes() {
        let mut dom = MemoryDom::storefront();
        let menu = MenuController::new();
        menu.toggle(&mut dom);
        menu.outside_click(&mut dom);
        assert!(!menu.is_open(&dom));
    }

    #[test]
    fn test_outside_click_when_closed_is_noop() {
        let mut dom = MemoryDom::storefront();
        let menu = MenuController::new();
        menu.outside_click(&mut dom);
        assert!(!menu.is_open(&dom));
    }

    #[test]
    fn test_missing_nav_is_skipped() {
        let mut dom = MemoryDom::storefront().without_element(selectors::NAV_MENU);
        let menu = MenuController::new();
        menu.toggle(&mut dom);
        assert!(!dom.has_class(selectors::HAMBURGER, ACTIVE_CLASS));
    }
}
