//! Page document access.
//!
//! Controllers never build or query markup directly; they go through the
//! [`Dom`] trait using the selectors in [`selectors`]. Every mutating method
//! reports whether the target existed so callers can skip missing regions.
//! [`MemoryDom`] is the in-memory document used by tests and the CLI.

use std::collections::{BTreeMap, BTreeSet};

/// The DOM contract the host page provides.
pub mod selectors {
    /// Region the cart line list is rendered into.
    pub const CART_ITEMS: &str = "#cart-items";
    /// Wrapper around the total; hidden while the cart is empty.
    pub const CART_TOTAL: &str = "#cart-total";
    /// Text node receiving the grouped total.
    pub const TOTAL_AMOUNT: &str = "#total-amount";
    /// Optional header badge with the number of units in the cart.
    pub const CART_COUNT: &str = ".cart-count";
    /// Checkout button.
    pub const CHECKOUT_BUTTON: &str = ".checkout-btn";
    /// Mobile menu toggle.
    pub const HAMBURGER: &str = ".hamburger";
    /// Navigation list shown and hidden by the toggle.
    pub const NAV_MENU: &str = "nav ul";
    /// Contact form.
    pub const CONTACT_FORM: &str = ".contact-form";
    /// Contact form submit button.
    pub const SUBMIT_BUTTON: &str = ".submit-btn";
    /// Notification overlay class.
    pub const NOTIFICATION_OVERLAY: &str = "notification-overlay";
    /// Loading overlay class.
    pub const LOADING_OVERLAY: &str = "loading-overlay";
}

/// Class toggled on the hamburger and navigation list while the menu is open.
pub const ACTIVE_CLASS: &str = "active";
/// Class put on a button while its action is in flight.
pub const LOADING_CLASS: &str = "loading";

/// Contact form input names.
pub mod inputs {
    pub const NAME: &str = "name";
    pub const PHONE: &str = "phone";
    pub const EMAIL: &str = "email";
    pub const MESSAGE: &str = "message";

    /// Every contact form input, in form order.
    pub const ALL: [&str; 4] = [NAME, PHONE, EMAIL, MESSAGE];
}

/// Read and write access to the page document.
pub trait Dom {
    /// Whether an element matches `selector`.
    fn exists(&self, selector: &str) -> bool;

    /// Replace the children of `selector` with `html`.
    fn set_inner_html(&mut self, selector: &str, html: &str) -> bool;

    /// Replace the text content of `selector`.
    fn set_text(&mut self, selector: &str, text: &str) -> bool;

    /// Show or hide `selector` (`display: block` / `display: none`).
    fn set_displayed(&mut self, selector: &str, displayed: bool) -> bool;

    /// Add `class` to `selector`.
    fn add_class(&mut self, selector: &str, class: &str) -> bool;

    /// Remove `class` from `selector`.
    fn remove_class(&mut self, selector: &str, class: &str) -> bool;

    /// Whether `selector` exists and carries `class`.
    fn has_class(&self, selector: &str, class: &str) -> bool;

    /// Current value of the form input named `name`.
    fn input_value(&self, name: &str) -> Option<String>;

    /// Set the value of the form input named `name`.
    fn set_input_value(&mut self, name: &str, value: &str) -> bool;

    /// Append an overlay element with class `class` and body `html` to the
    /// document body.
    fn append_overlay(&mut self, class: &str, html: &str);

    /// Remove the overlay with class `class`. Returns whether one existed.
    fn remove_overlay(&mut self, class: &str) -> bool;
}

/// State of one element in a [`MemoryDom`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub inner_html: String,
    pub text: String,
    pub classes: BTreeSet<String>,
    pub displayed: bool,
}

/// An in-memory document keyed by selector.
#[derive(Debug, Clone, Default)]
pub struct MemoryDom {
    elements: BTreeMap<String, Element>,
    inputs: BTreeMap<String, String>,
}

impl MemoryDom {
    /// An empty document: every region is missing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A document providing the full storefront contract.
    #[must_use]
    pub fn storefront() -> Self {
        let mut dom = Self::new()
            .with_element(selectors::CART_ITEMS)
            .with_element(selectors::CART_TOTAL)
            .with_element(selectors::TOTAL_AMOUNT)
            .with_element(selectors::CART_COUNT)
            .with_element(selectors::CHECKOUT_BUTTON)
            .with_element(selectors::HAMBURGER)
            .with_element(selectors::NAV_MENU)
            .with_element(selectors::CONTACT_FORM)
            .with_element(selectors::SUBMIT_BUTTON);
        dom.set_text(selectors::CHECKOUT_BUTTON, "Proceed to Checkout");
        dom.set_text(selectors::SUBMIT_BUTTON, "Send Message");
        for name in inputs::ALL {
            dom.inputs.insert(name.to_string(), String::new());
        }
        dom
    }

    /// Add an empty, displayed element at `selector`.
    #[must_use]
    pub fn with_element(mut self, selector: &str) -> Self {
        self.elements.insert(
            selector.to_string(),
            Element {
                displayed: true,
                ..Element::default()
            },
        );
        self
    }

    /// Add a form input.
    #[must_use]
    pub fn with_input(mut self, name: &str, value: &str) -> Self {
        self.inputs.insert(name.to_string(), value.to_string());
        self
    }

    /// Remove the element at `selector`.
    #[must_use]
    pub fn without_element(mut self, selector: &str) -> Self {
        self.elements.remove(selector);
        self
    }

    /// Element at `selector`.
    #[must_use]
    pub fn element(&self, selector: &str) -> Option<&Element> {
        self.elements.get(selector)
    }

    /// Inner HTML of `selector`.
    #[must_use]
    pub fn inner_html(&self, selector: &str) -> Option<&str> {
        self.element(selector).map(|e| e.inner_html.as_str())
    }

    /// Text content of `selector`.
    #[must_use]
    pub fn text(&self, selector: &str) -> Option<&str> {
        self.element(selector).map(|e| e.text.as_str())
    }

    /// Whether `selector` is displayed.
    #[must_use]
    pub fn is_displayed(&self, selector: &str) -> Option<bool> {
        self.element(selector).map(|e| e.displayed)
    }

    /// Markup of the overlay with class `class`.
    #[must_use]
    pub fn overlay(&self, class: &str) -> Option<&str> {
        self.inner_html(&overlay_selector(class))
    }

    fn with_element_mut(&mut self, selector: &str, f: impl FnOnce(&mut Element)) -> bool {
        self.elements.get_mut(selector).map(f).is_some()
    }
}

fn overlay_selector(class: &str) -> String {
    format!(".{class}")
}

impl Dom for MemoryDom {
    fn exists(&self, selector: &str) -> bool {
        self.elements.contains_key(selector)
    }

    fn set_inner_html(&mut self, selector: &str, html: &str) -> bool {
        self.with_element_mut(selector, |e| html.clone_into(&mut e.inner_html))
    }

    fn set_text(&mut self, selector: &str, text: &str) -> bool {
        self.with_element_mut(selector, |e| text.clone_into(&mut e.text))
    }

    fn set_displayed(&mut self, selector: &str, displayed: bool) -> bool {
        self.with_element_mut(selector, |e| e.displayed = displayed)
    }

    fn add_class(&mut self, selector: &str, class: &str) -> bool {
        self.with_element_mut(selector, |e| {
            e.classes.insert(class.to_string());
        })
    }

    fn remove_class(&mut self, selector: &str, class: &str) -> bool {
        self.with_element_mut(selector, |e| {
            e.classes.remove(class);
        })
    }

    fn has_class(&self, selector: &str, class: &str) -> bool {
        self.element(selector)
            .is_some_and(|e| e.classes.contains(class))
    }

    fn input_value(&self, name: &str) -> Option<String> {
        self.inputs.get(name).cloned()
    }

    fn set_input_value(&mut self, name: &str, value: &str) -> bool {
        self.inputs
            .get_mut(name)
            .map(|v| value.clone_into(v))
            .is_some()
    }

    fn append_overlay(&mut self, class: &str, html: &str) {
        self.elements.insert(
            overlay_selector(class),
            Element {
                inner_html: html.to_string(),
                classes: BTreeSet::from([class.to_string()]),
                displayed: true,
                ..Element::default()
            },
        );
    }

    fn remove_overlay(&mut self, class: &str) -> bool {
        self.elements.remove(&overlay_selector(class)).is_some()
    }
}
