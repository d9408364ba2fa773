//! Integration tests for the contact form.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use shopfront_integration_tests::{FailingSender, InstantCheckout, page, simulated_page};
use shopfront_storefront::dom::{Dom, LOADING_CLASS, MemoryDom, inputs, selectors};
use shopfront_storefront::events::PageEvent;
use shopfront_storefront::storage::MemoryStorage;
use shopfront_storefront::views::NotificationKind;

fn form(name: &str, phone: &str, email: &str, message: &str) -> MemoryDom {
    MemoryDom::storefront()
        .with_input(inputs::NAME, name)
        .with_input(inputs::PHONE, phone)
        .with_input(inputs::EMAIL, email)
        .with_input(inputs::MESSAGE, message)
}

#[test]
fn test_empty_name_is_reported() {
    let dom = form("", "0803 123 4567", "ada@example.com", "Hello");
    let mut page = simulated_page(dom, MemoryStorage::new());

    page.dispatch(PageEvent::SubmitContact);

    assert!(!page.is_send_pending());
    let shown = page.notifications().current().unwrap();
    assert_eq!(shown.kind, NotificationKind::Error);
    assert_eq!(shown.title, "Validation Error");
    assert!(shown.messages.iter().any(|m| m == "Name is required"));
}

#[test]
fn test_short_phone_is_reported() {
    let dom = form("Ada", "123", "ada@example.com", "Hello");
    let mut page = simulated_page(dom, MemoryStorage::new());

    page.dispatch(PageEvent::SubmitContact);

    let shown = page.notifications().current().unwrap();
    assert!(
        shown
            .messages
            .iter()
            .any(|m| m == "Please enter a valid phone number (at least 10 digits)")
    );
}

#[test]
fn test_all_errors_are_listed_in_field_order() {
    let dom = form("   ", "abc", "not-an-email", "");
    let mut page = simulated_page(dom, MemoryStorage::new());

    page.dispatch(PageEvent::SubmitContact);

    let shown = page.notifications().current().unwrap();
    assert_eq!(
        shown.messages,
        [
            "Name is required",
            "Please enter a valid phone number (at least 10 digits)",
            "Please enter a valid email address",
            "Message is required",
        ]
    );
    let overlay = page.dom().overlay(selectors::NOTIFICATION_OVERLAY).unwrap();
    assert!(overlay.contains("<p>Message is required</p>"));
    // Fields are kept for correction
    assert_eq!(page.dom().input_value(inputs::EMAIL).as_deref(), Some("not-an-email"));
}

#[tokio::test(start_paused = true)]
async fn test_valid_form_sends_then_clears() {
    let dom = form(
        "Ada Obi",
        "+234 (803) 123-4567",
        "ada@example.com",
        "Do you ship to Abuja?",
    );
    let mut page = simulated_page(dom, MemoryStorage::new());

    let started = tokio::time::Instant::now();
    page.dispatch(PageEvent::SubmitContact);

    assert!(page.is_send_pending());
    assert!(page.dom().has_class(selectors::SUBMIT_BUTTON, LOADING_CLASS));
    assert_eq!(page.dom().text(selectors::SUBMIT_BUTTON), Some("Sending..."));

    page.settle().await;

    assert!(started.elapsed() >= Duration::from_secs(2));
    for name in inputs::ALL {
        assert_eq!(page.dom().input_value(name).as_deref(), Some(""));
    }
    assert!(!page.dom().has_class(selectors::SUBMIT_BUTTON, LOADING_CLASS));
    assert_eq!(page.dom().text(selectors::SUBMIT_BUTTON), Some("Send Message"));
    let shown = page.notifications().current().unwrap();
    assert_eq!(shown.kind, NotificationKind::Success);
    assert_eq!(shown.title, "Message Sent!");
}

#[tokio::test]
async fn test_failed_send_keeps_fields() {
    let dom = form("Ada", "08031234567", "ada@example.com", "Hello");
    let mut page = page(dom, MemoryStorage::new(), InstantCheckout, FailingSender);

    page.dispatch(PageEvent::SubmitContact);
    page.settle().await;

    assert_eq!(page.dom().input_value(inputs::NAME).as_deref(), Some("Ada"));
    let shown = page.notifications().current().unwrap();
    assert_eq!(shown.kind, NotificationKind::Error);
    assert_eq!(shown.title, "Message Not Sent");
}

#[test]
fn test_page_without_contact_form_ignores_submit() {
    let dom = form("", "", "", "").without_element(selectors::CONTACT_FORM);
    let mut page = simulated_page(dom, MemoryStorage::new());

    page.dispatch(PageEvent::SubmitContact);

    assert!(!page.is_send_pending());
    assert!(page.notifications().current().is_none());
}
