//! Integration tests for the Shopfront storefront page.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopfront-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_cart` - Cart mutations, totals and persistence
//! - `storefront_checkout` - Simulated checkout, cancellation and failures
//! - `storefront_contact` - Contact form validation and sending
//! - `storefront_menu` - Mobile menu and the page event loop
//!
//! Everything runs headless against `MemoryDom` and `MemoryStorage`; timer
//! behaviour uses tokio's paused clock.

use std::future::Future;
use std::time::Duration;

use shopfront_core::{OrderNumber, Price, ProductId};
use shopfront_storefront::config::ShopConfig;
use shopfront_storefront::dom::MemoryDom;
use shopfront_storefront::models::{ContactMessage, ProductCard};
use shopfront_storefront::page::Page;
use shopfront_storefront::services::{
    CheckoutProcessor, MessageSender, OrderSummary, Receipt, SimulatedCheckout, SimulatedSender,
};
use shopfront_storefront::storage::MemoryStorage;
use shopfront_storefront::task::TaskError;

/// Order number every [`InstantCheckout`] receipt carries.
pub const TEST_ORDER_NUMBER: &str = "WM123456";

/// Checkout that succeeds immediately with [`TEST_ORDER_NUMBER`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantCheckout;

impl CheckoutProcessor for InstantCheckout {
    fn process(&self, order: OrderSummary) -> impl Future<Output = Result<Receipt, TaskError>> + Send {
        async move {
            Ok(Receipt {
                order_number: OrderNumber::from_millis("WM", 1_700_000_123_456),
                total: order.total,
            })
        }
    }
}

/// Checkout that always fails with `reason`.
#[derive(Debug, Clone)]
pub struct FailingCheckout {
    pub reason: String,
}

impl CheckoutProcessor for FailingCheckout {
    fn process(&self, _order: OrderSummary) -> impl Future<Output = Result<Receipt, TaskError>> + Send {
        let reason = self.reason.clone();
        async move { Err(TaskError::Failed(reason)) }
    }
}

/// Sender that always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSender;

impl MessageSender for FailingSender {
    fn send(&self, _message: ContactMessage) -> impl Future<Output = Result<(), TaskError>> + Send {
        async { Err(TaskError::Failed("mail server unreachable".to_string())) }
    }
}

/// A page with the default configuration and the given collaborators.
pub fn page<P, M>(
    dom: MemoryDom,
    storage: MemoryStorage,
    processor: P,
    sender: M,
) -> Page<MemoryDom, MemoryStorage, P, M>
where
    P: CheckoutProcessor,
    M: MessageSender,
{
    Page::new(dom, storage, processor, sender, &ShopConfig::default())
}

/// A page with the simulated services at their default delays.
pub fn simulated_page(
    dom: MemoryDom,
    storage: MemoryStorage,
) -> Page<MemoryDom, MemoryStorage, SimulatedCheckout, SimulatedSender> {
    let config = ShopConfig::default();
    page(
        dom,
        storage,
        SimulatedCheckout::new(config.checkout_delay, config.order_prefix.clone()),
        SimulatedSender::new(config.contact_delay),
    )
}

/// Product card data as an "Add to cart" click would carry it.
pub fn card(id: &str, name: &str, price: i64) -> ProductCard {
    ProductCard {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::new(price),
        image: format!("img/{id}.jpg"),
    }
}

/// Default notification timeout plus a little slack.
#[must_use]
pub fn past_notification_timeout() -> Duration {
    ShopConfig::default().notification_timeout + Duration::from_millis(100)
}
