//! Checkout command.
//!
//! Runs the simulated checkout for the stored cart. On success the cart is
//! cleared and the order number is logged; a cancelled or failed checkout
//! leaves the cart as it was.
//!
//! # Environment Variables
//!
//! - `SHOP_CHECKOUT_DELAY_MS` - Simulated processing time (default 10000)
//! - `SHOP_ORDER_PREFIX` - Order number prefix (default `WM`)

use std::time::Duration;

use shopfront_storefront::config::ShopConfig;
use shopfront_storefront::dom::MemoryDom;
use shopfront_storefront::error::PageError;
use shopfront_storefront::events::PageEvent;

use super::{log_notification, open_with};

/// Check out, optionally overriding the delay or cancelling part way.
pub async fn run(
    config: &ShopConfig,
    delay_ms: Option<u64>,
    cancel_after_ms: Option<u64>,
) -> Result<(), PageError> {
    let delay = delay_ms.map_or(config.checkout_delay, Duration::from_millis);
    let mut session = open_with(config, MemoryDom::storefront(), delay)?;

    session.dispatch(PageEvent::Checkout);
    if session.is_checkout_pending() {
        tracing::info!("Processing your order...");
        if let Some(ms) = cancel_after_ms {
            tokio::time::sleep(Duration::from_millis(ms)).await;
            session.dispatch(PageEvent::CancelCheckout);
        }
        session.settle().await;
    }

    log_notification(&session);
    Ok(())
}
