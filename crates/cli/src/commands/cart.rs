//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! shop-cli cart add -i p1 -n "Ankara Dress" -p 12500 --image img/ankara.jpg
//! shop-cli cart set-quantity -i p1 -q 3
//! shop-cli cart remove -i p1
//! shop-cli cart show
//! shop-cli cart clear
//! ```
//!
//! # Environment Variables
//!
//! - `SHOP_STORAGE_PATH` - Local storage file (default `.shopfront/local_storage.json`)
//! - `SHOP_STORAGE_KEY` - Key the cart is stored under (default `cart`)

use shopfront_core::ProductId;
use shopfront_storefront::config::ShopConfig;
use shopfront_storefront::error::PageError;
use shopfront_storefront::events::PageEvent;

use super::{Session, dataset, log_notification, open};

/// Log the cart's lines and total.
pub fn show(config: &ShopConfig) -> Result<(), PageError> {
    let session = open(config)?;
    log_cart(&session, config);
    Ok(())
}

/// Add a product, as clicking its card's "Add to cart" button would.
pub fn add(
    config: &ShopConfig,
    id: &str,
    name: &str,
    price: &str,
    image: &str,
) -> Result<(), PageError> {
    let event = PageEvent::from_action(
        "add",
        &dataset(&[
            ("product-id", id),
            ("product-name", name),
            ("product-price", price),
            ("product-image", image),
        ]),
    )?;

    let mut session = open(config)?;
    session.dispatch(event);
    log_notification(&session);
    log_cart(&session, config);
    Ok(())
}

/// Set a line's quantity.
pub fn set_quantity(config: &ShopConfig, id: &str, quantity: &str) -> Result<(), PageError> {
    let event = PageEvent::from_action(
        "set-quantity",
        &dataset(&[("product-id", id), ("quantity", quantity)]),
    )?;

    let mut session = open(config)?;
    if session.cart().get(&ProductId::new(id)).is_none() {
        tracing::warn!("No cart line for product {id}");
    }
    session.dispatch(event);
    log_cart(&session, config);
    Ok(())
}

/// Remove a line.
pub fn remove(config: &ShopConfig, id: &str) -> Result<(), PageError> {
    let event = PageEvent::from_action("remove", &dataset(&[("product-id", id)]))?;

    let mut session = open(config)?;
    session.dispatch(event);
    log_cart(&session, config);
    Ok(())
}

/// Empty the cart.
pub fn clear(config: &ShopConfig) -> Result<(), PageError> {
    let mut session = open(config)?;
    session.clear_cart();
    tracing::info!("Cart cleared");
    Ok(())
}

fn log_cart(session: &Session, config: &ShopConfig) {
    let cart = session.cart();
    if cart.is_empty() {
        tracing::info!("Your cart is empty");
        return;
    }

    for item in cart.items() {
        tracing::info!(
            "{} x{} @ {} = {} [{}]",
            item.name,
            item.quantity,
            item.price.display(config.currency),
            item.line_total().display(config.currency),
            item.id
        );
    }
    tracing::info!(
        "Total: {} ({} items)",
        cart.total().display(config.currency),
        cart.item_count()
    );
}
