//! View models and their askama templates.
//!
//! Controllers describe what a region should show with a view struct, render
//! it through an auto-escaping template and replace the region wholesale.
//! Rendered buttons carry `data-action` attributes instead of inline script;
//! see [`crate::events::PageEvent::from_action`].

use askama::Template;
use shopfront_core::Currency;
use thiserror::Error;

use crate::models::{Cart, LineItem};

/// A template failed to render.
#[derive(Debug, Error)]
#[error("template error: {0}")]
pub struct RenderError(#[from] askama::Error);

/// Render `template` to a string.
///
/// # Errors
///
/// Returns `RenderError` if askama fails to render.
pub fn render(template: &impl Template) -> Result<String, RenderError> {
    Ok(template.render()?)
}

// =============================================================================
// Cart
// =============================================================================

/// Cart line display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_total: String,
    pub decrement_to: i64,
    pub increment_to: i64,
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Grouped total without the currency symbol (e.g. `12,500`).
    pub total: String,
    pub item_count: u32,
}

impl CartItemView {
    fn new(item: &LineItem, currency: Currency) -> Self {
        let quantity = i64::from(item.quantity);
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            image: item.image.clone(),
            quantity: item.quantity,
            price: item.price.display(currency),
            line_total: item.line_total().display(currency),
            decrement_to: quantity - 1,
            increment_to: quantity + 1,
        }
    }
}

impl CartView {
    /// Build the view for `cart`.
    #[must_use]
    pub fn new(cart: &Cart, currency: Currency) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|item| CartItemView::new(item, currency))
                .collect(),
            total: cart.total().grouped(),
            item_count: cart.item_count(),
        }
    }
}

/// Cart line list fragment.
#[derive(Template)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate<'a> {
    pub cart: &'a CartView,
}

// =============================================================================
// Overlays
// =============================================================================

/// Kind of notification, which picks its styling and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Error => "❌",
            Self::Info => "ℹ️",
        }
    }
}

/// A notification: a title and one or more paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub kind: NotificationKind,
    pub title: String,
    pub messages: Vec<String>,
}

impl NotificationView {
    /// A notification with a single message.
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            messages: vec![message.into()],
        }
    }

    /// A notification listing several messages.
    pub fn list(kind: NotificationKind, title: impl Into<String>, messages: Vec<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            messages,
        }
    }
}

/// Notification overlay body.
#[derive(Template)]
#[template(path = "partials/notification.html")]
pub struct NotificationTemplate<'a> {
    pub notification: &'a NotificationView,
}

/// Loading overlay body.
#[derive(Template)]
#[template(path = "partials/loading_overlay.html")]
pub struct LoadingOverlayTemplate<'a> {
    pub title: &'a str,
    pub message: &'a str,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopfront_core::{Price, ProductId};

    use super::*;
    use crate::models::ProductCard;

    fn cart_with(name: &str, price: i64, quantity: i64) -> Cart {
        let mut cart = Cart::default();
        let id = ProductId::new("p1");
        cart.add(ProductCard {
            id: id.clone(),
            name: name.to_string(),
            price: Price::new(price),
            image: "img/p1.jpg".to_string(),
        });
        cart.set_quantity(&id, quantity);
        cart
    }

    #[test]
    fn test_empty_cart_renders_placeholder() {
        let view = CartView::new(&Cart::default(), Currency::NGN);
        let html = render(&CartItemsTemplate { cart: &view }).unwrap();
        assert_eq!(html.trim(), r#"<p class="empty-cart">Your cart is empty</p>"#);
    }

    #[test]
    fn test_cart_items_render_prices_and_controls() {
        let view = CartView::new(&cart_with("Ankara Dress", 12_500, 2), Currency::NGN);
        let html = render(&CartItemsTemplate { cart: &view }).unwrap();
        assert!(html.contains("<h3>Ankara Dress</h3>"));
        assert!(html.contains("₦12,500"));
        assert!(html.contains("₦25,000"));
        assert!(html.contains(r#"data-quantity="1""#));
        assert!(html.contains(r#"data-quantity="3""#));
        assert!(html.contains(r#"data-action="remove""#));
        assert_eq!(view.total, "25,000");
        assert_eq!(view.item_count, 2);
    }

    #[test]
    fn test_cart_items_escape_markup() {
        let view = CartView::new(&cart_with("<script>alert(1)</script>", 1, 1), Currency::NGN);
        let html = render(&CartItemsTemplate { cart: &view }).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_notification_renders_every_message() {
        let view = NotificationView::list(
            NotificationKind::Error,
            "Validation Error",
            vec!["Name is required".to_string(), "Message is required".to_string()],
        );
        let html = render(&NotificationTemplate { notification: &view }).unwrap();
        assert!(html.contains(r#"class="notification error""#));
        assert!(html.contains("❌"));
        assert!(html.contains("<p>Name is required</p>"));
        assert!(html.contains("<p>Message is required</p>"));
        assert!(html.contains(r#"data-action="dismiss-notification""#));
    }

    #[test]
    fn test_loading_overlay() {
        let html = render(&LoadingOverlayTemplate {
            title: "Processing Your Order",
            message: "Please wait while we process your checkout...",
        })
        .unwrap();
        assert!(html.contains("loading-spinner"));
        assert!(html.contains("<h3>Processing Your Order</h3>"));
    }
}
