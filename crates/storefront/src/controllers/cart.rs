//! Cart controller.
//!
//! Owns the in-memory [`Cart`], mirrors it to local storage after every
//! mutation and re-renders the cart regions. Checkout is split in two: the
//! page starts it with [`CartController::begin_checkout`], keeps the returned
//! handle, and reports the outcome with [`CartController::finish_checkout`].

use std::sync::Arc;

use shopfront_core::{Currency, ProductId};
use tracing::instrument;

use crate::controllers::notification::{self, Notifications};
use crate::dom::{Dom, LOADING_CLASS, selectors};
use crate::error::add_breadcrumb;
use crate::models::{Cart, ProductCard, QuantityChange};
use crate::services::{CheckoutProcessor, OrderSummary, Receipt};
use crate::storage::{CartStore, LocalStorage};
use crate::task::{TaskError, TaskHandle};
use crate::views::{self, CartItemsTemplate, CartView, NotificationKind, NotificationView};

const CHECKOUT_IDLE_TEXT: &str = "Proceed to Checkout";
const CHECKOUT_BUSY_TEXT: &str = "Processing...";

/// Cart state plus the collaborators it needs.
#[derive(Debug)]
pub struct CartController<S, P> {
    cart: Cart,
    store: CartStore<S>,
    processor: Arc<P>,
    currency: Currency,
}

impl<S: LocalStorage, P: CheckoutProcessor> CartController<S, P> {
    /// Rehydrate the cart from `store`.
    pub fn new(store: CartStore<S>, processor: P, currency: Currency) -> Self {
        let cart = Cart::from_items(store.load());
        tracing::debug!(lines = cart.len(), key = store.key(), "Cart rehydrated");
        Self {
            cart,
            store,
            processor: Arc::new(processor),
            currency,
        }
    }

    /// The in-memory cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The storage mirror.
    #[must_use]
    pub const fn store(&self) -> &CartStore<S> {
        &self.store
    }

    /// Add one unit of `card`, persist, confirm and re-render.
    #[instrument(skip(self, dom, notifications), fields(product_id = %card.id))]
    pub fn add(&mut self, dom: &mut impl Dom, notifications: &mut Notifications, card: ProductCard) {
        let id = card.id.clone();
        let quantity = self.cart.add(card);
        tracing::info!(quantity, "Added to cart");
        add_breadcrumb("cart", "Added product", Some(&[("product_id", id.as_str())]));

        self.persist();
        notifications.show(
            dom,
            NotificationView::new(
                NotificationKind::Success,
                "Product Added!",
                "Item has been successfully added to your cart.",
            ),
        );
        self.render(dom);
    }

    /// Remove the line for `id`, persist and re-render.
    #[instrument(skip(self, dom), fields(product_id = %id))]
    pub fn remove(&mut self, dom: &mut impl Dom, id: &ProductId) {
        if self.cart.remove(id) {
            tracing::info!("Removed from cart");
        }
        self.persist();
        self.render(dom);
    }

    /// Set the quantity for `id`. Zero or below removes the line; an unknown
    /// id is ignored.
    #[instrument(skip(self, dom), fields(product_id = %id))]
    pub fn update_quantity(&mut self, dom: &mut impl Dom, id: &ProductId, quantity: i64) {
        match self.cart.set_quantity(id, quantity) {
            QuantityChange::Unknown => {
                tracing::debug!("Quantity change for product not in cart");
                return;
            }
            QuantityChange::Removed => tracing::info!("Removed from cart"),
            QuantityChange::Updated(quantity) => tracing::info!(quantity, "Quantity updated"),
        }
        self.persist();
        self.render(dom);
    }

    /// Empty the cart, persist and re-render.
    pub fn clear(&mut self, dom: &mut impl Dom) {
        self.cart.clear();
        self.persist();
        self.render(dom);
    }

    /// Render the cart regions. Skipped entirely when `#cart-items` is
    /// missing.
    pub fn render(&self, dom: &mut impl Dom) {
        if !dom.exists(selectors::CART_ITEMS) {
            tracing::debug!("No cart region on page; skipping render");
            return;
        }

        let view = CartView::new(&self.cart, self.currency);
        match views::render(&CartItemsTemplate { cart: &view }) {
            Ok(html) => {
                dom.set_inner_html(selectors::CART_ITEMS, &html);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to render cart");
                return;
            }
        }

        dom.set_text(selectors::CART_COUNT, &view.item_count.to_string());
        if self.cart.is_empty() {
            dom.set_displayed(selectors::CART_TOTAL, false);
        } else if dom.set_text(selectors::TOTAL_AMOUNT, &view.total) {
            dom.set_displayed(selectors::CART_TOTAL, true);
        }
    }

    /// Start a checkout.
    ///
    /// An empty cart shows an error and starts nothing. Otherwise the
    /// checkout button and loading overlay switch to their busy state and the
    /// processor runs in a spawned task.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime with a non-empty cart.
    #[instrument(skip_all, fields(lines = self.cart.len()))]
    pub fn begin_checkout(
        &mut self,
        dom: &mut impl Dom,
        notifications: &mut Notifications,
    ) -> Option<TaskHandle<Receipt>> {
        if self.cart.is_empty() {
            tracing::info!("Checkout attempted with empty cart");
            notifications.show(
                dom,
                NotificationView::new(
                    NotificationKind::Error,
                    "Cart Empty!",
                    "Please add items to your cart before checkout.",
                ),
            );
            return None;
        }

        dom.add_class(selectors::CHECKOUT_BUTTON, LOADING_CLASS);
        dom.set_text(selectors::CHECKOUT_BUTTON, CHECKOUT_BUSY_TEXT);
        notification::show_loading(
            dom,
            "Processing Your Order",
            "Please wait while we process your checkout...",
        );

        let order = OrderSummary {
            lines: self.cart.items().to_vec(),
            total: self.cart.total(),
        };
        tracing::info!(total = order.total.amount(), "Checkout started");
        add_breadcrumb("checkout", "Checkout started", None);

        let processor = Arc::clone(&self.processor);
        Some(TaskHandle::spawn("checkout", async move {
            processor.process(order).await
        }))
    }

    /// Apply the outcome of a checkout started by `begin_checkout`.
    #[instrument(skip_all)]
    pub fn finish_checkout(
        &mut self,
        dom: &mut impl Dom,
        notifications: &mut Notifications,
        outcome: Result<Receipt, TaskError>,
    ) {
        notification::hide_loading(dom);
        dom.remove_class(selectors::CHECKOUT_BUTTON, LOADING_CLASS);
        dom.set_text(selectors::CHECKOUT_BUTTON, CHECKOUT_IDLE_TEXT);

        match outcome {
            Ok(receipt) => {
                // The total covers every line being cleared, including ones
                // added while the order was processing.
                let total = self.cart.total();
                tracing::info!(
                    order_number = %receipt.order_number,
                    total = total.amount(),
                    "Checkout completed"
                );
                notifications.show(
                    dom,
                    NotificationView::new(
                        NotificationKind::Success,
                        "Checkout Successful! 🎉",
                        format!(
                            "Your order #{} for {} has been processed successfully. Thank you for your purchase!",
                            receipt.order_number,
                            total.display(self.currency),
                        ),
                    ),
                );
                self.clear(dom);
            }
            Err(TaskError::Cancelled) => {
                tracing::info!("Checkout cancelled");
                notifications.show(
                    dom,
                    NotificationView::new(
                        NotificationKind::Info,
                        "Checkout Cancelled",
                        "Your cart has been kept.",
                    ),
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "Checkout failed");
                notifications.show(
                    dom,
                    NotificationView::new(
                        NotificationKind::Error,
                        "Checkout Failed",
                        format!("{e}. Your cart has been kept, please try again."),
                    ),
                );
            }
        }
    }

    /// Mirror the cart to storage. A failed write is logged; the in-memory
    /// cart stays authoritative.
    fn persist(&mut self) {
        if let Err(e) = self.store.save(self.cart.items()) {
            tracing::error!(error = %e, key = self.store.key(), "Failed to persist cart");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use shopfront_core::Price;

    use super::*;
    use crate::dom::MemoryDom;
    use crate::services::SimulatedCheckout;
    use crate::storage::MemoryStorage;

    type Controller = CartController<MemoryStorage, SimulatedCheckout>;

    fn controller() -> Controller {
        CartController::new(
            CartStore::new(MemoryStorage::new(), "cart"),
            SimulatedCheckout::new(Duration::from_secs(10), "WM"),
            Currency::NGN,
        )
    }

    fn card(id: &str, price: i64) -> ProductCard {
        ProductCard {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::new(price),
            image: format!("img/{id}.jpg"),
        }
    }

    fn stored(controller: &Controller) -> String {
        controller.store().storage().get_item("cart").unwrap().unwrap()
    }

    #[test]
    fn test_rehydrates_from_storage() {
        let storage = MemoryStorage::new().with_item(
            "cart",
            r#"[{"id":"p1","name":"Dress","price":100,"image":"d.jpg","quantity":3}]"#,
        );
        let controller = CartController::new(
            CartStore::new(storage, "cart"),
            SimulatedCheckout::new(Duration::ZERO, "WM"),
            Currency::NGN,
        );
        assert_eq!(controller.cart().item_count(), 3);
    }

    #[test]
    fn test_add_persists_renders_and_notifies() {
        let mut dom = MemoryDom::storefront();
        let mut notifications = Notifications::new(Duration::from_secs(3));
        let mut controller = controller();

        controller.add(&mut dom, &mut notifications, card("p1", 12_500));
        controller.add(&mut dom, &mut notifications, card("p1", 12_500));

        assert!(stored(&controller).contains(r#""quantity":2"#));
        assert_eq!(dom.text(selectors::TOTAL_AMOUNT), Some("25,000"));
        assert_eq!(dom.text(selectors::CART_COUNT), Some("2"));
        assert_eq!(dom.is_displayed(selectors::CART_TOTAL), Some(true));
        assert_eq!(notifications.current().unwrap().title, "Product Added!");
    }

    #[test]
    fn test_empty_cart_hides_total() {
        let mut dom = MemoryDom::storefront();
        let mut notifications = Notifications::new(Duration::from_secs(3));
        let mut controller = controller();
        controller.add(&mut dom, &mut notifications, card("p1", 100));

        controller.update_quantity(&mut dom, &ProductId::new("p1"), 0);

        assert!(controller.cart().is_empty());
        assert_eq!(stored(&controller), "[]");
        assert_eq!(dom.is_displayed(selectors::CART_TOTAL), Some(false));
        assert!(dom.inner_html(selectors::CART_ITEMS).unwrap().contains("Your cart is empty"));
    }

    #[test]
    fn test_missing_cart_region_skips_render() {
        let mut dom = MemoryDom::storefront().without_element(selectors::CART_ITEMS);
        let mut notifications = Notifications::new(Duration::from_secs(3));
        let mut controller = controller();
        controller.add(&mut dom, &mut notifications, card("p1", 100));

        assert_eq!(dom.text(selectors::TOTAL_AMOUNT), Some(""));
        assert_eq!(controller.cart().item_count(), 1);
    }

    #[test]
    fn test_unknown_quantity_change_does_not_touch_storage() {
        let mut dom = MemoryDom::storefront();
        let mut controller = controller();
        controller.update_quantity(&mut dom, &ProductId::new("ghost"), 3);
        assert_eq!(controller.store().storage().get_item("cart").unwrap(), None);
    }

    #[test]
    fn test_checkout_with_empty_cart_shows_error() {
        let mut dom = MemoryDom::storefront();
        let mut notifications = Notifications::new(Duration::from_secs(3));
        let mut controller = controller();

        assert!(controller.begin_checkout(&mut dom, &mut notifications).is_none());
        assert_eq!(notifications.current().unwrap().title, "Cart Empty!");
        assert!(!dom.has_class(selectors::CHECKOUT_BUTTON, LOADING_CLASS));
    }

    #[tokio::test(start_paused = true)]
    async fn test_checkout_success_clears_cart() {
        let mut dom = MemoryDom::storefront();
        let mut notifications = Notifications::new(Duration::from_secs(3));
        let mut controller = controller();
        controller.add(&mut dom, &mut notifications, card("p1", 12_500));
        controller.add(&mut dom, &mut notifications, card("p2", 500));

        let mut handle = controller
            .begin_checkout(&mut dom, &mut notifications)
            .unwrap();
        assert!(dom.has_class(selectors::CHECKOUT_BUTTON, LOADING_CLASS));
        assert_eq!(dom.text(selectors::CHECKOUT_BUTTON), Some("Processing..."));
        assert!(dom.overlay(selectors::LOADING_OVERLAY).is_some());

        let outcome = handle.join().await;
        controller.finish_checkout(&mut dom, &mut notifications, outcome);

        assert!(controller.cart().is_empty());
        assert_eq!(stored(&controller), "[]");
        assert!(dom.overlay(selectors::LOADING_OVERLAY).is_none());
        assert!(!dom.has_class(selectors::CHECKOUT_BUTTON, LOADING_CLASS));
        assert_eq!(dom.text(selectors::CHECKOUT_BUTTON), Some("Proceed to Checkout"));
        let shown = notifications.current().unwrap();
        assert_eq!(shown.title, "Checkout Successful! 🎉");
        assert!(shown.messages[0].contains("₦13,000"));
        assert!(shown.messages[0].contains("#WM"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_reports_total_at_finish() {
        let mut dom = MemoryDom::storefront();
        let mut notifications = Notifications::new(Duration::from_secs(3));
        let mut controller = controller();
        controller.add(&mut dom, &mut notifications, card("p1", 12_500));

        let mut handle = controller
            .begin_checkout(&mut dom, &mut notifications)
            .unwrap();
        controller.add(&mut dom, &mut notifications, card("p2", 8_000));
        let outcome = handle.join().await;
        controller.finish_checkout(&mut dom, &mut notifications, outcome);

        assert!(controller.cart().is_empty());
        assert!(notifications.current().unwrap().messages[0].contains("₦20,500"));
    }

    #[test]
    fn test_failed_checkout_keeps_cart() {
        let mut dom = MemoryDom::storefront();
        let mut notifications = Notifications::new(Duration::from_secs(3));
        let mut controller = controller();
        controller.add(&mut dom, &mut notifications, card("p1", 100));

        controller.finish_checkout(
            &mut dom,
            &mut notifications,
            Err(TaskError::Failed("card declined".to_string())),
        );

        assert_eq!(controller.cart().item_count(), 1);
        let shown = notifications.current().unwrap();
        assert_eq!(shown.kind, NotificationKind::Error);
        assert!(shown.messages[0].starts_with("card declined"));
    }
}
