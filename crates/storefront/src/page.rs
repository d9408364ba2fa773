//! Page entry point.
//!
//! [`Page`] owns the document, the three controllers, the notification
//! overlay and any in-flight background work. Events are handled one at a
//! time on the calling task; only checkout and contact sends run elsewhere.

use std::future;

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

use crate::config::ShopConfig;
use crate::controllers::{CartController, ContactController, MenuController, Notifications};
use crate::dom::Dom;
use crate::events::PageEvent;
use crate::models::Cart;
use crate::services::{CheckoutProcessor, MessageSender, Receipt};
use crate::storage::{CartStore, LocalStorage};
use crate::task::{TaskError, TaskHandle};

/// One storefront page session.
#[derive(Debug)]
pub struct Page<D, S, P, M> {
    dom: D,
    notifications: Notifications,
    cart: CartController<S, P>,
    menu: MenuController,
    contact: ContactController<M>,
    pending_checkout: Option<TaskHandle<Receipt>>,
    pending_send: Option<TaskHandle<()>>,
}

/// What woke the event loop.
enum Wake {
    Event(Option<PageEvent>),
    Checkout(Result<Receipt, TaskError>),
    Sent(Result<(), TaskError>),
    NotificationDue,
}

impl<D, S, P, M> Page<D, S, P, M>
where
    D: Dom,
    S: LocalStorage,
    P: CheckoutProcessor,
    M: MessageSender,
{
    /// Build the page: rehydrate the cart from `storage` and render it.
    pub fn new(dom: D, storage: S, processor: P, sender: M, config: &ShopConfig) -> Self {
        let store = CartStore::new(storage, config.storage_key.clone());
        let mut page = Self {
            dom,
            notifications: Notifications::new(config.notification_timeout),
            cart: CartController::new(store, processor, config.currency),
            menu: MenuController::new(),
            contact: ContactController::new(sender),
            pending_checkout: None,
            pending_send: None,
        };
        page.cart.render(&mut page.dom);
        tracing::debug!(lines = page.cart.cart().len(), "Page ready");
        page
    }

    /// Handle one event.
    ///
    /// Starting a checkout or a contact send must happen inside a tokio
    /// runtime; the work then continues in the background until
    /// [`Page::settle`] or [`Page::run`] picks up its outcome.
    pub fn dispatch(&mut self, event: PageEvent) {
        tracing::debug!(?event, "Dispatching page event");
        match event {
            PageEvent::AddToCart(card) => {
                self.cart.add(&mut self.dom, &mut self.notifications, card);
            }
            PageEvent::SetQuantity { id, quantity } => {
                self.cart.update_quantity(&mut self.dom, &id, quantity);
            }
            PageEvent::RemoveFromCart { id } => self.cart.remove(&mut self.dom, &id),
            PageEvent::Checkout => {
                if self.pending_checkout.is_some() {
                    tracing::debug!("Checkout already in progress");
                    return;
                }
                self.pending_checkout = self
                    .cart
                    .begin_checkout(&mut self.dom, &mut self.notifications);
            }
            PageEvent::CancelCheckout => match &self.pending_checkout {
                Some(handle) => handle.abort(),
                None => tracing::debug!("No checkout to cancel"),
            },
            PageEvent::ToggleMenu => self.menu.toggle(&mut self.dom),
            PageEvent::NavLinkClicked => self.menu.link_clicked(&mut self.dom),
            PageEvent::OutsideClick => self.menu.outside_click(&mut self.dom),
            PageEvent::DismissNotification => self.notifications.dismiss(&mut self.dom),
            PageEvent::SubmitContact => {
                if self.pending_send.is_some() {
                    tracing::debug!("Contact message already sending");
                    return;
                }
                self.pending_send = self
                    .contact
                    .submit(&mut self.dom, &mut self.notifications);
            }
        }
    }

    /// Empty the cart without checking out.
    pub fn clear_cart(&mut self) {
        self.cart.clear(&mut self.dom);
    }

    /// Wait for any in-flight checkout or contact send and apply its outcome.
    pub async fn settle(&mut self) {
        if let Some(mut handle) = self.pending_checkout.take() {
            let outcome = handle.join().await;
            self.cart
                .finish_checkout(&mut self.dom, &mut self.notifications, outcome);
        }
        if let Some(mut handle) = self.pending_send.take() {
            let outcome = handle.join().await;
            self.contact
                .finish(&mut self.dom, &mut self.notifications, outcome);
        }
    }

    /// Run the page's event loop.
    ///
    /// Handles events from `events` in arrival order, completes background
    /// work as it finishes and dismisses notifications when their timeout
    /// elapses. Returns the page once `events` is closed and no background
    /// work is left.
    pub async fn run(mut self, mut events: mpsc::UnboundedReceiver<PageEvent>) -> Self {
        let mut open = true;
        loop {
            if !open && self.pending_checkout.is_none() && self.pending_send.is_none() {
                break;
            }

            let deadline = self.notifications.deadline();
            let wake = tokio::select! {
                event = events.recv(), if open => Wake::Event(event),
                outcome = settle_slot(&mut self.pending_checkout) => Wake::Checkout(outcome),
                outcome = settle_slot(&mut self.pending_send) => Wake::Sent(outcome),
                () = wait_until(deadline) => Wake::NotificationDue,
            };

            match wake {
                Wake::Event(Some(event)) => self.dispatch(event),
                Wake::Event(None) => {
                    tracing::debug!("Event channel closed");
                    open = false;
                }
                Wake::Checkout(outcome) => {
                    self.pending_checkout = None;
                    self.cart
                        .finish_checkout(&mut self.dom, &mut self.notifications, outcome);
                }
                Wake::Sent(outcome) => {
                    self.pending_send = None;
                    self.contact
                        .finish(&mut self.dom, &mut self.notifications, outcome);
                }
                Wake::NotificationDue => {
                    self.notifications.expire(&mut self.dom, Instant::now());
                }
            }
        }
        self
    }

    /// The document.
    #[must_use]
    pub const fn dom(&self) -> &D {
        &self.dom
    }

    /// The in-memory cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        self.cart.cart()
    }

    /// The cart's local storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        self.cart.store().storage()
    }

    /// The notification overlay state.
    #[must_use]
    pub const fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    /// Whether a checkout is in flight.
    #[must_use]
    pub const fn is_checkout_pending(&self) -> bool {
        self.pending_checkout.is_some()
    }

    /// Whether a contact message is being sent.
    #[must_use]
    pub const fn is_send_pending(&self) -> bool {
        self.pending_send.is_some()
    }

    /// Consume the page and return its document.
    pub fn into_dom(self) -> D {
        self.dom
    }
}

/// Outcome of the task in `slot`; never resolves while the slot is empty.
async fn settle_slot<T: Send + 'static>(slot: &mut Option<TaskHandle<T>>) -> Result<T, TaskError> {
    match slot.as_mut() {
        Some(handle) => handle.join().await,
        None => future::pending().await,
    }
}

/// Resolves at `deadline`; never resolves without one.
async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => future::pending().await,
    }
}
