//! Page events.
//!
//! A [`PageEvent`] is one user interaction the page reacts to. Rendered
//! markup tags its buttons with `data-action` plus `data-*` arguments, and
//! [`PageEvent::from_action`] turns a clicked element's attributes back
//! into an event.

use shopfront_core::ProductId;
use thiserror::Error;

use crate::models::{CardError, Dataset, ProductCard};

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// "Add to cart" on a product card.
    AddToCart(ProductCard),
    /// Quantity `-`/`+` control; zero or below removes the line.
    SetQuantity { id: ProductId, quantity: i64 },
    /// "Remove" on a cart line.
    RemoveFromCart { id: ProductId },
    /// Checkout button.
    Checkout,
    /// Abandon an in-flight checkout.
    CancelCheckout,
    /// Hamburger button.
    ToggleMenu,
    /// A link inside the navigation list.
    NavLinkClicked,
    /// A click outside the navigation list and hamburger.
    OutsideClick,
    /// Notification OK button or a click on its backdrop.
    DismissNotification,
    /// Contact form submit.
    SubmitContact,
}

/// A clicked element could not be mapped to an event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("action {action} is missing data-{attribute}")]
    MissingAttribute {
        action: &'static str,
        attribute: &'static str,
    },

    #[error("action {action} has invalid data-{attribute}: {value:?}")]
    InvalidAttribute {
        action: &'static str,
        attribute: &'static str,
        value: String,
    },

    #[error(transparent)]
    Card(#[from] CardError),
}

impl PageEvent {
    /// Map a `data-action` value and the element's other `data-*` attributes
    /// to an event.
    ///
    /// # Errors
    ///
    /// Returns `EventError` for an unknown action or missing/invalid
    /// arguments.
    pub fn from_action(action: &str, dataset: &Dataset) -> Result<Self, EventError> {
        match action {
            "add" => Ok(Self::AddToCart(ProductCard::from_dataset(dataset)?)),
            "set-quantity" => {
                let id = product_id("set-quantity", dataset)?;
                let raw = required("set-quantity", "quantity", dataset)?;
                let quantity =
                    raw.trim()
                        .parse::<i64>()
                        .map_err(|_| EventError::InvalidAttribute {
                            action: "set-quantity",
                            attribute: "quantity",
                            value: raw.to_string(),
                        })?;
                Ok(Self::SetQuantity { id, quantity })
            }
            "remove" => Ok(Self::RemoveFromCart {
                id: product_id("remove", dataset)?,
            }),
            "checkout" => Ok(Self::Checkout),
            "cancel-checkout" => Ok(Self::CancelCheckout),
            "toggle-menu" => Ok(Self::ToggleMenu),
            "nav-link" => Ok(Self::NavLinkClicked),
            "outside" => Ok(Self::OutsideClick),
            "dismiss-notification" => Ok(Self::DismissNotification),
            "submit-contact" => Ok(Self::SubmitContact),
            other => Err(EventError::UnknownAction(other.to_string())),
        }
    }
}

fn required<'a>(
    action: &'static str,
    attribute: &'static str,
    dataset: &'a Dataset,
) -> Result<&'a str, EventError> {
    dataset
        .get(attribute)
        .map(String::as_str)
        .ok_or(EventError::MissingAttribute { action, attribute })
}

fn product_id(action: &'static str, dataset: &Dataset) -> Result<ProductId, EventError> {
    required(action, "product-id", dataset).map(ProductId::new)
}
