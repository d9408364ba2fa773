//! Cart domain types.
//!
//! The cart is an ordered list of line items with unique product IDs. These
//! types hold no I/O; persistence lives in [`crate::storage::CartStore`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shopfront_core::{Price, ProductId};
use thiserror::Error;

/// `data-*` attributes read from a clicked element, keyed without the
/// `data-` prefix (e.g. `product-id`).
pub type Dataset = BTreeMap<String, String>;

/// One product entry in the cart.
///
/// Serialized field names match the persisted local-storage format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub quantity: u32,
}

impl LineItem {
    /// Unit price × quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Errors reading a product card's data attributes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("product card is missing data-{0}")]
    MissingAttribute(&'static str),

    #[error("product card has a non-integer price: {0:?}")]
    InvalidPrice(String),
}

/// The product an "add to cart" button belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
}

impl ProductCard {
    /// Read a card from its `data-product-*` attributes.
    ///
    /// Name and image default to empty strings; the id and an integer price
    /// are required.
    ///
    /// # Errors
    ///
    /// Returns `CardError` if the id or price is missing, or the price is not
    /// an integer.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, CardError> {
        let id = dataset
            .get("product-id")
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .ok_or(CardError::MissingAttribute("product-id"))?;
        let raw_price = dataset
            .get("product-price")
            .ok_or(CardError::MissingAttribute("product-price"))?;
        let price = raw_price
            .trim()
            .parse::<i64>()
            .map_err(|_| CardError::InvalidPrice(raw_price.clone()))?;

        Ok(Self {
            id: ProductId::new(id),
            name: dataset.get("product-name").cloned().unwrap_or_default(),
            price: Price::new(price),
            image: dataset.get("product-image").cloned().unwrap_or_default(),
        })
    }
}

/// Result of setting a line item's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// No line item has that id.
    Unknown,
    /// The quantity was zero or below, so the line was removed.
    Removed,
    /// The line now has this quantity.
    Updated(u32),
}

/// The in-memory cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Build a cart from stored items.
    ///
    /// Entries sharing an id are merged into the first occurrence and
    /// zero-quantity entries are dropped.
    #[must_use]
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut cart = Self::default();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            match cart.items.iter_mut().find(|existing| existing.id == item.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Line item for `id`.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Add one unit of `card`, returning the line's new quantity.
    pub fn add(&mut self, card: ProductCard) -> u32 {
        if let Some(existing) = self.items.iter_mut().find(|item| item.id == card.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }

        self.items.push(LineItem {
            id: card.id,
            name: card.name,
            price: card.price,
            image: card.image,
            quantity: 1,
        });
        1
    }

    /// Remove the line for `id`. Returns whether a line was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }

    /// Set the quantity for `id`; zero or below removes the line.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> QuantityChange {
        let Some(position) = self.items.iter().position(|item| &item.id == id) else {
            return QuantityChange::Unknown;
        };

        if quantity <= 0 {
            self.items.remove(position);
            return QuantityChange::Removed;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = self.items.get_mut(position) {
            item.quantity = quantity;
        }
        QuantityChange::Updated(quantity)
    }

    /// Sum of price × quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |count, item| count.saturating_add(item.quantity))
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
