//! Domain models for the storefront page.
//!
//! - [`cart`] - Line items, product cards and the in-memory cart
//! - [`contact`] - Contact form values and validation

pub mod cart;
pub mod contact;

pub use cart::{Cart, CardError, Dataset, LineItem, ProductCard, QuantityChange};
pub use contact::{ContactForm, ContactMessage, ValidationError};
