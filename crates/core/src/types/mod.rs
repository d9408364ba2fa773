//! Core types for Shopfront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod order;
pub mod phone;
pub mod price;

pub use email::{Email, EmailError};
pub use id::*;
pub use order::{DEFAULT_ORDER_PREFIX, OrderNumber};
pub use phone::{PhoneError, PhoneNumber};
pub use price::{Currency, Price, UnknownCurrency};
