//! Shopfront Core - Shared types library.
//!
//! This crate provides common types used across all Shopfront components:
//! - `storefront` - Page controllers (cart, mobile menu, contact form)
//! - `cli` - Headless driver for page sessions
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no storage
//! access, no DOM. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices, emails, phone
//!   numbers and order numbers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
