//! Shopfront storefront page library.
//!
//! Client-side behaviour for a small fashion storefront, expressed against
//! an abstract document so it can run headless and be tested:
//!
//! - a shopping cart mirrored into local storage, with a simulated checkout
//! - the mobile navigation menu
//! - a validated contact form with a simulated send
//! - notification and loading overlays
//!
//! [`page::Page`] ties these together behind a single event entry point.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod controllers;
pub mod dom;
pub mod error;
pub mod events;
pub mod models;
pub mod page;
pub mod services;
pub mod storage;
pub mod task;
pub mod telemetry;
pub mod views;
