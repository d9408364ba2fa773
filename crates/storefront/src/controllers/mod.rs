//! Page controllers.
//!
//! Each controller is constructed explicitly and handed the document on every
//! call; none reaches into another's state.
//!
//! - [`cart`] - Cart mutations, rendering and checkout
//! - [`menu`] - Mobile navigation toggle
//! - [`contact`] - Contact form validation and sending
//! - [`notification`] - Notification and loading overlays

pub mod cart;
pub mod contact;
pub mod menu;
pub mod notification;

pub use cart::CartController;
pub use contact::ContactController;
pub use menu::MenuController;
pub use notification::Notifications;
