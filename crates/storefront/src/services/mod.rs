//! Outbound work the page simulates.
//!
//! # Services
//!
//! - `checkout` - Order placement (`CheckoutProcessor`)
//! - `messaging` - Contact message delivery (`MessageSender`)
//!
//! Both ship a simulated implementation that waits a fixed delay and
//! succeeds. Tests substitute fast or failing fakes.

pub mod checkout;
pub mod messaging;

pub use checkout::{CheckoutProcessor, OrderSummary, Receipt, SimulatedCheckout};
pub use messaging::{MessageSender, SimulatedSender};
