//! Checkout processing.

use std::future::Future;
use std::time::Duration;

use shopfront_core::{OrderNumber, Price};

use crate::models::LineItem;
use crate::task::TaskError;

/// What is being bought.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub lines: Vec<LineItem>,
    pub total: Price,
}

/// Confirmation of a placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub order_number: OrderNumber,
    pub total: Price,
}

/// Places orders.
pub trait CheckoutProcessor: Send + Sync + 'static {
    /// Place `order`.
    fn process(&self, order: OrderSummary) -> impl Future<Output = Result<Receipt, TaskError>> + Send;
}

/// Checkout that waits a fixed delay and always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedCheckout {
    delay: Duration,
    order_prefix: String,
}

impl SimulatedCheckout {
    /// Simulated checkout taking `delay`, numbering orders with `order_prefix`.
    pub fn new(delay: Duration, order_prefix: impl Into<String>) -> Self {
        Self {
            delay,
            order_prefix: order_prefix.into(),
        }
    }
}

impl CheckoutProcessor for SimulatedCheckout {
    fn process(&self, order: OrderSummary) -> impl Future<Output = Result<Receipt, TaskError>> + Send {
        let delay = self.delay;
        let prefix = self.order_prefix.clone();
        async move {
            tracing::info!(
                lines = order.lines.len(),
                total = order.total.amount(),
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "Simulating checkout"
            );
            tokio::time::sleep(delay).await;
            Ok(Receipt {
                order_number: OrderNumber::now(&prefix),
                total: order.total,
            })
        }
    }
}
