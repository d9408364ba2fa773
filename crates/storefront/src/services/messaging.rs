//! Contact message delivery.

use std::future::Future;
use std::time::Duration;

use crate::models::ContactMessage;
use crate::task::TaskError;

/// Delivers contact messages.
pub trait MessageSender: Send + Sync + 'static {
    /// Deliver `message`.
    fn send(&self, message: ContactMessage) -> impl Future<Output = Result<(), TaskError>> + Send;
}

/// Sender that waits a fixed delay and always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedSender {
    delay: Duration,
}

impl SimulatedSender {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl MessageSender for SimulatedSender {
    fn send(&self, message: ContactMessage) -> impl Future<Output = Result<(), TaskError>> + Send {
        let delay = self.delay;
        async move {
            tracing::info!(email = %message.email, "Simulating contact message delivery");
            tokio::time::sleep(delay).await;
            Ok(())
        }
    }
}
