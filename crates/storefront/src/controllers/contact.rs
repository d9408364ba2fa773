//! Contact form controller.

use std::sync::Arc;

use tracing::instrument;

use crate::controllers::notification::Notifications;
use crate::dom::{Dom, LOADING_CLASS, inputs, selectors};
use crate::models::ContactForm;
use crate::services::MessageSender;
use crate::task::{TaskError, TaskHandle};
use crate::views::{NotificationKind, NotificationView};

const SUBMIT_IDLE_TEXT: &str = "Send Message";
const SUBMIT_BUSY_TEXT: &str = "Sending...";

/// Validates and sends the contact form.
#[derive(Debug)]
pub struct ContactController<M> {
    sender: Arc<M>,
}

impl<M: MessageSender> ContactController<M> {
    pub fn new(sender: M) -> Self {
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Read the form's current input values. Missing inputs read as empty.
    #[must_use]
    pub fn read_form(dom: &impl Dom) -> ContactForm {
        let value = |name: &str| dom.input_value(name).unwrap_or_default();
        ContactForm::new(
            &value(inputs::NAME),
            &value(inputs::PHONE),
            &value(inputs::EMAIL),
            &value(inputs::MESSAGE),
        )
    }

    /// Validate and start sending the form.
    ///
    /// Validation failures are shown together in one notification. Returns
    /// the send handle when the form was valid.
    ///
    /// # Panics
    ///
    /// Panics if a valid form is submitted outside a tokio runtime.
    #[instrument(skip_all)]
    pub fn submit(
        &self,
        dom: &mut impl Dom,
        notifications: &mut Notifications,
    ) -> Option<TaskHandle<()>> {
        if !dom.exists(selectors::CONTACT_FORM) {
            tracing::debug!("No contact form on page; ignoring submit");
            return None;
        }

        let message = match Self::read_form(&*dom).validate() {
            Ok(message) => message,
            Err(errors) => {
                tracing::info!(count = errors.len(), "Contact form failed validation");
                notifications.show(
                    dom,
                    NotificationView::list(
                        NotificationKind::Error,
                        "Validation Error",
                        errors.iter().map(ToString::to_string).collect(),
                    ),
                );
                return None;
            }
        };

        dom.add_class(selectors::SUBMIT_BUTTON, LOADING_CLASS);
        dom.set_text(selectors::SUBMIT_BUTTON, SUBMIT_BUSY_TEXT);
        tracing::info!("Contact form submitted");

        let sender = Arc::clone(&self.sender);
        Some(TaskHandle::spawn("contact", async move {
            sender.send(message).await
        }))
    }

    /// Apply the outcome of a send started by `submit`.
    #[instrument(skip_all)]
    pub fn finish(
        &self,
        dom: &mut impl Dom,
        notifications: &mut Notifications,
        outcome: Result<(), TaskError>,
    ) {
        dom.remove_class(selectors::SUBMIT_BUTTON, LOADING_CLASS);
        dom.set_text(selectors::SUBMIT_BUTTON, SUBMIT_IDLE_TEXT);

        match outcome {
            Ok(()) => {
                tracing::info!("Contact message sent");
                for name in inputs::ALL {
                    dom.set_input_value(name, "");
                }
                notifications.show(
                    dom,
                    NotificationView::new(
                        NotificationKind::Success,
                        "Message Sent!",
                        "Thank you for contacting us. We'll get back to you soon.",
                    ),
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact message not sent");
                notifications.show(
                    dom,
                    NotificationView::new(
                        NotificationKind::Error,
                        "Message Not Sent",
                        "Something went wrong. Please try again.",
                    ),
                );
            }
        }
    }
}
