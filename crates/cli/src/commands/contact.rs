//! Contact form command.

use shopfront_storefront::config::ShopConfig;
use shopfront_storefront::dom::{MemoryDom, inputs};
use shopfront_storefront::error::PageError;
use shopfront_storefront::events::PageEvent;

use super::{log_notification, open_with};

/// Values typed into the contact form.
#[derive(Debug, Clone, Default)]
pub struct FormArgs {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

/// Fill in the form, submit it and wait for the send to finish.
pub async fn send(config: &ShopConfig, form: FormArgs) -> Result<(), PageError> {
    let dom = MemoryDom::storefront()
        .with_input(inputs::NAME, &form.name)
        .with_input(inputs::PHONE, &form.phone)
        .with_input(inputs::EMAIL, &form.email)
        .with_input(inputs::MESSAGE, &form.message);
    let mut session = open_with(config, dom, config.checkout_delay)?;

    session.dispatch(PageEvent::SubmitContact);
    session.settle().await;

    log_notification(&session);
    Ok(())
}
