//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod contact;
pub mod menu;

use std::time::Duration;

use shopfront_storefront::config::ShopConfig;
use shopfront_storefront::dom::MemoryDom;
use shopfront_storefront::error::PageError;
use shopfront_storefront::models::Dataset;
use shopfront_storefront::page::Page;
use shopfront_storefront::services::{SimulatedCheckout, SimulatedSender};
use shopfront_storefront::storage::FileStorage;
use shopfront_storefront::views::NotificationKind;

/// A page session backed by the local-storage file.
pub type Session = Page<MemoryDom, FileStorage, SimulatedCheckout, SimulatedSender>;

/// Open a session on a fresh document.
pub fn open(config: &ShopConfig) -> Result<Session, PageError> {
    open_with(config, MemoryDom::storefront(), config.checkout_delay)
}

/// Open a session on `dom` with the given checkout delay.
pub fn open_with(
    config: &ShopConfig,
    dom: MemoryDom,
    checkout_delay: Duration,
) -> Result<Session, PageError> {
    let storage = FileStorage::open(&config.storage_path)?;
    tracing::debug!(path = %storage.path().display(), "Using local storage file");
    Ok(Page::new(
        dom,
        storage,
        SimulatedCheckout::new(checkout_delay, config.order_prefix.clone()),
        SimulatedSender::new(config.contact_delay),
        config,
    ))
}

/// Build a `data-*` attribute set.
pub fn dataset(pairs: &[(&str, &str)]) -> Dataset {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

/// Log whatever notification the session is showing.
pub fn log_notification(session: &Session) {
    let Some(notification) = session.notifications().current() else {
        return;
    };
    let body = notification.messages.join(" ");
    match notification.kind {
        NotificationKind::Error => {
            tracing::warn!("{}: {}", notification.title, body);
        }
        NotificationKind::Success | NotificationKind::Info => {
            tracing::info!("{}: {}", notification.title, body);
        }
    }
}
