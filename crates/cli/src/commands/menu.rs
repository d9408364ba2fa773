//! Mobile menu command.

use shopfront_storefront::config::ShopConfig;
use shopfront_storefront::dom::{ACTIVE_CLASS, Dom, selectors};
use shopfront_storefront::error::PageError;
use shopfront_storefront::events::PageEvent;

use super::open;

/// Toggle the menu on a fresh page and report its state.
///
/// Menu state is not persisted, so this always opens it.
pub fn toggle(config: &ShopConfig) -> Result<(), PageError> {
    let mut session = open(config)?;
    session.dispatch(PageEvent::ToggleMenu);

    let is_open = session.dom().has_class(selectors::NAV_MENU, ACTIVE_CLASS);
    tracing::info!("Menu {}", if is_open { "open" } else { "closed" });
    Ok(())
}
