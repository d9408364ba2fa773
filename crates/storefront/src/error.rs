//! Unified error handling with Sentry integration.
//!
//! Nothing on the page is fatal: controllers log and carry on. `PageError`
//! collects the fallible edges for callers that drive a page from outside
//! (the CLI), and the Sentry helpers record the trail of user actions.

use thiserror::Error;

use crate::config::ConfigError;
use crate::events::EventError;
use crate::storage::StorageError;

/// Error type for driving a page session.
#[derive(Debug, Error)]
pub enum PageError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Local storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A click could not be turned into a page event.
    #[error("Event error: {0}")]
    Event(#[from] EventError),
}

/// Result type alias for `PageError`.
pub type Result<T> = std::result::Result<T, PageError>;

/// Capture an error to Sentry and log it.
///
/// Without an initialized Sentry client this only logs.
pub fn report_error(error: &PageError) {
    let event_id = sentry::capture_error(error);
    tracing::error!(
        error = %error,
        sentry_event_id = %event_id,
        "Page error"
    );
}

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added product", Some(&[("product_id", "p-1")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
