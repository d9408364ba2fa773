//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `SHOP_STORAGE_KEY` - Local-storage key holding the cart (default: `cart`)
//! - `SHOP_STORAGE_PATH` - File backing local storage for the CLI
//!   (default: `.shopfront/local_storage.json`)
//! - `SHOP_CHECKOUT_DELAY_MS` - Simulated checkout latency (default: 10000)
//! - `SHOP_CONTACT_DELAY_MS` - Simulated contact-form send latency (default: 2000)
//! - `SHOP_NOTIFICATION_TIMEOUT_MS` - Auto-dismiss delay for notifications (default: 3000)
//! - `SHOP_ORDER_PREFIX` - Prefix for generated order numbers (default: `WM`)
//! - `SHOP_CURRENCY` - ISO currency code used for display (default: `NGN`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::path::PathBuf;
use std::time::Duration;

use shopfront_core::{Currency, DEFAULT_ORDER_PREFIX};
use thiserror::Error;

const DEFAULT_STORAGE_KEY: &str = "cart";
const DEFAULT_STORAGE_PATH: &str = ".shopfront/local_storage.json";
const DEFAULT_CHECKOUT_DELAY_MS: u64 = 10_000;
const DEFAULT_CONTACT_DELAY_MS: u64 = 2_000;
const DEFAULT_NOTIFICATION_TIMEOUT_MS: u64 = 3_000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Page configuration.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Local-storage key the cart is mirrored under
    pub storage_key: String,
    /// File backing local storage outside a browser
    pub storage_path: PathBuf,
    /// Simulated checkout latency
    pub checkout_delay: Duration,
    /// Simulated contact-form send latency
    pub contact_delay: Duration,
    /// How long a notification stays up before dismissing itself
    pub notification_timeout: Duration,
    /// Prefix for generated order numbers
    pub order_prefix: String,
    /// Display currency
    pub currency: Currency,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            checkout_delay: Duration::from_millis(DEFAULT_CHECKOUT_DELAY_MS),
            contact_delay: Duration::from_millis(DEFAULT_CONTACT_DELAY_MS),
            notification_timeout: Duration::from_millis(DEFAULT_NOTIFICATION_TIMEOUT_MS),
            order_prefix: DEFAULT_ORDER_PREFIX.to_string(),
            currency: Currency::default(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let currency = match lookup("SHOP_CURRENCY") {
            Some(code) => code.parse::<Currency>().map_err(|e| {
                ConfigError::InvalidEnvVar("SHOP_CURRENCY".to_string(), e.to_string())
            })?,
            None => defaults.currency,
        };

        Ok(Self {
            storage_key: lookup("SHOP_STORAGE_KEY")
                .filter(|key| !key.is_empty())
                .unwrap_or(defaults.storage_key),
            storage_path: lookup("SHOP_STORAGE_PATH").map_or(defaults.storage_path, PathBuf::from),
            checkout_delay: get_millis(&lookup, "SHOP_CHECKOUT_DELAY_MS", DEFAULT_CHECKOUT_DELAY_MS)?,
            contact_delay: get_millis(&lookup, "SHOP_CONTACT_DELAY_MS", DEFAULT_CONTACT_DELAY_MS)?,
            notification_timeout: get_millis(
                &lookup,
                "SHOP_NOTIFICATION_TIMEOUT_MS",
                DEFAULT_NOTIFICATION_TIMEOUT_MS,
            )?,
            order_prefix: lookup("SHOP_ORDER_PREFIX").unwrap_or(defaults.order_prefix),
            currency,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a millisecond duration, falling back to `default` when unset.
fn get_millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u64,
) -> Result<Duration, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(Duration::from_millis(default));
    };
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
