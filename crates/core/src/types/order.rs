//! Order numbers shown after a completed checkout.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Prefix used when none is configured.
pub const DEFAULT_ORDER_PREFIX: &str = "WM";

/// A human-facing order number: a short prefix plus the last six digits of
/// the epoch-millisecond timestamp at which the order was placed.
///
/// ```
/// use shopfront_core::OrderNumber;
///
/// let number = OrderNumber::from_millis("WM", 1_700_000_123_456);
/// assert_eq!(number.as_str(), "WM123456");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Build an order number from a prefix and an epoch-millisecond timestamp.
    #[must_use]
    pub fn from_millis(prefix: &str, millis: i64) -> Self {
        Self(format!("{prefix}{:06}", millis.rem_euclid(1_000_000)))
    }

    /// Build an order number for the given instant.
    #[must_use]
    pub fn at(prefix: &str, when: DateTime<Utc>) -> Self {
        Self::from_millis(prefix, when.timestamp_millis())
    }

    /// Build an order number for the current time.
    #[must_use]
    pub fn now(prefix: &str) -> Self {
        Self::at(prefix, Utc::now())
    }

    /// The order number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_leading_zeros() {
        assert_eq!(OrderNumber::from_millis("WM", 1_700_000_000_042).as_str(), "WM000042");
    }

    #[test]
    fn test_custom_prefix() {
        assert_eq!(OrderNumber::from_millis("ORD-", 987_654_321).as_str(), "ORD-654321");
    }

    #[test]
    fn test_at_uses_milliseconds() {
        let when = DateTime::from_timestamp_millis(1_700_000_999_001).unwrap_or_default();
        assert_eq!(OrderNumber::at("WM", when).as_str(), "WM999001");
    }
}
