//! Type-safe price representation.
//!
//! Storefront prices are whole currency units (the product cards carry
//! integers such as `data-product-price="12500"`), so a [`Price`] wraps an
//! `i64` and serializes as a bare JSON number. The currency is a page-wide
//! setting and is supplied when formatting.

use core::fmt;
use core::iter::Sum;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// A price in whole units of the page currency.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(0);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Amount in whole currency units.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Amount with thousands separators (e.g. `12,500`).
    #[must_use]
    pub fn grouped(&self) -> String {
        group_thousands(self.0)
    }

    /// Format for display with the currency symbol (e.g. `₦12,500`).
    #[must_use]
    pub fn display(&self, currency: Currency) -> String {
        format!("{}{}", currency.symbol(), self.grouped())
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, p| Self(acc.0.saturating_add(p.0)))
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.grouped())
    }
}

/// Insert `,` every three digits, keeping the sign.
fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// ISO 4217 currency codes supported by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    NGN,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Display symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::NGN => "₦",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// ISO code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NGN => "NGN",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }
}

/// Error returned when a currency code is not supported.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported currency code: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NGN" => Ok(Self::NGN),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            _ => Err(UnknownCurrency(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped() {
        assert_eq!(Price::new(0).grouped(), "0");
        assert_eq!(Price::new(999).grouped(), "999");
        assert_eq!(Price::new(1000).grouped(), "1,000");
        assert_eq!(Price::new(12_500).grouped(), "12,500");
        assert_eq!(Price::new(1_234_567).grouped(), "1,234,567");
        assert_eq!(Price::new(-45_000).grouped(), "-45,000");
    }

    #[test]
    fn test_display_with_symbol() {
        assert_eq!(Price::new(12_500).display(Currency::NGN), "₦12,500");
        assert_eq!(Price::new(20).display(Currency::USD), "$20");
    }

    #[test]
    fn test_times_and_sum() {
        let total: Price = [Price::new(1500).times(2), Price::new(250).times(4)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::new(4000));
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Price::new(7)).ok().as_deref(), Some("7"));
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("ngn".parse::<Currency>(), Ok(Currency::NGN));
        assert_eq!(" GBP ".parse::<Currency>(), Ok(Currency::GBP));
        assert!("XYZ".parse::<Currency>().is_err());
    }
}
