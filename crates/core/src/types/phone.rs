//! Phone number type.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Digits plus the usual separators, at least ten characters long.
static PHONE_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s\-\+\(\)]{10,}$").expect("Invalid regex"));

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input contains characters other than digits, spaces, `+`, `-`, `(` and `)`.
    #[error("phone number contains invalid characters")]
    InvalidCharacters,
    /// Fewer than [`PhoneNumber::MIN_DIGITS`] digits.
    #[error("phone number must contain at least {min} digits (got {got})")]
    TooFewDigits {
        /// Minimum digit count.
        min: usize,
        /// Digits found in the input.
        got: usize,
    },
}

/// A phone number as typed into the contact form.
///
/// The original formatting is kept.
///
/// ```
/// use shopfront_core::PhoneNumber;
///
/// assert!(PhoneNumber::parse("+234 803 123 4567").is_ok());
/// assert!(PhoneNumber::parse("(080) 3123-4567").is_ok());
/// assert!(PhoneNumber::parse("123").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Minimum number of digits.
    pub const MIN_DIGITS: usize = 10;

    /// Parse a `PhoneNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains characters other
    /// than digits and separators, or has fewer than ten digits.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.is_empty() {
            return Err(PhoneError::Empty);
        }

        let got = s.chars().filter(char::is_ascii_digit).count();
        if !PHONE_SHAPE_RE.is_match(s) {
            if s.chars()
                .all(|c| c.is_ascii_digit() || c.is_whitespace() || "+-()".contains(c))
            {
                return Err(PhoneError::TooFewDigits {
                    min: Self::MIN_DIGITS,
                    got,
                });
            }
            return Err(PhoneError::InvalidCharacters);
        }

        if got < Self::MIN_DIGITS {
            return Err(PhoneError::TooFewDigits {
                min: Self::MIN_DIGITS,
                got,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// The number as typed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
