//! Email address type.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Shape check used by the contact form: something, `@`, something, `.`,
/// something, with no whitespace and a single `@`.
static EMAIL_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email cannot be empty")]
    Empty,
    /// The input is not shaped like `local@domain.tld`.
    #[error("email must look like name@domain.tld")]
    InvalidShape,
}

/// An email address.
///
/// This is a light shape check rather than full RFC 5322 parsing.
///
/// ## Constraints
///
/// - Non-empty
/// - Exactly one @ symbol, no whitespace
/// - Non-empty local part and a domain containing a dot
///
/// ## Examples
///
/// ```
/// use shopfront_core::Email;
///
/// // Valid emails
/// assert!(Email::parse("user@example.com").is_ok());
/// assert!(Email::parse("user.name+tag@domain.co.uk").is_ok());
///
/// // Invalid emails
/// assert!(Email::parse("").is_err());             // empty
/// assert!(Email::parse("no-at-symbol").is_err()); // missing @
/// assert!(Email::parse("user@domain").is_err());  // no dot in domain
/// assert!(Email::parse("us er@x.io").is_err());   // whitespace
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse an `Email` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Is not shaped like `local@domain.tld`
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }

        if !EMAIL_SHAPE_RE.is_match(s) {
            return Err(EmailError::InvalidShape);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Email` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_emails() {
        assert!(Email::parse("user@example.com").is_ok());
        assert!(Email::parse("user.name@example.com").is_ok());
        assert!(Email::parse("user+tag@example.com").is_ok());
        assert!(Email::parse("user@subdomain.example.com").is_ok());
        assert!(Email::parse("user@example.co.uk").is_ok());
        assert!(Email::parse("a@b.c").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Email::parse(""), Err(EmailError::Empty));
    }

    #[test]
    fn test_parse_long_address() {
        let long = format!("{}@example.com", "a".repeat(300));
        assert_eq!(Email::parse(&long).unwrap().as_str(), long);
    }

    #[test]
    fn test_parse_bad_shapes() {
        for input in [
            "no-at-symbol",
            "@domain.com",
            "user@",
            "user@domain",
            "user@@domain.com",
            "user name@domain.com",
            "user@domain.",
        ] {
            assert_eq!(
                Email::parse(input),
                Err(EmailError::InvalidShape),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_display() {
        let email = Email::parse("user@example.com").unwrap();
        assert_eq!(format!("{email}"), "user@example.com");
    }
}
