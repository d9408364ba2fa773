//! Contact form domain types.

use serde::Serialize;
use shopfront_core::{Email, PhoneNumber};
use thiserror::Error;

/// One failed contact-form check. `Display` is the message shown to the
/// visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Please enter a valid phone number (at least 10 digits)")]
    InvalidPhone,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Message is required")]
    MessageRequired,
}

/// Raw contact-form values, trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

/// A contact message that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub phone: PhoneNumber,
    pub email: Email,
    pub message: String,
}

impl ContactForm {
    /// Build a form from raw input values, trimming each.
    #[must_use]
    pub fn new(name: &str, phone: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Run every check and collect all failures in field order.
    ///
    /// # Errors
    ///
    /// Returns the non-empty list of failed checks.
    pub fn validate(&self) -> Result<ContactMessage, Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.name.is_empty() {
            errors.push(ValidationError::NameRequired);
        }
        let phone = PhoneNumber::parse(&self.phone).ok();
        if phone.is_none() {
            errors.push(ValidationError::InvalidPhone);
        }
        let email = Email::parse(&self.email).ok();
        if email.is_none() {
            errors.push(ValidationError::InvalidEmail);
        }
        if self.message.is_empty() {
            errors.push(ValidationError::MessageRequired);
        }

        match (phone, email) {
            (Some(phone), Some(email)) if errors.is_empty() => Ok(ContactMessage {
                name: self.name.clone(),
                phone,
                email,
                message: self.message.clone(),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid() -> ContactForm {
        ContactForm::new("Ada", "0803 123 4567", "ada@example.com", "Do you ship to Abuja?")
    }

    #[test]
    fn test_valid_form() {
        let message = valid().validate().unwrap();
        assert_eq!(message.name, "Ada");
        assert_eq!(message.email.as_str(), "ada@example.com");
    }

    #[test]
    fn test_new_trims() {
        let form = ContactForm::new("  Ada ", " 0803 123 4567\n", "\tada@example.com", " hi ");
        assert_eq!(form.name, "Ada");
        assert_eq!(form.phone, "0803 123 4567");
        assert_eq!(form.message, "hi");
    }

    #[test]
    fn test_empty_name() {
        let form = ContactForm {
            name: String::new(),
            ..valid()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors, [ValidationError::NameRequired]);
        assert_eq!(errors[0].to_string(), "Name is required");
    }

    #[test]
    fn test_short_phone() {
        let form = ContactForm {
            phone: "123".to_string(),
            ..valid()
        };
        assert_eq!(form.validate().unwrap_err(), [ValidationError::InvalidPhone]);
    }

    #[test]
    fn test_all_errors_in_order() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(
            errors,
            [
                ValidationError::NameRequired,
                ValidationError::InvalidPhone,
                ValidationError::InvalidEmail,
                ValidationError::MessageRequired,
            ]
        );
    }

    #[test]
    fn test_whitespace_only_name_is_empty() {
        let form = ContactForm::new("   ", "0803 123 4567", "ada@example.com", "hi");
        assert_eq!(form.validate().unwrap_err(), [ValidationError::NameRequired]);
    }
}
