//! Contact form validation.
//!
//! Submissions are not sent anywhere yet. The page waits
//! [`SUBMIT_DELAY`], logs the message and thanks the visitor.

use crate::error::ContactFieldError;
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

/// Simulated network latency for a submission.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Raw form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Per-field validation failures. `None` means the field is fine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<ContactFieldError>,
    pub email: Option<ContactFieldError>,
    pub message: Option<ContactFieldError>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// A form that passed validation, with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Whether `email` looks like a deliverable address.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn required(value: &str, missing: ContactFieldError) -> Option<ContactFieldError> {
    value.trim().is_empty().then_some(missing)
}

impl ContactForm {
    /// Checks every field and reports all failures at once.
    ///
    /// # Errors
    ///
    /// Returns the failing fields if any field is blank or the email does
    /// not match the address pattern.
    pub fn validate(&self) -> Result<ContactSubmission, FieldErrors> {
        let email = self.email.trim();
        let errors = FieldErrors {
            name: required(&self.name, ContactFieldError::NameRequired),
            email: required(email, ContactFieldError::EmailRequired).or_else(|| {
                (!is_valid_email(email)).then_some(ContactFieldError::EmailInvalid)
            }),
            message: required(&self.message, ContactFieldError::MessageRequired),
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ContactSubmission {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.name, Some(ContactFieldError::NameRequired));
        assert_eq!(errors.email, Some(ContactFieldError::EmailRequired));
        assert_eq!(errors.message, Some(ContactFieldError::MessageRequired));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["plainaddress", "a@b", "a@b.c", "a b@c.com", "@example.com"] {
            let errors = form("Asha", email, "Hi").validate().unwrap_err();
            assert_eq!(errors.email, Some(ContactFieldError::EmailInvalid), "{email}");
            assert_eq!(errors.name, None);
        }
    }

    #[test]
    fn accepts_common_addresses() {
        for email in [
            "scade.magmist@gmail.com",
            "first.last+tag@sub.example.co.in",
            "a_b%c-d@host-name.org",
        ] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn valid_form_is_trimmed() {
        let submission = form("  Asha ", " asha@example.com ", "Need a quote\n")
            .validate()
            .expect("valid");
        assert_eq!(
            submission,
            ContactSubmission {
                name: "Asha".to_string(),
                email: "asha@example.com".to_string(),
                message: "Need a quote".to_string(),
            }
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let errors = form("   ", "x@y.io", "\n\t").validate().unwrap_err();
        assert_eq!(errors.name, Some(ContactFieldError::NameRequired));
        assert_eq!(errors.email, None);
        assert_eq!(errors.message, Some(ContactFieldError::MessageRequired));
    }
}
