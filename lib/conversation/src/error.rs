//! Error types for the conversation crate.
//!
//! Resolving replies and recording turns cannot fail. The only fallible step
//! is turning a [`ChatbotConfig`](crate::ChatbotConfig) into the immutable
//! catalog, which reports a `CatalogError` wrapped in a rootcause `Report`.

use std::fmt;

/// Errors from validating chatbot configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A response entry has an empty keyword.
    EmptyKeyword { position: usize },
    /// A keyword is not already in normalized (lowercase alphanumeric) form.
    UnnormalizedKeyword { keyword: String, normalized: String },
    /// The same keyword is declared twice.
    DuplicateKeyword { keyword: String },
    /// The reserved fallback keyword was declared as an ordinary entry.
    ReservedKeyword { keyword: String },
    /// A reply or the default reply is empty.
    EmptyReply { keyword: String },
    /// The greeting that opens every conversation is empty.
    EmptyGreeting,
    /// The handoff phone number is not a bare digit string.
    InvalidPhoneNumber { phone_number: String },
    /// The typing delay range is empty or inverted.
    InvalidTypingRange { min_ms: u64, max_ms: u64 },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKeyword { position } => {
                write!(f, "response entry {position} has an empty keyword")
            }
            Self::UnnormalizedKeyword {
                keyword,
                normalized,
            } => {
                write!(
                    f,
                    "keyword '{keyword}' is not normalized (expected '{normalized}')"
                )
            }
            Self::DuplicateKeyword { keyword } => {
                write!(f, "keyword '{keyword}' is declared more than once")
            }
            Self::ReservedKeyword { keyword } => {
                write!(f, "keyword '{keyword}' is reserved for the fallback reply")
            }
            Self::EmptyReply { keyword } => write!(f, "reply for '{keyword}' is empty"),
            Self::EmptyGreeting => write!(f, "greeting is empty"),
            Self::InvalidPhoneNumber { phone_number } => {
                write!(f, "invalid handoff phone number: '{phone_number}'")
            }
            Self::InvalidTypingRange { min_ms, max_ms } => {
                write!(f, "invalid typing delay range [{min_ms}ms, {max_ms}ms)")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_keyword_display() {
        let err = CatalogError::DuplicateKeyword {
            keyword: "price".to_string(),
        };
        assert_eq!(err.to_string(), "keyword 'price' is declared more than once");
    }

    #[test]
    fn empty_greeting_display() {
        assert_eq!(CatalogError::EmptyGreeting.to_string(), "greeting is empty");
    }

    #[test]
    fn typing_range_display() {
        let err = CatalogError::InvalidTypingRange {
            min_ms: 1000,
            max_ms: 600,
        };
        assert!(err.to_string().contains("[1000ms, 600ms)"));
    }
}
