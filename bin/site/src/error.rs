//! Error types for the site.

use std::fmt;

/// Server startup and runtime errors.
#[derive(Debug)]
pub enum ServerError {
    /// Environment configuration is missing or malformed.
    Config { details: String },
    /// Leptos options could not be read from `Cargo.toml` or the environment.
    LeptosOptions { details: String },
    /// The listening socket could not be bound.
    Bind { addr: String, details: String },
    /// The HTTP server stopped with an error.
    Serve { details: String },
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { details } => write!(f, "invalid server configuration: {}", details),
            Self::LeptosOptions { details } => {
                write!(f, "invalid leptos configuration: {}", details)
            }
            Self::Bind { addr, details } => {
                write!(f, "failed to bind to '{}': {}", addr, details)
            }
            Self::Serve { details } => write!(f, "server error: {}", details),
        }
    }
}

impl std::error::Error for ServerError {}

/// A contact form field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFieldError {
    NameRequired,
    EmailRequired,
    EmailInvalid,
    MessageRequired,
}

impl fmt::Display for ContactFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameRequired => write!(f, "Name is required"),
            Self::EmailRequired => write!(f, "Email is required"),
            Self::EmailInvalid => write!(f, "Invalid email address"),
            Self::MessageRequired => write!(f, "Message is required"),
        }
    }
}

impl std::error::Error for ContactFieldError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_use_form_copy() {
        assert_eq!(ContactFieldError::NameRequired.to_string(), "Name is required");
        assert_eq!(ContactFieldError::EmailInvalid.to_string(), "Invalid email address");
    }

    #[test]
    fn bind_error_names_address() {
        let err = ServerError::Bind {
            addr: "127.0.0.1:3000".to_string(),
            details: "address in use".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to bind to '127.0.0.1:3000': address in use"
        );
    }
}
