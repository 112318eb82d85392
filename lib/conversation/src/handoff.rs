//! Deep links that hand the visitor over to a human on WhatsApp.

use crate::error::CatalogError;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Bytes left unescaped by ECMAScript `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Builds `https://wa.me/<phone>?text=<encoded text>`.
///
/// The text is encoded exactly as `encodeURIComponent` would, which the
/// WhatsApp click-to-chat endpoint expects.
///
/// ```
/// use magmist_conversation::build_handoff_url;
///
/// assert_eq!(
///     build_handoff_url("919876543210", "Hi there"),
///     "https://wa.me/919876543210?text=Hi%20there",
/// );
/// ```
#[must_use]
pub fn build_handoff_url(phone_number: &str, prefilled_text: &str) -> String {
    format!(
        "{WHATSAPP_BASE_URL}{phone_number}?text={}",
        utf8_percent_encode(prefilled_text, URI_COMPONENT)
    )
}

/// A phone number and canned opening message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffLink {
    /// E.164 number without the leading `+`.
    pub phone_number: String,
    /// Message pre-filled in the visitor's WhatsApp composer.
    pub prefilled_text: String,
}

impl HandoffLink {
    /// Creates a link after checking the phone number is digits only.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidPhoneNumber` if the number is empty,
    /// longer than 15 digits, or contains anything but ASCII digits.
    pub fn new(
        phone_number: impl Into<String>,
        prefilled_text: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let phone_number = phone_number.into();
        let valid = !phone_number.is_empty()
            && phone_number.len() <= 15
            && phone_number.bytes().all(|b| b.is_ascii_digit());
        if !valid {
            return Err(CatalogError::InvalidPhoneNumber { phone_number });
        }
        Ok(Self {
            phone_number,
            prefilled_text: prefilled_text.into(),
        })
    }

    /// The full deep link.
    #[must_use]
    pub fn url(&self) -> String {
        build_handoff_url(&self.phone_number, &self.prefilled_text)
    }
}
