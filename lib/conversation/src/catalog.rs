//! Canned replies and the keyword resolver.
//!
//! A [`ResponseCatalog`] is an ordered list of keyword/reply pairs plus one
//! fallback reply. Matching is a bidirectional substring test against the
//! normalized input, and the first declared entry that matches wins.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Keyword reserved for the fallback reply.
pub const DEFAULT_KEYWORD: &str = "default";

/// Lowercases the input and drops everything that is not an ASCII letter or
/// digit.
///
/// ```
/// use magmist_conversation::catalog::normalize;
///
/// assert_eq!(normalize("What's the PRICE?"), "whatstheprice");
/// assert_eq!(normalize("  ..  "), "");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// A trigger keyword and the reply it selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEntry {
    /// Lowercase alphanumeric trigger.
    pub keyword: String,
    /// Reply shown when the keyword matches.
    pub reply: String,
}

impl ResponseEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(keyword: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            reply: reply.into(),
        }
    }

    /// Returns true if the keyword and the normalized key contain one another.
    fn matches(&self, key: &str) -> bool {
        key.contains(self.keyword.as_str()) || self.keyword.contains(key)
    }
}

/// Immutable, ordered reply dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseCatalog {
    entries: Vec<ResponseEntry>,
    default_reply: String,
}

impl ResponseCatalog {
    /// Validates the entries and builds a catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if a keyword is empty, not normalized, duplicated or
    /// equal to [`DEFAULT_KEYWORD`], or if any reply is empty.
    pub fn new(
        entries: Vec<ResponseEntry>,
        default_reply: impl Into<String>,
    ) -> magmist_core::Result<Self, CatalogError> {
        let default_reply = default_reply.into();
        validate_catalog(&entries, &default_reply)?;

        Ok(Self {
            entries,
            default_reply,
        })
    }

    /// Returns the reply for free-text input.
    ///
    /// Falls back to the default reply when nothing matches. An input that
    /// normalizes to nothing is contained in every keyword, so it selects the
    /// first entry; callers that must ignore blank input check before calling.
    #[must_use]
    pub fn resolve(&self, input: &str) -> &str {
        self.matching_entry(input)
            .map_or(self.default_reply.as_str(), |entry| entry.reply.as_str())
    }

    /// Returns the first entry matching the input, if any.
    #[must_use]
    pub fn matching_entry(&self, input: &str) -> Option<&ResponseEntry> {
        let key = normalize(input);
        self.entries.iter().find(|entry| entry.matches(&key))
    }

    /// Returns the reply for an exact keyword.
    #[must_use]
    pub fn lookup(&self, keyword: &str) -> Option<&str> {
        if keyword == DEFAULT_KEYWORD {
            return Some(&self.default_reply);
        }
        self.entries
            .iter()
            .find(|entry| entry.keyword == keyword)
            .map(|entry| entry.reply.as_str())
    }

    /// Returns true if the catalog declares the keyword.
    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.lookup(keyword).is_some()
    }

    /// The fallback reply.
    #[must_use]
    pub fn default_reply(&self) -> &str {
        &self.default_reply
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &ResponseEntry> {
        self.entries.iter()
    }

    /// Number of keyword entries, not counting the fallback.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if only the fallback reply is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_catalog(entries: &[ResponseEntry], default_reply: &str) -> Result<(), CatalogError> {
    if default_reply.trim().is_empty() {
        return Err(CatalogError::EmptyReply {
            keyword: DEFAULT_KEYWORD.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for (position, entry) in entries.iter().enumerate() {
        validate_entry(position, entry)?;
        if !seen.insert(entry.keyword.as_str()) {
            return Err(CatalogError::DuplicateKeyword {
                keyword: entry.keyword.clone(),
            });
        }
    }
    Ok(())
}

fn validate_entry(position: usize, entry: &ResponseEntry) -> Result<(), CatalogError> {
    if entry.keyword.is_empty() {
        return Err(CatalogError::EmptyKeyword { position });
    }
    let normalized = normalize(&entry.keyword);
    if normalized != entry.keyword {
        return Err(CatalogError::UnnormalizedKeyword {
            keyword: entry.keyword.clone(),
            normalized,
        });
    }
    if entry.keyword == DEFAULT_KEYWORD {
        return Err(CatalogError::ReservedKeyword {
            keyword: entry.keyword.clone(),
        });
    }
    if entry.reply.trim().is_empty() {
        return Err(CatalogError::EmptyReply {
            keyword: entry.keyword.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResponseCatalog {
        ResponseCatalog::new(
            vec![
                ResponseEntry::new("hello", "greeting"),
                ResponseEntry::new("magmist", "product"),
                ResponseEntry::new("price", "pricing"),
                ResponseEntry::new("team", "people"),
            ],
            "fallback",
        )
        .expect("valid catalog")
    }

    #[test]
    fn normalize_strips_punctuation_and_case() {
        assert_eq!(normalize("MAGMIST!!"), "magmist");
        assert_eq!(normalize("how_to order?"), "howtoorder");
        assert_eq!(normalize("₹1,29,000"), "129000");
    }

    #[test]
    fn keyword_inside_input_matches() {
        assert_eq!(sample().resolve("What's the price?"), "pricing");
    }

    #[test]
    fn input_inside_keyword_matches() {
        assert_eq!(sample().resolve("mag"), "product");
    }

    #[test]
    fn earliest_declared_entry_wins() {
        // Both "hello" and "team" appear; "hello" is declared first.
        assert_eq!(sample().resolve("hello team"), "greeting");
        assert_eq!(sample().resolve("team price"), "pricing");
    }

    #[test]
    fn unmatched_input_falls_back() {
        assert_eq!(sample().resolve("banana"), "fallback");
    }

    #[test]
    fn case_and_punctuation_do_not_matter() {
        let catalog = sample();
        assert_eq!(catalog.resolve("MAGMIST!!"), catalog.resolve("magmist"));
    }

    #[test]
    fn empty_key_selects_first_entry() {
        assert_eq!(sample().resolve("?!"), "greeting");
    }

    #[test]
    fn lookup_is_exact() {
        let catalog = sample();
        assert_eq!(catalog.lookup("price"), Some("pricing"));
        assert_eq!(catalog.lookup("pri"), None);
        assert_eq!(catalog.lookup(DEFAULT_KEYWORD), Some("fallback"));
    }

    #[test]
    fn rejects_duplicate_keywords() {
        let entries = vec![ResponseEntry::new("team", "a"), ResponseEntry::new("team", "b")];
        assert_eq!(
            validate_catalog(&entries, "fallback"),
            Err(CatalogError::DuplicateKeyword {
                keyword: "team".to_string()
            })
        );
        assert!(ResponseCatalog::new(entries, "fallback").is_err());
    }

    #[test]
    fn rejects_unnormalized_keywords() {
        let entries = vec![ResponseEntry::new("Price", "a")];
        assert_eq!(
            validate_catalog(&entries, "fallback"),
            Err(CatalogError::UnnormalizedKeyword {
                keyword: "Price".to_string(),
                normalized: "price".to_string(),
            })
        );
    }

    #[test]
    fn rejects_reserved_keyword() {
        let result = ResponseCatalog::new(vec![ResponseEntry::new("default", "a")], "fallback");
        assert!(result.is_err());
    }

    #[test]
    fn rejects_empty_default_reply() {
        assert!(ResponseCatalog::new(Vec::new(), "   ").is_err());
    }

    #[test]
    fn validate_entry_reports_position() {
        let err = validate_entry(3, &ResponseEntry::new("", "reply")).unwrap_err();
        assert_eq!(err, CatalogError::EmptyKeyword { position: 3 });
    }
}
