//! Quick-reply shortcuts shown under the chat log.

use crate::catalog::ResponseCatalog;
use serde::{Deserialize, Serialize};

/// Icon drawn next to a quick-reply label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickReplyIcon {
    Zap,
    ShoppingCart,
    Users,
    HelpCircle,
    Shield,
}

/// A button that sends its label as if the visitor had typed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    /// Text on the button, also sent as the user's message.
    pub label: String,
    /// Catalog keyword the label is expected to resolve to.
    pub key: String,
    /// Icon drawn beside the label.
    pub icon: QuickReplyIcon,
}

impl QuickReply {
    /// Creates a quick reply.
    #[must_use]
    pub fn new(label: impl Into<String>, key: impl Into<String>, icon: QuickReplyIcon) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
            icon,
        }
    }
}

/// Ordered set of quick replies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickReplySet {
    replies: Vec<QuickReply>,
}

impl QuickReplySet {
    /// Wraps quick replies in display order.
    #[must_use]
    pub fn new(replies: Vec<QuickReply>) -> Self {
        Self { replies }
    }

    /// Finds the quick reply with the given key.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&QuickReply> {
        self.replies.iter().find(|reply| reply.key == key)
    }

    /// Quick replies whose key the catalog does not declare.
    ///
    /// Such entries still work; their label resolves like any typed text and
    /// usually lands on the fallback reply.
    #[must_use]
    pub fn dangling<'a>(&'a self, catalog: &ResponseCatalog) -> Vec<&'a QuickReply> {
        self.replies
            .iter()
            .filter(|reply| !catalog.contains(&reply.key))
            .collect()
    }

    /// Quick replies in display order.
    pub fn iter(&self) -> impl Iterator<Item = &QuickReply> {
        self.replies.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.replies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ResponseEntry;

    fn catalog() -> ResponseCatalog {
        ResponseCatalog::new(vec![ResponseEntry::new("price", "pricing")], "fallback")
            .expect("valid catalog")
    }

    #[test]
    fn find_by_key() {
        let set = QuickReplySet::new(vec![
            QuickReply::new("Price?", "price", QuickReplyIcon::ShoppingCart),
            QuickReply::new("Team", "team", QuickReplyIcon::Users),
        ]);
        assert_eq!(set.find("team").map(|q| q.label.as_str()), Some("Team"));
        assert!(set.find("Team").is_none());
    }

    #[test]
    fn dangling_lists_unknown_keys() {
        let set = QuickReplySet::new(vec![
            QuickReply::new("Price?", "price", QuickReplyIcon::ShoppingCart),
            QuickReply::new("Shipping", "shipping", QuickReplyIcon::HelpCircle),
        ]);
        let dangling = set.dangling(&catalog());
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].key, "shipping");
    }

    #[test]
    fn icon_serializes_snake_case() {
        let json = serde_json::to_string(&QuickReplyIcon::ShoppingCart).expect("serialize");
        assert_eq!(json, "\"shopping_cart\"");
    }
}
