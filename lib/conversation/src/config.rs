//! Chatbot content and tuning.
//!
//! [`ChatbotConfig`] is plain data: the greeting, the ordered reply
//! dictionary, quick replies, the WhatsApp handoff and the typing delay. It is
//! turned into immutable, shareable parts once at startup with
//! [`ChatbotConfig::build`]. The default value is the Magmist assistant.

use crate::catalog::{ResponseCatalog, ResponseEntry};
use crate::chatbot::Chatbot;
use crate::delay::{DEFAULT_TYPING_MAX, DEFAULT_TYPING_MIN, DelayPolicy};
use crate::error::CatalogError;
use crate::handoff::HandoffLink;
use crate::quick_reply::{QuickReply, QuickReplyIcon, QuickReplySet};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Complete chatbot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatbotConfig {
    /// Name shown in the widget header.
    pub assistant_name: String,
    /// First bot turn of every conversation.
    pub greeting: String,
    /// Reply dictionary in match order.
    pub responses: Vec<ResponseEntry>,
    /// Reply used when no keyword matches.
    pub default_reply: String,
    /// Shortcut buttons.
    #[serde(default)]
    pub quick_replies: Vec<QuickReply>,
    /// WhatsApp handoff target.
    pub handoff: HandoffConfig,
    /// Typing delay range.
    #[serde(default)]
    pub typing: TypingConfig,
}

/// WhatsApp handoff settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffConfig {
    pub phone_number: String,
    pub prefilled_text: String,
}

/// Typing delay bounds in milliseconds, `[min_ms, max_ms)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingConfig {
    #[serde(default = "default_typing_min_ms")]
    pub min_ms: u64,
    #[serde(default = "default_typing_max_ms")]
    pub max_ms: u64,
}

fn default_typing_min_ms() -> u64 {
    DEFAULT_TYPING_MIN.as_millis() as u64
}

fn default_typing_max_ms() -> u64 {
    DEFAULT_TYPING_MAX.as_millis() as u64
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            min_ms: default_typing_min_ms(),
            max_ms: default_typing_max_ms(),
        }
    }
}

impl TypingConfig {
    fn policy(self) -> Result<DelayPolicy, CatalogError> {
        if self.min_ms >= self.max_ms {
            return Err(CatalogError::InvalidTypingRange {
                min_ms: self.min_ms,
                max_ms: self.max_ms,
            });
        }
        Ok(DelayPolicy::Jittered {
            min: Duration::from_millis(self.min_ms),
            max: Duration::from_millis(self.max_ms),
        })
    }
}

/// Validated, immutable chatbot parts built once at startup.
#[derive(Debug, Clone)]
pub struct ChatbotParts {
    pub assistant_name: String,
    pub greeting: String,
    pub catalog: Arc<ResponseCatalog>,
    pub quick_replies: Arc<QuickReplySet>,
    pub handoff: HandoffLink,
    pub typing: DelayPolicy,
}

impl ChatbotParts {
    /// A fresh, closed widget sharing this catalog.
    #[must_use]
    pub fn chatbot(&self) -> Chatbot {
        Chatbot::new(
            Arc::clone(&self.catalog),
            Arc::clone(&self.quick_replies),
            self.greeting.clone(),
        )
    }
}

impl ChatbotConfig {
    /// Validates the configuration and builds the shareable parts.
    ///
    /// Quick replies pointing at unknown keywords are accepted and logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the greeting is empty, the reply dictionary is
    /// invalid, the phone number is malformed, or the typing range is empty.
    pub fn build(self) -> magmist_core::Result<ChatbotParts, CatalogError> {
        if self.greeting.trim().is_empty() {
            return Err(CatalogError::EmptyGreeting.into());
        }

        let catalog = ResponseCatalog::new(self.responses, self.default_reply)?;
        let quick_replies = QuickReplySet::new(self.quick_replies);
        for dangling in quick_replies.dangling(&catalog) {
            tracing::warn!(
                label = %dangling.label,
                key = %dangling.key,
                "Quick reply points at an unknown keyword"
            );
        }

        let handoff = HandoffLink::new(self.handoff.phone_number, self.handoff.prefilled_text)?;
        let typing = self.typing.policy()?;

        tracing::debug!(
            entries = catalog.len(),
            quick_replies = quick_replies.len(),
            "Chatbot catalog built"
        );

        Ok(ChatbotParts {
            assistant_name: self.assistant_name,
            greeting: self.greeting,
            catalog: Arc::new(catalog),
            quick_replies: Arc::new(quick_replies),
            handoff,
            typing,
        })
    }
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            assistant_name: "SCADE Assistant".to_string(),
            greeting: "Hi! How can I help you today?".to_string(),
            responses: vec![
                ResponseEntry::new(
                    "hello",
                    "Hi! I'm the SCADE assistant. Ask me anything about Magmist, the team, or how to order.",
                ),
                ResponseEntry::new(
                    "magmist",
                    "Magmist is an Atmospheric Water Generator that pulls moisture from the air, purifies it, adds essential minerals, and delivers pH 8.5+ alkaline water with zero plastic waste. No plumbing, solar\u{2011}compatible, ultra\u{2011}low power.",
                ),
                ResponseEntry::new(
                    "price",
                    "Pricing starts at \u{20b9}1,29,000 for the residential unit. Bulk / NGO rates are available \u{2013} just ping us on WhatsApp or fill the contact form.",
                ),
                ResponseEntry::new(
                    "team",
                    "SCADE is a family\u{2011}driven startup. Dr. Chinmai V S (MD), Deekshi P (Tech Head), Samartha V S (Marketing), and our two family pillars manage finance & ethics. Meet the whole team on the Team page.",
                ),
                ResponseEntry::new(
                    "order",
                    "Tap the WhatsApp button (green) or fill the Contact form. We\u{2019}ll send you a quote, demo video, and arrange a virtual/physical demo.",
                ),
                ResponseEntry::new(
                    "warranty",
                    "2\u{2011}year comprehensive warranty + 5\u{2011}year extended service plan. Free replacement of filters for the first year.",
                ),
            ],
            default_reply: "I\u{2019}m not sure about that. Try asking about Magmist, price, team, order, or warranty. You can also chat with a human on WhatsApp!".to_string(),
            quick_replies: vec![
                QuickReply::new("What is Magmist?", "magmist", QuickReplyIcon::Zap),
                QuickReply::new("Price?", "price", QuickReplyIcon::ShoppingCart),
                QuickReply::new("Team", "team", QuickReplyIcon::Users),
                QuickReply::new("How to order", "order", QuickReplyIcon::HelpCircle),
                QuickReply::new("Warranty", "warranty", QuickReplyIcon::Shield),
            ],
            handoff: HandoffConfig {
                phone_number: "919876543210".to_string(),
                prefilled_text: "Hi SCADE, I'm reaching out from the website chatbot. I'd like to chat with a human.".to_string(),
            },
            typing: TypingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds() {
        let parts = ChatbotConfig::default().build().expect("valid");
        assert_eq!(parts.catalog.len(), 6);
        assert_eq!(parts.quick_replies.len(), 5);
        assert!(parts.quick_replies.dangling(&parts.catalog).is_empty());
        assert_eq!(parts.typing, DelayPolicy::default());
    }

    #[test]
    fn default_handoff_url() {
        let parts = ChatbotConfig::default().build().expect("valid");
        assert_eq!(
            parts.handoff.url(),
            "https://wa.me/919876543210?text=Hi%20SCADE%2C%20I'm%20reaching%20out%20from%20the%20website%20chatbot.%20I'd%20like%20to%20chat%20with%20a%20human."
        );
    }

    #[test]
    fn default_catalog_answers_faq() {
        let parts = ChatbotConfig::default().build().expect("valid");
        let catalog = &parts.catalog;
        assert!(catalog.resolve("How much is the price?").starts_with("Pricing starts"));
        assert!(catalog.resolve("WARRANTY??").starts_with("2\u{2011}year"));
        assert_eq!(catalog.resolve("banana"), catalog.default_reply());
        assert_eq!(catalog.resolve("MAGMIST!!"), catalog.resolve("magmist"));
    }

    #[test]
    fn alternate_dictionary_from_json() {
        let json = serde_json::json!({
            "assistant_name": "Test",
            "greeting": "Yo",
            "responses": [
                {"keyword": "ping", "reply": "pong"},
                {"keyword": "pin", "reply": "shadowed"}
            ],
            "default_reply": "?",
            "quick_replies": [
                {"label": "Ping!", "key": "ping", "icon": "zap"},
                {"label": "Help", "key": "help", "icon": "help_circle"}
            ],
            "handoff": {"phone_number": "15550100", "prefilled_text": "hey"}
        });
        let config: ChatbotConfig = serde_json::from_value(json).expect("deserialize");
        assert_eq!(config.typing, TypingConfig::default());

        let parts = config.build().expect("valid");
        assert_eq!(parts.catalog.resolve("pin"), "pong");
        assert_eq!(parts.quick_replies.dangling(&parts.catalog).len(), 1);
        assert_eq!(parts.chatbot().log().turns()[0].text, "Yo");
    }

    #[test]
    fn rejects_inverted_typing_range() {
        let mut config = ChatbotConfig::default();
        config.typing = TypingConfig {
            min_ms: 1000,
            max_ms: 600,
        };
        assert!(config.build().is_err());
        assert_eq!(
            TypingConfig { min_ms: 5, max_ms: 5 }.policy(),
            Err(CatalogError::InvalidTypingRange { min_ms: 5, max_ms: 5 })
        );
    }

    #[test]
    fn rejects_bad_phone_number() {
        let mut config = ChatbotConfig::default();
        config.handoff.phone_number = "+91-98765".to_string();
        assert!(config.build().is_err());
    }

    #[test]
    fn rejects_blank_greeting() {
        let mut config = ChatbotConfig::default();
        config.greeting = " ".to_string();
        let report = config.build().expect_err("blank greeting");
        assert_eq!(*report.current_context(), CatalogError::EmptyGreeting);
    }
}
