//! Strongly-typed ID types for domain entities.
//!
//! IDs wrap a ULID, so they are unique and sort in creation order. Turn ids
//! double as the render keys for the chat message list.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Macro to generate a strongly-typed ID wrapper around ULID.
///
/// There is no `new()`: `Ulid::new` reads `SystemTime`, which panics on
/// `wasm32-unknown-unknown`, so callers supply the clock and entropy.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Ulid);

        impl $name {
            /// Creates an ID from a millisecond timestamp and random bits.
            ///
            /// Only the low 80 bits of `random` are used.
            #[must_use]
            pub fn from_parts(timestamp_ms: u64, random: u128) -> Self {
                Self(Ulid::from_parts(timestamp_ms, random))
            }

            /// Returns the underlying ULID.
            #[must_use]
            pub const fn as_ulid(&self) -> Ulid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}_{}", $prefix, self.0)
            }
        }
    };
}

define_id!(
    /// Identifies one chatbot conversation, created each time a widget
    /// instance is mounted.
    ConversationId,
    "conv"
);

define_id!(
    /// Identifies a single turn in a conversation log.
    TurnId,
    "turn"
);
