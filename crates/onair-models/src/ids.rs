//! Type-safe ID wrappers for onAirChat.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate integer ID newtypes with common functionality.
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Creates an ID from a raw integer.
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Returns the inner integer.
            pub const fn get(self) -> u32 {
                self.0
            }

            /// Returns the ID with its type prefix, e.g. `evt-3`.
            pub fn tagged(self) -> String {
                format!("{}-{}", $prefix, self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }
    };
}

define_id!(EventId, "evt");
define_id!(MessageId, "msg");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_id_tagged() {
        assert_eq!(EventId::new(3).tagged(), "evt-3");
    }

    #[test]
    fn test_message_id_display() {
        assert_eq!(MessageId::from(7).to_string(), "7");
    }

    #[test]
    fn test_id_serializes_transparently() {
        let json = serde_json::to_string(&EventId::new(42)).unwrap();
        assert_eq!(json, "42");

        let id: MessageId = serde_json::from_str("5").unwrap();
        assert_eq!(id.get(), 5);
    }
}
