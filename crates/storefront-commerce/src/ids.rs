//! Newtype IDs for type-safe identifiers.
//!
//! The content source and the payment provider both hand out plain strings;
//! wrapping them keeps a category reference from being passed where a
//! product identifier is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of trailing characters shown as the customer-facing order number.
pub const ORDER_NUMBER_LEN: usize = 5;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(CategoryId);
define_id!(CheckoutSessionId);
define_id!(PaymentLineItemId);
define_id!(UserId);

impl CheckoutSessionId {
    /// The short order number shown to the customer: the last five
    /// characters of the session id, or the whole id when it is shorter.
    pub fn order_number(&self) -> &str {
        let start = self
            .0
            .char_indices()
            .rev()
            .nth(ORDER_NUMBER_LEN - 1)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &self.0[start..]
    }
}
