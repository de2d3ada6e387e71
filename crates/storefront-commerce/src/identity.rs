//! The current shopper.

use crate::ids::UserId;
use serde::{Deserialize, Serialize};

/// Who is browsing, as reported by the sign-in provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shopper {
    /// Not signed in.
    #[default]
    Anonymous,
    /// Signed in through the identity provider.
    SignedIn {
        user_id: UserId,
        display_name: String,
        avatar: Option<String>,
    },
}

impl Shopper {
    /// Create a signed-in shopper without an avatar.
    pub fn signed_in(user_id: impl Into<UserId>, display_name: impl Into<String>) -> Self {
        Shopper::SignedIn {
            user_id: user_id.into(),
            display_name: display_name.into(),
            avatar: None,
        }
    }

    /// Name used in "Thank you, ..." greetings: the first word of the
    /// display name, or "Guest".
    pub fn greeting_name(&self) -> &str {
        match self {
            Shopper::Anonymous => "Guest",
            Shopper::SignedIn { display_name, .. } => display_name
                .split_whitespace()
                .next()
                .unwrap_or("Guest"),
        }
    }

    /// Avatar reference, if the provider supplied one.
    pub fn avatar(&self) -> Option<&str> {
        match self {
            Shopper::Anonymous => None,
            Shopper::SignedIn { avatar, .. } => avatar.as_deref(),
        }
    }

    /// Check if the shopper is signed in.
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Shopper::SignedIn { .. })
    }
}
