//! The sign-in provider.

use async_trait::async_trait;
use storefront_commerce::identity::Shopper;

use super::DataResult;

/// Resolves who is browsing.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The shopper for the current session.
    async fn current_shopper(&self) -> DataResult<Shopper>;
}

/// Identity provider that always reports the same shopper.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    shopper: Shopper,
}

impl StaticIdentity {
    pub fn new(shopper: Shopper) -> Self {
        Self { shopper }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn current_shopper(&self) -> DataResult<Shopper> {
        Ok(self.shopper.clone())
    }
}
