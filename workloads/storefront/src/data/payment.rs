//! Checkout sessions at the payment provider.

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Deserialize;
use storefront_commerce::basket::BasketGroup;
use storefront_commerce::checkout::PaymentLineItem;
use storefront_commerce::ids::CheckoutSessionId;
use storefront_commerce::{CommerceError, Currency};

use super::{DataError, DataResult};

/// Prefix of session ids issued by [`InMemoryPayments`].
pub const SESSION_PREFIX: &str = "cs_test_";

/// The payment provider's hosted checkout.
#[async_trait]
pub trait PaymentSessions: Send + Sync {
    /// Open a checkout session charging one line per basket group.
    async fn create_session(&self, groups: &[BasketGroup]) -> DataResult<CheckoutSessionId>;

    /// Line items actually charged in a completed session.
    async fn line_items(&self, session: &CheckoutSessionId) -> DataResult<Vec<PaymentLineItem>>;
}

#[derive(Debug, Deserialize)]
struct ProviderPrice {
    unit_amount: i64,
}

#[derive(Debug, Deserialize)]
struct ProviderLineItem {
    id: String,
    description: String,
    quantity: i64,
    price: ProviderPrice,
    /// Lowercase ISO code, e.g. "usd".
    currency: String,
}

#[derive(Debug, Deserialize)]
struct ProviderSessions {
    #[serde(default)]
    sessions: HashMap<String, Vec<ProviderLineItem>>,
}

impl ProviderLineItem {
    fn into_line_item(self) -> Result<PaymentLineItem, CommerceError> {
        let currency = Currency::from_code(&self.currency)
            .ok_or_else(|| CommerceError::UnknownCurrency(self.currency.clone()))?;
        Ok(PaymentLineItem::new(
            self.id,
            self.description,
            self.quantity,
            self.price.unit_amount,
            currency,
        ))
    }
}

/// Payment sessions kept in memory.
///
/// Sessions come either from [`create_session`](PaymentSessions::create_session)
/// or from a fixture exported from the provider.
#[derive(Debug, Default)]
pub struct InMemoryPayments {
    sessions: Mutex<HashMap<String, Vec<PaymentLineItem>>>,
    next_session: AtomicU64,
}

impl InMemoryPayments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a provider export of completed sessions.
    pub fn from_json(json: &str) -> DataResult<Self> {
        let export: ProviderSessions = serde_json::from_str(json)?;

        let mut sessions = HashMap::with_capacity(export.sessions.len());
        for (id, items) in export.sessions {
            let items = items
                .into_iter()
                .map(ProviderLineItem::into_line_item)
                .collect::<Result<Vec<_>, _>>()?;
            sessions.insert(id, items);
        }

        Ok(Self {
            sessions: Mutex::new(sessions),
            next_session: AtomicU64::new(0),
        })
    }

    /// Read and parse a provider export from disk.
    pub fn from_path(path: impl AsRef<Path>) -> DataResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Number of known sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }

    fn lock(&self) -> DataResult<std::sync::MutexGuard<'_, HashMap<String, Vec<PaymentLineItem>>>> {
        self.sessions
            .lock()
            .map_err(|_| DataError::Unavailable("payment session store poisoned".to_string()))
    }
}

#[async_trait]
impl PaymentSessions for InMemoryPayments {
    async fn create_session(&self, groups: &[BasketGroup]) -> DataResult<CheckoutSessionId> {
        let n = self.next_session.fetch_add(1, Ordering::Relaxed);
        let id = format!("{}{:010}", SESSION_PREFIX, n + 1);

        let items = groups
            .iter()
            .enumerate()
            .map(|(i, group)| {
                let unit = group.unit_price();
                PaymentLineItem::new(
                    format!("li_{}_{}", n + 1, i + 1),
                    group.title(),
                    group.count() as i64,
                    unit.amount_cents,
                    unit.currency,
                )
            })
            .collect();

        self.lock()?.insert(id.clone(), items);
        Ok(CheckoutSessionId::new(id))
    }

    async fn line_items(&self, session: &CheckoutSessionId) -> DataResult<Vec<PaymentLineItem>> {
        self.lock()?
            .get(session.as_str())
            .cloned()
            .ok_or_else(|| DataError::NotFound(format!("checkout session {}", session)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::basket::group_items;
    use storefront_commerce::catalog::Product;
    use storefront_commerce::Money;

    const EXPORT: &str = r#"{
        "sessions": {
            "cs_test_a1B2c3D4e5": [
                {
                    "id": "li_1",
                    "description": "iPhone 15",
                    "quantity": 2,
                    "price": {"unit_amount": 99900},
                    "currency": "usd"
                }
            ]
        }
    }"#;

    fn product(id: &str, cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), Money::new(cents, Currency::USD), "cat")
    }

    #[tokio::test]
    async fn test_fixture_session_line_items() {
        let payments = InMemoryPayments::from_json(EXPORT).unwrap();
        let items = payments
            .line_items(&CheckoutSessionId::new("cs_test_a1B2c3D4e5"))
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "iPhone 15");
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].unit_amount, 99_900);
        assert_eq!(items[0].currency, Currency::USD);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let payments = InMemoryPayments::new();
        let err = payments
            .line_items(&CheckoutSessionId::new("cs_missing"))
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::NotFound(_)));
    }

    #[test]
    fn test_unknown_currency_rejected() {
        let json = r#"{"sessions": {"cs_1": [
            {"id": "li_1", "description": "x", "quantity": 1, "price": {"unit_amount": 1}, "currency": "xyz"}
        ]}}"#;
        let err = InMemoryPayments::from_json(json).unwrap_err();
        assert!(matches!(err, DataError::Commerce(CommerceError::UnknownCurrency(_))));
    }

    #[tokio::test]
    async fn test_create_session_charges_one_line_per_group() {
        let payments = InMemoryPayments::new();
        let items = vec![product("p1", 999), product("p2", 499), product("p1", 999)];
        let groups = group_items(&items);

        let session = payments.create_session(&groups).await.unwrap();
        assert!(session.as_str().starts_with(SESSION_PREFIX));
        assert_eq!(payments.session_count(), 1);

        let charged = payments.line_items(&session).await.unwrap();
        assert_eq!(charged.len(), 2);
        assert_eq!(charged[0].description, "Product p1");
        assert_eq!(charged[0].quantity, 2);
        assert_eq!(charged[0].unit_amount, 999);
        assert_eq!(charged[1].quantity, 1);
    }

    #[tokio::test]
    async fn test_session_ids_are_distinct() {
        let payments = InMemoryPayments::new();
        let groups = group_items(&[product("p1", 999)]);

        let a = payments.create_session(&groups).await.unwrap();
        let b = payments.create_session(&groups).await.unwrap();
        assert_ne!(a, b);
        assert_ne!(a.order_number(), b.order_number());
    }
}
