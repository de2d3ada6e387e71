//! Post-payment line items.

use crate::error::CommerceError;
use crate::ids::PaymentLineItemId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A purchased-item record returned by the payment provider.
///
/// Distinct from a [`BasketGroup`](crate::basket::BasketGroup): this is what
/// was actually charged, not what the shopper had selected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentLineItem {
    /// Provider-issued line item id.
    pub id: PaymentLineItemId,
    /// Description (the product title at purchase time).
    pub description: String,
    /// Units purchased.
    pub quantity: i64,
    /// Unit amount in minor units.
    pub unit_amount: i64,
    /// Charge currency.
    pub currency: Currency,
}

impl PaymentLineItem {
    /// Create a new line item.
    pub fn new(
        id: impl Into<PaymentLineItemId>,
        description: impl Into<String>,
        quantity: i64,
        unit_amount: i64,
        currency: Currency,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            quantity,
            unit_amount,
            currency,
        }
    }

    /// Unit price as money.
    pub fn unit_price(&self) -> Money {
        Money::new(self.unit_amount, self.currency)
    }

    /// `quantity × unit amount`.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        if self.quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(self.quantity));
        }
        self.unit_price()
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = PaymentLineItem::new("li_1", "iPhone 14", 2, 99900, Currency::USD);
        assert_eq!(item.line_total().unwrap().amount_cents, 199_800);
    }

    #[test]
    fn test_line_total_rejects_zero_quantity() {
        let item = PaymentLineItem::new("li_1", "iPhone 14", 0, 99900, Currency::USD);
        assert!(matches!(item.line_total(), Err(CommerceError::InvalidQuantity(0))));
    }

    #[test]
    fn test_line_total_overflow() {
        let item = PaymentLineItem::new("li_1", "Gold", 3, i64::MAX / 2, Currency::USD);
        assert!(matches!(item.line_total(), Err(CommerceError::Overflow)));
    }
}
