//! Order summary shown after payment.

use crate::basket::grand_total;
use crate::checkout::PaymentLineItem;
use crate::error::CommerceError;
use crate::ids::CheckoutSessionId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Widest viewport, in CSS pixels, treated as a phone or tablet.
pub const COMPACT_MAX_WIDTH: u32 = 1024;

/// Layout class of the shopper's screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    /// Phones and tablets.
    Compact,
    /// Everything wider.
    #[default]
    Desktop,
}

impl Viewport {
    /// Classify a viewport width.
    pub fn from_width(width: u32) -> Self {
        if width <= COMPACT_MAX_WIDTH {
            Viewport::Compact
        } else {
            Viewport::Desktop
        }
    }
}

/// Collapsible order summary panel.
///
/// Desktop always shows the summary; compact layouts show it only after the
/// shopper expands it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummaryPanel {
    /// Whether the shopper expanded the panel.
    pub expanded: bool,
}

impl OrderSummaryPanel {
    /// A collapsed panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between expanded and collapsed.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Whether the summary body is shown on this viewport.
    pub fn is_visible(&self, viewport: Viewport) -> bool {
        match viewport {
            Viewport::Desktop => true,
            Viewport::Compact => self.expanded,
        }
    }
}

/// Totals of a completed purchase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Payment session the order came from.
    pub session_id: CheckoutSessionId,
    /// Purchased items.
    pub items: Vec<PaymentLineItem>,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping charge.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub grand_total: Money,
}

impl OrderSummary {
    /// Build the summary for a session.
    ///
    /// Every line item must be in the shipping charge's currency.
    pub fn new(
        session_id: CheckoutSessionId,
        items: Vec<PaymentLineItem>,
        shipping: Money,
    ) -> Result<Self, CommerceError> {
        let currency = shipping.currency;
        let mut subtotal = Money::zero(currency);

        for item in &items {
            if item.currency != currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: item.currency.code().to_string(),
                });
            }
            subtotal = subtotal
                .try_add(&item.line_total()?)
                .ok_or(CommerceError::Overflow)?;
        }

        Ok(Self {
            session_id,
            items,
            subtotal,
            shipping,
            grand_total: grand_total(subtotal, shipping),
        })
    }

    /// The short order number shown to the customer.
    pub fn order_number(&self) -> &str {
        self.session_id.order_number()
    }

    /// Total units purchased.
    pub fn unit_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basket::flat_shipping;
    use crate::money::Currency;

    fn items() -> Vec<PaymentLineItem> {
        vec![
            PaymentLineItem::new("li_1", "iPhone 14", 2, 999, Currency::USD),
            PaymentLineItem::new("li_2", "MagSafe Case", 1, 499, Currency::USD),
        ]
    }

    #[test]
    fn test_summary_totals() {
        let summary = OrderSummary::new(
            CheckoutSessionId::new("cs_test_12345abcde"),
            items(),
            flat_shipping(Currency::USD),
        )
        .unwrap();

        assert_eq!(summary.subtotal.amount_cents, 2497);
        assert_eq!(summary.grand_total.amount_cents, 4497);
        assert_eq!(summary.order_number(), "abcde");
        assert_eq!(summary.unit_count(), 3);
    }

    #[test]
    fn test_summary_rejects_mixed_currency() {
        let mut items = items();
        items.push(PaymentLineItem::new("li_3", "Adapter", 1, 1900, Currency::EUR));

        let result = OrderSummary::new(
            CheckoutSessionId::new("cs_1"),
            items,
            flat_shipping(Currency::USD),
        );
        assert!(matches!(result, Err(CommerceError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_empty_summary_is_shipping_only() {
        let summary =
            OrderSummary::new(CheckoutSessionId::new("cs_1"), vec![], flat_shipping(Currency::USD))
                .unwrap();
        assert!(summary.subtotal.is_zero());
        assert_eq!(summary.grand_total.amount_cents, 2000);
    }

    #[test]
    fn test_viewport_from_width() {
        assert_eq!(Viewport::from_width(390), Viewport::Compact);
        assert_eq!(Viewport::from_width(1024), Viewport::Compact);
        assert_eq!(Viewport::from_width(1440), Viewport::Desktop);
    }

    #[test]
    fn test_panel_visibility() {
        let mut panel = OrderSummaryPanel::new();
        assert!(panel.is_visible(Viewport::Desktop));
        assert!(!panel.is_visible(Viewport::Compact));

        panel.toggle();
        assert!(panel.is_visible(Viewport::Compact));

        panel.toggle();
        assert!(!panel.is_visible(Viewport::Compact));
    }
}
