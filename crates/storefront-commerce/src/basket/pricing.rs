//! Basket pricing.
//!
//! All amounts are in the basket's single currency; formatting is left to
//! the views.

use crate::basket::{Basket, BasketGroup};
use crate::catalog::Product;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Fixed shipping charge added at checkout, in minor units ($20.00).
pub const FLAT_SHIPPING_CENTS: i64 = 2000;

/// The fixed shipping charge in the given currency.
pub fn flat_shipping(currency: Currency) -> Money {
    Money::new(FLAT_SHIPPING_CENTS, currency)
}

/// `count × unit price` of a group.
pub fn group_total(group: &BasketGroup) -> Money {
    group.group_total()
}

/// Sum of the unit price of every basket entry.
pub fn basket_subtotal(items: &[Product], currency: Currency) -> Money {
    Money::sum(items.iter().map(|p| &p.price), currency)
}

/// Subtotal plus the shipping charge.
pub fn grand_total(subtotal: Money, shipping: Money) -> Money {
    subtotal + shipping
}

/// Totals shown in the checkout summary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceSummary {
    /// Sum of all entries.
    pub subtotal: Money,
    /// Shipping charge.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub grand_total: Money,
}

impl PriceSummary {
    /// Price a basket with the given shipping charge.
    pub fn for_basket(basket: &Basket, shipping: Money) -> Self {
        let subtotal = basket.subtotal();
        Self {
            subtotal,
            shipping,
            grand_total: grand_total(subtotal, shipping),
        }
    }
}
