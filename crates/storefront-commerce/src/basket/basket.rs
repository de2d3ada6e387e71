//! Basket state.

use crate::basket::{basket_subtotal, grand_total, group_items, BasketDisplay, BasketGroup, PriceSummary};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// The ordered sequence of products the shopper has added.
///
/// Only [`BasketStore`](crate::basket::BasketStore) mutates a basket; everyone
/// else reads it through a shared reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Basket {
    items: Vec<Product>,
    currency: Currency,
}

impl Basket {
    /// Create an empty basket.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Items in the order they were added.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Total number of entries (not distinct products).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Basket currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Number of entries for one product.
    pub fn count_of(&self, product_id: &ProductId) -> usize {
        self.items.iter().filter(|p| &p.id == product_id).count()
    }

    /// Check if any entry matches the product.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.id == product_id)
    }

    /// Entries grouped by product, in first-added order.
    pub fn groups(&self) -> Vec<BasketGroup> {
        group_items(&self.items)
    }

    /// Sum of the unit price of every entry.
    pub fn subtotal(&self) -> Money {
        basket_subtotal(&self.items, self.currency)
    }

    /// Subtotal plus shipping.
    pub fn grand_total(&self, shipping: Money) -> Money {
        grand_total(self.subtotal(), shipping)
    }

    /// Subtotal, shipping and grand total together.
    pub fn price_summary(&self, shipping: Money) -> PriceSummary {
        PriceSummary::for_basket(self, shipping)
    }

    /// Empty or non-empty, for views that branch on it.
    pub fn display_state(&self) -> BasketDisplay {
        BasketDisplay::from_basket(self)
    }

    pub(crate) fn push(&mut self, product: Product) {
        self.items.push(product);
    }

    /// Remove every entry for a product, returning how many went.
    pub(crate) fn remove_all(&mut self, product_id: &ProductId) -> usize {
        let len_before = self.items.len();
        self.items.retain(|p| &p.id != product_id);
        len_before - self.items.len()
    }

    pub(crate) fn clear(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        count
    }
}
