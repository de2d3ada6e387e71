//! Display states for basket views.

use crate::basket::{Basket, BasketGroup};

/// What a basket view has to render.
///
/// Views match on this instead of checking the item count, so the empty
/// branch cannot be forgotten.
#[derive(Debug, Clone, PartialEq)]
pub enum BasketDisplay {
    /// Nothing added yet.
    Empty,
    /// At least one entry.
    NonEmpty {
        /// Total number of entries (the badge count).
        item_count: usize,
        /// One row per distinct product.
        groups: Vec<BasketGroup>,
    },
}

impl BasketDisplay {
    /// Derive the display state of a basket.
    pub fn from_basket(basket: &Basket) -> Self {
        if basket.is_empty() {
            BasketDisplay::Empty
        } else {
            BasketDisplay::NonEmpty {
                item_count: basket.len(),
                groups: basket.groups(),
            }
        }
    }

    /// Total number of entries; zero when empty.
    pub fn item_count(&self) -> usize {
        match self {
            BasketDisplay::Empty => 0,
            BasketDisplay::NonEmpty { item_count, .. } => *item_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::{Currency, Money};

    #[test]
    fn test_empty_basket_display() {
        let basket = Basket::new(Currency::USD);
        assert_eq!(BasketDisplay::from_basket(&basket), BasketDisplay::Empty);
        assert_eq!(BasketDisplay::Empty.item_count(), 0);
    }

    #[test]
    fn test_non_empty_basket_display() {
        let mut basket = Basket::new(Currency::USD);
        let p = Product::new("p1", "AirPods", Money::new(17900, Currency::USD), "audio");
        basket.push(p.clone());
        basket.push(p);

        match BasketDisplay::from_basket(&basket) {
            BasketDisplay::NonEmpty { item_count, groups } => {
                assert_eq!(item_count, 2);
                assert_eq!(groups.len(), 1);
            }
            BasketDisplay::Empty => panic!("expected a non-empty display"),
        }
    }
}
