//! Line-item grouping.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All basket entries sharing one product identifier, shown as one row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BasketGroup {
    /// Grouping key.
    pub product_id: ProductId,
    /// The first entry added for this product; supplies title, image and
    /// unit price for the row.
    pub first_seen: Product,
    /// Every entry for this product, in basket order.
    pub members: Vec<Product>,
}

impl BasketGroup {
    /// Quantity shown on the row.
    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// Unit price of the row.
    pub fn unit_price(&self) -> Money {
        self.first_seen.price
    }

    /// `count × unit price`.
    pub fn group_total(&self) -> Money {
        self.unit_price().multiply(self.count() as i64)
    }

    /// Display title of the row.
    pub fn title(&self) -> &str {
        &self.first_seen.title
    }
}

/// Group a basket sequence by product identifier.
///
/// Groups come out in first-occurrence order and partition the input: every
/// entry lands in exactly one group.
pub fn group_items(items: &[Product]) -> Vec<BasketGroup> {
    let mut index: HashMap<&ProductId, usize> = HashMap::new();
    let mut groups: Vec<BasketGroup> = Vec::new();

    for item in items {
        match index.get(&item.id) {
            Some(&i) => groups[i].members.push(item.clone()),
            None => {
                index.insert(&item.id, groups.len());
                groups.push(BasketGroup {
                    product_id: item.id.clone(),
                    first_seen: item.clone(),
                    members: vec![item.clone()],
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product(id: &str, cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), Money::new(cents, Currency::USD), "cat")
    }

    #[test]
    fn test_group_same_product_twice() {
        let groups = group_items(&[product("p1", 999), product("p1", 999)]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].count(), 2);
        assert_eq!(groups[0].group_total().amount_cents, 1998);
    }

    #[test]
    fn test_grouping_is_order_stable() {
        let groups = group_items(&[product("b", 100), product("a", 200), product("a", 200)]);

        let ids: Vec<&str> = groups.iter().map(|g| g.product_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(groups[1].count(), 2);
    }

    #[test]
    fn test_groups_partition_items() {
        let items = vec![
            product("p1", 999),
            product("p2", 499),
            product("p1", 999),
            product("p3", 150),
            product("p2", 499),
        ];
        let groups = group_items(&items);

        let total_members: usize = groups.iter().map(|g| g.count()).sum();
        assert_eq!(total_members, items.len());
        for group in &groups {
            assert!(group.members.iter().all(|m| m.id == group.product_id));
        }
    }

    #[test]
    fn test_first_seen_supplies_row_details() {
        let mut later = product("p1", 999);
        later.title = "Renamed".to_string();
        let groups = group_items(&[product("p1", 999), later]);

        assert_eq!(groups[0].title(), "Product p1");
    }

    #[test]
    fn test_empty_input() {
        assert!(group_items(&[]).is_empty());
    }
}
