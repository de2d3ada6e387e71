//! The basket store: sole owner of the basket and its mutation API.

use crate::basket::Basket;
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Currency;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A change applied to the basket, delivered to subscribers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BasketEvent {
    /// One entry appended.
    ItemAdded { product_id: ProductId },
    /// Every entry of one product removed.
    GroupRemoved { product_id: ProductId, count: usize },
    /// Basket emptied.
    Cleared { count: usize },
}

/// Handle returned by [`BasketStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&BasketEvent, &Basket)>;

/// Holds the session's basket and notifies views when it changes.
///
/// There are exactly two ways in: [`add_item`](Self::add_item) and
/// [`remove_group`](Self::remove_group) (plus [`clear`](Self::clear) for a
/// full reset). Subscribers run synchronously, in subscription order, after
/// every mutation that changed the basket.
pub struct BasketStore {
    basket: Basket,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl BasketStore {
    /// Create a store with an empty basket.
    pub fn new(currency: Currency) -> Self {
        Self {
            basket: Basket::new(currency),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Append a product. No uniqueness check; always succeeds.
    ///
    /// The product must be priced in the basket currency.
    pub fn add_item(&mut self, product: Product) {
        debug_assert_eq!(
            product.price.currency,
            self.basket.currency(),
            "product priced in a different currency than the basket"
        );

        let product_id = product.id.clone();
        self.basket.push(product);
        self.notify(BasketEvent::ItemAdded { product_id });
    }

    /// Remove every entry for a product.
    ///
    /// Returns how many entries were removed; zero means the product was not
    /// in the basket and nothing changed.
    pub fn remove_group(&mut self, product_id: &ProductId) -> usize {
        let count = self.basket.remove_all(product_id);
        if count > 0 {
            self.notify(BasketEvent::GroupRemoved {
                product_id: product_id.clone(),
                count,
            });
        }
        count
    }

    /// Empty the basket, returning how many entries were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.basket.clear();
        if count > 0 {
            self.notify(BasketEvent::Cleared { count });
        }
        count
    }

    /// Total number of entries, for the basket badge.
    pub fn item_count(&self) -> usize {
        self.basket.len()
    }

    /// Read-only view of the current basket.
    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    /// Register a listener called after every effective mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&BasketEvent, &Basket) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() < len_before
    }

    /// Number of registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self, event: BasketEvent) {
        let basket = &self.basket;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event, basket);
        }
    }
}

impl Default for BasketStore {
    fn default() -> Self {
        Self::new(Currency::USD)
    }
}

impl fmt::Debug for BasketStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasketStore")
            .field("basket", &self.basket)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn product(id: &str, cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), Money::new(cents, Currency::USD), "cat")
    }

    #[test]
    fn test_item_count_equals_adds() {
        let mut store = BasketStore::default();
        for i in 0..7 {
            store.add_item(product(&format!("p{}", i % 3), 100));
        }
        assert_eq!(store.item_count(), 7);
    }

    #[test]
    fn test_scenario_add_then_remove_group() {
        let mut store = BasketStore::new(Currency::USD);
        store.add_item(product("p1", 999));
        store.add_item(product("p2", 499));
        store.add_item(product("p1", 999));

        assert_eq!(store.item_count(), 3);
        let groups = store.basket().groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].product_id.as_str(), "p1");
        assert_eq!(groups[0].count(), 2);
        assert_eq!(groups[0].group_total().amount_cents, 1998);
        assert_eq!(groups[1].product_id.as_str(), "p2");
        assert_eq!(groups[1].count(), 1);
        assert_eq!(groups[1].group_total().amount_cents, 499);
        assert_eq!(store.basket().subtotal().amount_cents, 2497);

        assert_eq!(store.remove_group(&ProductId::new("p1")), 2);
        assert_eq!(store.item_count(), 1);
        let groups = store.basket().groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].product_id.as_str(), "p2");
        assert_eq!(store.basket().subtotal().amount_cents, 499);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = BasketStore::default();
        store.add_item(product("p1", 999));
        let before = store.basket().clone();

        assert_eq!(store.remove_group(&ProductId::new("nope")), 0);
        assert_eq!(store.basket(), &before);
    }

    #[test]
    fn test_subscribers_see_post_mutation_state() {
        let mut store = BasketStore::default();
        let seen: Rc<RefCell<Vec<(BasketEvent, usize)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |event, basket| {
            sink.borrow_mut().push((event.clone(), basket.len()));
        });

        store.add_item(product("p1", 999));
        store.add_item(product("p1", 999));
        store.remove_group(&ProductId::new("p1"));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen[0],
            (
                BasketEvent::ItemAdded {
                    product_id: ProductId::new("p1")
                },
                1
            )
        );
        assert_eq!(
            seen[2],
            (
                BasketEvent::GroupRemoved {
                    product_id: ProductId::new("p1"),
                    count: 2
                },
                0
            )
        );
    }

    #[test]
    fn test_noop_mutations_do_not_notify() {
        let mut store = BasketStore::default();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        store.subscribe(move |_, _| *counter.borrow_mut() += 1);

        store.remove_group(&ProductId::new("p1"));
        store.clear();

        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = BasketStore::default();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_, _| *counter.borrow_mut() += 1);

        store.add_item(product("p1", 999));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add_item(product("p1", 999));

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut store = BasketStore::default();
        store.add_item(product("p1", 999));
        store.add_item(product("p2", 499));

        assert_eq!(store.clear(), 2);
        assert!(store.basket().is_empty());
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let event = BasketEvent::Cleared { count: 3 };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "cleared");
        assert_eq!(json["count"], 3);
    }
}
