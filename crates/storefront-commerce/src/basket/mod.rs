//! Shopping basket module.
//!
//! The basket is a multiset of products kept as an ordered sequence: adding
//! the same product twice stores it twice. Grouping and pricing are derived
//! on read, so every view reading the store sees the same totals.

mod basket;
mod display;
mod grouping;
mod pricing;
mod store;

pub use basket::Basket;
pub use display::BasketDisplay;
pub use grouping::{group_items, BasketGroup};
pub use pricing::{
    basket_subtotal, flat_shipping, grand_total, group_total, PriceSummary, FLAT_SHIPPING_CENTS,
};
pub use store::{BasketEvent, BasketStore, SubscriptionId};
