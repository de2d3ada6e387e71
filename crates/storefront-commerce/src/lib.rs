//! Storefront domain types and logic.
//!
//! This crate holds everything the storefront knows about its own state:
//!
//! - **Catalog**: Products, categories, category tabs
//! - **Basket**: The basket store, line-item grouping, pricing
//! - **Checkout**: Post-payment line items and order summaries
//! - **Identity**: The current shopper
//!
//! Nothing here performs I/O. Content, payment sessions and sign-in are
//! supplied by the caller as already-resolved values.
//!
//! # Example
//!
//! ```
//! use storefront_commerce::prelude::*;
//!
//! let iphone = Product::new("p1", "iPhone", Money::new(999, Currency::USD), "phones");
//! let case = Product::new("p2", "Case", Money::new(499, Currency::USD), "accessories");
//!
//! let mut store = BasketStore::new(Currency::USD);
//! store.add_item(iphone.clone());
//! store.add_item(case);
//! store.add_item(iphone);
//!
//! assert_eq!(store.item_count(), 3);
//! assert_eq!(store.basket().subtotal().amount_cents, 2497);
//!
//! store.remove_group(&ProductId::new("p1"));
//! assert_eq!(store.item_count(), 1);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod basket;
pub mod catalog;
pub mod checkout;
pub mod identity;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, CategoryTabs, ImageRef, Product};

    // Basket
    pub use crate::basket::{
        basket_subtotal, flat_shipping, grand_total, group_items, group_total, Basket, BasketDisplay,
        BasketEvent, BasketGroup, BasketStore, PriceSummary, SubscriptionId,
        FLAT_SHIPPING_CENTS,
    };

    // Checkout
    pub use crate::checkout::{OrderSummary, OrderSummaryPanel, PaymentLineItem, Viewport};

    // Identity
    pub use crate::identity::Shopper;
}
