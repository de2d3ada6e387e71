//! Storefront pages.
//!
//! Renders the three storefront pages as HTML strings:
//! - Home: landing hero plus category tabs of product cards
//! - Checkout: one row per basket group, subtotal, shipping and total
//! - Success: order confirmation built from the payment provider's line items
//!
//! Content, payment sessions and sign-in come in through the traits in
//! [`data`]; the basket lives in a [`BasketStore`] owned by the
//! [`Storefront`] session and observed by [`ViewBinding`]s.
//!
//! [`BasketStore`]: storefront_commerce::basket::BasketStore

pub mod bindings;
pub mod config;
pub mod data;
pub mod error;
pub mod pages;
pub mod sections;
mod session;

pub use bindings::ViewBinding;
pub use config::StorefrontConfig;
pub use error::RenderError;
pub use session::Storefront;
