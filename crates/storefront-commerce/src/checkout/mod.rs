//! Checkout module.
//!
//! Records returned by the payment provider after a completed purchase, and
//! the order summary built from them on the success page.

mod line_item;
mod summary;

pub use line_item::PaymentLineItem;
pub use summary::{OrderSummary, OrderSummaryPanel, Viewport, COMPACT_MAX_WIDTH};
