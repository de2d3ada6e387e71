//! Floating basket badge.

use storefront_commerce::basket::{Basket, BasketDisplay};

/// Render the basket badge linking to checkout.
///
/// Renders nothing while the basket is empty. The count is the number of
/// entries, not the number of distinct products.
pub fn render_basket_badge(basket: &Basket) -> String {
    match basket.display_state() {
        BasketDisplay::Empty => String::new(),
        BasketDisplay::NonEmpty { item_count, .. } => format!(
            r##"<a href="/checkout" class="basket-badge" data-section="basket_badge" aria-label="Bag, {count} items">
    <span class="basket-badge-count">{count}</span>
    <svg class="basket-badge-icon" aria-hidden="true"><use href="#shopping-bag"></use></svg>
</a>"##,
            count = item_count
        ),
    }
}
