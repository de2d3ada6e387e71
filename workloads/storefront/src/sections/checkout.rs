//! Checkout (bag review) section.

use storefront_commerce::basket::{Basket, BasketDisplay, BasketGroup, PriceSummary};
use storefront_commerce::Money;

use super::{html_escape, image_url};

/// Render one basket group as a checkout row with its remove form.
///
/// Removing deletes the whole row, every unit of the product.
pub fn render_checkout_row(group: &BasketGroup) -> String {
    let title = html_escape(group.title());
    let image = group
        .first_seen
        .primary_image()
        .map(|image| format!(r#"<img src="{}" alt="{}/product">"#, image_url(image), title))
        .unwrap_or_default();

    format!(
        r#"<div class="checkout-row" data-product-id="{id}">
    <div class="checkout-row-image">{image}</div>
    <div class="checkout-row-info">
        <h4 class="checkout-row-title">{title}</h4>
        <p class="checkout-row-quantity">{quantity}</p>
    </div>
    <div class="checkout-row-price">
        <h4 class="checkout-row-total">{total}</h4>
        <form method="post" action="/basket/remove">
            <input type="hidden" name="product_id" value="{id}">
            <button type="submit" class="checkout-row-remove">Remove</button>
        </form>
    </div>
</div>"#,
        id = html_escape(group.product_id.as_str()),
        image = image,
        title = title,
        quantity = group.count(),
        total = group.group_total().display()
    )
}

/// Render subtotal, shipping and grand total with the checkout button.
pub fn render_price_summary(summary: &PriceSummary) -> String {
    format!(
        r#"<div class="checkout-summary">
    <div class="checkout-summary-line">
        <p>Subtotal</p>
        <p class="checkout-subtotal">{subtotal}</p>
    </div>
    <div class="checkout-summary-line">
        <p>Shipping</p>
        <p class="checkout-shipping">{shipping}</p>
    </div>
    <div class="checkout-summary-line checkout-summary-total">
        <h4>Total</h4>
        <h4 class="checkout-total">{total}</h4>
    </div>
    <form method="post" action="/checkout/session">
        <button type="submit" class="button">Check Out</button>
    </form>
</div>"#,
        subtotal = summary.subtotal.display(),
        shipping = summary.shipping.display(),
        total = summary.grand_total.display()
    )
}

/// Render the checkout section for the current basket.
pub fn render_checkout_section(basket: &Basket, shipping: Money) -> String {
    match basket.display_state() {
        BasketDisplay::Empty => r#"<section class="checkout checkout--empty" data-section="checkout">
    <h1 class="checkout-heading">Your bag is empty.</h1>
    <p>Free delivery and free returns.</p>
    <a href="/" class="button">Continue Shopping</a>
</section>"#
            .to_string(),
        BasketDisplay::NonEmpty { item_count, groups } => {
            let summary = PriceSummary::for_basket(basket, shipping);
            let rows: String = groups
                .iter()
                .map(render_checkout_row)
                .collect::<Vec<_>>()
                .join("\n");

            format!(
                r#"<section class="checkout" data-section="checkout" data-item-count="{count}">
    <h1 class="checkout-heading">Review your bag.</h1>
    <p>Free delivery and free returns.</p>
    <div class="checkout-rows">
{rows}
    </div>
{summary}
</section>"#,
                count = item_count,
                rows = rows,
                summary = render_price_summary(&summary)
            )
        }
    }
}
