//! Order confirmation section.

use storefront_commerce::checkout::{OrderSummary, OrderSummaryPanel, PaymentLineItem, Viewport};
use storefront_commerce::identity::Shopper;

use super::html_escape;

/// Render one purchased line with its quantity badge.
pub fn render_line_item(item: &PaymentLineItem) -> String {
    format!(
        r#"<div class="order-line" data-line-item="{id}">
    <div class="order-line-thumb order-line-thumb--placeholder" aria-hidden="true">
        <span class="order-line-quantity">{quantity}</span>
    </div>
    <p class="order-line-description">{description}</p>
    <p class="order-line-price">{price}</p>
</div>"#,
        id = html_escape(item.id.as_str()),
        description = html_escape(&item.description),
        quantity = item.quantity,
        price = item.unit_price().display()
    )
}

fn render_confirmation(summary: &OrderSummary, shopper: &Shopper) -> String {
    format!(
        r#"<section class="order-confirmation" data-section="success">
    <div class="order-heading">
        <p class="order-number">Order #{order}</p>
        <h4 class="order-greeting">Thank you {name}</h4>
    </div>
    <div class="order-status">
        <p>Your order is confirmed</p>
        <p>We've accepted your order, and we're getting it ready. Come back to this page for updates on your shipment status.</p>
    </div>
    <div class="order-updates">
        <p>Order updates</p>
        <p>You'll get shipping and delivery updates by email and text.</p>
    </div>
    <a href="/" class="button">Continue Shopping</a>
</section>"#,
        order = html_escape(summary.order_number()),
        name = html_escape(shopper.greeting_name())
    )
}

fn render_summary_body(summary: &OrderSummary) -> String {
    let lines: String = summary
        .items
        .iter()
        .map(render_line_item)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<div class="order-summary-body">
    <div class="order-lines">
{lines}
    </div>
    <div class="order-summary-line">
        <p>Subtotal</p>
        <p class="order-subtotal">{subtotal}</p>
    </div>
    <div class="order-summary-line">
        <p>Shipping</p>
        <p class="order-shipping">{shipping}</p>
    </div>
    <div class="order-summary-line order-summary-total">
        <p>Total</p>
        <p class="order-total"><span class="order-currency">{code}</span> {total}</p>
    </div>
</div>"#,
        lines = lines,
        subtotal = summary.subtotal.display(),
        shipping = summary.shipping.display(),
        code = summary.grand_total.currency.code(),
        total = summary.grand_total.display()
    )
}

/// Render the order confirmation and the collapsible order summary.
///
/// The summary toggle is only offered on compact viewports; on desktop the
/// body is always shown.
pub fn render_success_section(
    summary: &OrderSummary,
    shopper: &Shopper,
    viewport: Viewport,
    panel: OrderSummaryPanel,
) -> String {
    let visible = panel.is_visible(viewport);

    let toggle = match viewport {
        Viewport::Compact => format!(
            r#"<form method="get" action="/success" class="order-summary-toggle">
        <input type="hidden" name="session_id" value="{session}">
        <input type="hidden" name="summary" value="{next}">
        <button type="submit" aria-expanded="{visible}">{label}</button>
        <p class="order-summary-toggle-total">{total}</p>
    </form>"#,
            session = html_escape(summary.session_id.as_str()),
            next = if panel.expanded { "collapsed" } else { "expanded" },
            visible = visible,
            label = if visible { "Hide order summary" } else { "Show order summary" },
            total = summary.grand_total.display()
        ),
        Viewport::Desktop => String::new(),
    };

    let body = if visible {
        render_summary_body(summary)
    } else {
        String::new()
    };

    format!(
        r#"{confirmation}
<section class="order-summary" data-section="order_summary" data-visible="{visible}">
    {toggle}
{body}
</section>"#,
        confirmation = render_confirmation(summary, shopper),
        visible = visible,
        toggle = toggle,
        body = body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::ids::CheckoutSessionId;
    use storefront_commerce::{Currency, Money};

    fn summary() -> OrderSummary {
        OrderSummary::new(
            CheckoutSessionId::new("cs_test_a1B2c3D4e5"),
            vec![
                PaymentLineItem::new("li_1", "iPhone 15", 2, 99_900, Currency::USD),
                PaymentLineItem::new("li_2", "Case", 1, 4_900, Currency::USD),
            ],
            Money::new(2000, Currency::USD),
        )
        .unwrap()
    }

    #[test]
    fn test_confirmation_shows_order_number_and_greeting() {
        let shopper = Shopper::signed_in("u1", "Ada Lovelace");
        let html = render_success_section(&summary(), &shopper, Viewport::Desktop, OrderSummaryPanel::new());

        assert!(html.contains("Order #3D4e5"));
        assert!(html.contains("Thank you Ada"));
    }

    #[test]
    fn test_anonymous_shopper_is_guest() {
        let html = render_success_section(
            &summary(),
            &Shopper::Anonymous,
            Viewport::Desktop,
            OrderSummaryPanel::new(),
        );
        assert!(html.contains("Thank you Guest"));
    }

    #[test]
    fn test_desktop_always_shows_summary() {
        let html = render_success_section(
            &summary(),
            &Shopper::Anonymous,
            Viewport::Desktop,
            OrderSummaryPanel::new(),
        );

        assert!(html.contains(r#"data-visible="true""#));
        assert!(!html.contains("order-summary-toggle"));
        assert!(html.contains(r#"<span class="order-line-quantity">2</span>"#));
        assert!(!html.contains("<img"));
        assert!(html.contains(r#"<p class="order-subtotal">$2,047.00</p>"#));
        assert!(html.contains(r#"<p class="order-shipping">$20.00</p>"#));
        assert!(html.contains("$2,067.00"));
    }

    #[test]
    fn test_compact_hides_summary_until_expanded() {
        let mut panel = OrderSummaryPanel::new();
        let collapsed = render_success_section(&summary(), &Shopper::Anonymous, Viewport::Compact, panel);

        assert!(collapsed.contains(r#"data-visible="false""#));
        assert!(collapsed.contains("Show order summary"));
        assert!(!collapsed.contains("order-summary-body"));

        panel.toggle();
        let expanded = render_success_section(&summary(), &Shopper::Anonymous, Viewport::Compact, panel);
        assert!(expanded.contains("Hide order summary"));
        assert!(expanded.contains("order-summary-body"));
    }
}
