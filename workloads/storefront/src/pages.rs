//! Full-page renderers.
//!
//! Each page assembles its sections inside the document shell and logs one
//! entry with the render time and output size.

use std::time::Instant;

use futures::join;
use storefront_commerce::basket::BasketStore;
use storefront_commerce::catalog::{Catalog, CategoryTabs};
use storefront_commerce::checkout::{OrderSummary, OrderSummaryPanel, Viewport};
use storefront_commerce::identity::Shopper;
use storefront_commerce::ids::CheckoutSessionId;
use storefront_observability::StructuredLogger;

use crate::config::StorefrontConfig;
use crate::data::{IdentityProvider, PaymentSessions};
use crate::error::RenderError;
use crate::sections::*;

/// Render the home page: hero, category tabs and the basket badge.
pub fn render_home(
    catalog: &Catalog,
    tabs: &CategoryTabs,
    store: &BasketStore,
    config: &StorefrontConfig,
    logger: &StructuredLogger,
) -> String {
    let start = Instant::now();
    let logger = logger.for_page("home");

    let body = format!(
        "{header}\n<main class=\"home\">\n{landing}\n{tabs}\n</main>\n{badge}",
        header = render_header(&config.name),
        landing = render_landing(),
        tabs = render_category_tabs(catalog, tabs),
        badge = render_basket_badge(store.basket())
    );
    let html = render_document(&config.title, config.css_path.as_deref(), &body);

    logger
        .info_builder("Page rendered")
        .field_i64("tab", tabs.selected as i64)
        .field_i64("products", catalog.products_at(tabs.selected).len() as i64)
        .field_i64("basket_items", store.item_count() as i64)
        .field_i64("bytes", html.len() as i64)
        .duration_us("render_us", start.elapsed())
        .emit();

    html
}

/// Render the checkout page for the current basket.
pub fn render_checkout(
    store: &BasketStore,
    config: &StorefrontConfig,
    logger: &StructuredLogger,
) -> String {
    let start = Instant::now();
    let logger = logger.for_page("checkout");
    let basket = store.basket();

    let body = format!(
        "{header}\n<main class=\"checkout-page\">\n{checkout}\n</main>",
        header = render_header(&config.name),
        checkout = render_checkout_section(basket, config.shipping)
    );
    let html = render_document(
        &config.page_title("Bag"),
        config.css_path.as_deref(),
        &body,
    );

    logger
        .info_builder("Page rendered")
        .field_i64("basket_items", basket.len() as i64)
        .field_i64("groups", basket.groups().len() as i64)
        .field("subtotal", basket.subtotal().display())
        .field_i64("bytes", html.len() as i64)
        .duration_us("render_us", start.elapsed())
        .emit();

    html
}

/// Render the success page for an already-built order summary.
pub fn render_order_confirmation(
    summary: &OrderSummary,
    shopper: &Shopper,
    viewport: Viewport,
    panel: OrderSummaryPanel,
    config: &StorefrontConfig,
) -> String {
    let body = format!(
        "{header}\n<main class=\"success-page\">\n{success}\n</main>",
        header = render_header(&config.name),
        success = render_success_section(summary, shopper, viewport, panel)
    );
    render_document(
        &config.page_title("Thank you!"),
        config.css_path.as_deref(),
        &body,
    )
}

/// Fetch a completed session and render its success page.
///
/// Line items and the shopper are fetched concurrently. A failed identity
/// lookup degrades to the guest greeting; a failed line item lookup fails
/// the page.
pub async fn render_success(
    session: &CheckoutSessionId,
    payments: &dyn PaymentSessions,
    identity: &dyn IdentityProvider,
    viewport: Viewport,
    panel: OrderSummaryPanel,
    config: &StorefrontConfig,
    logger: &StructuredLogger,
) -> Result<String, RenderError> {
    let start = Instant::now();
    let logger = logger.for_page("success");

    let (items_res, shopper_res) = join!(payments.line_items(session), identity.current_shopper());

    let items = match items_res {
        Ok(items) => items,
        Err(e) => {
            logger
                .error_builder("Line item fetch failed")
                .field("session_id", session.as_str())
                .field("error", e.to_string())
                .emit();
            return Err(e.into());
        }
    };

    let shopper = shopper_res.unwrap_or_else(|e| {
        logger
            .warn_builder("Identity lookup failed, greeting as guest")
            .field("error", e.to_string())
            .emit();
        Shopper::Anonymous
    });

    let summary = OrderSummary::new(session.clone(), items, config.shipping)?;
    let html = render_order_confirmation(&summary, &shopper, viewport, panel, config);

    logger
        .info_builder("Page rendered")
        .field("order", summary.order_number())
        .field_i64("units", summary.unit_count())
        .field("grand_total", summary.grand_total.display())
        .field_bool("summary_visible", panel.is_visible(viewport))
        .field_i64("bytes", html.len() as i64)
        .duration_us("render_us", start.elapsed())
        .emit();

    Ok(html)
}
