//! End-to-end basket flow through the page renderers.

use std::sync::{Arc, Mutex};

use storefront::data::{FixtureContent, InMemoryPayments, StaticIdentity};
use storefront::{RenderError, Storefront, StorefrontConfig};
use storefront_commerce::prelude::*;
use storefront_observability::{LogBuffer, RequestId, StructuredLogger};

const CATALOG: &str = include_str!("../fixtures/catalog.json");
const SESSIONS: &str = include_str!("../fixtures/sessions.json");

fn scenario_catalog() -> Catalog {
    Catalog::new(
        vec![Category::new("phones", "iPhone"), Category::new("accessories", "Accessories")],
        vec![
            Product::new("p1", "iPhone", Money::new(999, Currency::USD), "phones"),
            Product::new("p2", "Case", Money::new(499, Currency::USD), "accessories"),
        ],
    )
}

fn storefront_with(content: FixtureContent, shopper: Shopper) -> (Storefront, LogBuffer) {
    let buffer: LogBuffer = Arc::new(Mutex::new(Vec::new()));
    let logger = StructuredLogger::new(RequestId::from_string("req-flow"))
        .with_component("storefront")
        .with_buffer(buffer.clone());
    let payments = InMemoryPayments::from_json(SESSIONS).unwrap();

    let storefront = Storefront::new(
        StorefrontConfig::default(),
        logger,
        Box::new(content),
        Box::new(payments),
        Box::new(StaticIdentity::new(shopper)),
    );
    (storefront, buffer)
}

#[tokio::test]
async fn test_add_then_remove_group_through_pages() {
    let (mut storefront, _) = storefront_with(FixtureContent::new(scenario_catalog()), Shopper::Anonymous);
    storefront.load_catalog().await.unwrap();

    let badge = storefront.bind_badge();
    let checkout = storefront.bind_checkout();

    storefront.add_to_basket(&ProductId::new("p1")).unwrap();
    storefront.add_to_basket(&ProductId::new("p2")).unwrap();
    storefront.add_to_basket(&ProductId::new("p1")).unwrap();

    assert_eq!(storefront.store().item_count(), 3);
    let groups = storefront.store().basket().groups();
    assert_eq!(groups.len(), 2);
    assert_eq!((groups[0].product_id.as_str(), groups[0].count()), ("p1", 2));
    assert_eq!(groups[0].group_total().amount_cents, 1998);
    assert_eq!((groups[1].product_id.as_str(), groups[1].count()), ("p2", 1));
    assert_eq!(storefront.store().basket().subtotal().amount_cents, 2497);

    assert!(badge.html().contains(r#"<span class="basket-badge-count">3</span>"#));
    let page = storefront.checkout_page();
    assert_eq!(page.matches(r#"class="checkout-row""#).count(), 2);
    assert!(page.contains(r#"<h4 class="checkout-row-total">$19.98</h4>"#));
    assert!(page.contains(r#"<p class="checkout-subtotal">$24.97</p>"#));
    assert!(page.contains(r#"<h4 class="checkout-total">$44.97</h4>"#));
    assert_eq!(checkout.html(), extract_checkout_section(&page));

    assert_eq!(storefront.remove_from_basket(&ProductId::new("p1")), 2);

    assert_eq!(storefront.store().item_count(), 1);
    let groups = storefront.store().basket().groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].product_id.as_str(), "p2");
    assert_eq!(storefront.store().basket().subtotal().amount_cents, 499);

    assert!(badge.html().contains(r#"<span class="basket-badge-count">1</span>"#));
    assert!(!checkout.html().contains(r#"data-product-id="p1""#));
    assert!(checkout.html().contains(r#"<p class="checkout-subtotal">$4.99</p>"#));
}

#[tokio::test]
async fn test_removing_absent_product_leaves_pages_unchanged() {
    let (mut storefront, _) = storefront_with(FixtureContent::new(scenario_catalog()), Shopper::Anonymous);
    storefront.load_catalog().await.unwrap();
    storefront.add_to_basket(&ProductId::new("p2")).unwrap();

    let before = storefront.checkout_page();
    assert_eq!(storefront.remove_from_basket(&ProductId::new("p1")), 0);
    assert_eq!(storefront.checkout_page(), before);
}

#[tokio::test]
async fn test_grouping_follows_first_occurrence() {
    let (mut storefront, _) = storefront_with(FixtureContent::new(scenario_catalog()), Shopper::Anonymous);
    storefront.load_catalog().await.unwrap();

    storefront.add_to_basket(&ProductId::new("p2")).unwrap();
    storefront.add_to_basket(&ProductId::new("p1")).unwrap();
    storefront.add_to_basket(&ProductId::new("p1")).unwrap();

    let page = storefront.checkout_page();
    let p2 = page.find(r#"data-product-id="p2""#).unwrap();
    let p1 = page.find(r#"data-product-id="p1""#).unwrap();
    assert!(p2 < p1);

    let groups = storefront.store().basket().groups();
    let subtotal: i64 = groups.iter().map(|g| g.group_total().amount_cents).sum();
    assert_eq!(subtotal, storefront.store().basket().subtotal().amount_cents);
}

#[tokio::test]
async fn test_home_page_from_cms_export() {
    let content = FixtureContent::from_json(CATALOG, Currency::USD).unwrap();
    let (mut storefront, buffer) = storefront_with(content, Shopper::Anonymous);
    storefront.load_catalog().await.unwrap();

    let home = storefront.home_page();
    assert!(home.contains(r#"data-product-id="iphone-15-pro""#));
    assert!(!home.contains(r#"data-product-id="macbook-air-15""#));
    assert!(!home.contains("basket-badge-count"));

    storefront.select_tab(1);
    storefront.add_to_basket(&ProductId::new("macbook-air-15")).unwrap();
    let home = storefront.home_page();
    assert!(home.contains(r#"data-product-id="macbook-air-15""#));
    assert!(home.contains("MacBook Air 15&quot;"));
    assert!(home.contains(r#"<span class="basket-badge-count">1</span>"#));

    let lines = buffer.lock().unwrap();
    assert!(lines.iter().all(|l| l.contains(r#""request_id":"req-flow""#)));
}

#[tokio::test]
async fn test_checkout_round_trip_to_success_page() {
    let (mut storefront, _) = storefront_with(
        FixtureContent::new(scenario_catalog()),
        Shopper::signed_in("user_42", "Grace Hopper"),
    );
    storefront.load_catalog().await.unwrap();
    storefront.add_to_basket(&ProductId::new("p1")).unwrap();
    storefront.add_to_basket(&ProductId::new("p1")).unwrap();
    storefront.add_to_basket(&ProductId::new("p2")).unwrap();

    let session = storefront.begin_checkout().await.unwrap();
    let page = storefront.success_page(&session, Viewport::Desktop).await.unwrap();

    assert!(page.contains(&format!("Order #{}", session.order_number())));
    assert!(page.contains("Thank you Grace"));
    assert!(page.contains(r#"<p class="order-subtotal">$24.97</p>"#));
    assert!(page.contains("$44.97"));
}

#[tokio::test]
async fn test_fixture_session_success_page_on_compact_screen() {
    let (mut storefront, _) = storefront_with(FixtureContent::new(scenario_catalog()), Shopper::Anonymous);
    let session = CheckoutSessionId::new("cs_test_b1Xq9ZkT3mNp7R2a");

    let collapsed = storefront.success_page(&session, Viewport::from_width(390)).await.unwrap();
    assert!(collapsed.contains("Order #p7R2a"));
    assert!(collapsed.contains("Show order summary"));
    assert!(!collapsed.contains("order-summary-body"));

    storefront.toggle_order_summary();
    let expanded = storefront.success_page(&session, Viewport::from_width(390)).await.unwrap();
    assert!(expanded.contains(r#"<span class="order-line-quantity">2</span>"#));
    assert!(expanded.contains(r#"<p class="order-subtotal">$2,037.00</p>"#));
    assert!(expanded.contains("$2,057.00"));
}

#[tokio::test]
async fn test_unknown_session_is_an_error() {
    let (storefront, _) = storefront_with(FixtureContent::new(scenario_catalog()), Shopper::Anonymous);
    let result = storefront
        .success_page(&CheckoutSessionId::new("cs_unknown"), Viewport::Desktop)
        .await;
    assert!(matches!(result, Err(RenderError::Data(_))));
}

fn extract_checkout_section(page: &str) -> String {
    let start = page.find("<section class=\"checkout\"").unwrap();
    let end = page[start..].find("</section>").unwrap() + start + "</section>".len();
    page[start..end].to_string()
}
