//! Basket simulation commands.

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use storefront::Storefront;
use storefront_commerce::basket::Basket;
use storefront_commerce::identity::Shopper;
use storefront_commerce::ids::ProductId;
use storefront_commerce::Money;

use super::{BasketArgs, BasketCommand};
use crate::context::Context;

/// Run the basket command.
pub async fn run(args: BasketArgs, ctx: &Context) -> Result<()> {
    match args.command {
        BasketCommand::Simulate {
            add,
            remove,
            checkout,
        } => simulate(&add, &remove, checkout, ctx).await,
    }
}

/// Add then remove products, reporting each step through the output.
pub fn apply_changes(
    storefront: &mut Storefront,
    add: &[String],
    remove: &[String],
    ctx: &Context,
) -> Result<()> {
    for id in add {
        storefront.add_to_basket(&ProductId::new(id.as_str()))?;
        ctx.output.debug(&format!("Added {}", id));
    }
    for id in remove {
        let removed = storefront.remove_from_basket(&ProductId::new(id.as_str()));
        if removed == 0 {
            ctx.output.warn(&format!("{} is not in the basket", id));
        } else {
            ctx.output.debug(&format!("Removed {} x{}", id, removed));
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct GroupReport {
    product_id: String,
    title: String,
    quantity: usize,
    unit_price: Money,
    total: Money,
}

#[derive(Debug, Serialize)]
struct BasketReport {
    generated_at: String,
    item_count: usize,
    groups: Vec<GroupReport>,
    subtotal: Money,
    shipping: Money,
    grand_total: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    checkout_session: Option<String>,
}

impl BasketReport {
    fn new(basket: &Basket, shipping: Money) -> Self {
        let summary = basket.price_summary(shipping);
        Self {
            generated_at: Utc::now().to_rfc3339(),
            item_count: basket.len(),
            groups: basket
                .groups()
                .iter()
                .map(|g| GroupReport {
                    product_id: g.product_id.to_string(),
                    title: g.title().to_string(),
                    quantity: g.count(),
                    unit_price: g.unit_price(),
                    total: g.group_total(),
                })
                .collect(),
            subtotal: summary.subtotal,
            shipping: summary.shipping,
            grand_total: summary.grand_total,
            checkout_session: None,
        }
    }
}

async fn simulate(add: &[String], remove: &[String], checkout: bool, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.storefront(Shopper::Anonymous).await?;
    apply_changes(&mut storefront, add, remove, ctx)?;

    let shipping = storefront.config().shipping;
    let mut report = BasketReport::new(storefront.store().basket(), shipping);

    if checkout {
        let session = storefront.begin_checkout().await?;
        report.checkout_session = Some(session.to_string());
    }

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.header("Basket");
    if report.groups.is_empty() {
        ctx.output.info("Basket is empty");
    } else {
        let widths = [20, 36, 4, 12];
        ctx.output.table_row(&["ID", "PRODUCT", "QTY", "TOTAL"], &widths);
        for group in &report.groups {
            ctx.output.table_row(
                &[
                    group.product_id.as_str(),
                    group.title.as_str(),
                    group.quantity.to_string().as_str(),
                    group.total.display().as_str(),
                ],
                &widths,
            );
        }
    }

    ctx.output.info("");
    ctx.output.kv("Items", &report.item_count.to_string());
    ctx.output.kv("Subtotal", &report.subtotal.display());
    ctx.output.kv("Shipping", &report.shipping.display());
    ctx.output.kv("Total", &report.grand_total.display());
    if let Some(ref session) = report.checkout_session {
        ctx.output.success(&format!("Checkout session opened: {}", session));
    }

    Ok(())
}
