//! Page rendering commands.

use std::fs;

use anyhow::{Context as _, Result};
use chrono::Utc;
use storefront_commerce::checkout::Viewport;
use storefront_commerce::identity::Shopper;
use storefront_commerce::ids::CheckoutSessionId;

use super::basket::apply_changes;
use super::{RenderArgs, RenderCommand};
use crate::context::Context;
use crate::output::format_bytes;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let (page, html) = match args.command {
        RenderCommand::Home { tab, add } => {
            let mut storefront = ctx.storefront(Shopper::Anonymous).await?;
            apply_changes(&mut storefront, &add, &[], ctx)?;
            let selected = storefront.select_tab(tab);
            if selected != tab {
                ctx.output.warn(&format!("Tab {} out of range, showing tab {}", tab, selected));
            }
            ("home", storefront.home_page())
        }
        RenderCommand::Checkout { add, remove } => {
            let mut storefront = ctx.storefront(Shopper::Anonymous).await?;
            apply_changes(&mut storefront, &add, &remove, ctx)?;
            ("checkout", storefront.checkout_page())
        }
        RenderCommand::Success {
            session,
            compact,
            expanded,
            shopper,
        } => {
            let shopper = match shopper {
                Some(name) => Shopper::signed_in("cli", name),
                None => Shopper::Anonymous,
            };
            let mut storefront = ctx.storefront(shopper).await?;
            if expanded {
                storefront.toggle_order_summary();
            }
            let viewport = if compact {
                Viewport::Compact
            } else {
                Viewport::Desktop
            };
            let html = storefront
                .success_page(&CheckoutSessionId::new(session), viewport)
                .await?;
            ("success", html)
        }
    };

    write_page(page, &html, args.out.as_deref(), ctx)
}

fn write_page(page: &str, html: &str, out: Option<&str>, ctx: &Context) -> Result<()> {
    let Some(out) = out else {
        ctx.output.raw(html);
        return Ok(());
    };

    let path = ctx.resolve_path(out);
    fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "page": page,
            "path": path.display().to_string(),
            "bytes": html.len(),
            "rendered_at": Utc::now().to_rfc3339(),
        }));
    } else {
        ctx.output.success(&format!(
            "Rendered {} page to {} ({})",
            page,
            path.display(),
            format_bytes(html.len() as u64)
        ));
    }

    Ok(())
}
