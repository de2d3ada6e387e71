//! Catalog inspection commands.

use anyhow::Result;
use storefront_commerce::catalog::Product;
use storefront_commerce::identity::Shopper;
use storefront_commerce::ids::CategoryId;
use storefront_commerce::CommerceError;

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CatalogCommand::List { category } => list_products(category, ctx).await,
        CatalogCommand::Categories => list_categories(ctx).await,
    }
}

async fn list_products(category: Option<String>, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront(Shopper::Anonymous).await?;
    let catalog = storefront.catalog();

    let products: Vec<&Product> = match category {
        Some(ref id) => {
            let category = catalog
                .category(&CategoryId::new(id.as_str()))
                .ok_or_else(|| CommerceError::CategoryNotFound(id.clone()))?;
            catalog.products_in(&category.id).collect()
        }
        None => catalog.products.iter().collect(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header("Products");
    let widths = [20, 40, 16, 12];
    ctx.output.table_row(&["ID", "TITLE", "CATEGORY", "PRICE"], &widths);
    for product in &products {
        ctx.output.table_row(
            &[
                product.id.as_str(),
                product.title.as_str(),
                product.category.as_str(),
                product.price.display().as_str(),
            ],
            &widths,
        );
    }
    ctx.output.info("");
    ctx.output.info(&format!("{} product(s)", products.len()));

    Ok(())
}

async fn list_categories(ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront(Shopper::Anonymous).await?;
    let catalog = storefront.catalog();

    if ctx.output.is_json() {
        ctx.output.json(&catalog.categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    let widths = [4, 20, 24, 8];
    ctx.output.table_row(&["TAB", "ID", "TITLE", "PRODUCTS"], &widths);
    for (index, category) in catalog.categories.iter().enumerate() {
        ctx.output.table_row(
            &[
                index.to_string().as_str(),
                category.id.as_str(),
                category.title.as_str(),
                catalog.products_in(&category.id).count().to_string().as_str(),
            ],
            &widths,
        );
    }

    Ok(())
}
