//! Product card.

use storefront_commerce::catalog::{ImageRef, Product};

use super::html_escape;

/// URL an image asset is served from.
pub fn image_url(image: &ImageRef) -> String {
    format!("/images/{}", html_escape(&image.asset_ref))
}

/// Render one product card with its add-to-basket form.
pub fn render_product_card(product: &Product) -> String {
    let title = html_escape(&product.title);
    let image = match product.primary_image() {
        Some(image) => format!(
            r#"<img src="{}" alt="{}/product">"#,
            image_url(image),
            title
        ),
        None => r#"<div class="product-image--placeholder"></div>"#.to_string(),
    };

    format!(
        r#"<article class="product-card" data-product-id="{id}">
    <div class="product-image">{image}</div>
    <div class="product-info">
        <div class="product-purchase">
            <p class="product-title">{title}</p>
            <p class="product-price">{price}</p>
        </div>
        <form method="post" action="/basket/add">
            <input type="hidden" name="product_id" value="{id}">
            <button type="submit" class="add-to-basket" aria-label="Add {title} to basket">Add to basket</button>
        </form>
    </div>
</article>"#,
        id = html_escape(product.id.as_str()),
        image = image,
        title = title,
        price = product.price.display()
    )
}
