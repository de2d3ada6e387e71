//! Category tabs with the selected category's products.

use storefront_commerce::catalog::{Catalog, CategoryTabs};

use super::{html_escape, render_product_card};

/// Render the promo section: one tab per category and the panel of the
/// selected one.
pub fn render_category_tabs(catalog: &Catalog, tabs: &CategoryTabs) -> String {
    let tab_list: String = catalog
        .categories
        .iter()
        .enumerate()
        .map(|(index, category)| {
            let selected = tabs.is_selected(index);
            format!(
                r#"<a href="/?tab={index}" id="{id}" role="tab" class="category-tab{class}" aria-selected="{selected}">{title}</a>"#,
                index = index,
                id = html_escape(category.id.as_str()),
                class = if selected { " category-tab--selected" } else { "" },
                selected = selected,
                title = html_escape(&category.title)
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ");

    let products = catalog.products_at(tabs.selected);
    let panel = if products.is_empty() {
        r#"<p class="category-panel-empty">No products in this category yet.</p>"#.to_string()
    } else {
        products
            .into_iter()
            .map(render_product_card)
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"<section id="promos" class="promos" data-section="tabs">
    <h1 class="promos-title">New Promos</h1>
    <nav class="category-tabs" role="tablist">
            {tab_list}
    </nav>
    <div class="category-panel" role="tabpanel" data-tab="{selected}">
{panel}
    </div>
</section>"#,
        tab_list = tab_list,
        selected = tabs.selected,
        panel = panel
    )
}
