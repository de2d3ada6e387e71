//! Categories and the catalog view built from them.

use crate::catalog::Product;
use crate::ids::{CategoryId, ProductId};
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display title, shown as the tab label.
    pub title: String,
}

impl Category {
    /// Create a new category.
    pub fn new(id: impl Into<CategoryId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Categories and products as fetched for one page render.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    /// Categories in tab order.
    pub categories: Vec<Category>,
    /// Products in source order.
    pub products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from fetched categories and products.
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// Products listed under a category, in source order.
    pub fn products_in<'a>(&'a self, category: &'a CategoryId) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| p.in_category(category))
    }

    /// The category shown at a tab position.
    pub fn category_at(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Products of the category shown at a tab position.
    ///
    /// An index past the last tab yields an empty list.
    pub fn products_at(&self, index: usize) -> Vec<&Product> {
        match self.category_at(index) {
            Some(category) => self.products_in(&category.id).collect(),
            None => Vec::new(),
        }
    }

    /// Look up a category by id.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Look up a product by id.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Check if the catalog has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Selected tab on the home page's category tab list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTabs {
    /// Index of the selected tab.
    pub selected: usize,
}

impl CategoryTabs {
    /// Tabs with the first category selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a tab, clamped to the last category.
    pub fn select(&mut self, index: usize, catalog: &Catalog) {
        let last = catalog.categories.len().saturating_sub(1);
        self.selected = index.min(last);
    }

    /// Check whether a tab position is the selected one.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }

    /// The selected category, if the catalog has any.
    pub fn selected_category<'a>(&self, catalog: &'a Catalog) -> Option<&'a Category> {
        catalog.category_at(self.selected)
    }
}
