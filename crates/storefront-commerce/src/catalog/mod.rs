//! Product catalog module.
//!
//! Contains products, categories and the category-tab selection used by the
//! home page.

mod category;
mod product;

pub use category::{Catalog, Category, CategoryTabs};
pub use product::{ImageRef, Product};
