//! Product types.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Opaque reference to an image asset.
///
/// Turning this into a URL is the content source's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef {
    /// Asset reference as issued by the content source.
    pub asset_ref: String,
}

impl ImageRef {
    /// Create a new image reference.
    pub fn new(asset_ref: impl Into<String>) -> Self {
        Self {
            asset_ref: asset_ref.into(),
        }
    }
}

/// A product as published by the content source.
///
/// Immutable once fetched; the basket only ever holds copies of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Category this product is listed under.
    pub category: CategoryId,
    /// Images, primary first.
    pub images: Vec<ImageRef>,
}

impl Product {
    /// Create a product without images.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Money,
        category: impl Into<CategoryId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            category: category.into(),
            images: Vec::new(),
        }
    }

    /// Add an image reference.
    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.images.push(image);
        self
    }

    /// The image shown on cards and checkout rows.
    pub fn primary_image(&self) -> Option<&ImageRef> {
        self.images.first()
    }

    /// Check if this product is listed under the given category.
    pub fn in_category(&self, category: &CategoryId) -> bool {
        &self.category == category
    }
}
