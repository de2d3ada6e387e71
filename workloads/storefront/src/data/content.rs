//! Catalog content from the headless CMS.

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use storefront_commerce::catalog::{Catalog, Category, ImageRef, Product};
use storefront_commerce::{Currency, Money};

use super::DataResult;

/// Source of categories and products.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// All categories, in display order.
    async fn categories(&self) -> DataResult<Vec<Category>>;

    /// All products, in display order.
    async fn products(&self) -> DataResult<Vec<Product>>;
}

/// Reference to another CMS document.
#[derive(Debug, Deserialize)]
struct CmsRef {
    #[serde(rename = "_ref")]
    reference: String,
}

#[derive(Debug, Deserialize)]
struct CmsImage {
    asset: CmsRef,
}

#[derive(Debug, Deserialize)]
struct CmsCategory {
    #[serde(rename = "_id")]
    id: String,
    title: String,
}

#[derive(Debug, Deserialize)]
struct CmsProduct {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    /// Decimal amount in the store currency.
    price: f64,
    category: CmsRef,
    #[serde(default)]
    image: Vec<CmsImage>,
}

#[derive(Debug, Deserialize)]
struct CmsDocument {
    #[serde(default)]
    categories: Vec<CmsCategory>,
    #[serde(default)]
    products: Vec<CmsProduct>,
}

impl CmsProduct {
    fn into_product(self, currency: Currency) -> Product {
        let mut product = Product::new(
            self.id,
            self.title,
            Money::from_decimal(self.price, currency),
            self.category.reference,
        );
        for image in self.image {
            product = product.with_image(ImageRef::new(image.asset.reference));
        }
        product
    }
}

/// Content held in memory, typically loaded from a CMS export.
#[derive(Debug, Clone, Default)]
pub struct FixtureContent {
    catalog: Catalog,
}

impl FixtureContent {
    /// Wrap an already-built catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Parse a CMS export. Prices are decimal amounts in `currency`.
    pub fn from_json(json: &str, currency: Currency) -> DataResult<Self> {
        let document: CmsDocument = serde_json::from_str(json)?;

        let categories = document
            .categories
            .into_iter()
            .map(|c| Category::new(c.id, c.title))
            .collect();
        let products = document
            .products
            .into_iter()
            .map(|p| p.into_product(currency))
            .collect();

        Ok(Self::new(Catalog::new(categories, products)))
    }

    /// Read and parse a CMS export from disk.
    pub fn from_path(path: impl AsRef<Path>, currency: Currency) -> DataResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json, currency)
    }

    /// The catalog as loaded.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[async_trait]
impl ContentSource for FixtureContent {
    async fn categories(&self) -> DataResult<Vec<Category>> {
        Ok(self.catalog.categories.clone())
    }

    async fn products(&self) -> DataResult<Vec<Product>> {
        Ok(self.catalog.products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataError;
    use storefront_commerce::ids::ProductId;

    const EXPORT: &str = r#"{
        "categories": [
            {"_id": "phones", "title": "iPhone"},
            {"_id": "accessories", "title": "Accessories"}
        ],
        "products": [
            {
                "_id": "p1",
                "title": "iPhone 15",
                "price": 999.0,
                "category": {"_ref": "phones"},
                "image": [{"asset": {"_ref": "image-abc-800x800-png"}}]
            },
            {
                "_id": "p2",
                "title": "Silicone Case",
                "price": 49.99,
                "category": {"_ref": "accessories"}
            }
        ]
    }"#;

    #[test]
    fn test_from_json_maps_cms_shape() {
        let content = FixtureContent::from_json(EXPORT, Currency::USD).unwrap();
        let catalog = content.catalog();

        assert_eq!(catalog.categories.len(), 2);
        assert_eq!(catalog.categories[1].title, "Accessories");

        let iphone = catalog.product(&ProductId::new("p1")).unwrap();
        assert_eq!(iphone.price, Money::new(99_900, Currency::USD));
        assert_eq!(iphone.category.as_str(), "phones");
        assert_eq!(
            iphone.primary_image().map(|i| i.asset_ref.as_str()),
            Some("image-abc-800x800-png")
        );

        let case = catalog.product(&ProductId::new("p2")).unwrap();
        assert_eq!(case.price.amount_cents, 4999);
        assert!(case.images.is_empty());
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = FixtureContent::from_json("{\"products\": [{}]}", Currency::USD).unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = FixtureContent::from_path("/nonexistent/catalog.json", Currency::USD).unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
        // Message comes from the io error alone so error chains print it once.
        assert!(std::error::Error::source(&err).is_none());
    }

    #[tokio::test]
    async fn test_content_source_returns_catalog() {
        let content = FixtureContent::from_json(EXPORT, Currency::USD).unwrap();

        let categories = content.categories().await.unwrap();
        let products = content.products().await.unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "iPhone 15");
    }
}
