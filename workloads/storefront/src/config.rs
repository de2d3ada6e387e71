//! Storefront configuration.

use storefront_commerce::basket::flat_shipping;
use storefront_commerce::{Currency, Money};

/// Configuration for a storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Store name, used in the header and log component.
    pub name: String,
    /// Default page title.
    pub title: String,
    /// Currency every price and total is in.
    pub currency: Currency,
    /// Fixed shipping charge added at checkout.
    pub shipping: Money,
    /// Stylesheet path.
    pub css_path: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            name: "Storefront".to_string(),
            title: "Apple Store Online".to_string(),
            currency: Currency::USD,
            shipping: flat_shipping(Currency::USD),
            css_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Create a new configuration with the given store name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the default page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the stylesheet path.
    pub fn with_css(mut self, path: impl Into<String>) -> Self {
        self.css_path = Some(path.into());
        self
    }

    /// Set the store currency. The shipping amount keeps its minor units.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self.shipping = Money::new(self.shipping.amount_cents, currency);
        self
    }

    /// Set the shipping charge in minor units of the store currency.
    pub fn with_shipping_cents(mut self, cents: i64) -> Self {
        self.shipping = Money::new(cents, self.currency);
        self
    }

    /// Title for a sub-page, e.g. "Bag - Apple Store Online".
    pub fn page_title(&self, page: &str) -> String {
        format!("{} - {}", page, self.title)
    }
}
