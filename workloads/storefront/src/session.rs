//! The storefront session.

use futures::try_join;
use storefront_commerce::basket::BasketStore;
use storefront_commerce::catalog::{Catalog, CategoryTabs};
use storefront_commerce::checkout::{OrderSummaryPanel, Viewport};
use storefront_commerce::ids::{CheckoutSessionId, ProductId};
use storefront_commerce::CommerceError;
use storefront_observability::StructuredLogger;

use crate::bindings::ViewBinding;
use crate::config::StorefrontConfig;
use crate::data::{ContentSource, IdentityProvider, PaymentSessions};
use crate::error::RenderError;
use crate::pages;

/// One shopper's session: the basket store, the page state and the
/// collaborators every page draws on.
///
/// Everything a page needs is reached through this value; there is no
/// process-wide basket.
pub struct Storefront {
    config: StorefrontConfig,
    logger: StructuredLogger,
    content: Box<dyn ContentSource>,
    payments: Box<dyn PaymentSessions>,
    identity: Box<dyn IdentityProvider>,
    catalog: Catalog,
    store: BasketStore,
    tabs: CategoryTabs,
    summary_panel: OrderSummaryPanel,
}

impl Storefront {
    /// Create a session with an empty basket and no catalog loaded.
    pub fn new(
        config: StorefrontConfig,
        logger: StructuredLogger,
        content: Box<dyn ContentSource>,
        payments: Box<dyn PaymentSessions>,
        identity: Box<dyn IdentityProvider>,
    ) -> Self {
        let store = BasketStore::new(config.currency);
        Self {
            config,
            logger,
            content,
            payments,
            identity,
            catalog: Catalog::default(),
            store,
            tabs: CategoryTabs::new(),
            summary_panel: OrderSummaryPanel::new(),
        }
    }

    /// Fetch categories and products concurrently and keep them for page
    /// renders.
    pub async fn load_catalog(&mut self) -> Result<&Catalog, RenderError> {
        let (categories, products) =
            try_join!(self.content.categories(), self.content.products())?;

        self.logger
            .info_builder("Catalog loaded")
            .field_i64("categories", categories.len() as i64)
            .field_i64("products", products.len() as i64)
            .emit();

        self.catalog = Catalog::new(categories, products);
        let selected = self.tabs.selected;
        self.tabs.select(selected, &self.catalog);
        Ok(&self.catalog)
    }

    /// Add one unit of a catalog product to the basket.
    pub fn add_to_basket(&mut self, product_id: &ProductId) -> Result<(), CommerceError> {
        let product = self
            .catalog
            .product(product_id)
            .cloned()
            .ok_or_else(|| CommerceError::ProductNotFound(product_id.to_string()))?;

        let expected = self.store.basket().currency();
        if product.price.currency != expected {
            return Err(CommerceError::CurrencyMismatch {
                expected: expected.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        let title = product.title.clone();
        self.store.add_item(product);

        self.logger
            .info_builder("Added to basket")
            .field("product_id", product_id.as_str())
            .field("title", title)
            .field_i64("basket_items", self.store.item_count() as i64)
            .emit();
        Ok(())
    }

    /// Remove every unit of a product. Returns how many were removed.
    pub fn remove_from_basket(&mut self, product_id: &ProductId) -> usize {
        let removed = self.store.remove_group(product_id);

        if removed > 0 {
            self.logger
                .info_builder("Removed from basket")
                .field("product_id", product_id.as_str())
                .field_i64("removed", removed as i64)
                .field_i64("basket_items", self.store.item_count() as i64)
                .emit();
        } else {
            self.logger
                .debug_builder("Remove ignored, product not in basket")
                .field("product_id", product_id.as_str())
                .emit();
        }
        removed
    }

    /// Select a category tab, clamped to the last category.
    pub fn select_tab(&mut self, index: usize) -> usize {
        self.tabs.select(index, &self.catalog);
        self.tabs.selected
    }

    /// Expand or collapse the order summary on compact screens.
    pub fn toggle_order_summary(&mut self) -> bool {
        self.summary_panel.toggle();
        self.summary_panel.expanded
    }

    /// Attach a view that follows the basket.
    pub fn bind_badge(&mut self) -> ViewBinding {
        ViewBinding::badge(&mut self.store)
    }

    /// Attach the checkout view that follows the basket.
    pub fn bind_checkout(&mut self) -> ViewBinding {
        ViewBinding::checkout(&mut self.store, self.config.shipping)
    }

    /// Stop a view from following the basket.
    pub fn unbind(&mut self, binding: &mut ViewBinding) -> bool {
        binding.detach(&mut self.store)
    }

    /// Render the home page.
    pub fn home_page(&self) -> String {
        pages::render_home(&self.catalog, &self.tabs, &self.store, &self.config, &self.logger)
    }

    /// Render the checkout page.
    pub fn checkout_page(&self) -> String {
        pages::render_checkout(&self.store, &self.config, &self.logger)
    }

    /// Open a payment session for the basket.
    pub async fn begin_checkout(&self) -> Result<CheckoutSessionId, RenderError> {
        let basket = self.store.basket();
        if basket.is_empty() {
            return Err(RenderError::EmptyBasket);
        }

        let groups = basket.groups();
        let session = self.payments.create_session(&groups).await?;

        self.logger
            .info_builder("Checkout session created")
            .field("session_id", session.as_str())
            .field_i64("lines", groups.len() as i64)
            .field("grand_total", basket.grand_total(self.config.shipping).display())
            .emit();
        Ok(session)
    }

    /// Render the success page for a completed payment session.
    pub async fn success_page(
        &self,
        session: &CheckoutSessionId,
        viewport: Viewport,
    ) -> Result<String, RenderError> {
        pages::render_success(
            session,
            self.payments.as_ref(),
            self.identity.as_ref(),
            viewport,
            self.summary_panel,
            &self.config,
            &self.logger,
        )
        .await
    }

    /// The basket store.
    pub fn store(&self) -> &BasketStore {
        &self.store
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tabs(&self) -> CategoryTabs {
        self.tabs
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }
}
