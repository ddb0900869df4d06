//! Product details view.

use std::collections::BTreeSet;

use storefront_cart::CartSession;
use storefront_catalog::Product;
use storefront_core::Entity;

use crate::config::StorefrontConfig;
use crate::quantity::QuantitySelector;
use crate::rating::RatingDisplay;

/// Descriptive block shared by the details page and the quickview overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailContent {
    pub title: String,
    pub rating: RatingDisplay,
    pub price_label: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub tags: BTreeSet<String>,
}

impl DetailContent {
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title().to_string(),
            rating: RatingDisplay::new(product.rating()),
            price_label: product.price().to_string(),
            description: product.description().to_string(),
            image_url: product.image_url().to_string(),
            category: product.category().to_string(),
            tags: product.tags().clone(),
        }
    }

    pub fn image_src(&self, config: &StorefrontConfig) -> String {
        config.image_src(&self.image_url)
    }
}

/// Full-page composition: description, image, quantity selector and an
/// add-to-cart action that submits the selected quantity.
#[derive(Debug, Clone)]
pub struct ProductDetails {
    product: Product,
    content: DetailContent,
    selector: QuantitySelector,
}

impl ProductDetails {
    pub fn new(product: Product) -> Self {
        let content = DetailContent::from_product(&product);
        Self {
            product,
            content,
            selector: QuantitySelector::new(),
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn content(&self) -> &DetailContent {
        &self.content
    }

    pub fn selector(&self) -> &QuantitySelector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut QuantitySelector {
        &mut self.selector
    }

    /// Submit the selector's current value. Zero leaves the cart untouched.
    /// Returns the product's quantity in the cart afterwards.
    pub fn add_to_cart(&self, cart: &mut CartSession) -> u32 {
        let quantity = self.selector.value();
        tracing::debug!(product_id = %self.product.id(), quantity, "details add to cart");
        cart.add(&self.product, quantity)
    }

    /// Up to `limit` other products from the same category, in catalog order.
    pub fn related<'a>(&self, catalog: &'a [Product], limit: usize) -> Vec<&'a Product> {
        catalog
            .iter()
            .filter(|p| p.id() != self.product.id() && p.category() == self.product.category())
            .take(limit)
            .collect()
    }
}
