use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, Money, ProductId};

use crate::rating::Rating;

/// Catalog record: Product.
///
/// Created by the product source at load time and never mutated afterwards;
/// views hold clones. The wire shape matches the mock data files
/// (`imageUrl`, decimal `price`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(with = "storefront_core::money::decimal")]
    price: Money,
    image_url: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    rating: Rating,
    #[serde(default)]
    tags: BTreeSet<String>,
}

impl Product {
    /// Minimal product; the remaining fields start empty.
    pub fn new(id: ProductId, title: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            price,
            image_url: String::new(),
            category: String::new(),
            rating: Rating::default(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Canonical detail route for this product.
    pub fn detail_path(&self) -> String {
        format!("/products/{}", self.id)
    }

    /// Checks the source is expected to guarantee. Identifier and price are
    /// already enforced by their types during deserialization.
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {}: title cannot be empty",
                self.id
            )));
        }
        if self.image_url.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {}: imageUrl cannot be empty",
                self.id
            )));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
