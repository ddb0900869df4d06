//! Read-only product source.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use storefront_core::{DomainError, Entity};

use crate::product::Product;

const BUNDLED_PRODUCTS: &str = include_str!("../data/products.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read product file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse product data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error("duplicate product id: {0}")]
    DuplicateId(String),
}

/// Supplies the full, ordered product list at load time.
///
/// There is no mutation, paging or filtering contract.
pub trait ProductSource {
    fn products(&self) -> &[Product];

    fn find(&self, id: &str) -> Option<&Product> {
        self.products().iter().find(|p| p.id().as_str() == id)
    }
}

/// Product source backed by a static JSON document.
#[derive(Debug, Clone)]
pub struct MockProductSource {
    products: Vec<Product>,
}

impl MockProductSource {
    /// Products bundled with the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_PRODUCTS)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(raw)?;
        Self::from_products(products)
    }

    /// Validates every product and enforces identifier uniqueness.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id().clone()) {
                return Err(CatalogError::DuplicateId(product.id().to_string()));
            }
        }

        tracing::info!(count = products.len(), "catalog loaded");
        Ok(Self { products })
    }
}

impl ProductSource for MockProductSource {
    fn products(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_loads_in_order() {
        let source = MockProductSource::bundled().unwrap();
        let ids: Vec<&str> = source.products().iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3", "p4"]);
    }

    #[test]
    fn find_by_id() {
        let source = MockProductSource::bundled().unwrap();
        assert_eq!(source.find("p2").map(|p| p.title()), Some("Stoneware Coffee Mug"));
        assert!(source.find("missing").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = r#"[
            {"id":"p1","title":"A","price":1,"imageUrl":"/a.jpg"},
            {"id":"p1","title":"B","price":2,"imageUrl":"/b.jpg"}
        ]"#;
        match MockProductSource::from_json_str(raw) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, "p1"),
            other => panic!("Expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            MockProductSource::from_json_str("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn invalid_product_is_reported() {
        let raw = r#"[{"id":"p1","title":"A","price":1,"imageUrl":"  "}]"#;
        assert!(matches!(
            MockProductSource::from_json_str(raw),
            Err(CatalogError::Invalid(DomainError::Validation(_)))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            MockProductSource::from_path("/definitely/not/here.json"),
            Err(CatalogError::Io { .. })
        ));
    }
}
