//! Quickview overlay.

use storefront_catalog::Product;
use storefront_core::Entity;

use crate::details::DetailContent;

/// Detail overlay bound to one card. Only the open flag changes; opening and
/// closing never touch the cart, the route or the owning card's hover state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickviewModal {
    modal_id: String,
    content: DetailContent,
    open: bool,
}

impl QuickviewModal {
    pub fn new(product: &Product) -> Self {
        Self {
            modal_id: Self::modal_id_for(product),
            content: DetailContent::from_product(product),
            open: false,
        }
    }

    /// Per-product key so several cards on one page never share a modal.
    pub fn modal_id_for(product: &Product) -> String {
        format!("quickview_modal_{}", product.id())
    }

    pub fn modal_id(&self) -> &str {
        &self.modal_id
    }

    pub fn content(&self) -> &DetailContent {
        &self.content
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Money, ProductId};

    fn product(id: &str) -> Product {
        Product::new(ProductId::parse(id).unwrap(), "Mug", Money::from_cents(1250))
            .with_image_url("/m.jpg")
    }

    #[test]
    fn modal_ids_are_per_product() {
        let a = QuickviewModal::new(&product("p1"));
        let b = QuickviewModal::new(&product("p2"));
        assert_eq!(a.modal_id(), "quickview_modal_p1");
        assert_ne!(a.modal_id(), b.modal_id());
    }

    #[test]
    fn open_and_close() {
        let mut modal = QuickviewModal::new(&product("p1"));
        assert!(!modal.is_open());
        modal.open();
        modal.open();
        assert!(modal.is_open());
        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn content_matches_details_page() {
        let p = product("p1");
        let modal = QuickviewModal::new(&p);
        assert_eq!(modal.content(), &DetailContent::from_product(&p));
    }
}
