//! Catalog list: one card per product, in source order.

use storefront_cart::CartSession;
use storefront_catalog::ProductSource;
use storefront_core::Entity;

use crate::card::{CardEvent, CardOutcome, ProductCard};
use crate::config::StorefrontConfig;
use crate::navigation::Navigator;

#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    cards: Vec<ProductCard>,
}

impl CatalogView {
    pub fn from_source<S>(source: &S, config: &StorefrontConfig) -> Self
    where
        S: ProductSource + ?Sized,
    {
        let cards = source
            .products()
            .iter()
            .cloned()
            .map(|product| {
                ProductCard::new(product).with_size(&config.card_width, &config.card_height)
            })
            .collect();
        Self { cards }
    }

    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    pub fn card(&self, product_id: &str) -> Option<&ProductCard> {
        self.cards
            .iter()
            .find(|c| c.product().id().as_str() == product_id)
    }

    pub fn card_mut(&mut self, product_id: &str) -> Option<&mut ProductCard> {
        self.cards
            .iter_mut()
            .find(|c| c.product().id().as_str() == product_id)
    }

    /// Route an event to the card for `product_id`. Unknown ids are ignored.
    pub fn dispatch<N>(
        &mut self,
        product_id: &str,
        event: CardEvent,
        cart: &mut CartSession,
        navigator: &mut N,
    ) -> Option<CardOutcome>
    where
        N: Navigator + ?Sized,
    {
        let Some(card) = self.card_mut(product_id) else {
            tracing::debug!(product_id, "event for unknown card ignored");
            return None;
        };
        Some(card.handle(event, cart, navigator))
    }

    /// Cards whose quickview is currently open.
    pub fn open_quickviews(&self) -> impl Iterator<Item = &ProductCard> {
        self.cards.iter().filter(|c| c.quickview().is_open())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{ClickTarget, HoverState};
    use crate::navigation::Router;
    use storefront_catalog::MockProductSource;

    fn view() -> CatalogView {
        let source = MockProductSource::bundled().unwrap();
        CatalogView::from_source(&source, &StorefrontConfig::default())
    }

    #[test]
    fn one_card_per_product_in_order() {
        let view = view();
        let ids: Vec<&str> = view.cards().iter().map(|c| c.product().id().as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3", "p4"]);
        assert_eq!(view.cards()[0].width(), "250px");
    }

    #[test]
    fn hover_is_per_card() {
        let mut view = view();
        let mut cart = CartSession::new();
        let mut router = Router::new();

        view.dispatch("p1", CardEvent::PointerEnter, &mut cart, &mut router);

        assert_eq!(view.card("p1").map(|c| c.hover()), Some(HoverState::Hovered));
        assert_eq!(view.card("p2").map(|c| c.hover()), Some(HoverState::Rest));
    }

    #[test]
    fn quickviews_do_not_collide() {
        let mut view = view();
        let mut cart = CartSession::new();
        let mut router = Router::new();

        view.dispatch("p2", CardEvent::PointerEnter, &mut cart, &mut router);
        view.dispatch(
            "p2",
            CardEvent::Click(ClickTarget::QuickViewButton),
            &mut cart,
            &mut router,
        );

        let open: Vec<&str> = view
            .open_quickviews()
            .map(|c| c.quickview().modal_id())
            .collect();
        assert_eq!(open, vec!["quickview_modal_p2"]);
    }

    #[test]
    fn unknown_card_is_ignored() {
        let mut view = view();
        let mut cart = CartSession::new();
        let mut router = Router::new();
        assert!(
            view.dispatch("nope", CardEvent::PointerEnter, &mut cart, &mut router)
                .is_none()
        );
    }
}
