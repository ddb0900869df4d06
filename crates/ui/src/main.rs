//! `storefront`: headless walkthrough of a browsing session.
//!
//! Loads the catalog, then drives the same state the web frontend drives:
//! hover a card, add it to the cart twice, peek at another product through
//! its quickview, open a details page and submit a chosen quantity.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use storefront_cart::CartSession;
    use storefront_catalog::{MockProductSource, ProductSource};
    use storefront_core::Entity;
    use storefront_ui::{
        CardEvent, CartBadgeModel, CatalogView, ClickTarget, ProductDetails, Route, Router,
        StorefrontConfig,
    };

    storefront_observability::init();

    let config = StorefrontConfig::from_env().context("invalid storefront configuration")?;
    let source = match &config.catalog_path {
        Some(path) => MockProductSource::from_path(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => MockProductSource::bundled().context("bundled catalog is invalid")?,
    };

    let mut cart = CartSession::new();
    let mut badge = CartBadgeModel::attach(&cart);
    let mut router = Router::new();
    let mut catalog = CatalogView::from_source(&source, &config);

    let first = source
        .products()
        .first()
        .context("catalog is empty")?
        .id()
        .to_string();

    catalog.dispatch(&first, CardEvent::PointerEnter, &mut cart, &mut router);
    for _ in 0..2 {
        let outcome = catalog.dispatch(
            &first,
            CardEvent::Click(ClickTarget::AddToCartButton),
            &mut cart,
            &mut router,
        );
        tracing::info!(product_id = %first, ?outcome, "card action");
    }
    catalog.dispatch(&first, CardEvent::PointerLeave, &mut cart, &mut router);

    if let Some(second) = source.products().get(1).map(|p| p.id().to_string()) {
        catalog.dispatch(&second, CardEvent::PointerEnter, &mut cart, &mut router);
        catalog.dispatch(
            &second,
            CardEvent::Click(ClickTarget::QuickViewButton),
            &mut cart,
            &mut router,
        );
        if let Some(card) = catalog.card_mut(&second) {
            tracing::info!(
                modal_id = card.quickview().modal_id(),
                title = %card.quickview().content().title,
                "quickview"
            );
            card.quickview_mut().close();
        }
        catalog.dispatch(&second, CardEvent::Click(ClickTarget::Body), &mut cart, &mut router);
    }

    if let Route::ProductDetail(id) = router.current().clone() {
        let product = source
            .find(id.as_str())
            .with_context(|| format!("route points at unknown product {id}"))?;
        let mut details = ProductDetails::new(product.clone());
        details.selector_mut().set_from_input("3");
        details.add_to_cart(&mut cart);

        if let Some(previous) = router.back() {
            tracing::info!(route = %previous, "back to listing");
        }
    }

    badge.refresh();
    let badge_text = badge.text().unwrap_or_default();
    tracing::info!(
        badge = %badge_text,
        route = %router.current(),
        "session finished"
    );

    for entry in cart.list() {
        println!(
            "{:<6} {:<28} x{:<3} {}",
            entry.product_id,
            entry.title,
            entry.quantity,
            entry.line_total()
        );
    }
    println!("{} item(s), total {}", cart.total_count(), cart.total_price());

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
