//! Cart badge fed by the session's event stream.

use storefront_cart::{CartEvent, CartSession, CartSummary};
use storefront_core::Money;
use storefront_events::{Projection, Subscription};

/// Read-only badge state; never mutates the cart it watches.
#[derive(Debug)]
pub struct CartBadgeModel {
    feed: Subscription<CartEvent>,
    summary: CartSummary,
}

impl CartBadgeModel {
    /// Subscribe to `cart` and seed the summary from its current entries.
    pub fn attach(cart: &CartSession) -> Self {
        let feed = cart.subscribe();
        let mut summary = CartSummary::new();
        for entry in cart.list() {
            summary.seed(entry);
        }
        Self { feed, summary }
    }

    /// Fold pending cart events; returns how many were applied.
    pub fn refresh(&mut self) -> usize {
        self.summary.catch_up(&self.feed)
    }

    /// `None` for an empty cart, `99+` above ninety-nine items.
    pub fn text(&self) -> Option<String> {
        self.summary.badge()
    }

    pub fn total_price(&self) -> Money {
        self.summary.total_price()
    }
}
