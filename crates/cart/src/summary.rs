//! Cart badge read model.

use std::collections::HashMap;

use storefront_core::{Money, ProductId};
use storefront_events::Projection;

use crate::cart::{CartEntry, CartEvent};

/// Item count and running total for a cart badge.
///
/// Each event carries absolute per-product state, so folding the same event
/// twice yields the same summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartSummary {
    lines: HashMap<ProductId, (Money, u32)>,
}

impl CartSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an entry that existed before the subscription.
    pub fn seed(&mut self, entry: &CartEntry) {
        self.lines
            .insert(entry.product_id.clone(), (entry.unit_price, entry.quantity));
    }

    pub fn total_count(&self) -> u64 {
        self.lines.values().map(|(_, qty)| u64::from(*qty)).sum()
    }

    pub fn total_price(&self) -> Money {
        self.lines.values().map(|(price, qty)| price.times(*qty)).sum()
    }

    /// Badge text; empty carts show no badge.
    pub fn badge(&self) -> Option<String> {
        match self.total_count() {
            0 => None,
            n if n > 99 => Some("99+".to_string()),
            n => Some(n.to_string()),
        }
    }
}

impl Projection for CartSummary {
    type Ev = CartEvent;

    fn apply(&mut self, event: &Self::Ev) {
        match event {
            CartEvent::ItemAdded(e) => {
                self.lines
                    .insert(e.product_id.clone(), (e.unit_price, e.new_quantity));
            }
            CartEvent::ItemRemoved(e) => {
                self.lines.remove(&e.product_id);
            }
            CartEvent::CartCleared(_) => self.lines.clear(),
        }
    }
}
