//! Process-wide cart session.
//!
//! One `CartSession` is created at application start and handed to every
//! component that needs cart access (`&mut` for mutation, `&` for reads).
//! There is no global instance.

use std::sync::Arc;

use chrono::Utc;

use storefront_catalog::Product;
use storefront_core::{AggregateRoot, CartSessionId, Entity, Money, ProductId};
use storefront_events::{EventBus, InMemoryEventBus, Subscription, execute};

use crate::cart::{AddItem, Cart, CartCommand, CartEntry, CartEvent, ClearCart, RemoveItem};

#[derive(Debug)]
pub struct CartSession {
    cart: Cart,
    bus: Arc<InMemoryEventBus<CartEvent>>,
}

impl Default for CartSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CartSession {
    pub fn new() -> Self {
        Self::with_id(CartSessionId::new())
    }

    pub fn with_id(id: CartSessionId) -> Self {
        Self {
            cart: Cart::empty(id),
            bus: Arc::new(InMemoryEventBus::new()),
        }
    }

    pub fn id(&self) -> CartSessionId {
        self.cart.id_typed()
    }

    /// Number of events applied since the session started.
    pub fn version(&self) -> u64 {
        self.cart.version()
    }

    /// Add `quantity` units of `product`, merging into an existing entry.
    ///
    /// A zero quantity leaves the cart untouched. Returns the product's
    /// quantity in the cart after the call.
    pub fn add(&mut self, product: &Product, quantity: u32) -> u32 {
        let command = CartCommand::AddItem(AddItem {
            session_id: self.id(),
            product_id: product.id().clone(),
            title: product.title().to_string(),
            unit_price: product.price(),
            quantity,
            occurred_at: Utc::now(),
        });

        if self.run(command) == 0 {
            tracing::debug!(product_id = %product.id(), quantity, "add to cart ignored");
        } else {
            tracing::debug!(
                product_id = %product.id(),
                quantity,
                total_count = self.total_count(),
                "added to cart"
            );
        }

        self.quantity_of(product.id())
    }

    /// Remove the entry for `product_id`. Returns whether anything was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let command = CartCommand::RemoveItem(RemoveItem {
            session_id: self.id(),
            product_id: product_id.clone(),
            occurred_at: Utc::now(),
        });

        let removed = self.run(command) > 0;
        tracing::debug!(product_id = %product_id, removed, "remove from cart");
        removed
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        let command = CartCommand::ClearCart(ClearCart {
            session_id: self.id(),
            occurred_at: Utc::now(),
        });
        if self.run(command) > 0 {
            tracing::debug!("cart cleared");
        }
    }

    pub fn list(&self) -> &[CartEntry] {
        self.cart.entries()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.entries().is_empty()
    }

    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.cart.entry(product_id).map_or(0, |e| e.quantity)
    }

    pub fn total_count(&self) -> u64 {
        self.cart.total_count()
    }

    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    /// Receive every cart event published from now on.
    pub fn subscribe(&self) -> Subscription<CartEvent> {
        self.bus.subscribe()
    }

    /// Decide, apply and publish in one step. Returns the number of events.
    fn run(&mut self, command: CartCommand) -> usize {
        let events = match execute(&mut self.cart, &command) {
            Ok(events) => events,
            Err(err) => {
                // Commands are always built with this session's id.
                tracing::error!(error = %err, "cart command rejected");
                return 0;
            }
        };

        for event in &events {
            if let Err(err) = self.bus.publish(event.clone()) {
                tracing::warn!(?err, "failed to publish cart event");
            }
        }
        events.len()
    }
}
