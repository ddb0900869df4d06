use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{Aggregate, AggregateRoot, CartSessionId, DomainError, Money, ProductId};
use storefront_events::Event;

/// Cart line: one per product, never duplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product_id: ProductId,
    pub title: String,
    /// Price snapshot taken from the immutable product record.
    pub unit_price: Money,
    /// Always >= 1 while the entry exists.
    pub quantity: u32,
}

impl CartEntry {
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// Aggregate root: Cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: CartSessionId,
    entries: Vec<CartEntry>,
    version: u64,
}

impl Cart {
    pub fn empty(id: CartSessionId) -> Self {
        Self {
            id,
            entries: Vec::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> CartSessionId {
        self.id
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn entry(&self, product_id: &ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| &e.product_id == product_id)
    }

    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    pub fn total_price(&self) -> Money {
        self.entries.iter().map(CartEntry::line_total).sum()
    }
}

impl AggregateRoot for Cart {
    type Id = CartSessionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub session_id: CartSessionId,
    pub product_id: ProductId,
    pub title: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveItem {
    pub session_id: CartSessionId,
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ClearCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearCart {
    pub session_id: CartSessionId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddItem(AddItem),
    RemoveItem(RemoveItem),
    ClearCart(ClearCart),
}

/// Event: ItemAdded.
///
/// `new_quantity` is the entry's quantity after the addition, so applying the
/// event (or folding it into a read model) does not depend on prior state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub session_id: CartSessionId,
    pub product_id: ProductId,
    pub title: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub new_quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub session_id: CartSessionId,
    pub product_id: ProductId,
    pub removed_quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CartCleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCleared {
    pub session_id: CartSessionId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    ItemRemoved(ItemRemoved),
    CartCleared(CartCleared),
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "cart.item.added",
            CartEvent::ItemRemoved(_) => "cart.item.removed",
            CartEvent::CartCleared(_) => "cart.cleared",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded(e) => e.occurred_at,
            CartEvent::ItemRemoved(e) => e.occurred_at,
            CartEvent::CartCleared(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::ItemAdded(e) => {
                match self.entries.iter_mut().find(|entry| entry.product_id == e.product_id) {
                    Some(entry) => entry.quantity = e.new_quantity,
                    None => self.entries.push(CartEntry {
                        product_id: e.product_id.clone(),
                        title: e.title.clone(),
                        unit_price: e.unit_price,
                        quantity: e.new_quantity,
                    }),
                }
            }
            CartEvent::ItemRemoved(e) => {
                self.entries.retain(|entry| entry.product_id != e.product_id);
            }
            CartEvent::CartCleared(_) => {
                self.entries.clear();
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CartCommand::AddItem(cmd) => self.handle_add(cmd),
            CartCommand::RemoveItem(cmd) => self.handle_remove(cmd),
            CartCommand::ClearCart(cmd) => self.handle_clear(cmd),
        }
    }
}

impl Cart {
    fn ensure_session(&self, session_id: CartSessionId) -> Result<(), DomainError> {
        if self.id != session_id {
            return Err(DomainError::invariant("session_id mismatch"));
        }
        Ok(())
    }

    fn handle_add(&self, cmd: &AddItem) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_session(cmd.session_id)?;

        // Zero quantity is a no-op, not an error.
        if cmd.quantity == 0 {
            return Ok(Vec::new());
        }

        let current = self.entry(&cmd.product_id).map_or(0, |e| e.quantity);
        let new_quantity = current.saturating_add(cmd.quantity);
        if new_quantity == current {
            return Ok(Vec::new());
        }

        Ok(vec![CartEvent::ItemAdded(ItemAdded {
            session_id: cmd.session_id,
            product_id: cmd.product_id.clone(),
            title: cmd.title.clone(),
            unit_price: cmd.unit_price,
            quantity: cmd.quantity,
            new_quantity,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove(&self, cmd: &RemoveItem) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_session(cmd.session_id)?;

        let Some(entry) = self.entry(&cmd.product_id) else {
            return Ok(Vec::new());
        };

        Ok(vec![CartEvent::ItemRemoved(ItemRemoved {
            session_id: cmd.session_id,
            product_id: cmd.product_id.clone(),
            removed_quantity: entry.quantity,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_clear(&self, cmd: &ClearCart) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_session(cmd.session_id)?;

        if self.entries.is_empty() {
            return Ok(Vec::new());
        }

        Ok(vec![CartEvent::CartCleared(CartCleared {
            session_id: cmd.session_id,
            occurred_at: cmd.occurred_at,
        })])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session_id() -> CartSessionId {
        CartSessionId::new()
    }

    fn test_product_id(raw: &str) -> ProductId {
        ProductId::parse(raw).unwrap()
    }

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn add(session_id: CartSessionId, product: &str, quantity: u32) -> CartCommand {
        CartCommand::AddItem(AddItem {
            session_id,
            product_id: test_product_id(product),
            title: format!("Product {product}"),
            unit_price: Money::from_cents(1999),
            quantity,
            occurred_at: test_time(),
        })
    }

    fn run(cart: &mut Cart, command: &CartCommand) -> Vec<CartEvent> {
        let events = cart.handle(command).unwrap();
        for event in &events {
            cart.apply(event);
        }
        events
    }

    #[test]
    fn add_item_emits_item_added_event() {
        let session_id = test_session_id();
        let cart = Cart::empty(session_id);

        let events = cart.handle(&add(session_id, "p1", 3)).unwrap();
        assert_eq!(events.len(), 1);

        match &events[0] {
            CartEvent::ItemAdded(e) => {
                assert_eq!(e.product_id, test_product_id("p1"));
                assert_eq!(e.quantity, 3);
                assert_eq!(e.new_quantity, 3);
            }
            _ => panic!("Expected ItemAdded event"),
        }
    }

    #[test]
    fn repeated_add_accumulates_on_existing_entry() {
        let session_id = test_session_id();
        let mut cart = Cart::empty(session_id);

        run(&mut cart, &add(session_id, "p1", 1));
        let events = run(&mut cart, &add(session_id, "p1", 2));

        match &events[0] {
            CartEvent::ItemAdded(e) => assert_eq!(e.new_quantity, 3),
            _ => panic!("Expected ItemAdded event"),
        }
        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.entries()[0].quantity, 3);
    }

    #[test]
    fn zero_quantity_emits_nothing() {
        let session_id = test_session_id();
        let cart = Cart::empty(session_id);

        let events = cart.handle(&add(session_id, "p1", 0)).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn add_to_saturated_entry_emits_nothing() {
        let session_id = test_session_id();
        let mut cart = Cart::empty(session_id);
        run(&mut cart, &add(session_id, "p1", u32::MAX));
        let version = cart.version();

        let events = run(&mut cart, &add(session_id, "p1", 5));

        assert!(events.is_empty());
        assert_eq!(cart.version(), version);
        assert_eq!(cart.entry(&test_product_id("p1")).map(|e| e.quantity), Some(u32::MAX));
    }

    #[test]
    fn remove_absent_emits_nothing() {
        let session_id = test_session_id();
        let cart = Cart::empty(session_id);

        let cmd = CartCommand::RemoveItem(RemoveItem {
            session_id,
            product_id: test_product_id("ghost"),
            occurred_at: test_time(),
        });
        assert!(cart.handle(&cmd).unwrap().is_empty());
    }

    #[test]
    fn remove_present_records_removed_quantity() {
        let session_id = test_session_id();
        let mut cart = Cart::empty(session_id);
        run(&mut cart, &add(session_id, "p1", 4));

        let cmd = CartCommand::RemoveItem(RemoveItem {
            session_id,
            product_id: test_product_id("p1"),
            occurred_at: test_time(),
        });
        let events = run(&mut cart, &cmd);

        match &events[0] {
            CartEvent::ItemRemoved(e) => assert_eq!(e.removed_quantity, 4),
            _ => panic!("Expected ItemRemoved event"),
        }
        assert!(cart.entries().is_empty());
    }

    #[test]
    fn clear_on_empty_cart_emits_nothing() {
        let session_id = test_session_id();
        let cart = Cart::empty(session_id);
        let cmd = CartCommand::ClearCart(ClearCart {
            session_id,
            occurred_at: test_time(),
        });
        assert!(cart.handle(&cmd).unwrap().is_empty());
    }

    #[test]
    fn rejects_foreign_session() {
        let cart = Cart::empty(test_session_id());

        let err = cart.handle(&add(test_session_id(), "p1", 1)).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) if msg.contains("session_id mismatch") => {}
            _ => panic!("Expected InvariantViolation for foreign session"),
        }
    }

    #[test]
    fn version_increments_on_apply() {
        let session_id = test_session_id();
        let mut cart = Cart::empty(session_id);
        assert_eq!(cart.version(), 0);

        run(&mut cart, &add(session_id, "p1", 1));
        assert_eq!(cart.version(), 1);

        run(&mut cart, &add(session_id, "p1", 0));
        assert_eq!(cart.version(), 1);

        run(&mut cart, &add(session_id, "p2", 1));
        assert_eq!(cart.version(), 2);
    }

    #[test]
    fn handle_does_not_mutate_state() {
        let session_id = test_session_id();
        let mut cart = Cart::empty(session_id);
        run(&mut cart, &add(session_id, "p1", 1));
        let before = cart.clone();

        let cmd = add(session_id, "p1", 5);
        let events1 = cart.handle(&cmd).unwrap();
        let events2 = cart.handle(&cmd).unwrap();

        assert_eq!(cart, before);
        assert_eq!(events1, events2);
    }

    #[test]
    fn totals_follow_entries() {
        let session_id = test_session_id();
        let mut cart = Cart::empty(session_id);
        run(&mut cart, &add(session_id, "p1", 2));
        run(&mut cart, &add(session_id, "p2", 1));

        assert_eq!(cart.total_count(), 3);
        assert_eq!(cart.total_price(), Money::from_cents(1999 * 3));
    }
}
