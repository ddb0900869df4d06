//! Domain events and their in-process distribution.
//!
//! Aggregates decide events, [`execute`] applies them, and an [`EventBus`]
//! fans them out to read-only views (badges, summaries) that fold them through
//! a [`Projection`].

pub mod bus;
pub mod event;
pub mod handler;
pub mod in_memory_bus;
pub mod projection;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use handler::execute;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
pub use projection::Projection;
