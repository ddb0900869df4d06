//! Event publishing/subscription abstraction (mechanics only).
//!
//! The bus distributes events that have already been applied to their
//! aggregate. It is not a source of truth: a view that misses events can
//! always re-read the aggregate directly.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError};

/// A subscription to an event stream.
///
/// Each subscription receives a copy of every event published after it was
/// created (broadcast semantics), in publication order.
///
/// ```ignore
/// let subscription = bus.subscribe();
/// while let Ok(event) = subscription.try_recv() {
///     badge.apply(&event);
/// }
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Collect every message that is already queued.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
///
/// `publish()` can fail (e.g. a poisoned lock); callers decide whether that
/// matters. For the cart it does not: state has already been applied.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
