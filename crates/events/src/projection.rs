use crate::{Event, Subscription};

/// A projection builds a read model from an event stream.
///
/// Read models are disposable: they can be dropped and rebuilt by replaying
/// events, and the aggregate remains the source of truth. `apply` must not
/// fail; events that are irrelevant to the read model are ignored.
pub trait Projection {
    type Ev: Event;

    /// Apply a single event to the read model.
    fn apply(&mut self, event: &Self::Ev);

    /// Apply every event already queued on `subscription`; returns how many
    /// were applied.
    fn catch_up(&mut self, subscription: &Subscription<Self::Ev>) -> usize {
        let mut applied = 0;
        while let Ok(event) = subscription.try_recv() {
            self.apply(&event);
            applied += 1;
        }
        applied
    }

    /// Rebuild from a complete event history.
    fn replay<'a, I>(&mut self, events: I)
    where
        I: IntoIterator<Item = &'a Self::Ev>,
        Self::Ev: 'a,
    {
        for event in events {
            self.apply(event);
        }
    }
}
