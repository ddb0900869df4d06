/// Execute an aggregate command deterministically (no IO, no async).
///
/// 1. **Decide**: calls `aggregate.handle(command)` to get events (pure, no mutation)
/// 2. **Evolve**: applies each event to the aggregate via `aggregate.apply(event)`
///
/// The whole read-modify-write happens inside this call, so a caller that
/// runs it from a single event handler never observes a half-applied command.
/// An empty event list means the command was a no-op.
pub fn execute<A>(aggregate: &mut A, command: &A::Command) -> Result<Vec<A::Event>, A::Error>
where
    A: storefront_core::Aggregate,
{
    let events = A::handle(aggregate, command)?;
    for ev in &events {
        A::apply(aggregate, ev);
    }
    tracing::trace!(applied = events.len(), "command executed");
    Ok(events)
}
