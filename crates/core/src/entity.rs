//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Catalog products are entities: two records with the same [`crate::ProductId`]
/// describe the same purchasable item.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
