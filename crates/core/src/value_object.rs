//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: `Money` and
/// `Rating` are value objects, a `Product` is an entity.
///
/// ```ignore
/// let a = Money::from_cents(1999);
/// let b = Money::from_cents(1999);
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
