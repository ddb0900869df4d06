//! Catalog module.
//!
//! Immutable product records as supplied by the external data source, the
//! rating value they carry, and the read-only source abstraction that loads
//! them at startup.

pub mod product;
pub mod rating;
pub mod source;

pub use product::Product;
pub use rating::Rating;
pub use source::{CatalogError, MockProductSource, ProductSource};
