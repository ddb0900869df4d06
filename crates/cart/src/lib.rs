//! Cart module.
//!
//! The cart is an aggregate with pure decision logic (`cart`), wrapped by a
//! process-wide [`CartSession`] that components receive by reference, and
//! read by views through the [`CartSummary`] projection.

pub mod cart;
pub mod session;
pub mod summary;

pub use cart::{
    AddItem, Cart, CartCleared, CartCommand, CartEntry, CartEvent, ClearCart, ItemAdded,
    ItemRemoved, RemoveItem,
};
pub use session::CartSession;
pub use summary::CartSummary;
