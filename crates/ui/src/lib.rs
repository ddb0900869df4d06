//! `storefront-ui`
//!
//! **Responsibility:** interactive state of the storefront views.
//!
//! Every component here is headless: it owns its per-instance state (hover,
//! quantity, carousel index, modal open flag), exposes the derived visuals as
//! plain data, and mutates the shared [`CartSession`](storefront_cart::CartSession)
//! only through references handed in by the caller. The wasm32 `frontend`
//! module binds these models to the DOM.

pub mod badge;
pub mod card;
pub mod carousel;
pub mod catalog_view;
pub mod config;
pub mod details;
pub mod navigation;
pub mod quantity;
pub mod quickview;
pub mod rating;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use badge::CartBadgeModel;
pub use card::{
    ActionAffordance, CardEvent, CardOutcome, CardVisual, ClickTarget, HoverState, ProductCard,
};
pub use carousel::{Carousel, Indicator};
pub use catalog_view::CatalogView;
pub use config::{ConfigError, StorefrontConfig};
pub use details::{DetailContent, ProductDetails};
pub use navigation::{Navigator, Route, Router};
pub use quantity::{QuantitySelector, SelectorSize};
pub use quickview::QuickviewModal;
pub use rating::{RatingDisplay, Star};
