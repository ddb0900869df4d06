//! Product card: hover state machine and action routing.
//!
//! ```text
//!            PointerEnter
//!   Rest  ───────────────▶  Hovered
//!         ◀───────────────
//!            PointerLeave
//! ```
//!
//! Visuals and action availability are derived from the state on every read;
//! nothing is toggled separately. Clicks are routed by target: an actionable
//! action control consumes its click, anything else reaches the card body and
//! navigates to the detail page.

use storefront_cart::CartSession;
use storefront_catalog::Product;
use storefront_core::Entity;

use crate::config::StorefrontConfig;
use crate::navigation::{Navigator, Route};
use crate::quickview::QuickviewModal;
use crate::rating::RatingDisplay;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Rest,
    Hovered,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ActionAffordance {
    /// Not rendered or not usable.
    Hidden,
    Visible,
}

/// Presentation derived from the hover state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CardVisual {
    pub scale: f32,
    pub blur_px: f32,
    pub actions: ActionAffordance,
}

impl CardVisual {
    const REST_SCALE: f32 = 1.0;
    const HOVER_SCALE: f32 = 1.1;
    const HOVER_BLUR_PX: f32 = 4.0;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    Body,
    QuickViewButton,
    AddToCartButton,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CardEvent {
    PointerEnter,
    PointerLeave,
    Click(ClickTarget),
}

/// What a dispatched event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardOutcome {
    HoverChanged(HoverState),
    Navigated(Route),
    /// Carries the product's quantity in the cart afterwards.
    AddedToCart(u32),
    QuickviewOpened,
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct ProductCard {
    product: Product,
    hover: HoverState,
    disable_actions: bool,
    width: String,
    height: String,
    quickview: QuickviewModal,
}

impl ProductCard {
    pub fn new(product: Product) -> Self {
        let quickview = QuickviewModal::new(&product);
        let defaults = StorefrontConfig::default();
        Self {
            product,
            hover: HoverState::Rest,
            disable_actions: false,
            width: defaults.card_width,
            height: defaults.card_height,
            quickview,
        }
    }

    /// Display-only cards (e.g. related products) never offer actions.
    pub fn with_disabled_actions(mut self, disable_actions: bool) -> Self {
        self.disable_actions = disable_actions;
        self
    }

    pub fn with_size(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.width = width.into();
        self.height = height.into();
        self
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn hover(&self) -> HoverState {
        self.hover
    }

    pub fn actions_actionable(&self) -> bool {
        !self.disable_actions && self.hover == HoverState::Hovered
    }

    pub fn visual(&self) -> CardVisual {
        match self.hover {
            HoverState::Rest => CardVisual {
                scale: CardVisual::REST_SCALE,
                blur_px: 0.0,
                actions: ActionAffordance::Hidden,
            },
            HoverState::Hovered => CardVisual {
                scale: CardVisual::HOVER_SCALE,
                blur_px: if self.disable_actions {
                    0.0
                } else {
                    CardVisual::HOVER_BLUR_PX
                },
                actions: if self.disable_actions {
                    ActionAffordance::Hidden
                } else {
                    ActionAffordance::Visible
                },
            },
        }
    }

    pub fn pointer_enter(&mut self) -> bool {
        self.set_hover(HoverState::Hovered)
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.set_hover(HoverState::Rest)
    }

    fn set_hover(&mut self, next: HoverState) -> bool {
        if self.hover == next {
            return false;
        }
        self.hover = next;
        true
    }

    /// Route one UI event through the card.
    pub fn handle<N>(
        &mut self,
        event: CardEvent,
        cart: &mut CartSession,
        navigator: &mut N,
    ) -> CardOutcome
    where
        N: Navigator + ?Sized,
    {
        match event {
            CardEvent::PointerEnter => {
                let changed = self.pointer_enter();
                self.hover_outcome(changed)
            }
            CardEvent::PointerLeave => {
                let changed = self.pointer_leave();
                self.hover_outcome(changed)
            }
            CardEvent::Click(target) => match self.resolve_target(target) {
                ClickTarget::Body => CardOutcome::Navigated(self.on_card_activate(navigator)),
                ClickTarget::AddToCartButton => self
                    .on_add_to_cart(cart)
                    .map_or(CardOutcome::Unchanged, CardOutcome::AddedToCart),
                ClickTarget::QuickViewButton => {
                    if self.on_quick_view() {
                        CardOutcome::QuickviewOpened
                    } else {
                        CardOutcome::Unchanged
                    }
                }
            },
        }
    }

    fn hover_outcome(&self, changed: bool) -> CardOutcome {
        if changed {
            CardOutcome::HoverChanged(self.hover)
        } else {
            CardOutcome::Unchanged
        }
    }

    /// Inert action controls do not consume clicks; the click lands on the body.
    fn resolve_target(&self, target: ClickTarget) -> ClickTarget {
        match target {
            ClickTarget::Body => ClickTarget::Body,
            action if self.actions_actionable() => action,
            _ => ClickTarget::Body,
        }
    }

    /// Card-body activation: navigate to the product's detail page.
    pub fn on_card_activate<N>(&self, navigator: &mut N) -> Route
    where
        N: Navigator + ?Sized,
    {
        let route = Route::ProductDetail(self.product.id().clone());
        navigator.navigate(route.clone());
        route
    }

    /// Add one unit to the cart. Never navigates.
    ///
    /// Returns the product's quantity afterwards, or `None` when the actions
    /// are not actionable (disabled, or the card is at rest).
    pub fn on_add_to_cart(&self, cart: &mut CartSession) -> Option<u32> {
        if !self.actions_actionable() {
            tracing::debug!(product_id = %self.product.id(), "add to cart on inert card ignored");
            return None;
        }
        Some(cart.add(&self.product, 1))
    }

    /// Open this card's quickview. Never navigates, never touches the cart.
    ///
    /// Returns `false` without opening when the actions are not actionable.
    pub fn on_quick_view(&mut self) -> bool {
        if !self.actions_actionable() {
            tracing::debug!(modal_id = self.quickview.modal_id(), "quickview on inert card ignored");
            return false;
        }
        tracing::debug!(modal_id = self.quickview.modal_id(), "quickview opened");
        self.quickview.open();
        true
    }

    pub fn quickview(&self) -> &QuickviewModal {
        &self.quickview
    }

    pub fn quickview_mut(&mut self) -> &mut QuickviewModal {
        &mut self.quickview
    }

    pub fn title(&self) -> &str {
        self.product.title()
    }

    pub fn price_label(&self) -> String {
        self.product.price().to_string()
    }

    pub fn rating_display(&self) -> RatingDisplay {
        RatingDisplay::new(self.product.rating())
    }

    pub fn href(&self) -> String {
        self.product.detail_path()
    }

    pub fn image_src(&self, config: &StorefrontConfig) -> String {
        config.image_src(self.product.image_url())
    }

    pub fn width(&self) -> &str {
        &self.width
    }

    pub fn height(&self) -> &str {
        &self.height
    }
}
