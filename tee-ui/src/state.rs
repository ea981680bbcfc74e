//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The cart is only mutated through the methods below, which go through the
//! `CartStore` contract and wake every component reading the signal.

use dioxus::prelude::*;
use tee_core::{
    add_draft_to_cart, CartItemId, CartStore, CustomizationDraft, DisplayMode, ThemeCycler,
};

/// Shared application state for the customizer.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Items committed to the cart
    pub cart: Signal<CartStore>,
    /// Working form values
    pub draft: Signal<CustomizationDraft>,
    /// 2D or 3D preview
    pub mode: Signal<DisplayMode>,
    /// Active theme
    pub theme: Signal<ThemeCycler>,
}

impl AppState {
    /// Create a new AppState with an empty cart and a default draft.
    pub fn new() -> Self {
        let mut cart = CartStore::new();
        cart.subscribe(|items| log::info!("cart now holds {} item(s)", items.len()));
        Self {
            cart: Signal::new(cart),
            draft: Signal::new(CustomizationDraft::default()),
            mode: Signal::new(DisplayMode::default()),
            theme: Signal::new(ThemeCycler::default()),
        }
    }

    /// Snapshot the current draft into the cart.
    pub fn add_draft_to_cart(&mut self) -> CartItemId {
        let draft = self.draft.read().clone();
        add_draft_to_cart(&draft, &mut self.cart.write())
    }

    pub fn remove_from_cart(&mut self, id: CartItemId) {
        self.cart.write().remove_from_cart(id);
    }

    pub fn toggle_mode(&mut self) {
        let next = (self.mode)().toggled();
        log::info!("preview switched to {next}");
        self.mode.set(next);
    }

    pub fn cycle_theme(&mut self) {
        self.theme.write().advance();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
