//! Core types for the t-shirt customizer.
//!
//! This crate has no UI or browser dependencies. It provides:
//! - `cart`: the in-memory `CartStore` with synchronous observers
//! - `draft`: the customization form draft and its "add to cart" snapshot
//! - `upload`: image data values and superseding file-read tracking
//! - `preview`: display mode, renderer payload and the 3D scene description
//! - `theme`: the theme table and the Alt+Q shortcut

pub mod cart;
pub mod config;
pub mod draft;
pub mod preview;
pub mod theme;
pub mod upload;

pub use cart::{Build, CartItem, CartItemId, CartItemInput, CartStore, Size, Specifications};
pub use draft::{add_draft_to_cart, CustomizationDraft, TextStats};
pub use preview::{DisplayMode, RenderPayload, SceneConfig};
pub use theme::{Shortcut, Theme, ThemeCycler, THEMES};
pub use upload::{ImageData, ImageSlot, ReadTicket};
