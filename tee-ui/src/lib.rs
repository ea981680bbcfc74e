//! Shared Dioxus components and three.js bridge for the t-shirt customizer.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers around the 3D scene script via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `style`: inline CSS derived from the active theme
//! - `components`: RSX components (cart, preview, form sections)

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod style;
