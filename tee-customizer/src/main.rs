//! T-Shirt Customizer
//!
//! A single-page WASM app: the user sets measurements, build, size, an
//! uploaded image and printed text, previews the shirt in 2D or 3D, and adds
//! snapshots of the configuration to an in-memory cart.
//!
//! State flow:
//! 1. Form components write into `AppState::draft`.
//! 2. Both preview renderers read the draft; toggling the mode only swaps them.
//! 3. "Add to Cart" snapshots the draft into `AppState::cart`; the cart panel
//!    re-renders from the store.
//! 4. Alt+Q on the page advances the theme.

use dioxus::prelude::*;
use tee_core::Shortcut;
use tee_ui::components::{
    CartPanel, CustomTextInput, ImageDropZone, MeasurementsPanel, PreviewPane, ShortcutHint,
    SizeSelector,
};
use tee_ui::state::AppState;
use tee_ui::style::{accent_button_style, accent_hover_css, card_style, page_style, ACCENT_CLASS};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("tshirt-customizer-root"))
        .launch(App);
}

/// Normalize a key event to the string the shortcut table expects.
///
/// Alt+Q produces other characters on some layouts (e.g. "œ" on macOS), so
/// the physical key wins when it is Q.
fn shortcut_key(evt: &KeyboardData) -> String {
    if evt.code() == Code::KeyQ {
        "q".to_string()
    } else {
        evt.key().to_string()
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let theme = *state.theme.read().current();
    let mode = (state.mode)();

    let on_key_down = move |evt: Event<KeyboardData>| {
        let alt = evt.modifiers().contains(Modifiers::ALT);
        if let Some(Shortcut::CycleTheme) = Shortcut::from_key(alt, &shortcut_key(&evt)) {
            evt.prevent_default();
            state.cycle_theme();
        }
    };

    let page = page_style(&theme);
    let card = card_style(&theme);
    let accent = accent_button_style(&theme);
    let hover_css = accent_hover_css(&theme);
    let toggle_label = mode.toggle_label();

    rsx! {
        div {
            tabindex: "0",
            style: "{page}",
            onkeydown: on_key_down,

            style { "{hover_css}" }

            CartPanel {}

            div {
                style: "{card}",
                h1 {
                    style: "font-size: 30px; font-weight: bold; margin: 0 0 24px 0; text-align: center;",
                    "T-Shirt Customizer"
                }

                div {
                    style: "display: flex; flex-wrap: wrap; gap: 24px;",

                    // Left column: preview and actions
                    div {
                        style: "flex: 1 1 360px; display: flex; flex-direction: column; align-items: center;",
                        PreviewPane {}
                        button {
                            class: ACCENT_CLASS,
                            style: "{accent}",
                            onclick: move |_| state.toggle_mode(),
                            "{toggle_label}"
                        }
                        button {
                            class: ACCENT_CLASS,
                            style: "{accent} padding: 8px 24px;",
                            onclick: move |_| {
                                state.add_draft_to_cart();
                            },
                            "Add to Cart"
                        }
                        ShortcutHint {}
                    }

                    // Right column: customization options
                    div {
                        style: "flex: 1 1 360px;",
                        MeasurementsPanel {}
                        ImageDropZone {}
                        CustomTextInput {}
                        SizeSelector {}
                    }
                }
            }
        }
    }
}
