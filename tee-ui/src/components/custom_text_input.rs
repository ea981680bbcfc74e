//! Text area for the printed text, with a character and line counter.

use crate::components::SectionHeader;
use crate::state::AppState;
use dioxus::prelude::*;
use tee_core::config::{MAX_TEXT_CHARS, MAX_TEXT_LINES};

#[component]
pub fn CustomTextInput() -> Element {
    let mut state = use_context::<AppState>();
    let text = state.draft.read().text().to_string();
    let stats = state.draft.read().text_stats();

    let on_input = move |evt: Event<FormData>| {
        state.draft.write().set_text(&evt.value());
    };

    rsx! {
        div {
            style: "margin-bottom: 24px;",
            SectionHeader { title: "Custom Text".to_string() }
            textarea {
                style: "width: 100%; box-sizing: border-box; padding: 12px; border: 1px solid #d1d5db; border-radius: 8px; height: 96px; resize: none; font: inherit;",
                placeholder: "Enter text to print on your t-shirt (max 3 lines)",
                maxlength: "{MAX_TEXT_CHARS}",
                value: "{text}",
                oninput: on_input,
            }
            p {
                style: "font-size: 14px; color: #6b7280; margin: 4px 0 0 0;",
                "Characters: {stats.characters}/{MAX_TEXT_CHARS} | Lines: {stats.lines}/{MAX_TEXT_LINES}"
            }
        }
    }
}
