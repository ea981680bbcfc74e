//! Garment size dropdown.

use crate::components::SectionHeader;
use crate::state::AppState;
use dioxus::prelude::*;
use tee_core::Size;

/// Dropdown selector for S/M/L/XL.
#[component]
pub fn SizeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = state.draft.read().size();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Size>() {
        Ok(size) => state.draft.write().set_size(size),
        Err(err) => log::warn!("{err}"),
    };

    rsx! {
        div {
            style: "margin-bottom: 24px;",
            SectionHeader { title: "Size Selection".to_string() }
            select {
                id: "size-select",
                style: "width: 100%; padding: 8px; border: 1px solid #d1d5db; border-radius: 8px; background: #ffffff; color: #1f2937;",
                onchange: on_change,
                for size in Size::ALL {
                    option {
                        value: size.code(),
                        selected: size == current,
                        {size.label()}
                    }
                }
            }
        }
    }
}
