//! Height and weight sliders plus the build dropdown.

use crate::components::SectionHeader;
use crate::state::AppState;
use dioxus::prelude::*;
use tee_core::config::{HEIGHT_RANGE, WEIGHT_RANGE};
use tee_core::Build;

const LABEL_STYLE: &str = "display: block; font-size: 14px; font-weight: 500; margin-bottom: 4px;";
const SLIDER_STYLE: &str = "width: 100%; cursor: pointer;";

/// Size customization group.
///
/// Sliders carry the clamp range as min/max, and the draft clamps again on
/// write, so out-of-range values never reach the cart.
#[component]
pub fn MeasurementsPanel() -> Element {
    let mut state = use_context::<AppState>();
    let draft = state.draft.read().clone();
    let height = draft.height();
    let weight = draft.weight();
    let build = draft.build();
    let (height_min, height_max) = HEIGHT_RANGE;
    let (weight_min, weight_max) = WEIGHT_RANGE;

    let on_height = move |evt: Event<FormData>| {
        if let Ok(cm) = evt.value().parse::<u32>() {
            state.draft.write().set_height(cm);
        }
    };

    let on_weight = move |evt: Event<FormData>| {
        if let Ok(kg) = evt.value().parse::<u32>() {
            state.draft.write().set_weight(kg);
        }
    };

    let on_build = move |evt: Event<FormData>| match evt.value().parse::<Build>() {
        Ok(build) => state.draft.write().set_build(build),
        Err(err) => log::warn!("{err}"),
    };

    rsx! {
        div {
            style: "margin-bottom: 24px;",
            SectionHeader { title: "Size Customization".to_string() }
            div {
                style: "border: 1px solid #d1d5db; border-radius: 8px; padding: 16px;",
                div {
                    style: "margin-bottom: 16px;",
                    label { style: LABEL_STYLE, "Height (cm)" }
                    input {
                        r#type: "range",
                        min: "{height_min}",
                        max: "{height_max}",
                        value: "{height}",
                        style: SLIDER_STYLE,
                        oninput: on_height,
                    }
                    span { style: "display: block; text-align: right;", "{height} cm" }
                }
                div {
                    style: "margin-bottom: 16px;",
                    label { style: LABEL_STYLE, "Weight (kg)" }
                    input {
                        r#type: "range",
                        min: "{weight_min}",
                        max: "{weight_max}",
                        value: "{weight}",
                        style: SLIDER_STYLE,
                        oninput: on_weight,
                    }
                    span { style: "display: block; text-align: right;", "{weight} kg" }
                }
                div {
                    label { style: LABEL_STYLE, "Build" }
                    select {
                        style: "width: 100%; padding: 8px; border: 1px solid #d1d5db; border-radius: 8px; background: #ffffff; color: #1f2937;",
                        onchange: on_build,
                        for option_build in Build::ALL {
                            option {
                                value: option_build.value(),
                                selected: option_build == build,
                                {option_build.label()}
                            }
                        }
                    }
                }
            }
        }
    }
}
