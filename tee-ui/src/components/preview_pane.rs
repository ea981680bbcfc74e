//! 2D composite and 3D scene previews of the current draft.

use crate::js_bridge;
use crate::state::AppState;
use crate::style::garment_svg;
use dioxus::prelude::*;
use tee_core::config::OVERLAY_FRACTION;
use tee_core::{DisplayMode, RenderPayload, SceneConfig};

/// DOM id for the three.js canvas container.
const SCENE_CONTAINER_ID: &str = "tshirt-scene";

/// Shows whichever renderer the current display mode selects.
#[component]
pub fn PreviewPane() -> Element {
    let state = use_context::<AppState>();
    let mode = (state.mode)();

    rsx! {
        div {
            style: "position: relative; width: 100%; aspect-ratio: 3 / 4; display: flex; align-items: center; justify-content: center; margin-bottom: 16px;",
            if mode == DisplayMode::TwoD {
                FlatPreview {}
            } else {
                ScenePreview {}
            }
        }
    }
}

/// Static composite: base garment, centered custom image, first three text lines.
#[component]
pub fn FlatPreview() -> Element {
    let state = use_context::<AppState>();
    let draft = state.draft.read();
    let image = draft.custom_image().cloned();
    let lines: Vec<String> = draft.display_lines().into_iter().map(str::to_string).collect();
    let has_text = !draft.text().is_empty();
    drop(draft);

    let overlay_pct = OVERLAY_FRACTION * 100.0;
    let base = garment_svg("#ffffff");

    rsx! {
        div {
            style: "position: relative; width: 100%; height: 100%; display: flex; align-items: center; justify-content: center;",
            img {
                src: "{base}",
                alt: "T-shirt preview",
                style: "max-height: 100%; max-width: 100%; object-fit: contain;",
            }
            if let Some(image) = image {
                div {
                    style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center;",
                    img {
                        src: image.as_url().to_string(),
                        alt: "Custom design",
                        style: "max-width: {overlay_pct}%; max-height: 100%; object-fit: contain;",
                    }
                }
            }
            if has_text {
                div {
                    style: "position: absolute; bottom: 33.333%; width: {overlay_pct}%; text-align: center; color: #111827;",
                    p {
                        style: "font-size: 14px; overflow-wrap: break-word; margin: 0;",
                        for (i, line) in lines.into_iter().enumerate() {
                            span { key: "{i}", style: "display: block;", "{line}" }
                        }
                    }
                }
            }
        }
    }
}

/// Interactive three.js scene fed with the same draft values.
#[component]
pub fn ScenePreview() -> Element {
    let state = use_context::<AppState>();
    let config = use_hook(SceneConfig::default);
    let height = config.height_px;

    use_hook(js_bridge::init_scene);

    // Measurement, build and size edits leave the payload equal, so the
    // memo does not fire and the image is not re-sent to JS.
    let payload = use_memo(move || RenderPayload::from_draft(&state.draft.read()));

    use_effect(move || {
        js_bridge::render_scene(SCENE_CONTAINER_ID, &payload.read(), &config);
    });

    use_drop(|| js_bridge::destroy_scene(SCENE_CONTAINER_ID));

    rsx! {
        div {
            id: SCENE_CONTAINER_ID,
            style: "width: 100%; height: {height}px;",
        }
    }
}
