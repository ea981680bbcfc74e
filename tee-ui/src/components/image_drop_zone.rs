//! Click-or-drop area for the custom print image.

use crate::components::SectionHeader;
use crate::state::AppState;
use crate::style::garment_svg;
use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use tee_core::upload::is_image_mime;
use tee_core::ImageData;

const FILE_INPUT_ID: &str = "custom-image-input";

/// Read `file` into the draft's image slot.
///
/// Non-image files are dropped here without touching the slot. A newer
/// read supersedes this one; the current image stays until a read lands.
fn start_image_read(mut state: AppState, file: FileData) {
    let content_type = file.content_type();
    if !content_type.as_deref().is_some_and(is_image_mime) {
        log::warn!("ignoring non-image file {}", file.name());
        return;
    }
    let ticket = state.draft.write().image_slot_mut().begin_read();
    spawn(async move {
        let image = match file.read_bytes().await {
            Ok(bytes) => ImageData::from_upload(content_type.as_deref(), &bytes),
            Err(err) => {
                log::warn!("failed to read {}: {:?}", file.name(), err);
                None
            }
        };
        if state.draft.write().image_slot_mut().finish_read(ticket, image) {
            log::info!("custom image updated from {}", file.name());
        }
    });
}

/// Upload area. Clicking opens the file picker; dropping a file reads it.
#[component]
pub fn ImageDropZone() -> Element {
    let state = use_context::<AppState>();
    let current = state.draft.read().custom_image().cloned();
    let placeholder = garment_svg("#e5e7eb");

    let on_drop = move |evt: Event<DragData>| {
        evt.prevent_default();
        if let Some(file) = evt.files().into_iter().next() {
            start_image_read(state, file);
        }
    };

    let on_file_change = move |evt: Event<FormData>| {
        if let Some(file) = evt.files().into_iter().next() {
            start_image_read(state, file);
        }
    };

    rsx! {
        div {
            style: "margin-bottom: 24px;",
            SectionHeader { title: "Custom Image".to_string() }
            label {
                r#for: FILE_INPUT_ID,
                style: "display: block; border: 2px dashed #d1d5db; border-radius: 8px; padding: 16px; text-align: center; cursor: pointer; background: #f9fafb; color: #1f2937;",
                ondragover: move |evt: Event<DragData>| evt.prevent_default(),
                ondrop: on_drop,
                if let Some(image) = current {
                    div {
                        style: "display: flex; flex-direction: column; align-items: center;",
                        img {
                            src: image.as_url().to_string(),
                            alt: "Custom uploaded image",
                            style: "height: 96px; object-fit: contain; margin-bottom: 8px;",
                        }
                        p { style: "font-size: 14px; color: #6b7280; margin: 0;", "Click or drag to replace image" }
                    }
                } else {
                    div {
                        style: "display: flex; flex-direction: column; align-items: center;",
                        img {
                            src: "{placeholder}",
                            alt: "Placeholder",
                            style: "height: 96px; object-fit: contain; margin-bottom: 8px;",
                        }
                        p { style: "margin: 0;", "Drop an image here or click to upload" }
                        p { style: "font-size: 14px; color: #6b7280; margin: 4px 0 0 0;", "Recommended size: 1200×1200px" }
                    }
                }
                input {
                    id: FILE_INPUT_ID,
                    r#type: "file",
                    accept: "image/*",
                    style: "display: none;",
                    onchange: on_file_change,
                }
            }
        }
    }
}
