//! Reusable Dioxus RSX components for the customizer.

mod cart_panel;
mod custom_text_input;
mod image_drop_zone;
mod measurements_panel;
mod preview_pane;
mod section_header;
mod shortcut_hint;
mod size_selector;

pub use cart_panel::CartPanel;
pub use custom_text_input::CustomTextInput;
pub use image_drop_zone::ImageDropZone;
pub use measurements_panel::MeasurementsPanel;
pub use preview_pane::{FlatPreview, PreviewPane, ScenePreview};
pub use section_header::SectionHeader;
pub use shortcut_hint::ShortcutHint;
pub use size_selector::SizeSelector;
