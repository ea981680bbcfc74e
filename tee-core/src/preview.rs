//! Preview mode and the data handed to the renderers.
//!
//! Both renderers read the same [`RenderPayload`] built from the draft, so
//! switching between them never touches the draft itself.

use std::f64::consts::PI;
use std::fmt;

use serde::Serialize;

use crate::draft::CustomizationDraft;
use crate::upload::ImageData;

/// Which renderer is showing the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    TwoD,
    ThreeD,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::TwoD => DisplayMode::ThreeD,
            DisplayMode::ThreeD => DisplayMode::TwoD,
        }
    }

    /// Label for the button that switches away from this mode.
    pub fn toggle_label(self) -> String {
        format!("Switch to {} View", self.toggled())
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::TwoD => f.write_str("2D"),
            DisplayMode::ThreeD => f.write_str("3D"),
        }
    }
}

/// Renderer input: the custom image and the full custom text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPayload {
    pub custom_image: Option<ImageData>,
    pub custom_text: String,
}

impl RenderPayload {
    pub fn from_draft(draft: &CustomizationDraft) -> Self {
        Self {
            custom_image: draft.custom_image().cloned(),
            custom_text: draft.text().to_string(),
        }
    }
}

/// One primitive of the simplified garment mesh.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MeshPart {
    Box {
        size: [f64; 3],
        position: [f64; 3],
    },
    Cylinder {
        radius: f64,
        height: f64,
        segments: u32,
        position: [f64; 3],
    },
}

/// Vertical orbit range and pan lock for the 3D camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitLimits {
    /// Radians from the vertical axis
    pub min_polar: f64,
    pub max_polar: f64,
    pub enable_pan: bool,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            min_polar: PI / 4.0,
            max_polar: PI * 3.0 / 4.0,
            enable_pan: false,
        }
    }
}

/// Static description of the 3D scene, serialized for the three.js script.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneConfig {
    pub garment_color: String,
    pub placeholder_color: String,
    pub parts: Vec<MeshPart>,
    pub decal_size: f64,
    pub decal_z: f64,
    pub decal_opacity: f64,
    pub text_z: f64,
    pub font_size: f64,
    pub text_color: String,
    pub camera: [f64; 3],
    pub ambient_intensity: f64,
    pub spot_position: [f64; 3],
    pub orbit: OrbitLimits,
    pub height_px: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            garment_color: "#ffffff".to_string(),
            placeholder_color: "#808080".to_string(),
            parts: vec![
                MeshPart::Box { size: [1.0, 1.5, 0.1], position: [0.0, 0.0, 0.0] },
                MeshPart::Box { size: [0.3, 0.6, 0.1], position: [-0.6, 0.3, 0.0] },
                MeshPart::Box { size: [0.3, 0.6, 0.1], position: [0.6, 0.3, 0.0] },
                MeshPart::Cylinder { radius: 0.2, height: 0.1, segments: 32, position: [0.0, 0.6, 0.0] },
            ],
            decal_size: 0.8,
            decal_z: 0.06,
            decal_opacity: 0.9,
            text_z: 0.07,
            font_size: 0.1,
            text_color: "#000000".to_string(),
            camera: [0.0, 0.0, 2.5],
            ambient_intensity: 0.5,
            spot_position: [10.0, 10.0, 10.0],
            orbit: OrbitLimits::default(),
            height_px: 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_mode_flips_and_labels() {
        assert_eq!(DisplayMode::default(), DisplayMode::TwoD);
        assert_eq!(DisplayMode::TwoD.toggled(), DisplayMode::ThreeD);
        assert_eq!(DisplayMode::ThreeD.toggled(), DisplayMode::TwoD);
        assert_eq!(DisplayMode::TwoD.toggle_label(), "Switch to 3D View");
        assert_eq!(DisplayMode::ThreeD.toggle_label(), "Switch to 2D View");
    }

    #[test]
    fn toggling_mode_keeps_draft_customization() {
        let mut draft = CustomizationDraft::default();
        draft.set_text("hello\nworld");
        draft.image_slot_mut().set(ImageData::from_url("data:image/png;base64,AA=="));
        let before = RenderPayload::from_draft(&draft);

        let mut mode = DisplayMode::default();
        mode = mode.toggled();
        assert_eq!(RenderPayload::from_draft(&draft), before);
        mode = mode.toggled();
        assert_eq!(mode, DisplayMode::TwoD);
        assert_eq!(RenderPayload::from_draft(&draft), before);
        assert_eq!(draft.text(), "hello\nworld");
    }

    #[test]
    fn payload_ignores_measurement_edits() {
        let mut draft = CustomizationDraft::default();
        draft.set_text("Team");
        let ticket = draft.image_slot_mut().begin_read();
        let image = ImageData::from_upload(Some("image/png"), &[0u8; 4096]);
        assert!(draft.image_slot_mut().finish_read(ticket, image));
        let before = RenderPayload::from_draft(&draft);

        draft.set_height(181);
        draft.set_weight(120);
        draft.set_build(crate::cart::Build::Lean);
        draft.set_size(crate::cart::Size::XL);
        assert_eq!(RenderPayload::from_draft(&draft), before);

        draft.set_text("Team\nTwo");
        assert_ne!(RenderPayload::from_draft(&draft), before);
    }

    #[test]
    fn payload_serializes_camel_case() {
        let mut draft = CustomizationDraft::default();
        draft.set_text("Hi");
        let json = serde_json::to_value(RenderPayload::from_draft(&draft)).unwrap();
        assert_eq!(json, serde_json::json!({ "customImage": null, "customText": "Hi" }));
    }

    #[test]
    fn orbit_is_limited_to_quarter_turns() {
        let orbit = OrbitLimits::default();
        assert!((orbit.min_polar.to_degrees() - 45.0).abs() < 1e-9);
        assert!((orbit.max_polar.to_degrees() - 135.0).abs() < 1e-9);
        assert!(!orbit.enable_pan);
    }

    #[test]
    fn scene_config_lists_body_sleeves_and_neck() {
        let json = serde_json::to_value(SceneConfig::default()).unwrap();
        let parts = json["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0]["kind"], "box");
        assert_eq!(parts[3]["kind"], "cylinder");
        assert_eq!(json["orbit"]["enablePan"], false);
        assert_eq!(json["camera"], serde_json::json!([0.0, 0.0, 2.5]));
    }
}
