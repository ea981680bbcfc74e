//! The working customization draft behind the form.

use crate::cart::{Build, CartItemId, CartItemInput, CartStore, Size, Specifications};
use crate::config::{
    DEFAULT_HEIGHT, DEFAULT_WEIGHT, HEIGHT_RANGE, MAX_TEXT_CHARS, MAX_TEXT_LINES, PRODUCT_NAME,
    UNIT_PRICE, WEIGHT_RANGE,
};
use crate::upload::{ImageData, ImageSlot};

/// Current, not yet committed form values.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomizationDraft {
    height: u32,
    weight: u32,
    build: Build,
    text: String,
    size: Size,
    image: ImageSlot,
}

impl Default for CustomizationDraft {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            weight: DEFAULT_WEIGHT,
            build: Build::default(),
            text: String::new(),
            size: Size::default(),
            image: ImageSlot::default(),
        }
    }
}

/// Character and line counts shown under the text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub characters: usize,
    pub lines: usize,
}

impl CustomizationDraft {
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn build(&self) -> Build {
        self.build
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn custom_image(&self) -> Option<&ImageData> {
        self.image.current()
    }

    pub fn image_slot_mut(&mut self) -> &mut ImageSlot {
        &mut self.image
    }

    pub fn set_height(&mut self, cm: u32) {
        self.height = cm.clamp(HEIGHT_RANGE.0, HEIGHT_RANGE.1);
    }

    pub fn set_weight(&mut self, kg: u32) {
        self.weight = kg.clamp(WEIGHT_RANGE.0, WEIGHT_RANGE.1);
    }

    pub fn set_build(&mut self, build: Build) {
        self.build = build;
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Replace the text, truncated to the character limit.
    ///
    /// Extra lines are kept here; only the first three are shown and sent
    /// to the cart.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.chars().take(MAX_TEXT_CHARS).collect();
    }

    pub fn text_stats(&self) -> TextStats {
        TextStats {
            characters: self.text.chars().count(),
            lines: self.text.split('\n').count(),
        }
    }

    /// The lines printed on the garment.
    pub fn display_lines(&self) -> Vec<&str> {
        self.text.split('\n').take(MAX_TEXT_LINES).collect()
    }

    /// Snapshot the draft as a cart item input at the fixed unit price.
    pub fn to_cart_input(&self) -> CartItemInput {
        let custom_text = if self.text.is_empty() {
            None
        } else {
            Some(self.display_lines().join("\n"))
        };
        CartItemInput {
            name: PRODUCT_NAME.to_string(),
            size: self.size,
            price: UNIT_PRICE,
            custom_image: self.image.current().cloned(),
            custom_text,
            specifications: Specifications {
                height: self.height,
                weight: self.weight,
                build: self.build,
            },
        }
    }
}

/// "Add to Cart": snapshot `draft` into `cart`. The draft is left as is.
pub fn add_draft_to_cart(draft: &CustomizationDraft, cart: &mut CartStore) -> CartItemId {
    cart.add_to_cart(draft.to_cart_input())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let draft = CustomizationDraft::default();
        assert_eq!(draft.height(), 180);
        assert_eq!(draft.weight(), 80);
        assert_eq!(draft.build(), Build::Athletic);
        assert_eq!(draft.text(), "");
        assert_eq!(draft.size(), Size::M);
        assert!(draft.custom_image().is_none());
    }

    #[test]
    fn measurements_are_clamped() {
        let mut draft = CustomizationDraft::default();
        draft.set_height(100);
        assert_eq!(draft.height(), 150);
        draft.set_height(250);
        assert_eq!(draft.height(), 210);
        draft.set_weight(0);
        assert_eq!(draft.weight(), 40);
        draft.set_weight(151);
        assert_eq!(draft.weight(), 150);
        draft.set_weight(95);
        assert_eq!(draft.weight(), 95);
    }

    #[test]
    fn text_is_truncated_to_limit() {
        let mut draft = CustomizationDraft::default();
        draft.set_text(&"é".repeat(120));
        assert_eq!(draft.text_stats().characters, 100);
    }

    #[test]
    fn fourth_line_is_kept_but_not_displayed() {
        let mut draft = CustomizationDraft::default();
        draft.set_text("one\ntwo\nthree\nfour");
        assert_eq!(draft.text_stats().lines, 4);
        assert_eq!(draft.display_lines(), vec!["one", "two", "three"]);
        assert_eq!(draft.to_cart_input().custom_text.as_deref(), Some("one\ntwo\nthree"));
    }

    #[test]
    fn snapshot_captures_form_values() {
        let mut draft = CustomizationDraft::default();
        draft.set_size(Size::XL);
        draft.set_build(Build::Big);
        draft.set_height(200);
        draft.set_text("Hello");
        draft.image_slot_mut().set(ImageData::from_url("data:image/png;base64,AA=="));

        let input = draft.to_cart_input();
        assert_eq!(input.name, "Custom T-Shirt");
        assert_eq!(input.size, Size::XL);
        assert_eq!(input.price, UNIT_PRICE);
        assert_eq!(input.custom_text.as_deref(), Some("Hello"));
        assert!(input.custom_image.is_some());
        assert_eq!(
            input.specifications,
            Specifications { height: 200, weight: 80, build: Build::Big }
        );
    }

    #[test]
    fn empty_text_snapshots_as_none() {
        let draft = CustomizationDraft::default();
        assert_eq!(draft.to_cart_input().custom_text, None);
    }

    #[test]
    fn editing_draft_after_add_leaves_cart_unchanged() {
        let mut cart = CartStore::new();
        let mut draft = CustomizationDraft::default();
        draft.set_text("first");
        let id = add_draft_to_cart(&draft, &mut cart);

        draft.set_text("second");
        draft.set_size(Size::S);
        draft.set_height(150);
        draft.image_slot_mut().set(ImageData::from_url("data:new"));

        let item = cart.get(id).unwrap();
        assert_eq!(item.custom_text(), Some("first"));
        assert_eq!(item.size(), Size::M);
        assert_eq!(item.specifications().height, 180);
        assert!(item.custom_image().is_none());
    }

    #[test]
    fn add_does_not_reset_draft() {
        let mut cart = CartStore::new();
        let mut draft = CustomizationDraft::default();
        draft.set_text("keep me");
        add_draft_to_cart(&draft, &mut cart);
        add_draft_to_cart(&draft, &mut cart);
        assert_eq!(draft.text(), "keep me");
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_price(), "59.98".parse::<rust_decimal::Decimal>().unwrap());
    }
}
