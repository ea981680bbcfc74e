//! Compile-time settings for the customizer.

use rust_decimal::Decimal;

/// Display name given to every customized shirt added to the cart.
pub const PRODUCT_NAME: &str = "Custom T-Shirt";

/// Fixed unit price (29.99).
pub const UNIT_PRICE: Decimal = Decimal::from_parts(2999, 0, 0, false, 2);

/// Height slider range in centimetres.
pub const HEIGHT_RANGE: (u32, u32) = (150, 210);
pub const DEFAULT_HEIGHT: u32 = 180;

/// Weight slider range in kilograms.
pub const WEIGHT_RANGE: (u32, u32) = (40, 150);
pub const DEFAULT_WEIGHT: u32 = 80;

/// Maximum number of characters accepted by the text area.
pub const MAX_TEXT_CHARS: usize = 100;

/// Number of text lines printed on the garment.
pub const MAX_TEXT_LINES: usize = 3;

/// Fraction of the preview width the custom image may occupy in 2D mode.
pub const OVERLAY_FRACTION: f64 = 0.28;
