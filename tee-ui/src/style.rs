//! Inline styles and small formatting helpers shared by the components.

use rust_decimal::Decimal;
use tee_core::Theme;

/// Format a price as dollars with two decimals ("$29.99").
pub fn format_price(price: Decimal) -> String {
    format!("${:.2}", price.round_dp(2))
}

/// Style for the page root.
pub fn page_style(theme: &Theme) -> String {
    format!(
        "min-height: 100vh; padding: 16px; outline: none; background: {}; color: {}; font-family: {};",
        theme.background, theme.text, theme.font
    )
}

/// Style for the main card surface.
pub fn card_style(theme: &Theme) -> String {
    format!(
        "max-width: 1152px; margin: 0 auto; padding: 24px; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.15); background: {};",
        theme.card
    )
}

/// Style for accent-coloured buttons.
pub fn accent_button_style(theme: &Theme) -> String {
    format!(
        "background: {}; color: #ffffff; border: none; padding: 8px 16px; border-radius: 8px; cursor: pointer; font: inherit; margin-bottom: 12px;",
        theme.accent
    )
}

/// Class carried by accent buttons so the hover rule can target them.
pub const ACCENT_CLASS: &str = "tee-accent";

/// Stylesheet giving accent buttons the theme's hover colour.
///
/// Inline styles cannot express `:hover`, so this is emitted in a `<style>`
/// element; `!important` beats the inline background.
pub fn accent_hover_css(theme: &Theme) -> String {
    format!(
        ".{ACCENT_CLASS}:hover {{ background: {} !important; }}",
        theme.accent_hover
    )
}

/// A plain t-shirt silhouette as an SVG data URL, used as the 2D base image.
pub fn garment_svg(fill: &str) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 300 400'>\
         <path d='M95 20 L40 50 L10 120 L60 140 L70 110 L70 380 L230 380 L230 110 L240 140 L290 120 L260 50 L205 20 \
         Q150 70 95 20 Z' fill='{fill}' stroke='#9ca3af' stroke-width='3'/></svg>"
    );
    format!("data:image/svg+xml;utf8,{}", svg.replace('#', "%23"))
}
