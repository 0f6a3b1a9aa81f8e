//! Central UI style constants and helpers.
pub const COLOR_LISTING: u32 = 0x3498DB; // Blue
pub const COLOR_SUMMARY: u32 = 0xF1C40F; // Gold
pub const COLOR_SUCCESS: u32 = 0x2ECC71; // Green
pub const COLOR_ALERT: u32 = 0xE74C3C; // Red

pub const EMOJI_PRICE: &str = "💰";
pub const EMOJI_STORE: &str = "🏪";
pub const EMOJI_OK: &str = "✅";
pub const EMOJI_ERR: &str = "❌";

pub const PRICE_TBA: &str = "Price TBA";

/// Renders a price for display; the zero sentinel becomes "Price TBA".
pub fn format_price(price: f64) -> String {
    if price > 0.0 {
        format!("${price:.2}")
    } else {
        PRICE_TBA.to_string()
    }
}

/// Category names are shouted in titles, matching the listing commands.
pub fn category_title(category: &str) -> String {
    category.to_uppercase().replace('_', " ")
}
