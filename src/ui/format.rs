//! Display formatting shared by the stdout grid and the TUI

use crate::inventory::InventoryItem;

/// Format a price with its currency
///
/// Common currencies get their symbol (`$12.50`, `€3.00`); anything else is
/// rendered as `12.50 CHF`.
#[must_use]
pub fn format_price(price: f64, currency: &str) -> String {
    let code = currency.trim().to_uppercase();
    let symbol = match code.as_str() {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    };

    // Yen has no minor unit
    let amount = if code == "JPY" {
        format!("{price:.0}")
    } else {
        format!("{price:.2}")
    };

    match symbol {
        Some(symbol) => format!("{symbol}{amount}"),
        None if code.is_empty() => amount,
        None => format!("{amount} {code}"),
    }
}

/// Stock label for cards
#[must_use]
pub const fn stock_label(in_stock: bool) -> &'static str {
    if in_stock { "In stock" } else { "Out of stock" }
}

/// Image line for detail views; falls back when there is no usable URL
#[must_use]
pub fn image_label(item: &InventoryItem) -> String {
    if has_image(item) {
        item.image.clone()
    } else {
        "(no image)".to_string()
    }
}

/// True when the item carries an http(s) image URL
#[must_use]
pub fn has_image(item: &InventoryItem) -> bool {
    let url = item.image.trim();
    url.starts_with("http://") || url.starts_with("https://")
}

/// Human-friendly creation date, or the raw string when it doesn't parse
#[must_use]
pub fn created_label(item: &InventoryItem) -> String {
    item.created()
        .map_or_else(|| item.created_at.clone(), |dt| dt.format("%Y-%m-%d").to_string())
}

/// Truncate to `width` characters, marking the cut with `…`
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Result count line ("1 item", "12 of 40 items")
#[must_use]
pub fn count_label(visible: usize, total: usize) -> String {
    let noun = if total == 1 { "item" } else { "items" };
    if visible == total {
        format!("{total} {noun}")
    } else {
        format!("{visible} of {total} {noun}")
    }
}
