//! Booking Price Calculator
//!
//! Keeps the booking total in sync with the number of rooms requested.

use amahle_core::config::PriceConfig;
use amahle_core::{format_total, parse_decimal, parse_room_count, room_total};
use web_sys::{Document, HtmlInputElement};

use crate::dom;
use crate::error::UiError;

/// Attribute on the price element carrying the per-room price
pub const PRICE_ATTR: &str = "data-price";

pub fn bind(document: &Document, config: &PriceConfig, currency_symbol: &str) -> Result<(), UiError> {
    let Some(rooms) = dom::query_document_as::<HtmlInputElement>(document, &config.rooms_selector)? else {
        return Ok(());
    };
    let Some(price) = document.query_selector(&config.price_selector)? else {
        return Ok(());
    };

    // Base price is read once at setup
    let raw = price.get_attribute(PRICE_ATTR).unwrap_or_default();
    let Some(base_price) = parse_decimal(&raw) else {
        web_sys::console::warn_1(&format!("[Price] Ignoring non-numeric {}={:?}", PRICE_ATTR, raw).into());
        return Ok(());
    };

    let total_display = document.get_element_by_id(&config.total_id);
    let symbol = currency_symbol.to_string();
    let input = rooms.clone();
    dom::listen(&rooms, "input", move |_| {
        let Some(display) = &total_display else {
            return;
        };
        let total = room_total(base_price, parse_room_count(&input.value()));
        display.set_text_content(Some(&format_total(&symbol, total)));
    })
}
