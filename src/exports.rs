//! JavaScript Exports
//!
//! Named exports for other page scripts, plus the legacy `window.appUtils` object.

use amahle_core::parse_decimal;
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::config;
use crate::error::UiError;
use crate::notification;
use crate::schedule;

/// Format an amount as currency, e.g. `formatCurrency(1234.5) === "R1,234.50"`.
/// Numeric strings are accepted the same way `parseFloat` would.
#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(amount: JsValue) -> String {
    let value = amount
        .as_f64()
        .or_else(|| amount.as_string().and_then(|s| parse_decimal(&s)))
        .unwrap_or(f64::NAN);
    amahle_core::format_currency(&config::active().currency_symbol, value)
}

/// Show a transient notice. `level` is a Bootstrap contextual name ("info", "success", ...).
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: String, level: Option<String>) {
    if let Err(err) = notification::show(&message, level.as_deref()) {
        web_sys::console::error_1(&format!("[Notify] {}", err).into());
    }
}

/// Cancel every pending timer (alert dismissals, notice removals, label restores, lookups)
#[wasm_bindgen]
pub fn teardown() {
    schedule::cancel_all();
}

/// Install `window.appUtils = { formatCurrency, showNotification }` for non-module scripts
pub fn install_global(window: &Window) -> Result<(), UiError> {
    let utils = Object::new();

    let format = Closure::<dyn Fn(JsValue) -> String>::new(format_currency);
    Reflect::set(&utils, &JsValue::from_str("formatCurrency"), format.as_ref())?;
    format.forget();

    let notify = Closure::<dyn Fn(JsValue, JsValue)>::new(|message: JsValue, level: JsValue| {
        let text = message
            .as_string()
            .or_else(|| message.as_f64().map(|n| n.to_string()))
            .unwrap_or_default();
        show_notification(text, level.as_string());
    });
    Reflect::set(&utils, &JsValue::from_str("showNotification"), notify.as_ref())?;
    notify.forget();

    Reflect::set(window, &JsValue::from_str("appUtils"), &utils)?;
    Ok(())
}
