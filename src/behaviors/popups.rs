//! Tooltips & Popovers
//!
//! Bootstrap reads title/content/placement from each element's attributes.

use amahle_core::config::PopupConfig;
use web_sys::Document;

use crate::bootstrap::{Popover, Tooltip};
use crate::dom;
use crate::error::UiError;

pub fn bind(document: &Document, config: &PopupConfig) -> Result<(), UiError> {
    for el in dom::query_all(document, &config.tooltip_selector)? {
        if Tooltip::new(&el).is_err() {
            web_sys::console::warn_1(&"[Popups] bootstrap.Tooltip unavailable".into());
            break;
        }
    }
    for el in dom::query_all(document, &config.popover_selector)? {
        if Popover::new(&el).is_err() {
            web_sys::console::warn_1(&"[Popups] bootstrap.Popover unavailable".into());
            break;
        }
    }
    Ok(())
}
