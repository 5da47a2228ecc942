//! Config Loading
//!
//! Pages override defaults with an inline JSON block:
//! `<script type="application/json" id="amahle-config">{ ... }</script>`

use std::cell::RefCell;
use std::rc::Rc;

use amahle_core::PageConfig;
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::error::UiError;

pub const CONFIG_ELEMENT_ID: &str = "amahle-config";

thread_local! {
    static ACTIVE: RefCell<Rc<PageConfig>> = RefCell::new(Rc::new(PageConfig::default()));
}

/// Configuration the page was initialized with (defaults before init)
pub fn active() -> Rc<PageConfig> {
    ACTIVE.with(|active| Rc::clone(&active.borrow()))
}

pub fn set_active(config: PageConfig) -> Rc<PageConfig> {
    let config = Rc::new(config);
    ACTIVE.with(|active| *active.borrow_mut() = Rc::clone(&config));
    config
}

/// Read the inline config block, falling back to defaults when absent or malformed
pub fn from_document(document: &Document) -> PageConfig {
    let Some(block) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return PageConfig::default();
    };

    let raw = block.text_content().unwrap_or_default();
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            web_sys::console::error_1(&format!("[Config] Ignoring #{}: {}", CONFIG_ELEMENT_ID, err).into());
            PageConfig::default()
        }
    }
}

/// Decode a config object handed over from JavaScript; `undefined`/`null` mean defaults
pub fn from_js(value: JsValue) -> Result<PageConfig, UiError> {
    if value.is_undefined() || value.is_null() {
        return Ok(PageConfig::default());
    }
    Ok(serde_wasm_bindgen::from_value(value)?)
}
