//! Bootstrap Bindings
//!
//! The page loads Bootstrap's bundle globally; these bind the few widgets we drive.
//! All constructors catch, so a page without Bootstrap gets an `Err` instead of a throw.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Alert)]
    pub type Alert;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Alert")]
    pub fn new(element: &Element) -> Result<Alert, JsValue>;

    #[wasm_bindgen(catch, method)]
    pub fn close(this: &Alert) -> Result<(), JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Tooltip)]
    pub type Tooltip;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Tooltip")]
    pub fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Popover)]
    pub type Popover;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Popover")]
    pub fn new(element: &Element) -> Result<Popover, JsValue>;
}
