//! Amahle Rentals Page Script
//!
//! WebAssembly replacement for the listing site's `main.js`: binds the page
//! behaviors once the document is parsed and exports the shared helpers.

pub mod behaviors;
pub mod bootstrap;
pub mod config;
pub mod dom;
pub mod error;
pub mod exports;
pub mod notification;
pub mod schedule;

use std::cell::Cell;

use amahle_core::PageConfig;
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub use error::UiError;
pub use exports::{format_currency, show_notification, teardown};

thread_local! {
    static BOUND: Cell<bool> = const { Cell::new(false) };
}

/// Entry point: bind with the inline config once the DOM is ready
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = dom::document()?;
    dom::when_ready(&document, || {
        if let Ok(document) = dom::document() {
            boot(&document);
        }
    })?;
    Ok(())
}

/// Start-up work on a parsed document: exports go in first, then behaviors
/// bind unless the inline config turns `auto_init` off.
pub fn boot(document: &Document) {
    let config = config::from_document(document);
    if config.expose_global {
        install_exports();
    }
    if BOUND.with(Cell::get) {
        return;
    }
    if !config.auto_init {
        config::set_active(config);
        web_sys::console::log_1(&"[Init] auto_init off, waiting for initWithConfig".into());
        return;
    }
    if let Err(err) = init(config) {
        web_sys::console::error_1(&format!("[Init] {}", err).into());
    }
}

/// Bind behaviors with an explicit config object instead of the inline block.
/// Only one initialization per page is allowed.
#[wasm_bindgen(js_name = initWithConfig)]
pub fn init_with_config(config: JsValue) -> Result<(), UiError> {
    let config = config::from_js(config)?;
    let document = dom::document()?;
    claim()?;

    dom::when_ready(&document, move || {
        if config.expose_global {
            install_exports();
        }
        if let Err(err) = apply(config) {
            web_sys::console::error_1(&format!("[Init] {}", err).into());
        }
    })
}

/// Bind all behaviors with `config`
pub fn init(config: PageConfig) -> Result<(), UiError> {
    claim()?;
    apply(config)
}

fn claim() -> Result<(), UiError> {
    if BOUND.with(|bound| bound.replace(true)) {
        return Err(UiError::AlreadyInitialized);
    }
    Ok(())
}

fn apply(config: PageConfig) -> Result<(), UiError> {
    let config = config::set_active(config);
    let document = dom::document()?;

    behaviors::bind_all(&document, &config);
    web_sys::console::log_1(&"[Init] Page behaviors bound".into());
    Ok(())
}

fn install_exports() {
    let installed = dom::window().and_then(|window| exports::install_global(&window));
    if let Err(err) = installed {
        web_sys::console::warn_1(&format!("[Init] window.appUtils not installed: {}", err).into());
    }
}
