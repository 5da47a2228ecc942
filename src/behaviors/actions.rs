//! Button Actions
//!
//! Print buttons and copy-to-clipboard buttons.

use amahle_core::config::{ClipboardConfig, PrintConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element};

use crate::dom;
use crate::error::UiError;
use crate::schedule;

/// Attribute holding the text a copy button puts on the clipboard
pub const COPY_ATTR: &str = "data-copy";
/// Button text saved while a copy confirmation is showing
const ORIGINAL_LABEL_ATTR: &str = "data-copy-label";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["navigator", "clipboard"], js_name = writeText)]
    fn write_text(text: &str) -> Result<js_sys::Promise, JsValue>;
}

pub fn bind_print(document: &Document, config: &PrintConfig) -> Result<(), UiError> {
    for button in dom::query_all(document, &config.selector)? {
        dom::listen(&button, "click", |_| {
            if let Some(window) = web_sys::window() {
                let _ = window.print();
            }
        })?;
    }
    Ok(())
}

/// Copy `data-copy` on click; the button briefly shows whether it worked
pub fn bind_clipboard(document: &Document, config: &ClipboardConfig) -> Result<(), UiError> {
    for button in dom::query_all(document, &config.selector)? {
        let target = button.clone();
        let config = config.clone();
        dom::listen(&button, "click", move |_| {
            let Some(text) = target.get_attribute(COPY_ATTR) else {
                return;
            };
            let button = target.clone();
            let config = config.clone();
            spawn_local(async move {
                let label = match copy_text(&text).await {
                    Ok(()) => &config.copied_label,
                    Err(err) => {
                        web_sys::console::error_1(&format!("[Clipboard] Copy failed: {}", err).into());
                        &config.failed_label
                    }
                };
                flash_label(&button, label, config.restore_after_ms);
            });
        })?;
    }
    Ok(())
}

/// Write `text` to the system clipboard
pub async fn copy_text(text: &str) -> Result<(), UiError> {
    let promise = write_text(text)?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// Show `label` on the button, then put the original text back.
///
/// Repeated clicks while a label is showing still restore the first text.
pub fn flash_label(button: &Element, label: &str, restore_after_ms: u32) {
    let original = match button.get_attribute(ORIGINAL_LABEL_ATTR) {
        Some(saved) => saved,
        None => {
            let current = button.text_content().unwrap_or_default();
            let _ = button.set_attribute(ORIGINAL_LABEL_ATTR, &current);
            current
        }
    };
    button.set_text_content(Some(label));

    let button = button.clone();
    schedule::schedule(restore_after_ms, move || {
        button.set_text_content(Some(&original));
        let _ = button.remove_attribute(ORIGINAL_LABEL_ATTR);
    });
}
