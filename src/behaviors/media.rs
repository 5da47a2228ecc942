//! Image Behaviors
//!
//! Upload previews and deferred loading of listing photos.

use amahle_core::config::{ImagePreviewConfig, LazyImageConfig};
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, File, FileReader, HtmlInputElement, IntersectionObserver, IntersectionObserverEntry};

use crate::dom;
use crate::error::UiError;

/// Attribute holding the real source of a deferred image
pub const DEFERRED_SRC_ATTR: &str = "data-src";

pub fn bind_image_preview(document: &Document, config: &ImagePreviewConfig) -> Result<(), UiError> {
    for el in dom::query_all(document, &config.input_selector)? {
        let Ok(input) = el.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let target = input.clone();
        let preview_id = config.preview_id.clone();
        dom::listen(&input, "change", move |_| {
            let Some(file) = target.files().and_then(|files| files.get(0)) else {
                return;
            };
            if let Err(err) = read_into_preview(&file, &preview_id) {
                web_sys::console::error_1(&format!("[Preview] Could not read {}: {}", file.name(), err).into());
            }
        })?;
    }
    Ok(())
}

/// Read `file` as a data URL and show it in the preview element once loaded
fn read_into_preview(file: &File, preview_id: &str) -> Result<(), UiError> {
    let reader = FileReader::new()?;
    let loaded = reader.clone();
    let preview_id = preview_id.to_string();

    let on_load = Closure::once_into_js(move || {
        let Some(data_url) = loaded.result().ok().and_then(|r| r.as_string()) else {
            return;
        };
        show_preview(&preview_id, &data_url);
    });
    reader.set_onload(Some(on_load.unchecked_ref()));
    reader.read_as_data_url(file)?;
    Ok(())
}

fn show_preview(preview_id: &str, data_url: &str) {
    let Some(preview) = dom::document().ok().and_then(|d| d.get_element_by_id(preview_id)) else {
        return;
    };
    let _ = preview.set_attribute("src", data_url);
    dom::set_display(&preview, "block");
}

/// Load deferred images as they scroll into view.
///
/// Without `IntersectionObserver` every deferred image loads right away.
pub fn bind_lazy_images(document: &Document, config: &LazyImageConfig) -> Result<(), UiError> {
    let images = dom::query_all(document, &config.selector)?;
    if images.is_empty() {
        return Ok(());
    }

    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let img = entry.target();
                    load_deferred(&img);
                    observer.unobserve(&img);
                }
            }
        },
    );

    match IntersectionObserver::new(on_intersect.as_ref().unchecked_ref()) {
        Ok(observer) => {
            for img in &images {
                observer.observe(img);
            }
            on_intersect.forget();
        }
        Err(_) => {
            web_sys::console::warn_1(&"[LazyImages] IntersectionObserver unavailable, loading eagerly".into());
            images.iter().for_each(load_deferred);
        }
    }
    Ok(())
}

/// Swap the deferred source in; the marker is dropped so this happens once
pub fn load_deferred(img: &Element) {
    if let Some(src) = img.get_attribute(DEFERRED_SRC_ATTR) {
        let _ = img.set_attribute("src", &src);
        let _ = img.remove_attribute(DEFERRED_SRC_ATTR);
    }
}
