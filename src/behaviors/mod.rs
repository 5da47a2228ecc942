//! Page Behaviors
//!
//! Independent listeners wired to server-rendered markup. Each binder is a
//! no-op when its elements are missing; one failing binder never blocks the rest.

pub mod actions;
pub mod alerts;
pub mod forms;
pub mod media;
pub mod navigation;
pub mod popups;
pub mod price;
pub mod rating;
pub mod search;

use amahle_core::PageConfig;
use web_sys::Document;

use crate::error::UiError;

/// Bind every behavior against `document`
pub fn bind_all(document: &Document, config: &PageConfig) {
    report("alerts", alerts::bind(document, &config.alerts));
    report("confirm-delete", forms::bind_confirm_delete(document, &config.confirm_delete));
    report("validation", forms::bind_validation(document, &config.validation));
    report("image-preview", media::bind_image_preview(document, &config.image_preview));
    report("search", search::bind(document, &config.search));
    report("rating", rating::bind(document, &config.rating));
    report("smooth-scroll", navigation::bind_smooth_scroll(document, &config.smooth_scroll));
    report("price", price::bind(document, &config.price, &config.currency_symbol));
    report("password", forms::bind_password_toggle(document, &config.password));
    report("lazy-images", media::bind_lazy_images(document, &config.lazy_images));
    report("back-to-top", navigation::bind_back_to_top(document, &config.back_to_top));
    report("filter-sidebar", navigation::bind_filter_sidebar(document, &config.filter_sidebar));
    report("popups", popups::bind(document, &config.popups));
    report("print", actions::bind_print(document, &config.print));
    report("clipboard", actions::bind_clipboard(document, &config.clipboard));
}

fn report(name: &str, result: Result<(), UiError>) {
    if let Err(err) = result {
        web_sys::console::error_1(&format!("[Init] {} not bound: {}", name, err).into());
    }
}
