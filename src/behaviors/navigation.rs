//! Scrolling & Layout Toggles

use amahle_core::config::{BackToTopConfig, FilterSidebarConfig, SmoothScrollConfig};
use amahle_core::{anchor_target, should_show_back_to_top};
use web_sys::{Document, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window};

use crate::dom;
use crate::error::UiError;

/// In-page links glide to their target. Links whose target is missing
/// (or not a valid selector) keep the browser's default jump.
pub fn bind_smooth_scroll(document: &Document, config: &SmoothScrollConfig) -> Result<(), UiError> {
    for anchor in dom::query_all(document, &config.selector)? {
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev: Event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            let target = dom::document()
                .ok()
                .and_then(|d| d.query_selector(selector).ok().flatten());

            if let Some(target) = target {
                ev.prevent_default();
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }
    Ok(())
}

pub fn bind_back_to_top(document: &Document, config: &BackToTopConfig) -> Result<(), UiError> {
    let Some(button) = document.get_element_by_id(&config.button_id) else {
        return Ok(());
    };
    let window = dom::window()?;

    let threshold = config.threshold_px;
    let shown = button.clone();
    let scrolled = window.clone();
    dom::listen(&window, "scroll", move |_| {
        let offset = scrolled.page_y_offset().unwrap_or(0.0);
        let display = if should_show_back_to_top(offset, threshold) { "block" } else { "none" };
        dom::set_display(&shown, display);
    })?;

    dom::listen(&button, "click", move |_| {
        if let Some(window) = web_sys::window() {
            scroll_to_top(&window);
        }
    })
}

fn scroll_to_top(window: &Window) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Mobile filter panel: each click flips its visibility class
pub fn bind_filter_sidebar(document: &Document, config: &FilterSidebarConfig) -> Result<(), UiError> {
    let (Some(toggle), Some(sidebar)) = (
        document.get_element_by_id(&config.toggle_id),
        document.get_element_by_id(&config.sidebar_id),
    ) else {
        return Ok(());
    };

    let class = config.class.clone();
    dom::listen(&toggle, "click", move |_| {
        let _ = sidebar.class_list().toggle(&class);
    })
}
