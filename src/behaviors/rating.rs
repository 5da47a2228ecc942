//! Star Rating Input
//!
//! Picking star *i* lights labels `0..=i` and dims the rest.

use amahle_core::config::RatingConfig;
use amahle_core::is_label_active;
use web_sys::Document;

use crate::dom;
use crate::error::UiError;

pub fn bind(document: &Document, config: &RatingConfig) -> Result<(), UiError> {
    for (index, input) in dom::query_all(document, &config.input_selector)?.into_iter().enumerate() {
        let label_selector = config.label_selector.clone();
        let active_class = config.active_class.clone();
        dom::listen(&input, "change", move |_| {
            let Ok(document) = dom::document() else {
                return;
            };
            let Ok(labels) = dom::query_all(&document, &label_selector) else {
                return;
            };
            for (label_index, label) in labels.iter().enumerate() {
                let classes = label.class_list();
                let _ = if is_label_active(label_index, index) {
                    classes.add_1(&active_class)
                } else {
                    classes.remove_1(&active_class)
                };
            }
        })?;
    }
    Ok(())
}
