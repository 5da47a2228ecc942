//! Listing Search Box
//!
//! Normalizes the city name on blur and debounces keystrokes toward a
//! suggestion lookup.

use amahle_core::capitalize_city;
use amahle_core::config::SearchConfig;
use web_sys::{Document, HtmlInputElement};

use crate::dom::{self, FormField};
use crate::error::UiError;
use crate::schedule::Debouncer;

pub fn bind(document: &Document, config: &SearchConfig) -> Result<(), UiError> {
    if let Some(form) = document.get_element_by_id(&config.form_id) {
        let field = format!(r#"[name="{}"]"#, config.city_field);
        // Input, select or textarea; other elements carry no value to normalize
        if let Some(city) = form.query_selector(&field)?.and_then(FormField::from_element) {
            bind_capitalize(&city)?;
        }
    }

    // Suggestions follow the first city input anywhere on the page
    let input = format!(r#"input[name="{}"]"#, config.city_field);
    if let Some(city) = dom::query_document_as::<HtmlInputElement>(document, &input)? {
        bind_suggestions(&city, config.debounce_ms, lookup_suggestions)?;
    }
    Ok(())
}

fn bind_capitalize(field: &FormField) -> Result<(), UiError> {
    let target = field.clone();
    dom::listen(field.as_target(), "blur", move |_| {
        target.set_value(&capitalize_city(&target.value()));
    })
}

/// Run `on_query` with the field's value once typing pauses for `debounce_ms`
pub fn bind_suggestions<F>(input: &HtmlInputElement, debounce_ms: u32, on_query: F) -> Result<(), UiError>
where
    F: Fn(&str) + Clone + 'static,
{
    let debouncer = Debouncer::new(debounce_ms);
    let target = input.clone();
    dom::listen(input, "input", move |_| {
        let field = target.clone();
        let on_query = on_query.clone();
        debouncer.call(move || on_query(&field.value()));
    })
}

// TODO: fetch and render suggestions once the backend exposes a city lookup route
fn lookup_suggestions(query: &str) {
    web_sys::console::log_1(&format!("[Search] Search for: {}", query).into());
}
