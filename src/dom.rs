//! DOM Helpers
//!
//! Thin wrappers over web-sys for the lookups and listeners every behavior repeats.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    Window,
};

use crate::error::UiError;

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::NoDocument)
}

/// All elements matching `selector`, in document order
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, UiError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// First element in the document matching `selector`, cast to `T`; `None` when absent or of another type
pub fn query_document_as<T: JsCast>(document: &Document, selector: &str) -> Result<Option<T>, UiError> {
    Ok(document.query_selector(selector)?.and_then(|el| el.dyn_into::<T>().ok()))
}

/// Attach a listener for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), UiError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` once the document has been parsed
pub fn when_ready<F>(document: &Document, f: F) -> Result<(), UiError>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() == "loading" {
        let callback = Closure::once_into_js(f);
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
    } else {
        f();
    }
    Ok(())
}

/// Set the inline `display` of an element
pub fn set_display(el: &Element, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("display", value);
    }
}

/// Any form control exposing a string `value`
#[derive(Clone)]
pub enum FormField {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
}

impl FormField {
    /// Wrap `el` when it is a value-carrying control
    pub fn from_element(el: Element) -> Option<Self> {
        let el = match el.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Some(Self::Input(input)),
            Err(el) => el,
        };
        let el = match el.dyn_into::<HtmlSelectElement>() {
            Ok(select) => return Some(Self::Select(select)),
            Err(el) => el,
        };
        el.dyn_into::<HtmlTextAreaElement>().ok().map(Self::TextArea)
    }

    pub fn value(&self) -> String {
        match self {
            Self::Input(input) => input.value(),
            Self::Select(select) => select.value(),
            Self::TextArea(area) => area.value(),
        }
    }

    pub fn set_value(&self, value: &str) {
        match self {
            Self::Input(input) => input.set_value(value),
            Self::Select(select) => select.set_value(value),
            Self::TextArea(area) => area.set_value(value),
        }
    }

    pub fn as_target(&self) -> &EventTarget {
        match self {
            Self::Input(input) => input.as_ref(),
            Self::Select(select) => select.as_ref(),
            Self::TextArea(area) => area.as_ref(),
        }
    }
}
