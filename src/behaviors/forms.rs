//! Form Behaviors
//!
//! Delete confirmation, native validation gating and password visibility.

use amahle_core::config::{ConfirmDeleteConfig, PasswordConfig, ValidationConfig};
use amahle_core::toggled_input_type;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement};

use crate::dom;
use crate::error::UiError;

/// Ask before destructive actions; declining cancels the click's default action
pub fn bind_confirm_delete(document: &Document, config: &ConfirmDeleteConfig) -> Result<(), UiError> {
    for button in dom::query_all(document, &config.selector)? {
        let message = config.message.clone();
        dom::listen(&button, "click", move |ev: Event| {
            let accepted = web_sys::window()
                .and_then(|w| w.confirm_with_message(&message).ok())
                .unwrap_or(false);
            if !accepted {
                ev.prevent_default();
            }
        })?;
    }
    Ok(())
}

/// Block submission of invalid forms and mark them so field states get styled
pub fn bind_validation(document: &Document, config: &ValidationConfig) -> Result<(), UiError> {
    for el in dom::query_all(document, &config.selector)? {
        let Ok(form) = el.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let target = form.clone();
        let validated_class = config.validated_class.clone();
        dom::listen(&form, "submit", move |ev: Event| {
            if !target.check_validity() {
                ev.prevent_default();
                ev.stop_propagation();
            }
            let _ = target.class_list().add_1(&validated_class);
        })?;
    }
    Ok(())
}

/// Show/hide the password in the input just before each toggle
pub fn bind_password_toggle(document: &Document, config: &PasswordConfig) -> Result<(), UiError> {
    for toggle in dom::query_all(document, &config.toggle_selector)? {
        let target = toggle.clone();
        let shown_icon = config.shown_icon.clone();
        let hidden_icon = config.hidden_icon.clone();
        dom::listen(&toggle, "click", move |_| {
            let Some(input) = target.previous_element_sibling() else {
                return;
            };
            let next = toggled_input_type(input.get_attribute("type").as_deref());
            let _ = input.set_attribute("type", next);

            if let Ok(Some(icon)) = target.query_selector("i") {
                let classes = icon.class_list();
                let _ = classes.toggle(&shown_icon);
                let _ = classes.toggle(&hidden_icon);
            }
        })?;
    }
    Ok(())
}
