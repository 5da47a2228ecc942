//! Widget Rules
//!
//! Small decisions the page widgets make, kept apart from the DOM wiring.

/// A star label is lit when it sits at or before the selected star
pub fn is_label_active(label_index: usize, selected_index: usize) -> bool {
    label_index <= selected_index
}

/// The back-to-top control appears strictly past the threshold
pub fn should_show_back_to_top(scroll_offset: f64, threshold: f64) -> bool {
    scroll_offset > threshold
}

/// Input type after a password visibility toggle
pub fn toggled_input_type(current: Option<&str>) -> &'static str {
    match current {
        Some("password") => "text",
        _ => "password",
    }
}

/// Selector for an in-page link target.
///
/// A bare `#` names no element.
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.starts_with('#') && href.len() > 1 {
        Some(href)
    } else {
        None
    }
}
