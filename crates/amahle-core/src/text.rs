//! Text Normalization

/// Upper-case the first character and lower-case the rest ("cAPE town" -> "Cape town")
pub fn capitalize_city(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// Reduce a notification level to characters safe inside a class name.
///
/// Falls back to `default` when nothing usable is left.
pub fn sanitize_level(level: &str, default: &str) -> String {
    let cleaned: String = level
        .trim()
        .to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || *c == '-')
        .collect();

    if cleaned.is_empty() {
        default.to_string()
    } else {
        cleaned
    }
}
