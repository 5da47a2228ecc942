//! Amahle Core
//!
//! Framework-free rules behind the listing page widgets: money formatting,
//! input normalization, rating and price arithmetic, and the page config record.

pub mod config;
pub mod currency;
pub mod price;
pub mod text;
pub mod widgets;

pub use config::PageConfig;
pub use currency::{format_currency, format_total};
pub use price::{parse_decimal, parse_room_count, room_total};
pub use text::{capitalize_city, sanitize_level};
pub use widgets::{anchor_target, is_label_active, should_show_back_to_top, toggled_input_type};
