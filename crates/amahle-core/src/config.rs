//! Page Configuration
//!
//! One record per widget naming the selectors, delays and thresholds it uses.
//! Every field has a default, so a page only lists what it overrides.

use serde::{Deserialize, Serialize};

/// Root configuration for all listing page behaviors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Prefix used by the currency formatters
    pub currency_symbol: String,
    /// Install the legacy `window.appUtils` object
    pub expose_global: bool,
    /// Bind behaviors on start-up instead of waiting for an explicit init call
    pub auto_init: bool,
    pub alerts: AlertConfig,
    pub confirm_delete: ConfirmDeleteConfig,
    pub validation: ValidationConfig,
    pub image_preview: ImagePreviewConfig,
    pub search: SearchConfig,
    pub rating: RatingConfig,
    pub smooth_scroll: SmoothScrollConfig,
    pub price: PriceConfig,
    pub password: PasswordConfig,
    pub lazy_images: LazyImageConfig,
    pub back_to_top: BackToTopConfig,
    pub filter_sidebar: FilterSidebarConfig,
    pub popups: PopupConfig,
    pub print: PrintConfig,
    pub clipboard: ClipboardConfig,
    pub notifications: NotificationConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "R".to_string(),
            expose_global: true,
            auto_init: true,
            alerts: AlertConfig::default(),
            confirm_delete: ConfirmDeleteConfig::default(),
            validation: ValidationConfig::default(),
            image_preview: ImagePreviewConfig::default(),
            search: SearchConfig::default(),
            rating: RatingConfig::default(),
            smooth_scroll: SmoothScrollConfig::default(),
            price: PriceConfig::default(),
            password: PasswordConfig::default(),
            lazy_images: LazyImageConfig::default(),
            back_to_top: BackToTopConfig::default(),
            filter_sidebar: FilterSidebarConfig::default(),
            popups: PopupConfig::default(),
            print: PrintConfig::default(),
            clipboard: ClipboardConfig::default(),
            notifications: NotificationConfig::default(),
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON document; blank input yields defaults
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }
}

/// Flash messages rendered by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    pub selector: String,
    pub dismiss_after_ms: u32,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            selector: ".alert:not(.alert-permanent)".to_string(),
            dismiss_after_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfirmDeleteConfig {
    pub selector: String,
    pub message: String,
}

impl Default for ConfirmDeleteConfig {
    fn default() -> Self {
        Self {
            selector: "[data-confirm-delete]".to_string(),
            message: "Are you sure you want to delete this item? This action cannot be undone."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub selector: String,
    /// Class added on every submit attempt so field states get styled
    pub validated_class: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            selector: "form[data-validate]".to_string(),
            validated_class: "was-validated".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagePreviewConfig {
    pub input_selector: String,
    pub preview_id: String,
}

impl Default for ImagePreviewConfig {
    fn default() -> Self {
        Self {
            input_selector: r#"input[type="file"][accept*="image"]"#.to_string(),
            preview_id: "image-preview".to_string(),
        }
    }
}

/// City search box: blur normalization and the suggestion debounce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub form_id: String,
    /// `name` attribute of the city field
    pub city_field: String,
    pub debounce_ms: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            form_id: "search-form".to_string(),
            city_field: "city".to_string(),
            debounce_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    pub input_selector: String,
    pub label_selector: String,
    pub active_class: String,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            input_selector: r#".rating-input input[type="radio"]"#.to_string(),
            label_selector: ".rating-input label".to_string(),
            active_class: "active".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothScrollConfig {
    pub selector: String,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            selector: r##"a[href^="#"]"##.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceConfig {
    pub rooms_selector: String,
    /// Element whose `data-price` holds the per-room price
    pub price_selector: String,
    pub total_id: String,
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            rooms_selector: r#"input[name="num_rooms"]"#.to_string(),
            price_selector: "[data-price]".to_string(),
            total_id: "total-price".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    pub toggle_selector: String,
    pub shown_icon: String,
    pub hidden_icon: String,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".password-toggle".to_string(),
            shown_icon: "fa-eye".to_string(),
            hidden_icon: "fa-eye-slash".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LazyImageConfig {
    pub selector: String,
}

impl Default for LazyImageConfig {
    fn default() -> Self {
        Self {
            selector: "img[data-src]".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackToTopConfig {
    pub button_id: String,
    pub threshold_px: f64,
}

impl Default for BackToTopConfig {
    fn default() -> Self {
        Self {
            button_id: "back-to-top".to_string(),
            threshold_px: 300.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSidebarConfig {
    pub toggle_id: String,
    pub sidebar_id: String,
    pub class: String,
}

impl Default for FilterSidebarConfig {
    fn default() -> Self {
        Self {
            toggle_id: "filter-toggle".to_string(),
            sidebar_id: "filter-sidebar".to_string(),
            class: "show".to_string(),
        }
    }
}

/// Bootstrap tooltips and popovers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    pub tooltip_selector: String,
    pub popover_selector: String,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            tooltip_selector: r#"[data-bs-toggle="tooltip"]"#.to_string(),
            popover_selector: r#"[data-bs-toggle="popover"]"#.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintConfig {
    pub selector: String,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            selector: ".btn-print".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Buttons carrying the text to copy in `data-copy`
    pub selector: String,
    pub copied_label: String,
    pub failed_label: String,
    pub restore_after_ms: u32,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            selector: "[data-copy]".to_string(),
            copied_label: "Copied!".to_string(),
            failed_label: "Copy failed".to_string(),
            restore_after_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub dismiss_after_ms: u32,
    pub default_level: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: 5000,
            default_level: "info".to_string(),
        }
    }
}
