//! Flash Alerts
//!
//! Server-rendered alerts close themselves after a delay unless marked permanent.

use amahle_core::config::AlertConfig;
use web_sys::{Document, Element};

use crate::bootstrap;
use crate::dom;
use crate::error::UiError;
use crate::schedule;

pub fn bind(document: &Document, config: &AlertConfig) -> Result<(), UiError> {
    for alert in dom::query_all(document, &config.selector)? {
        schedule::schedule(config.dismiss_after_ms, move || dismiss(&alert));
    }
    Ok(())
}

/// Close an alert with Bootstrap's fade when available, otherwise detach it.
/// An alert already gone from the page is left alone.
pub fn dismiss(alert: &Element) {
    if !alert.is_connected() {
        return;
    }
    let closed = bootstrap::Alert::new(alert).and_then(|bs_alert| bs_alert.close());
    if closed.is_err() {
        alert.remove();
    }
}
