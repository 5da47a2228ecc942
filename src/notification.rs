//! Transient Notifications
//!
//! A dismissible, fixed-position notice that removes itself after a delay.

use amahle_core::sanitize_level;
use leptos::mount::mount_to;
use leptos::prelude::*;

use crate::config;
use crate::dom;
use crate::error::UiError;
use crate::schedule::{self, TaskId};

/// Notice content; the close button hides it before the timer does
#[component]
fn Notice(message: String, level: String) -> impl IntoView {
    let (open, set_open) = signal(true);
    let class = format!(
        "alert alert-{} alert-dismissible fade show position-fixed top-0 end-0 m-3",
        level
    );

    view! {
        <Show when=move || open.get()>
            <div class=class.clone() role="alert" style="z-index: 9999;">
                {message.clone()}
                <button
                    type="button"
                    class="btn-close"
                    aria-label="Close"
                    on:click=move |_| set_open.set(false)
                ></button>
            </div>
        </Show>
    }
}

/// Append a notice to the page body; `level` defaults to the configured level.
///
/// Returns the removal task so callers can cancel it.
pub fn show(message: &str, level: Option<&str>) -> Result<TaskId, UiError> {
    let config = config::active();
    let defaults = &config.notifications;
    let level = sanitize_level(level.unwrap_or(&defaults.default_level), &defaults.default_level);
    let body = dom::document()?.body().ok_or(UiError::NoBody)?;

    let message = message.to_string();
    let handle = mount_to(body, move || view! { <Notice message=message level=level /> });

    Ok(schedule::schedule(defaults.dismiss_after_ms, move || drop(handle)))
}
