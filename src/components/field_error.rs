//! Field Error Component

use leptos::prelude::*;

use crate::error::FieldErrors;

/// Inline message under an input, rendered only while the field has an error
#[component]
pub fn FieldError(errors: ReadSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors.with(|errors| {
            errors
                .get(field)
                .map(|message| view! { <p class="field-error">{message.to_string()}</p> })
        })
    }
}

/// Class for an input, marking it invalid while its field has an error
pub fn input_class(errors: ReadSignal<FieldErrors>, field: &'static str) -> impl Fn() -> &'static str + Copy + Send + Sync + 'static {
    move || {
        if errors.with(|e| e.has(field)) {
            "form-input invalid"
        } else {
            "form-input"
        }
    }
}
