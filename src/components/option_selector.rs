//! Option Selector Component
//!
//! Row of toggle buttons for picking one value out of a fixed list.

use leptos::prelude::*;

/// Option buttons; the button whose value equals `current` is active
#[component]
pub fn OptionSelector(
    /// (value, label) pairs
    options: &'static [(&'static str, &'static str)],
    #[prop(into)] current: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("option-selector {}", class)>
            {options.iter().map(|(value, label)| {
                let val = value.to_string();
                let val_clone = val.clone();
                let is_selected = move || current.get() == val;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "option-btn active" } else { "option-btn" }
                        on:click=move |_| on_change.run(val_clone.clone())
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
