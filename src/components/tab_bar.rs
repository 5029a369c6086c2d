//! Tab Bar Component
//!
//! Tab strip for switching between panels of a screen.

use leptos::prelude::*;

/// Tab bar; `active` holds the key of the visible tab
#[component]
pub fn TabBar(
    /// (key, label) pairs in display order
    tabs: &'static [(&'static str, &'static str)],
    active: ReadSignal<&'static str>,
    set_active: WriteSignal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="tab-bar" role="tablist">
            {tabs.iter().map(|(key, label)| {
                let key = *key;
                let is_active = move || active.get() == key;
                let tab_class = move || {
                    if is_active() { "tab active" } else { "tab" }
                };

                view! {
                    <button
                        type="button"
                        role="tab"
                        class=tab_class
                        aria-selected=move || is_active().to_string()
                        on:click=move |_| set_active.set(key)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
