//! Star Rating Components

use leptos::prelude::*;

/// Read-only row of five stars, filled up to the rounded rating
#[component]
pub fn Stars(rating: f32) -> impl IntoView {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    view! {
        <span class="stars" aria-label=format!("{:.1} out of 5", rating)>
            {(0..5).map(|i| {
                let class = if i < filled { "star filled" } else { "star" };
                view! { <span class=class>"★"</span> }
            }).collect_view()}
        </span>
    }
}

/// Clickable 1..=5 star picker
#[component]
pub fn StarInput(value: ReadSignal<u8>, #[prop(into)] on_change: Callback<u8>) -> impl IntoView {
    view! {
        <span class="star-input" role="radiogroup">
            {(1..=5u8).map(|stars| {
                let class = move || if value.get() >= stars { "star filled" } else { "star" };
                view! {
                    <button
                        type="button"
                        class=class
                        aria-label=format!("{} star(s)", stars)
                        on:click=move |_| on_change.run(stars)
                    >
                        "★"
                    </button>
                }
            }).collect_view()}
        </span>
    }
}
