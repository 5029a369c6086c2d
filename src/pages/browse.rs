//! Browse Page
//!
//! Category shortcuts, a search box and the catalogue carousels.

use collection_view::{CollectionView, CriteriaPatch, ALL};
use leptos::prelude::*;

use crate::catalog::browse_sections;
use crate::components::{GigCard, GigCarousel, OptionSelector};
use crate::store::{use_app_store, AppStateStoreFields};

const BROWSE_CATEGORIES: &[(&str, &str)] = &[
    (ALL, "All"),
    ("graphics-design", "Graphics & Design"),
    ("writing", "Writing & Translation"),
    ("technology", "Technology"),
    ("video-animation", "Video & Animation"),
    ("digital-marketing", "Digital Marketing"),
];

#[component]
pub fn BrowsePage() -> impl IntoView {
    let store = use_app_store();
    let (category, set_category) = signal(ALL.to_string());
    let (search, set_search) = signal(String::new());

    // Carousels when nothing is picked, a filtered grid otherwise
    let results = move || {
        let patch = CriteriaPatch::new().search(search.get()).facet("category", &category.get());
        let as_of = store.with(|state| state.as_of());
        let view = CollectionView::new(store.gigs().get(), as_of).with_criteria(patch);
        view.is_filtered().then(|| view.snapshot())
    };

    view! {
        <div class="page browse-page">
            <header class="browse-hero">
                <h1>"Find the perfect freelance service"</h1>
                <input
                    type="search"
                    class="form-input"
                    placeholder="Search for any service..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </header>

            <OptionSelector
                options=BROWSE_CATEGORIES
                current=category
                on_change=move |value: String| set_category.set(value)
                class="category-nav"
            />

            {move || match results() {
                Some(gigs) if gigs.is_empty() => view! {
                    <div class="empty-state">
                        <h3>"No gigs match your search"</h3>
                        <button
                            type="button"
                            class="btn btn-outline"
                            on:click=move |_| {
                                set_search.set(String::new());
                                set_category.set(ALL.to_string());
                            }
                        >
                            "Show all gigs"
                        </button>
                    </div>
                }.into_any(),
                Some(gigs) => view! {
                    <div class="gig-grid">
                        {gigs.into_iter().map(|gig| view! { <GigCard gig=gig /> }).collect_view()}
                    </div>
                }.into_any(),
                None => {
                    let sections = store.with(|state| browse_sections(&state.gigs, state.as_of()));
                    sections
                        .into_iter()
                        .map(|section| view! { <GigCarousel section=section /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
