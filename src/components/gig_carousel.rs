//! Gig Carousel Component
//!
//! Titled row of gig cards with previous/next paging.

use leptos::prelude::*;

use crate::catalog::BrowseSection;
use crate::components::GigCard;

const CARDS_PER_PAGE: usize = 4;

#[component]
pub fn GigCarousel(section: BrowseSection) -> impl IntoView {
    let (offset, set_offset) = signal(0usize);
    let count = section.gigs.len();
    let show_view_all = section.show_view_all;
    let gigs = StoredValue::new(section.gigs);

    let can_go_back = move || offset.get() > 0;
    let can_go_forward = move || offset.get() + CARDS_PER_PAGE < count;

    view! {
        <section class="gig-carousel" id=section.key>
            <header class="carousel-header">
                <div>
                    <h2>{section.title}</h2>
                    {section.subtitle.map(|s| view! { <p class="muted">{s}</p> })}
                </div>
                <div class="carousel-controls">
                    <Show when=move || show_view_all>
                        <button type="button" class="link-btn">"View all"</button>
                    </Show>
                    <button
                        type="button"
                        class="carousel-btn"
                        aria-label="Previous"
                        disabled=move || !can_go_back()
                        on:click=move |_| set_offset.update(|o| *o = o.saturating_sub(1))
                    >
                        "‹"
                    </button>
                    <button
                        type="button"
                        class="carousel-btn"
                        aria-label="Next"
                        disabled=move || !can_go_forward()
                        on:click=move |_| {
                            if can_go_forward() {
                                set_offset.update(|o| *o += 1);
                            }
                        }
                    >
                        "›"
                    </button>
                </div>
            </header>
            <div class="carousel-track">
                {move || {
                    let start = offset.get();
                    gigs.with_value(|gigs| {
                        gigs.iter()
                            .skip(start)
                            .take(CARDS_PER_PAGE)
                            .cloned()
                            .map(|gig| view! { <GigCard gig=gig /> })
                            .collect_view()
                    })
                }}
            </div>
        </section>
    }
}
