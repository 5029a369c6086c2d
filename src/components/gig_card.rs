//! Gig Card Component

use leptos::prelude::*;

use crate::context::{use_app_context, use_config, Page};
use crate::models::Gig;

#[component]
pub fn GigCard(gig: Gig) -> impl IntoView {
    let ctx = use_app_context();
    let symbol = use_config().with_value(|c| c.currency_symbol.clone());
    let (favorited, set_favorited) = signal(gig.is_favorited);
    let id = gig.id;

    view! {
        <article class="gig-card" on:click=move |_| ctx.navigate(Page::GigDetail(id))>
            <div class="gig-cover">
                <img src=gig.cover_image.clone() alt=gig.title.clone() loading="lazy" />
                <button
                    type="button"
                    class=move || if favorited.get() { "favorite-btn active" } else { "favorite-btn" }
                    aria-label="Save to favorites"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_favorited.update(|f| *f = !*f);
                    }
                >
                    "♥"
                </button>
            </div>
            <div class="gig-body">
                <p class="gig-seller">{gig.seller_name.clone()}</p>
                <h3 class="gig-title">{gig.title.clone()}</h3>
                <p class="gig-rating">
                    <span class="star filled">"★"</span>
                    <strong>{format!("{:.1}", gig.rating)}</strong>
                    <span class="muted">{format!("({})", gig.review_count)}</span>
                </p>
                <p class="gig-price">
                    "From " <strong>{format!("{}{}", symbol, gig.price)}</strong>
                </p>
            </div>
        </article>
    }
}
