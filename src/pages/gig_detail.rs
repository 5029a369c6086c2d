//! Gig Detail Page

use collection_view::{CollectionView, CriteriaPatch, ALL};
use leptos::prelude::*;

use crate::catalog::average_rating;
use crate::components::{OptionSelector, Stars};
use crate::context::{use_app_context, use_config, Page};
use crate::mock;
use crate::models::Review;
use crate::store::{use_app_store, AppStateStoreFields};

const STAR_FILTERS: &[(&str, &str)] = &[(ALL, "All"), ("5", "5 stars"), ("4", "4 stars"), ("3", "3 stars")];

/// Reviews shown inline before "See all reviews"
const PREVIEW_REVIEWS: usize = 3;

#[component]
pub fn GigDetailPage(gig_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();
    let store = use_app_store();
    let detail = mock::gig_detail(gig_id);
    let symbol = config.with_value(|c| c.currency_symbol.clone());
    let (star_filter, set_star_filter) = signal(ALL.to_string());

    let reviews = move || {
        let source = store.reviews().with(|view| view.source().to_vec());
        let as_of = store.with(|state| state.as_of());
        CollectionView::new(source, as_of)
            .with_criteria(CriteriaPatch::new().facet("stars", &star_filter.get()))
            .snapshot()
    };
    let average = store.reviews().with_untracked(|view| average_rating(view.source())).unwrap_or(0.0);
    let review_total = store.reviews().with_untracked(|view| view.len());

    let gig = detail.gig.clone();
    let seller = detail.seller.clone();

    view! {
        <div class="page gig-detail-page">
            <div class="gig-detail-layout">
                <main class="gig-detail-main">
                    <p class="breadcrumb muted">{gig.category.label()}</p>
                    <h1>{gig.title.clone()}</h1>
                    <p class="gig-meta">
                        <strong>{gig.seller_name.clone()}</strong>
                        <Stars rating=gig.rating />
                        <span>{format!("{:.1} ({})", gig.rating, gig.review_count)}</span>
                    </p>
                    <img class="gig-hero" src=gig.cover_image.clone() alt=gig.title.clone() />

                    <section class="card">
                        <h2>"About"</h2>
                        <h3>"About Me"</h3>
                        <p>{seller.bio.clone()}</p>
                        <h3>"About This Gig"</h3>
                        <p>{detail.description.clone()}</p>
                        <h3>"Work Process"</h3>
                        <p>{detail.work_process.clone()}</p>
                    </section>

                    <section class="card">
                        <h2>"Compare Packages"</h2>
                        <div class="package-grid">
                            {detail.packages.iter().enumerate().map(|(index, package)| {
                                let featured = index == 1;
                                view! {
                                    <div class=if featured { "package featured" } else { "package" }>
                                        <h3>{package.name.clone()}</h3>
                                        <p class="package-price">{format!("{}{}", symbol, package.price)}</p>
                                        <ul>
                                            {package.features.iter().map(|f| view! { <li>{f.clone()}</li> }).collect_view()}
                                        </ul>
                                        <button
                                            type="button"
                                            class=if featured { "btn btn-block" } else { "btn btn-outline btn-block" }
                                            on:click=move |_| ctx.navigate(Page::Checkout)
                                        >
                                            "Select"
                                        </button>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </section>

                    <section class="card">
                        <header class="card-header">
                            <h2>{format!("Reviews ({}) · {:.1}", review_total, average)}</h2>
                            <OptionSelector
                                options=STAR_FILTERS
                                current=star_filter
                                on_change=move |value: String| set_star_filter.set(value)
                            />
                        </header>
                        {move || {
                            let shown = reviews();
                            if shown.is_empty() {
                                view! { <p class="muted">"No reviews with this rating yet."</p> }.into_any()
                            } else {
                                shown
                                    .into_iter()
                                    .take(PREVIEW_REVIEWS)
                                    .map(|review| view! { <ReviewItem review=review /> })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                        <button type="button" class="link-btn" on:click=move |_| ctx.navigate(Page::Reviews(gig_id))>
                            "See all reviews"
                        </button>
                    </section>

                    <section class="card">
                        <h2>"Related Tags"</h2>
                        <div class="tag-list">
                            {detail.tags.iter().map(|tag| view! { <span class="tag">{tag.clone()}</span> }).collect_view()}
                        </div>
                    </section>
                </main>

                <aside class="gig-detail-sidebar">
                    <button type="button" class="btn btn-block" on:click=move |_| ctx.navigate(Page::Checkout)>
                        {format!("Continue ({}{})", symbol, gig.price)}
                    </button>
                    <div class="card seller-card">
                        <h3>{seller.name.clone()}</h3>
                        <p><Stars rating=seller.rating /> {format!(" {:.1} ({})", seller.rating, seller.review_count)}</p>
                        <dl class="details-grid">
                            <dt>"From"</dt><dd>{seller.country.clone()}</dd>
                            <dt>"Last delivery"</dt><dd>{seller.last_delivery.clone()}</dd>
                        </dl>
                        <button type="button" class="btn btn-outline btn-block" on:click=move |_| ctx.navigate(Page::Messages)>
                            "Contact me"
                        </button>
                    </div>
                </aside>
            </div>
        </div>
    }
}

#[component]
pub fn ReviewItem(review: Review) -> impl IntoView {
    view! {
        <article class="review">
            <header class="review-header">
                <strong>{review.buyer_name.clone()}</strong>
                <Stars rating=f32::from(review.rating) />
                <span class="muted">{review.time_ago()}</span>
            </header>
            <p>{review.comment.clone()}</p>
        </article>
    }
}
