//! Reviews Page
//!
//! Every review of a gig with a sort choice and a star breakdown.

use leptos::prelude::*;

use crate::catalog::{average_rating, review_sort_patch, REVIEW_SORT_OPTIONS};
use crate::components::Stars;
use crate::context::{use_app_context, Page};
use crate::mock;
use crate::pages::gig_detail::ReviewItem;
use crate::store::{use_app_store, AppStateStoreFields};

/// Share of reviews with exactly `stars`, as a percentage
fn star_share(ratings: &[u8], stars: u8) -> u32 {
    if ratings.is_empty() {
        return 0;
    }
    let count = ratings.iter().filter(|r| **r == stars).count();
    (count * 100 / ratings.len()) as u32
}

#[component]
pub fn ReviewsPage(gig_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let gig_title = mock::gig_detail(gig_id).gig.title;
    let (sort_option, set_sort_option) = signal(String::from("most-relevant"));

    let rows = move || store.reviews().with(|view| view.snapshot());
    let ratings = move || store.reviews().with(|view| view.source().iter().map(|r| r.rating).collect::<Vec<_>>());
    let average = move || store.reviews().with(|view| average_rating(view.source()).unwrap_or(0.0));

    view! {
        <div class="page reviews-page">
            <button type="button" class="link-btn" on:click=move |_| ctx.navigate(Page::GigDetail(gig_id))>
                "‹ Back to gig"
            </button>
            <header class="page-header">
                <h1>"Reviews"</h1>
                <p class="muted">{gig_title}</p>
            </header>

            <section class="card review-summary">
                <div class="review-average">
                    <span class="big">{move || format!("{:.1}", average())}</span>
                    {move || view! { <Stars rating=average() /> }}
                    <span class="muted">{move || format!("{} reviews", ratings().len())}</span>
                </div>
                <ul class="star-breakdown">
                    {(1..=5u8).rev().map(|stars| view! {
                        <li>
                            <span>{format!("{} stars", stars)}</span>
                            <span class="bar"><span class="bar-fill" style:width=move || format!("{}%", star_share(&ratings(), stars))></span></span>
                            <span class="muted">{move || format!("{}%", star_share(&ratings(), stars))}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </section>

            <div class="reviews-toolbar">
                <label>
                    "Sort by "
                    <select
                        class="form-select"
                        prop:value=move || sort_option.get()
                        on:change=move |ev| {
                            let option = event_target_value(&ev);
                            store.reviews().update(|view| view.set_criteria(review_sort_patch(&option)));
                            set_sort_option.set(option);
                        }
                    >
                        {REVIEW_SORT_OPTIONS.iter().map(|(value, label)| view! {
                            <option value=*value>{*label}</option>
                        }).collect_view()}
                    </select>
                </label>
            </div>

            <section class="review-list">
                <For
                    each=rows
                    key=|review| review.id
                    children=|review| view! { <ReviewItem review=review /> }
                />
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_share() {
        let ratings = [5, 5, 4, 5, 4];
        assert_eq!(star_share(&ratings, 5), 60);
        assert_eq!(star_share(&ratings, 4), 40);
        assert_eq!(star_share(&ratings, 1), 0);
        assert_eq!(star_share(&[], 5), 0);
    }
}
