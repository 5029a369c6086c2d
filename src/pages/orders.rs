//! Orders Page
//!
//! Order history with search, status, date and sort filters, plus a detail
//! panel where finished orders can be rated and open ones disputed.

use collection_view::{CriteriaPatch, SortSpec, ALL};
use leptos::prelude::*;

use crate::commands::{can_dispute, can_rate, DisputeArgs, RateArgs, DISPUTE_REASONS};
use crate::components::{FieldError, StarInput, StatusBadge};
use crate::context::{use_app_context, use_config, Page};
use crate::error::FieldErrors;
use crate::format::format_money;
use crate::models::OrderStatus;
use crate::store::{store_file_dispute, store_rate_order, use_app_store, AppStateStoreFields};

pub const DATE_RANGE_OPTIONS: &[(&str, &str)] = &[
    ("all", "All Time"),
    ("30days", "Last 30 Days"),
    ("90days", "Last 90 Days"),
    ("year", "This Year"),
];

const ORDER_SORT_OPTIONS: &[(&str, &str)] = &[
    ("default", "Default order"),
    ("newest", "Newest first"),
    ("oldest", "Oldest first"),
    ("price-high", "Price: high to low"),
    ("price-low", "Price: low to high"),
];

fn order_sort_patch(option: &str) -> CriteriaPatch {
    match option {
        "newest" => CriteriaPatch::new().sort(SortSpec::descending("date")),
        "oldest" => CriteriaPatch::new().sort(SortSpec::ascending("date")),
        "price-high" => CriteriaPatch::new().sort(SortSpec::descending("price")),
        "price-low" => CriteriaPatch::new().sort(SortSpec::ascending("price")),
        _ => CriteriaPatch::new().clear_sort(),
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();
    let store = use_app_store();
    let (selected_order, set_selected_order) = signal::<Option<u32>>(None);
    let (sort_option, set_sort_option) = signal(String::from("default"));

    let update = move |patch: CriteriaPatch| store.orders().update(|view| view.set_criteria(patch));

    let rows = move || store.orders().with(|view| view.snapshot());
    let is_filtered = move || store.orders().with(|view| view.is_filtered());
    let criteria = move || store.orders().with(|view| view.criteria().clone());

    let clear_filters = move |_| {
        set_sort_option.set("default".to_string());
        store.orders().update(|view| view.reset_criteria());
    };

    let symbol = config.with_value(|c| c.currency_symbol.clone());

    view! {
        <div class="page orders-page">
            <header class="page-header">
                <h1>"My Orders"</h1>
                <p class="muted">"Track and manage your service orders"</p>
            </header>

            <section class="card filters">
                <h2 class="card-title">"Filters & Search"</h2>
                <div class="filter-grid">
                    <input
                        type="search"
                        class="form-input"
                        placeholder="Search by order number, gig title, or seller name"
                        prop:value=move || criteria().search
                        on:input=move |ev| update(CriteriaPatch::new().search(event_target_value(&ev)))
                    />
                    <select
                        class="form-select"
                        prop:value=move || criteria().facet("status").key().to_string()
                        on:change=move |ev| update(CriteriaPatch::new().facet("status", &event_target_value(&ev)))
                    >
                        <option value=ALL>"All Status"</option>
                        {OrderStatus::ALL.iter().map(|status| view! {
                            <option value=status.as_str()>{status.label()}</option>
                        }).collect_view()}
                    </select>
                    <select
                        class="form-select"
                        prop:value=move || criteria().date_range.key()
                        on:change=move |ev| update(CriteriaPatch::new().date_range(event_target_value(&ev).as_str()))
                    >
                        {DATE_RANGE_OPTIONS.iter().map(|(value, label)| view! {
                            <option value=*value>{*label}</option>
                        }).collect_view()}
                    </select>
                    <select
                        class="form-select"
                        prop:value=move || sort_option.get()
                        on:change=move |ev| {
                            let option = event_target_value(&ev);
                            update(order_sort_patch(&option));
                            set_sort_option.set(option);
                        }
                    >
                        {ORDER_SORT_OPTIONS.iter().map(|(value, label)| view! {
                            <option value=*value>{*label}</option>
                        }).collect_view()}
                    </select>
                </div>
            </section>

            <section class="card">
                <h2 class="card-title">"Order History"</h2>
                {move || {
                    let orders = rows();
                    if orders.is_empty() {
                        let filtered = is_filtered();
                        view! {
                            <div class="empty-state">
                                <h3>
                                    {if filtered { "No orders found for your criteria" } else { "You haven't placed any orders yet" }}
                                </h3>
                                <p class="muted">
                                    {if filtered { "Try adjusting your search or filter criteria" } else { "Ready to find your next service?" }}
                                </p>
                                {if filtered {
                                    view! { <button type="button" class="btn btn-outline" on:click=clear_filters>"Clear filters"</button> }.into_any()
                                } else {
                                    view! { <button type="button" class="btn" on:click=move |_| ctx.navigate(Page::Browse)>"Browse Services"</button> }.into_any()
                                }}
                            </div>
                        }.into_any()
                    } else {
                        let symbol = symbol.clone();
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Order Date"</th>
                                        <th>"Service / Gig"</th>
                                        <th>"Order Number"</th>
                                        <th>"Status"</th>
                                        <th>"Price"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {orders.into_iter().map(|order| {
                                        let id = order.id;
                                        view! {
                                            <tr>
                                                <td>{order.date.format("%m/%d/%Y").to_string()}</td>
                                                <td>
                                                    <p class="strong">{order.gig_title.clone()}</p>
                                                    <p class="muted">"by " {order.seller_name.clone()}</p>
                                                </td>
                                                <td class="mono">{order.order_number.clone()}</td>
                                                <td><StatusBadge status=order.status /></td>
                                                <td>{format_money(&symbol, order.price)}</td>
                                                <td class="actions">
                                                    <button type="button" class="link-btn" on:click=move |_| set_selected_order.set(Some(id))>
                                                        "View details"
                                                    </button>
                                                    <button type="button" class="link-btn" on:click=move |_| ctx.navigate(Page::Messages)>
                                                        "Message"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
                    }
                }}
            </section>

            {move || selected_order.get().map(|id| view! {
                <OrderDetails order_id=id on_close=Callback::new(move |_| set_selected_order.set(None)) />
            })}
        </div>
    }
}

/// Modal with the full order, its dispute and its rating
#[component]
fn OrderDetails(order_id: u32, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let config = use_config();
    let store = use_app_store();
    let order = move || store.orders().with(|view| view.find(&order_id).cloned());
    let symbol = config.with_value(|c| c.currency_symbol.clone());

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <button type="button" class="modal-close" aria-label="Close" on:click=move |_| on_close.run(())>"×"</button>
                {move || order().map(|order| {
                    let symbol = symbol.clone();
                    view! {
                        <h2>"Order " {order.order_number.clone()}</h2>
                        <dl class="details-grid">
                            <dt>"Gig"</dt><dd>{order.gig_title.clone()}</dd>
                            <dt>"Seller"</dt><dd>{order.seller_name.clone()}</dd>
                            <dt>"Package"</dt><dd>{order.package_name.clone()}</dd>
                            <dt>"Ordered"</dt><dd>{order.date.format("%m/%d/%Y").to_string()}</dd>
                            <dt>"Delivery"</dt><dd>{order.delivery_date.format("%m/%d/%Y").to_string()}</dd>
                            <dt>"Status"</dt><dd><StatusBadge status=order.status /></dd>
                            <dt>"Total"</dt><dd>{format_money(&symbol, order.price)}</dd>
                        </dl>
                        <p>{order.description.clone()}</p>

                        {order.status.is_finished().then(|| view! {
                            <button type="button" class="btn btn-outline">"Download files"</button>
                        })}

                        {order.dispute.clone().map(|dispute| {
                            let reason = DISPUTE_REASONS
                                .iter()
                                .find(|(value, _)| *value == dispute.reason)
                                .map(|(_, label)| *label)
                                .unwrap_or("Other");
                            view! {
                                <div class="notice notice-warning">
                                    <strong>"Dispute open: " {reason}</strong>
                                    <p>{dispute.description}</p>
                                </div>
                            }
                        })}

                        {order.rating.clone().map(|rating| view! {
                            <div class="notice">
                                <strong>{format!("You rated this order {} / 5", rating.stars)}</strong>
                                {(!rating.comment.is_empty()).then(|| view! { <p>{rating.comment}</p> })}
                            </div>
                        })}

                        {can_rate(&order).then(|| view! { <RateOrderForm order_id=order_id /> })}
                        {can_dispute(&order).then(|| view! { <DisputeForm order_id=order_id /> })}
                    }
                })}
            </div>
        </div>
    }
}

#[component]
fn RateOrderForm(order_id: u32) -> impl IntoView {
    let config = use_config();
    let store = use_app_store();
    let (stars, set_stars) = signal(0u8);
    let (comment, set_comment) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::new());
    let (failure, set_failure) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let args = RateArgs { stars: stars.get(), comment: comment.get() };
        match config.with_value(|config| store_rate_order(&store, order_id, args, config)) {
            Ok(()) => web_sys::console::log_1(&format!("[ORDERS] Rated order {}", order_id).into()),
            Err(err) => {
                set_errors.set(err.field_errors());
                set_failure.set(Some(err.to_string()));
            }
        }
    };

    view! {
        <form class="order-form" on:submit=on_submit>
            <h3>"Rate this order"</h3>
            <StarInput value=stars on_change=move |value| {
                set_stars.set(value);
                set_errors.update(|e| e.clear("stars"));
            } />
            <FieldError errors=errors field="stars" />
            <textarea
                class="form-input"
                rows="3"
                placeholder="Share your experience (optional)"
                prop:value=move || comment.get()
                on:input=move |ev| set_comment.set(event_target_value(&ev))
            ></textarea>
            <FieldError errors=errors field="comment" />
            {move || failure.get().map(|message| view! { <p class="form-error">{message}</p> })}
            <button type="submit" class="btn">"Submit rating"</button>
        </form>
    }
}

#[component]
fn DisputeForm(order_id: u32) -> impl IntoView {
    let config = use_config();
    let store = use_app_store();
    let (open, set_open) = signal(false);
    let (reason, set_reason) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::new());
    let (failure, set_failure) = signal::<Option<String>>(None);
    let dispute_max = config.with_value(|c| c.limits.dispute_max);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let args = DisputeArgs { reason: reason.get(), description: description.get() };
        match config.with_value(|config| store_file_dispute(&store, order_id, args, config)) {
            Ok(()) => set_open.set(false),
            Err(err) => {
                set_errors.set(err.field_errors());
                set_failure.set(Some(err.to_string()));
            }
        }
    };

    view! {
        <Show
            when=move || open.get()
            fallback=move || view! {
                <button type="button" class="link-btn danger" on:click=move |_| set_open.set(true)>"Open a dispute"</button>
            }
        >
            <form class="order-form" on:submit=on_submit>
                <h3>"Open a dispute"</h3>
                <select
                    class="form-select"
                    prop:value=move || reason.get()
                    on:change=move |ev| {
                        set_reason.set(event_target_value(&ev));
                        set_errors.update(|e| e.clear("reason"));
                    }
                >
                    <option value="">"Choose a reason"</option>
                    {DISPUTE_REASONS.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
                <FieldError errors=errors field="reason" />
                <textarea
                    class="form-input"
                    rows="4"
                    placeholder="Describe the problem"
                    prop:value=move || description.get()
                    on:input=move |ev| {
                        set_description.set(event_target_value(&ev));
                        set_errors.update(|e| e.clear("description"));
                    }
                ></textarea>
                <p class="hint">
                    {move || format!("{} / {}", description.get().trim().chars().count(), dispute_max)}
                </p>
                <FieldError errors=errors field="description" />
                {move || failure.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <div class="form-actions">
                    <button type="button" class="btn btn-outline" on:click=move |_| set_open.set(false)>"Cancel"</button>
                    <button type="submit" class="btn btn-danger">"Submit dispute"</button>
                </div>
            </form>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use chrono::NaiveDate;
    use collection_view::CollectionView;

    #[test]
    fn test_order_sort_options() {
        let ids = |option: &str| {
            CollectionView::new(mock::orders(), NaiveDate::from_ymd_opt(2024, 3, 20).unwrap())
                .with_criteria(order_sort_patch(option))
                .derive()
                .iter()
                .map(|o| o.id)
                .collect::<Vec<_>>()
        };
        assert_eq!(ids("default"), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids("oldest"), vec![5, 4, 3, 2, 1]);
        assert_eq!(ids("price-high")[0], 5);
    }
}
