//! Payment Completed Page

use leptos::prelude::*;

use crate::context::{use_app_context, use_config, Page};
use crate::format::format_money;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PaymentCompletedPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();
    let store = use_app_store();
    let money = move |amount: f64| config.with_value(|c| format_money(&c.currency_symbol, amount));

    view! {
        <div class="page payment-completed-page">
            {move || match store.last_receipt().get() {
                None => view! {
                    <div class="empty-state">
                        <h3>"No payment to show"</h3>
                        <button type="button" class="btn" on:click=move |_| ctx.navigate(Page::Browse)>"Browse Services"</button>
                    </div>
                }.into_any(),
                Some(receipt) => {
                    let summary = receipt.summary.clone();
                    view! {
                        <header class="success-header">
                            <span class="success-icon">"✓"</span>
                            <h1>"Payment Successful!"</h1>
                            <p class="muted">"Your order has been placed and the seller has been notified."</p>
                        </header>

                        <section class="card receipt">
                            <div class="receipt-grid">
                                <div>
                                    <h3>"Order Information"</h3>
                                    <dl class="details-grid">
                                        <dt>"Order ID"</dt><dd class="mono">{receipt.order_number.clone()}</dd>
                                        <dt>"Date"</dt><dd>{receipt.date.format("%B %-d, %Y").to_string()}</dd>
                                    </dl>
                                </div>
                                <div>
                                    <h3>"Payment Information"</h3>
                                    <dl class="details-grid">
                                        <dt>"Amount"</dt><dd>{money(receipt.amount)}</dd>
                                        <dt>"Method"</dt><dd>{receipt.method.clone()}</dd>
                                        <dt>"Transaction ID"</dt><dd class="mono">{receipt.transaction_id.clone()}</dd>
                                    </dl>
                                </div>
                            </div>

                            <h3>"Service Details"</h3>
                            <h4>{summary.gig_title.clone()}</h4>
                            <p class="muted">{format!("by {} · {} · qty {}", summary.seller_name, summary.package_name, summary.quantity)}</p>
                            {(!summary.extras.is_empty()).then(|| view! {
                                <ul class="check-list">
                                    {summary.extras.iter().map(|e| view! { <li>{e.name.clone()}</li> }).collect_view()}
                                </ul>
                            })}

                            <div class="notice">
                                <h4>"Estimated Delivery"</h4>
                                <p>{format!("Within {} · {} revisions included", summary.delivery_time, summary.revisions)}</p>
                            </div>
                        </section>

                        <section class="next-steps">
                            <div class="card">
                                <h4>"Stay in Touch"</h4>
                                <p class="muted">"Message your seller with any details about the order."</p>
                                <button type="button" class="btn btn-outline" on:click=move |_| ctx.navigate(Page::Messages)>"Message Seller"</button>
                            </div>
                            <div class="card">
                                <h4>"Track Progress"</h4>
                                <p class="muted">"Follow the order status from your orders page."</p>
                                <button type="button" class="btn btn-outline" on:click=move |_| ctx.navigate(Page::Orders)>"View Orders"</button>
                            </div>
                            <div class="card">
                                <h4>"Get Invoice"</h4>
                                <p class="muted">"Your invoice is listed in the billing history."</p>
                                <button type="button" class="btn btn-outline" on:click=move |_| ctx.navigate(Page::Billing)>"Billing"</button>
                            </div>
                        </section>

                        <div class="form-actions">
                            <button type="button" class="btn" on:click=move |_| ctx.navigate(Page::Orders)>"Go to My Orders"</button>
                            <button type="button" class="btn btn-outline" on:click=move |_| ctx.navigate(Page::Browse)>"Continue Browsing"</button>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
