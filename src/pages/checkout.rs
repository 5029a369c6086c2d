//! Checkout Page
//!
//! Quantity, extras and promo code for the selected package, with a live
//! order summary.

use leptos::prelude::*;

use crate::components::FieldError;
use crate::context::{use_app_context, use_config, Page};
use crate::error::FieldErrors;
use crate::format::format_money;
use crate::mock;
use crate::store::{store_begin_payment, use_app_store, AppStateStoreFields};

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();
    let store = use_app_store();
    let package = StoredValue::new(mock::checkout_package());
    let extras = StoredValue::new(mock::extras());
    let (promo_input, set_promo_input) = signal(String::new());
    let (promo_errors, set_promo_errors) = signal(FieldErrors::new());

    let money = move |amount: f64| config.with_value(|c| format_money(&c.currency_symbol, amount));
    let breakdown = move || {
        let checkout = store.checkout().get();
        package.with_value(|package| {
            extras.with_value(|extras| config.with_value(|config| checkout.breakdown(package, extras, config)))
        })
    };

    let apply_promo = move |_| {
        let code = promo_input.get();
        let result = config.with_value(|config| {
            let mut outcome = Ok(());
            store.checkout().update(|checkout| outcome = checkout.apply_promo_code(&code, config));
            outcome
        });
        match result {
            Ok(()) => set_promo_errors.set(FieldErrors::new()),
            Err(err) => {
                let mut errors = FieldErrors::new();
                errors.insert("promo", err.to_string());
                set_promo_errors.set(errors);
            }
        }
    };

    let continue_to_payment = move |_| {
        config.with_value(|config| store_begin_payment(&store, config));
        ctx.navigate(Page::Payment);
    };

    let p = package.get_value();

    view! {
        <div class="page checkout-page">
            <header class="page-header with-back">
                <button type="button" class="icon-btn" aria-label="Back" on:click=move |_| ctx.navigate(Page::Browse)>"‹"</button>
                <h1>"Checkout"</h1>
            </header>

            <div class="checkout-layout">
                <main>
                    <section class="card">
                        <h3>{p.gig_title.clone()}</h3>
                        <p class="muted">"by " {p.seller_name.clone()}</p>
                        <div class="package-line">
                            <span class="strong">{p.package_name.clone()}</span>
                            <span>{money(p.price)}</span>
                        </div>
                        <div class="quantity">
                            <span>"Quantity"</span>
                            <button
                                type="button"
                                class="icon-btn"
                                aria-label="Decrease quantity"
                                disabled=move || store.checkout().with(|c| c.quantity <= 1)
                                on:click=move |_| store.checkout().update(|c| c.decrement())
                            >
                                "−"
                            </button>
                            <span class="quantity-value">{move || store.checkout().with(|c| c.quantity)}</span>
                            <button
                                type="button"
                                class="icon-btn"
                                aria-label="Increase quantity"
                                on:click=move |_| store.checkout().update(|c| c.increment())
                            >
                                "+"
                            </button>
                        </div>
                        <h4>"What's included:"</h4>
                        <ul class="check-list">
                            {p.includes.iter().map(|item| view! { <li>{item.clone()}</li> }).collect_view()}
                        </ul>
                        <p class="muted">{format!("{} delivery · {} revisions", p.delivery_time, p.revisions)}</p>
                    </section>

                    <section class="card">
                        <h2 class="card-title">"Add extras"</h2>
                        {extras.get_value().into_iter().map(|extra| {
                            let id = extra.id;
                            let input_id = format!("extra-{}", id);
                            let label_for = input_id.clone();
                            view! {
                                <label class="extra" for=label_for>
                                    <input
                                        id=input_id
                                        type="checkbox"
                                        prop:checked=move || store.checkout().with(|c| c.is_selected(id))
                                        on:change=move |_| store.checkout().update(|c| c.toggle_extra(id))
                                    />
                                    <span class="extra-name">{extra.name.clone()}</span>
                                    <span class="extra-price">"+" {money(extra.price)}</span>
                                </label>
                            }
                        }).collect_view()}
                    </section>
                </main>

                <aside class="card order-summary">
                    <h2 class="card-title">"Order Summary"</h2>
                    <dl class="summary-lines">
                        <dt>"Subtotal"</dt><dd>{move || money(breakdown().subtotal)}</dd>
                        <Show when=move || { breakdown().extras_total > 0.0 }>
                            <dt>"Extras"</dt><dd>{move || money(breakdown().extras_total)}</dd>
                        </Show>
                        <dt>"Service fee"</dt><dd>{move || money(breakdown().service_fee)}</dd>
                        <Show when=move || { breakdown().discount > 0.0 }>
                            <dt>"Discount"</dt><dd class="discount">"−" {move || money(breakdown().discount)}</dd>
                        </Show>
                        <dt class="total">"Total"</dt><dd class="total">{move || money(breakdown().total)}</dd>
                    </dl>

                    <label class="form-field">
                        <span>"Promo Code"</span>
                        <div class="input-group">
                            <input
                                class="form-input"
                                placeholder="Enter code"
                                prop:value=move || promo_input.get()
                                disabled=move || store.checkout().with(|c| c.promo_applied)
                                on:input=move |ev| {
                                    set_promo_input.set(event_target_value(&ev));
                                    set_promo_errors.update(|e| e.clear("promo"));
                                }
                            />
                            <button
                                type="button"
                                class="btn btn-outline"
                                disabled=move || store.checkout().with(|c| c.promo_applied)
                                on:click=apply_promo
                            >
                                "Apply"
                            </button>
                        </div>
                        <FieldError errors=promo_errors field="promo" />
                        <Show when=move || store.checkout().with(|c| c.promo_applied)>
                            <p class="hint success">"Promo code applied"</p>
                        </Show>
                    </label>

                    <button type="button" class="btn btn-block" on:click=continue_to_payment>
                        "Continue to Payment"
                    </button>
                    <p class="hint">"You won't be charged yet"</p>
                </aside>
            </div>
        </div>
    }
}
