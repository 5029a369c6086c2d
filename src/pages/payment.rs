//! Payment Page
//!
//! Card form for the pending order. Submitting validates immediately, then
//! shows a short processing state before the order is confirmed.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{input_class, FieldError};
use crate::context::{use_app_context, use_config, Page};
use crate::error::FieldErrors;
use crate::format::{format_card_number, format_expiry, format_money, format_security_code};
use crate::store::{store_begin_payment, store_submit_payment, use_app_store, AppStateStoreFields};
use crate::validation::{validate_payment, PaymentForm};

#[component]
pub fn PaymentPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();
    let store = use_app_store();

    if store.order_summary().with_untracked(Option::is_none) {
        config.with_value(|config| store_begin_payment(&store, config));
    }

    let (form, set_form) = signal(PaymentForm::default());
    let (errors, set_errors) = signal(FieldErrors::new());
    let (processing, set_processing) = signal(false);
    let (failure, set_failure) = signal::<Option<String>>(None);

    let money = move |amount: f64| config.with_value(|c| format_money(&c.currency_symbol, amount));

    // Update one field and drop its stale error
    let edit = move |field: &'static str, apply: fn(&mut PaymentForm, String), value: String| {
        set_form.update(|form| apply(form, value));
        set_errors.update(|e| e.clear(field));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if processing.get() {
            return;
        }
        let submitted = form.get();
        let field_errors = validate_payment(&submitted);
        if !field_errors.is_empty() {
            web_sys::console::log_1(&format!("[PAYMENT] {} field(s) invalid", field_errors.len()).into());
            set_errors.set(field_errors);
            return;
        }

        set_processing.set(true);
        set_failure.set(None);
        let delay = config.with_value(|c| c.payment_processing_ms);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            let result = config.with_value(|config| store_submit_payment(&store, &submitted, config));
            set_processing.set(false);
            match result {
                Ok(_) => ctx.navigate(Page::PaymentCompleted),
                Err(err) => {
                    set_errors.set(err.field_errors());
                    set_failure.set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <div class="page payment-page">
            <header class="page-header with-back">
                <button type="button" class="icon-btn" aria-label="Back" on:click=move |_| ctx.navigate(Page::Checkout)>"‹"</button>
                <h1>"Payment"</h1>
            </header>

            <div class="checkout-layout">
                <form class="card payment-form" on:submit=on_submit novalidate>
                    <h2 class="card-title">"Payment Options"</h2>
                    <label class="radio">
                        <input type="radio" name="payment-option" checked />
                        " Credit & Debit Cards"
                    </label>

                    <label class="form-field">
                        <span>"Card Number *"</span>
                        <input
                            class=input_class(errors, "card_number")
                            inputmode="numeric"
                            placeholder="1234 5678 9012 3456"
                            prop:value=move || form.with(|f| f.card_number.clone())
                            on:input=move |ev| edit("card_number", |f, v| f.card_number = format_card_number(&v), event_target_value(&ev))
                        />
                        <FieldError errors=errors field="card_number" />
                    </label>
                    <div class="form-row">
                        <label class="form-field">
                            <span>"Expiration Date *"</span>
                            <input
                                class=input_class(errors, "expiry_date")
                                placeholder="MM/YY"
                                prop:value=move || form.with(|f| f.expiry_date.clone())
                                on:input=move |ev| edit("expiry_date", |f, v| f.expiry_date = format_expiry(&v), event_target_value(&ev))
                            />
                            <FieldError errors=errors field="expiry_date" />
                        </label>
                        <label class="form-field">
                            <span>"Security Code *"</span>
                            <input
                                class=input_class(errors, "security_code")
                                placeholder="123"
                                prop:value=move || form.with(|f| f.security_code.clone())
                                on:input=move |ev| edit("security_code", |f, v| f.security_code = format_security_code(&v), event_target_value(&ev))
                            />
                            <FieldError errors=errors field="security_code" />
                        </label>
                    </div>
                    <div class="form-row">
                        <label class="form-field">
                            <span>"First Name *"</span>
                            <input
                                class=input_class(errors, "first_name")
                                placeholder="John"
                                prop:value=move || form.with(|f| f.first_name.clone())
                                on:input=move |ev| edit("first_name", |f, v| f.first_name = v, event_target_value(&ev))
                            />
                            <FieldError errors=errors field="first_name" />
                        </label>
                        <label class="form-field">
                            <span>"Last Name *"</span>
                            <input
                                class=input_class(errors, "last_name")
                                placeholder="Doe"
                                prop:value=move || form.with(|f| f.last_name.clone())
                                on:input=move |ev| edit("last_name", |f, v| f.last_name = v, event_target_value(&ev))
                            />
                            <FieldError errors=errors field="last_name" />
                        </label>
                    </div>
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.save_as_default)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                set_form.update(|f| f.save_as_default = checked);
                            }
                        />
                        " Save this card as my default payment method"
                    </label>

                    {move || failure.get().map(|message| view! { <p class="form-error">{message}</p> })}

                    <button type="submit" class="btn btn-block" disabled=move || processing.get()>
                        {move || {
                            if processing.get() {
                                "Processing...".to_string()
                            } else {
                                let total = store.order_summary().with(|s| s.as_ref().map(|s| s.total).unwrap_or_default());
                                format!("Confirm & Pay {}", money(total))
                            }
                        }}
                    </button>
                    <p class="hint">"Your payment details are only kept for this session."</p>
                </form>

                <aside class="card order-summary">
                    <h2 class="card-title">"Order Summary"</h2>
                    {move || store.order_summary().get().map(|summary| view! {
                        <h3>{summary.gig_title.clone()}</h3>
                        <p class="muted">{format!("{} · qty {}", summary.package_name, summary.quantity)}</p>
                        <dl class="summary-lines">
                            <dt>"Package"</dt><dd>{money(summary.package_price * f64::from(summary.quantity))}</dd>
                            {summary.extras.iter().map(|extra| view! {
                                <dt>{extra.name.clone()}</dt><dd>{money(extra.price)}</dd>
                            }).collect_view()}
                            <dt>"Service fee"</dt><dd>{money(summary.service_fee)}</dd>
                            {(summary.discount > 0.0).then(|| view! {
                                <dt>"Discount"</dt><dd class="discount">"−" {money(summary.discount)}</dd>
                            })}
                            <dt class="total">"Total"</dt><dd class="total">{money(summary.total)}</dd>
                        </dl>
                        <p class="muted">{format!("{} delivery · {} revisions", summary.delivery_time, summary.revisions)}</p>
                    })}
                </aside>
            </div>
        </div>
    }
}
