//! Billing Page
//!
//! Transaction history with filters, and the saved payment methods.

use collection_view::{CriteriaPatch, ALL};
use leptos::prelude::*;

use crate::components::{input_class, DeleteConfirmButton, FieldError, TabBar};
use crate::context::use_config;
use crate::error::FieldErrors;
use crate::format::{format_card_number, format_expiry, format_money, format_security_code};
use crate::models::{ServiceCategory, TransactionType};
use crate::pages::orders::DATE_RANGE_OPTIONS;
use crate::store::{
    store_add_payment_method, store_make_default, store_remove_payment_method, use_app_store, AppStateStoreFields,
};
use crate::validation::CardForm;

const BILLING_TABS: &[(&str, &str)] = &[("history", "Billing History"), ("methods", "Payment Methods")];

#[component]
pub fn BillingPage() -> impl IntoView {
    let (active_tab, set_active_tab) = signal("history");

    view! {
        <div class="page billing-page">
            <header class="page-header">
                <h1>"Billing"</h1>
                <p class="muted">"Manage your payments and billing information"</p>
            </header>
            <TabBar tabs=BILLING_TABS active=active_tab set_active=set_active_tab />
            {move || match active_tab.get() {
                "methods" => view! { <PaymentMethodsTab /> }.into_any(),
                _ => view! { <BillingHistoryTab /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn BillingHistoryTab() -> impl IntoView {
    let config = use_config();
    let store = use_app_store();
    let symbol = config.with_value(|c| c.currency_symbol.clone());

    let update = move |patch: CriteriaPatch| store.transactions().update(|view| view.set_criteria(patch));
    let criteria = move || store.transactions().with(|view| view.criteria().clone());
    let rows = move || store.transactions().with(|view| view.snapshot());

    view! {
        <section class="card filters">
            <div class="filter-grid">
                <input
                    type="search"
                    class="form-input"
                    placeholder="Search by invoice or order no."
                    prop:value=move || criteria().search
                    on:input=move |ev| update(CriteriaPatch::new().search(event_target_value(&ev)))
                />
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
                    prop:value=move || criteria().facet("type").key().to_string()
                    on:change=move |ev| update(CriteriaPatch::new().facet("type", &event_target_value(&ev)))
                >
                    <option value=ALL>"All"</option>
                    {[TransactionType::Payment, TransactionType::Refund].iter().map(|kind| view! {
                        <option value=kind.as_str()>{kind.label()}</option>
                    }).collect_view()}
                </select>
                <select
                    class="form-select"
                    prop:value=move || criteria().facet("service").key().to_string()
                    on:change=move |ev| update(CriteriaPatch::new().facet("service", &event_target_value(&ev)))
                >
                    <option value=ALL>"All Services"</option>
                    {ServiceCategory::ALL.iter().map(|category| view! {
                        <option value=category.as_str()>{category.label()}</option>
                    }).collect_view()}
                </select>
            </div>
        </section>

        <section class="card">
            {move || {
                let transactions = rows();
                if transactions.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <h3>"No transactions found"</h3>
                            <p class="muted">"Try adjusting your search or filter criteria"</p>
                            <button
                                type="button"
                                class="btn btn-outline"
                                on:click=move |_| store.transactions().update(|view| view.reset_criteria())
                            >
                                "Clear filters"
                            </button>
                        </div>
                    }.into_any();
                }
                let symbol = symbol.clone();
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Transaction"</th>
                                <th>"Service"</th>
                                <th>"Order"</th>
                                <th>"Total"</th>
                                <th>"PDF"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {transactions.into_iter().map(|tx| {
                                let amount = match tx.kind {
                                    TransactionType::Refund => -tx.total,
                                    TransactionType::Payment => tx.total,
                                };
                                view! {
                                    <tr>
                                        <td>{tx.date.format("%m/%d/%Y").to_string()}</td>
                                        <td class="mono">{tx.transaction_id.clone()}</td>
                                        <td>
                                            {tx.service.clone()}
                                            <span class=format!("type-badge type-{}", tx.kind.as_str())>{tx.kind.label()}</span>
                                        </td>
                                        <td class="mono">{tx.order_number.clone()}</td>
                                        <td class=if amount < 0.0 { "amount refund" } else { "amount" }>{format_money(&symbol, amount)}</td>
                                        <td><button type="button" class="icon-btn" aria-label="Download invoice">"⤓"</button></td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any()
            }}
        </section>
    }
}

#[component]
fn PaymentMethodsTab() -> impl IntoView {
    let store = use_app_store();
    let (adding, set_adding) = signal(false);
    let (failure, set_failure) = signal::<Option<String>>(None);

    let report = move |result: Result<(), String>| {
        if let Err(message) = result {
            web_sys::console::log_1(&format!("[BILLING] {}", message).into());
            set_failure.set(Some(message));
        } else {
            set_failure.set(None);
        }
    };

    view! {
        <section class="card">
            <header class="card-header">
                <h2 class="card-title">"Saved cards"</h2>
                <button type="button" class="btn" on:click=move |_| set_adding.update(|a| *a = !*a)>
                    {move || if adding.get() { "Cancel" } else { "Add payment method" }}
                </button>
            </header>

            <Show when=move || adding.get()>
                <AddCardForm on_added=move |_| set_adding.set(false) />
            </Show>

            {move || failure.get().map(|message| view! { <p class="form-error">{message}</p> })}

            <ul class="payment-methods">
                <For
                    each=move || store.payment_methods().get()
                    key=|method| (method.id, method.is_default)
                    children=move |method| {
                        let id = method.id;
                        view! {
                            <li class="payment-method">
                                <span class="card-badge">{method.brand.badge()}</span>
                                <div class="payment-method-info">
                                    <p class="strong">{method.display_name()}</p>
                                    <p class="muted">{format!("Expires {}/{}", method.expiry_month, method.expiry_year)}</p>
                                </div>
                                {if method.is_default {
                                    view! { <span class="default-badge">"Default"</span> }.into_any()
                                } else {
                                    view! {
                                        <button
                                            type="button"
                                            class="link-btn"
                                            on:click=move |_| report(store_make_default(&store, id).map_err(|e| e.to_string()))
                                        >
                                            "Make default"
                                        </button>
                                    }.into_any()
                                }}
                                <DeleteConfirmButton
                                    button_class="link-btn danger"
                                    prompt="Remove this card?"
                                    on_confirm=move |_| report(store_remove_payment_method(&store, id).map(|_| ()).map_err(|e| e.to_string()))
                                />
                            </li>
                        }
                    }
                />
            </ul>
            <Show when=move || store.payment_methods().with(|m| m.is_empty())>
                <p class="muted">"No saved payment methods yet."</p>
            </Show>
        </section>
    }
}

#[component]
fn AddCardForm(#[prop(into)] on_added: Callback<()>) -> impl IntoView {
    let store = use_app_store();
    let (number, set_number) = signal(String::new());
    let (expiry, set_expiry) = signal(String::new());
    let (cvc, set_cvc) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::new());

    let clear = move |field: &'static str| set_errors.update(|e| e.clear(field));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = CardForm { number: number.get(), expiry: expiry.get(), cvc: cvc.get(), name: name.get() };
        match store_add_payment_method(&store, &form) {
            Ok(_) => {
                set_errors.set(FieldErrors::new());
                on_added.run(());
            }
            Err(err) => set_errors.set(err.field_errors()),
        }
    };

    view! {
        <form class="card-form" on:submit=on_submit novalidate>
            <label class="form-field">
                <span>"Card number"</span>
                <input
                    class=input_class(errors, "number")
                    inputmode="numeric"
                    placeholder="1234 5678 9012 3456"
                    prop:value=move || number.get()
                    on:input=move |ev| {
                        set_number.set(format_card_number(&event_target_value(&ev)));
                        clear("number");
                    }
                />
                <FieldError errors=errors field="number" />
            </label>
            <div class="form-row">
                <label class="form-field">
                    <span>"Expiry"</span>
                    <input
                        class=input_class(errors, "expiry")
                        placeholder="MM/YY"
                        prop:value=move || expiry.get()
                        on:input=move |ev| {
                            set_expiry.set(format_expiry(&event_target_value(&ev)));
                            clear("expiry");
                        }
                    />
                    <FieldError errors=errors field="expiry" />
                </label>
                <label class="form-field">
                    <span>"CVC"</span>
                    <input
                        class=input_class(errors, "cvc")
                        placeholder="123"
                        prop:value=move || cvc.get()
                        on:input=move |ev| {
                            set_cvc.set(format_security_code(&event_target_value(&ev)));
                            clear("cvc");
                        }
                    />
                    <FieldError errors=errors field="cvc" />
                </label>
            </div>
            <label class="form-field">
                <span>"Cardholder name"</span>
                <input
                    class=input_class(errors, "name")
                    placeholder="John Doe"
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        set_name.set(event_target_value(&ev));
                        clear("name");
                    }
                />
                <FieldError errors=errors field="name" />
            </label>
            <button type="submit" class="btn btn-block">"Add card"</button>
        </form>
    }
}
