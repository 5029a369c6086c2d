//! Profile Page
//!
//! Profile details and billing information, each edited on a draft copy
//! that only replaces the stored values when it validates.

use collection_view::CollectionView;
use leptos::prelude::*;

use crate::commands;
use crate::components::{input_class, FieldError, MultiSelect};
use crate::error::FieldErrors;
use crate::mock;
use crate::models::{BillingInfo, ProfileData};
use crate::store::{use_app_store, AppStateStoreFields};

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// Edit / Cancel / Save controls for a card header
#[component]
fn EditControls(
    editing: ReadSignal<bool>,
    #[prop(into)] on_edit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_save: Callback<()>,
) -> impl IntoView {
    view! {
        <Show
            when=move || editing.get()
            fallback=move || view! { <button type="button" class="btn btn-outline btn-sm" on:click=move |_| on_edit.run(())>"Edit"</button> }
        >
            <div class="form-actions">
                <button type="button" class="btn btn-outline btn-sm" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                <button type="button" class="btn btn-sm" on:click=move |_| on_save.run(())>"Save"</button>
            </div>
        </Show>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = use_app_store();
    let (notice, set_notice) = signal::<Option<&'static str>>(None);

    view! {
        <div class="page profile-page">
            <header class="page-header">
                <h1>"Profile Settings"</h1>
                <p class="muted">"Manage your account and billing information"</p>
            </header>
            {move || notice.get().map(|message| view! { <p class="notice notice-success">{message}</p> })}

            <section class="card">
                <h2 class="card-title">"Profile Picture"</h2>
                <div class="avatar-row">
                    <span class="avatar large">{move || store.profile().with(|p| initials(&p.full_name))}</span>
                    <div>
                        <button type="button" class="btn btn-outline">"Change Picture"</button>
                        <p class="hint">"JPG, PNG or GIF. Max size of 2MB."</p>
                    </div>
                </div>
            </section>

            <ProfileDetails set_notice=set_notice />
            <BillingDetails set_notice=set_notice />
        </div>
    }
}

#[component]
fn ProfileDetails(set_notice: WriteSignal<Option<&'static str>>) -> impl IntoView {
    let store = use_app_store();
    let topics = StoredValue::new(CollectionView::new(
        mock::topic_options(),
        store.with_untracked(|state| state.as_of()),
    ));
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(store.profile().get_untracked());
    let (errors, set_errors) = signal(FieldErrors::new());

    let edit = move |field: &'static str, apply: fn(&mut ProfileData, String), value: String| {
        set_draft.update(|d| apply(d, value));
        set_errors.update(|e| e.clear(field));
    };

    let on_edit = move |_: ()| {
        set_draft.set(store.profile().get_untracked());
        set_notice.set(None);
        set_editing.set(true);
    };
    let on_cancel = move |_: ()| {
        set_errors.set(FieldErrors::new());
        set_editing.set(false);
    };
    let on_save = move |_: ()| {
        let form = draft.get_untracked();
        let mut result = Ok(());
        store.profile().update(|profile| result = commands::save_profile(profile, form));
        match result {
            Ok(()) => {
                set_errors.set(FieldErrors::new());
                set_editing.set(false);
                set_notice.set(Some("Your profile information has been saved successfully."));
            }
            Err(err) => set_errors.set(err.field_errors()),
        }
    };

    let topic_label = move |value: &str| {
        topics.with_value(|topics| {
            topics.find(&value.to_string()).map(|t| t.label.clone()).unwrap_or_else(|| value.to_string())
        })
    };

    view! {
        <section class="card">
            <header class="card-header">
                <h2 class="card-title">"Profile Details"</h2>
                <EditControls editing=editing on_edit=on_edit on_cancel=on_cancel on_save=on_save />
            </header>
            <Show
                when=move || editing.get()
                fallback=move || {
                    let profile = store.profile().get();
                    view! {
                        <dl class="details-grid">
                            <dt>"Full Name"</dt><dd>{profile.full_name.clone()}</dd>
                            <dt>"Email Address"</dt><dd>{profile.email.clone()}</dd>
                            <dt>"Phone Number"</dt><dd>{profile.phone.clone()}</dd>
                            <dt>"Interested Topics"</dt>
                            <dd class="tag-list">
                                {profile.interested_topics.iter().map(|t| view! { <span class="tag">{topic_label(t)}</span> }).collect_view()}
                            </dd>
                        </dl>
                    }
                }
            >
                <div class="form-row">
                    <label class="form-field">
                        <span>"Full Name"</span>
                        <input
                            class=input_class(errors, "full_name")
                            prop:value=move || draft.with(|d| d.full_name.clone())
                            on:input=move |ev| edit("full_name", |d, v| d.full_name = v, event_target_value(&ev))
                        />
                        <FieldError errors=errors field="full_name" />
                    </label>
                    <label class="form-field">
                        <span>"Email Address"</span>
                        <input
                            type="email"
                            class=input_class(errors, "email")
                            prop:value=move || draft.with(|d| d.email.clone())
                            on:input=move |ev| edit("email", |d, v| d.email = v, event_target_value(&ev))
                        />
                        <FieldError errors=errors field="email" />
                    </label>
                </div>
                <label class="form-field">
                    <span>"Phone Number"</span>
                    <input
                        type="tel"
                        class=input_class(errors, "phone")
                        prop:value=move || draft.with(|d| d.phone.clone())
                        on:input=move |ev| edit("phone", |d, v| d.phone = v, event_target_value(&ev))
                    />
                    <FieldError errors=errors field="phone" />
                </label>
                <div class="form-field">
                    <span>"Interested Topics/Categories"</span>
                    <MultiSelect
                        options=topics
                        selected=Signal::derive(move || draft.with(|d| d.interested_topics.clone()))
                        on_change={move |values: Vec<String>| set_draft.update(|d| d.interested_topics = values)}
                        placeholder="Select your areas of interest..."
                    />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn BillingDetails(set_notice: WriteSignal<Option<&'static str>>) -> impl IntoView {
    let store = use_app_store();
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(store.billing_info().get_untracked());
    let (errors, set_errors) = signal(FieldErrors::new());

    let edit = move |field: &'static str, apply: fn(&mut BillingInfo, String), value: String| {
        set_draft.update(|d| apply(d, value));
        set_errors.update(|e| e.clear(field));
    };

    let on_edit = move |_: ()| {
        set_draft.set(store.billing_info().get_untracked());
        set_notice.set(None);
        set_editing.set(true);
    };
    let on_cancel = move |_: ()| {
        set_errors.set(FieldErrors::new());
        set_editing.set(false);
    };
    let on_save = move |_: ()| {
        let form = draft.get_untracked();
        let mut result = Ok(());
        store.billing_info().update(|billing| result = commands::save_billing_info(billing, form));
        match result {
            Ok(()) => {
                set_errors.set(FieldErrors::new());
                set_editing.set(false);
                set_notice.set(Some("Your billing information has been saved successfully."));
            }
            Err(err) => set_errors.set(err.field_errors()),
        }
    };

    view! {
        <section class="card">
            <header class="card-header">
                <h2 class="card-title">"Billing Information"</h2>
                <EditControls editing=editing on_edit=on_edit on_cancel=on_cancel on_save=on_save />
            </header>
            <Show
                when=move || editing.get()
                fallback=move || {
                    let billing = store.billing_info().get();
                    let or_dash = |value: &str| if value.is_empty() { "—".to_string() } else { value.to_string() };
                    view! {
                        <dl class="details-grid">
                            <dt>"Full Name"</dt><dd>{billing.full_name.clone()}</dd>
                            <dt>"Company"</dt><dd>{or_dash(&billing.company_name)}</dd>
                            <dt>"Address"</dt>
                            <dd>{format!("{}, {}, {} {}, {}", billing.address, billing.city, billing.state, billing.zip_code, billing.country)}</dd>
                            <dt>"VAT Number"</dt><dd>{or_dash(&billing.vat_number)}</dd>
                            <dt>"Invoices"</dt>
                            <dd>{if billing.email_invoices { "Emailed to you" } else { "Not emailed" }}</dd>
                        </dl>
                    }
                }
            >
                <div class="form-row">
                    <label class="form-field">
                        <span>"Full Name"</span>
                        <input
                            class=input_class(errors, "billing_full_name")
                            prop:value=move || draft.with(|d| d.full_name.clone())
                            on:input=move |ev| edit("billing_full_name", |d, v| d.full_name = v, event_target_value(&ev))
                        />
                        <FieldError errors=errors field="billing_full_name" />
                    </label>
                    <label class="form-field">
                        <span>"Company Name (Optional)"</span>
                        <input
                            class="form-input"
                            prop:value=move || draft.with(|d| d.company_name.clone())
                            on:input=move |ev| edit("company_name", |d, v| d.company_name = v, event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="form-row">
                    <label class="form-field">
                        <span>"Country"</span>
                        <select
                            class="form-select"
                            prop:value=move || draft.with(|d| d.country.clone())
                            on:change=move |ev| edit("country", |d, v| d.country = v, event_target_value(&ev))
                        >
                            <option value="">"Select country"</option>
                            {mock::COUNTRIES.iter().map(|c| view! { <option value=*c>{*c}</option> }).collect_view()}
                        </select>
                        <FieldError errors=errors field="country" />
                    </label>
                    <label class="form-field">
                        <span>"State/Province"</span>
                        <input
                            class="form-input"
                            prop:value=move || draft.with(|d| d.state.clone())
                            on:input=move |ev| edit("state", |d, v| d.state = v, event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="form-field">
                    <span>"Address"</span>
                    <input
                        class=input_class(errors, "address")
                        prop:value=move || draft.with(|d| d.address.clone())
                        on:input=move |ev| edit("address", |d, v| d.address = v, event_target_value(&ev))
                    />
                    <FieldError errors=errors field="address" />
                </label>
                <div class="form-row">
                    <label class="form-field">
                        <span>"City"</span>
                        <input
                            class=input_class(errors, "city")
                            prop:value=move || draft.with(|d| d.city.clone())
                            on:input=move |ev| edit("city", |d, v| d.city = v, event_target_value(&ev))
                        />
                        <FieldError errors=errors field="city" />
                    </label>
                    <label class="form-field">
                        <span>"Zip Code"</span>
                        <input
                            class=input_class(errors, "zip_code")
                            prop:value=move || draft.with(|d| d.zip_code.clone())
                            on:input=move |ev| edit("zip_code", |d, v| d.zip_code = v, event_target_value(&ev))
                        />
                        <FieldError errors=errors field="zip_code" />
                    </label>
                </div>
                <label class="form-field">
                    <span>"VAT Number (Optional)"</span>
                    <input
                        class="form-input"
                        prop:value=move || draft.with(|d| d.vat_number.clone())
                        on:input=move |ev| edit("vat_number", |d, v| d.vat_number = v, event_target_value(&ev))
                    />
                </label>
                <h4>"Invoice Preferences"</h4>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.email_invoices)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            set_draft.update(|d| d.email_invoices = checked);
                        }
                    />
                    " Email me invoices for every payment"
                </label>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("ada"), "A");
        assert_eq!(initials("Mary Jane Watson"), "MJ");
        assert_eq!(initials(""), "");
    }
}
