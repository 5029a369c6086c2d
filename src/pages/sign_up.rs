//! Sign Up Page

use leptos::prelude::*;

use crate::commands;
use crate::components::{input_class, FieldError};
use crate::context::{use_app_context, use_config, Page};
use crate::error::FieldErrors;
use crate::validation::SignUpForm;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();
    let (email, set_email) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::new());
    let (started, set_started) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match commands::sign_up(&SignUpForm { email: email.get() }) {
            Ok(address) => set_started.set(Some(address)),
            Err(err) => set_errors.set(err.field_errors()),
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit novalidate>
                <button type="button" class="navbar-brand" on:click=move |_| ctx.navigate(Page::Browse)>
                    {config.with_value(|c| c.brand_name.clone())}
                </button>
                <h2>"Create your account"</h2>

                {move || match started.get() {
                    Some(address) => view! {
                        <p class="notice notice-success">{format!("We sent a sign-up link to {}.", address)}</p>
                    }.into_any(),
                    None => view! {
                        <label class="form-field">
                            <span>"Email"</span>
                            <input
                                type="email"
                                class=input_class(errors, "email")
                                placeholder="Enter your email"
                                prop:value=move || email.get()
                                on:input=move |ev| {
                                    set_email.set(event_target_value(&ev));
                                    set_errors.update(|e| e.clear("email"));
                                }
                            />
                            <FieldError errors=errors field="email" />
                        </label>
                        <div class="social-buttons">
                            <button type="button" class="btn btn-outline btn-block">"Continue with Google"</button>
                            <button type="button" class="btn btn-outline btn-block">"Continue with Apple"</button>
                        </div>
                        <button type="submit" class="btn btn-block">"Continue"</button>
                    }.into_any(),
                }}

                <p class="hint">
                    "Already have an account? "
                    <button type="button" class="link-btn" on:click=move |_| ctx.navigate(Page::SignIn)>"Sign in"</button>
                </p>
            </form>
        </div>
    }
}
