//! Sign In Page

use leptos::prelude::*;

use crate::commands;
use crate::components::{input_class, FieldError};
use crate::context::{use_app_context, use_config, Page};
use crate::error::FieldErrors;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::validation::SignInForm;

#[component]
pub fn SignInPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();
    let store = use_app_store();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (errors, set_errors) = signal(FieldErrors::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = SignInForm { email: email.get(), password: password.get() };
        match config.with_value(|c| commands::sign_in(&form, &c.limits)) {
            Ok(signed_in) => {
                store.signed_in_as().set(Some(signed_in));
                ctx.navigate(Page::Browse);
            }
            Err(err) => set_errors.set(err.field_errors()),
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit novalidate>
                <button type="button" class="navbar-brand" on:click=move |_| ctx.navigate(Page::Browse)>
                    {config.with_value(|c| c.brand_name.clone())}
                </button>
                <h2>"Sign in to your account"</h2>

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
                <label class="form-field">
                    <span>"Password"</span>
                    <div class="input-group">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            class=input_class(errors, "password")
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                set_password.set(event_target_value(&ev));
                                set_errors.update(|e| e.clear("password"));
                            }
                        />
                        <button
                            type="button"
                            class="icon-btn"
                            aria-label=move || if show_password.get() { "Hide password" } else { "Show password" }
                            on:click=move |_| set_show_password.update(|s| *s = !*s)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <FieldError errors=errors field="password" />
                </label>

                <div class="social-buttons">
                    <button type="button" class="btn btn-outline btn-block">"Continue with Google"</button>
                    <button type="button" class="btn btn-outline btn-block">"Continue with Apple"</button>
                </div>

                <button type="submit" class="btn btn-block">"Sign In"</button>
                <p class="hint">
                    "Don't have an account? "
                    <button type="button" class="link-btn" on:click=move |_| ctx.navigate(Page::SignUp)>"Sign up"</button>
                </p>
            </form>
        </div>
    }
}
