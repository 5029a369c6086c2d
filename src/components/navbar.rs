//! Navigation Bar Component
//!
//! Brand, section links and the account entry point.

use leptos::prelude::*;

use crate::context::{use_app_context, use_config, Page};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let brand_name = use_config().with_value(|c| c.brand_name.clone());
    let store = use_app_store();
    let (menu_open, set_menu_open) = signal(false);

    let unread = move || {
        store
            .conversations()
            .with(|view| view.source().iter().map(|c| c.unread_count()).sum::<usize>())
    };

    let go = move |page: Page| {
        set_menu_open.set(false);
        ctx.navigate(page);
    };

    view! {
        <nav class="navbar">
            <button type="button" class="navbar-brand" on:click=move |_| go(Page::Browse)>
                {brand_name}
            </button>

            <button
                type="button"
                class="navbar-toggle"
                aria-label="Toggle menu"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>

            <div class=move || if menu_open.get() { "navbar-links open" } else { "navbar-links" }>
                {Page::NAV.iter().map(|(page, label)| {
                    let page = *page;
                    let is_active = move || ctx.page.get().belongs_to(page);
                    view! {
                        <button
                            type="button"
                            class=move || if is_active() { "nav-link active" } else { "nav-link" }
                            on:click=move |_| go(page)
                        >
                            {*label}
                            {(page == Page::Messages).then(|| view! {
                                <Show when=move || { unread() > 0 }>
                                    <span class="nav-badge">{unread}</span>
                                </Show>
                            })}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="navbar-account">
                {move || match store.signed_in_as().get() {
                    Some(email) => view! { <span class="navbar-user">{email}</span> }.into_any(),
                    None => view! {
                        <button type="button" class="btn btn-outline" on:click=move |_| go(Page::SignIn)>
                            "Sign in"
                        </button>
                    }.into_any(),
                }}
            </div>
        </nav>
    }
}
