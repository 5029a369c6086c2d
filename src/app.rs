//! Marketplace Frontend App
//!
//! Root component: provides configuration, the store and navigation, then
//! renders the navigation bar and the current page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::Navbar;
use crate::config::AppConfig;
use crate::context::{AppContext, Page};
use crate::pages::{
    BillingPage, BrowsePage, CheckoutPage, GigDetailPage, MessagesPage, OrdersPage, PaymentCompletedPage, PaymentPage,
    ProfilePage, ReviewsPage, SignInPage, SignUpPage,
};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    web_sys::console::log_1(
        &format!("[APP] Starting {} (reference date {})", config.brand_name, config.reference_date).into(),
    );

    // State
    let store = Store::new(AppState::new(&config));
    let page = signal(Page::default());

    // Provide context to all children
    provide_context(StoredValue::new(config));
    provide_context(store);
    let ctx = AppContext::new(page);
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <Show when=move || !ctx.page.get().is_auth()>
                <Navbar />
            </Show>
            <main class="main-content">
                {move || match ctx.page.get() {
                    Page::Browse => view! { <BrowsePage /> }.into_any(),
                    Page::GigDetail(id) => view! { <GigDetailPage gig_id=id /> }.into_any(),
                    Page::Reviews(id) => view! { <ReviewsPage gig_id=id /> }.into_any(),
                    Page::Checkout => view! { <CheckoutPage /> }.into_any(),
                    Page::Payment => view! { <PaymentPage /> }.into_any(),
                    Page::PaymentCompleted => view! { <PaymentCompletedPage /> }.into_any(),
                    Page::Orders => view! { <OrdersPage /> }.into_any(),
                    Page::Billing => view! { <BillingPage /> }.into_any(),
                    Page::Messages => view! { <MessagesPage /> }.into_any(),
                    Page::Profile => view! { <ProfilePage /> }.into_any(),
                    Page::SignIn => view! { <SignInPage /> }.into_any(),
                    Page::SignUp => view! { <SignUpPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
