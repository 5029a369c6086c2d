//! Status Badge Component

use leptos::prelude::*;

use crate::models::OrderStatus;

#[component]
pub fn StatusBadge(status: OrderStatus) -> impl IntoView {
    view! {
        <span class=format!("status-badge status-{}", status.as_str())>{status.label()}</span>
    }
}
