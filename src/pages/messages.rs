//! Messages Page
//!
//! Conversation list with search and unread filter, and the open thread.

use collection_view::{CriteriaPatch, ALL};
use leptos::prelude::*;

use crate::components::OptionSelector;
use crate::context::use_config;
use crate::models::Sender;
use crate::store::{store_mark_read, store_send_message, use_app_store, AppStateStoreFields};

const CONVERSATION_FILTERS: &[(&str, &str)] = &[(ALL, "All"), ("yes", "Unread")];

#[component]
pub fn MessagesPage() -> impl IntoView {
    let store = use_app_store();
    let (selected, set_selected) = signal::<Option<u32>>(Some(1));

    let update = move |patch: CriteriaPatch| store.conversations().update(|view| view.set_criteria(patch));
    let criteria = move || store.conversations().with(|view| view.criteria().clone());
    let rows = move || store.conversations().with(|view| view.snapshot());

    let open = move |id: u32| {
        set_selected.set(Some(id));
        if let Err(err) = store_mark_read(&store, id) {
            web_sys::console::log_1(&format!("[MESSAGES] {}", err).into());
        }
    };

    // The thread opened on arrival counts as read
    if let Some(id) = selected.get_untracked() {
        let _ = store_mark_read(&store, id);
    }

    view! {
        <div class="page messages-page">
            <header class="page-header">
                <h1>"Messages"</h1>
            </header>
            <div class="messages-layout">
                <aside class="card conversation-list">
                    <input
                        type="search"
                        class="form-input"
                        placeholder="Search conversations..."
                        prop:value=move || criteria().search
                        on:input=move |ev| update(CriteriaPatch::new().search(event_target_value(&ev)))
                    />
                    <OptionSelector
                        options=CONVERSATION_FILTERS
                        current=Signal::derive(move || criteria().facet("unread").key().to_string())
                        on_change=move |value: String| update(CriteriaPatch::new().facet("unread", &value))
                    />
                    {move || {
                        let conversations = rows();
                        if conversations.is_empty() {
                            return view! { <p class="muted">"No conversations found"</p> }.into_any();
                        }
                        conversations.into_iter().map(|conversation| {
                            let id = conversation.id;
                            let unread = conversation.unread_count();
                            let is_active = move || selected.get() == Some(id);
                            view! {
                                <button
                                    type="button"
                                    class=move || if is_active() { "conversation active" } else { "conversation" }
                                    on:click=move |_| open(id)
                                >
                                    <span class="avatar">
                                        {conversation.seller.initials.clone()}
                                        {conversation.seller.is_online.then(|| view! { <span class="online-dot"></span> })}
                                    </span>
                                    <span class="conversation-body">
                                        <span class="conversation-top">
                                            <strong>{conversation.seller.name.clone()}</strong>
                                            <span class="muted">{conversation.last_message_time.clone()}</span>
                                        </span>
                                        <span class="muted small">{conversation.gig_title.clone()}</span>
                                        <span class="preview">{conversation.last_message().to_string()}</span>
                                    </span>
                                    {(unread > 0).then(|| view! { <span class="nav-badge">{unread}</span> })}
                                </button>
                            }
                        }).collect_view().into_any()
                    }}
                </aside>

                <section class="card thread">
                    {move || match selected.get() {
                        Some(id) => view! { <Thread conversation_id=id /> }.into_any(),
                        None => view! {
                            <div class="empty-state">
                                <h3>"Select a conversation"</h3>
                                <p class="muted">"Choose a conversation from the list to start messaging"</p>
                            </div>
                        }.into_any(),
                    }}
                </section>
            </div>
        </div>
    }
}

#[component]
fn Thread(conversation_id: u32) -> impl IntoView {
    let config = use_config();
    let store = use_app_store();
    let (draft, set_draft) = signal(String::new());
    let (failure, set_failure) = signal::<Option<String>>(None);

    let conversation = move || store.conversations().with(|view| view.find(&conversation_id).cloned());

    let send = move || {
        let body = draft.get();
        let result = config.with_value(|config| store_send_message(&store, conversation_id, &body, "Just now", config));
        match result {
            Ok(_) => {
                set_draft.set(String::new());
                set_failure.set(None);
            }
            Err(err) => {
                let message = err
                    .field_errors()
                    .get("message")
                    .map(str::to_string)
                    .unwrap_or_else(|| err.to_string());
                set_failure.set(Some(message));
            }
        }
    };

    view! {
        {move || conversation().map(|conversation| view! {
            <header class="thread-header">
                <span class="avatar">{conversation.seller.initials.clone()}</span>
                <div>
                    <h3>{conversation.seller.name.clone()}</h3>
                    <p class="muted small">
                        {if conversation.seller.is_online { "Online" } else { "Offline" }}
                        " · " {conversation.order_number.clone()}
                    </p>
                </div>
            </header>
            <div class="thread-messages">
                {conversation.messages.iter().map(|message| {
                    let class = match message.sender {
                        Sender::Buyer => "bubble outgoing",
                        Sender::Seller => "bubble incoming",
                    };
                    view! {
                        <div class=class>
                            <p>{message.content.clone()}</p>
                            <span class="timestamp">{message.timestamp.clone()}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
        })}
        <form class="thread-compose" on:submit=move |ev: web_sys::SubmitEvent| { ev.prevent_default(); send(); }>
            <textarea
                class="form-input"
                rows="2"
                placeholder="Type your message..."
                prop:value=move || draft.get()
                on:input=move |ev| {
                    set_draft.set(event_target_value(&ev));
                    set_failure.set(None);
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" && !ev.shift_key() {
                        ev.prevent_default();
                        send();
                    }
                }
            ></textarea>
            <button type="submit" class="btn" disabled=move || draft.with(|d| d.trim().is_empty())>"Send"</button>
        </form>
        {move || failure.get().map(|message| view! { <p class="form-error">{message}</p> })}
    }
}
