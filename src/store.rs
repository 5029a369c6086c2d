//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Collections
//! that the screens filter are held as `CollectionView`s so the source and
//! its criteria always change together.

use chrono::NaiveDate;
use collection_view::CollectionView;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::checkout::CheckoutState;
use crate::commands::{self, DisputeArgs, RateArgs};
use crate::config::AppConfig;
use crate::error::CommandResult;
use crate::mock;
use crate::models::{
    BillingInfo, Conversation, Gig, Message, Order, OrderSummary, PaymentMethod, PaymentReceipt, ProfileData, Review,
    Transaction,
};
use crate::validation::{CardForm, PaymentForm};

/// Session-wide application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Gig catalogue behind the browse carousels
    pub gigs: Vec<Gig>,
    pub reviews: CollectionView<Review>,
    pub orders: CollectionView<Order>,
    pub transactions: CollectionView<Transaction>,
    pub conversations: CollectionView<Conversation>,
    pub payment_methods: Vec<PaymentMethod>,
    pub profile: ProfileData,
    pub billing_info: BillingInfo,
    pub checkout: CheckoutState,
    /// Priced order handed from checkout to payment
    pub order_summary: Option<OrderSummary>,
    pub last_receipt: Option<PaymentReceipt>,
    /// Receipts issued this session
    pub receipt_sequence: u32,
    pub signed_in_as: Option<String>,
}

impl AppState {
    /// Seed every collection from the mock data, dated at the configured reference day
    pub fn new(config: &AppConfig) -> Self {
        let as_of = config.reference_date;
        Self {
            gigs: mock::gigs(),
            reviews: CollectionView::new(mock::reviews(), as_of),
            orders: CollectionView::new(mock::orders(), as_of),
            transactions: CollectionView::new(mock::transactions(), as_of),
            conversations: CollectionView::new(mock::conversations(), as_of),
            payment_methods: mock::payment_methods(),
            profile: mock::profile(),
            billing_info: mock::billing_info(),
            checkout: CheckoutState::default(),
            order_summary: None,
            last_receipt: None,
            receipt_sequence: 0,
            signed_in_as: None,
        }
    }

    pub fn as_of(&self) -> NaiveDate {
        self.orders.as_of()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_file_dispute(store: &AppStore, order_id: u32, args: DisputeArgs, config: &AppConfig) -> CommandResult<()> {
    commands::file_dispute(&mut store.orders().write(), order_id, args, &config.limits)
}

pub fn store_rate_order(store: &AppStore, order_id: u32, args: RateArgs, config: &AppConfig) -> CommandResult<()> {
    commands::rate_order(&mut store.orders().write(), order_id, args, &config.limits)
}

pub fn store_send_message(
    store: &AppStore,
    conversation_id: u32,
    body: &str,
    timestamp: &str,
    config: &AppConfig,
) -> CommandResult<Message> {
    commands::send_message(&mut store.conversations().write(), conversation_id, body, timestamp, &config.limits)
}

pub fn store_mark_read(store: &AppStore, conversation_id: u32) -> CommandResult<usize> {
    commands::mark_conversation_read(&mut store.conversations().write(), conversation_id)
}

pub fn store_add_payment_method(store: &AppStore, form: &CardForm) -> CommandResult<PaymentMethod> {
    commands::add_payment_method(&mut store.payment_methods().write(), form)
}

pub fn store_make_default(store: &AppStore, id: u32) -> CommandResult<()> {
    commands::make_default(&mut store.payment_methods().write(), id)
}

pub fn store_remove_payment_method(store: &AppStore, id: u32) -> CommandResult<PaymentMethod> {
    commands::remove_payment_method(&mut store.payment_methods().write(), id)
}

/// Freeze the current checkout into the summary the payment screen charges
pub fn store_begin_payment(store: &AppStore, config: &AppConfig) -> OrderSummary {
    let summary = store
        .checkout()
        .with_untracked(|checkout| checkout.summary(&mock::checkout_package(), &mock::extras(), config));
    store.order_summary().set(Some(summary.clone()));
    summary
}

/// Charge the pending summary and keep the receipt for the confirmation screen
pub fn store_submit_payment(store: &AppStore, form: &PaymentForm, config: &AppConfig) -> CommandResult<PaymentReceipt> {
    let summary = match store.order_summary().get_untracked() {
        Some(summary) => summary,
        None => store_begin_payment(store, config),
    };
    let sequence = store.receipt_sequence().get_untracked() + 1;
    let receipt = commands::submit_payment(
        form,
        &summary,
        &mut store.payment_methods().write(),
        sequence,
        config.reference_date,
    )?;
    store.receipt_sequence().set(sequence);
    store.last_receipt().set(Some(receipt.clone()));
    store.checkout().set(CheckoutState::default());
    Ok(receipt)
}
