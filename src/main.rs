//! Marketplace Frontend Entry Point

mod app;
mod catalog;
mod checkout;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod format;
mod logging;
mod mock;
mod models;
mod pages;
mod records;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(tracing::Level::DEBUG);
    mount_to_body(App);
}
