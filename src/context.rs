//! Application Context
//!
//! Page navigation and configuration shared via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;

/// Screens of the app. Switching is done in memory, there is no URL routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Browse,
    GigDetail(u32),
    Reviews(u32),
    Checkout,
    Payment,
    PaymentCompleted,
    Orders,
    Billing,
    Messages,
    Profile,
    SignIn,
    SignUp,
}

impl Page {
    /// Entries of the navigation bar
    pub const NAV: [(Page, &'static str); 5] = [
        (Page::Browse, "Browse"),
        (Page::Orders, "Orders"),
        (Page::Messages, "Messages"),
        (Page::Billing, "Billing"),
        (Page::Profile, "Profile"),
    ];

    /// Screens shown without the navigation bar
    pub fn is_auth(&self) -> bool {
        matches!(self, Page::SignIn | Page::SignUp)
    }

    /// Whether a nav entry should be highlighted for this page
    pub fn belongs_to(&self, section: Page) -> bool {
        match (self, section) {
            (Page::GigDetail(_) | Page::Reviews(_) | Page::Checkout | Page::Payment | Page::PaymentCompleted, Page::Browse) => true,
            _ => *self == section,
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self { page: page.0, set_page: page.1 }
    }

    pub fn navigate(&self, page: Page) {
        web_sys::console::log_1(&format!("[APP] Navigate to {:?}", page).into());
        self.set_page.set(page);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Configuration is provided once as a stored value so closures can copy it
pub fn use_config() -> StoredValue<AppConfig> {
    use_context::<StoredValue<AppConfig>>().expect("AppConfig should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_flow_highlights_browse() {
        assert!(Page::Checkout.belongs_to(Page::Browse));
        assert!(Page::GigDetail(3).belongs_to(Page::Browse));
        assert!(Page::Orders.belongs_to(Page::Orders));
        assert!(!Page::Orders.belongs_to(Page::Browse));
    }

    #[test]
    fn test_auth_pages() {
        assert!(Page::SignIn.is_auth());
        assert!(!Page::default().is_auth());
    }
}
