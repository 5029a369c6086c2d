//! Screens
//!
//! One component per page. `App` picks the current one from the navigation
//! context.

mod billing;
mod browse;
mod checkout;
mod gig_detail;
mod messages;
mod orders;
mod payment;
mod payment_completed;
mod profile;
mod reviews;
mod sign_in;
mod sign_up;

pub use billing::BillingPage;
pub use browse::BrowsePage;
pub use checkout::CheckoutPage;
pub use gig_detail::GigDetailPage;
pub use messages::MessagesPage;
pub use orders::OrdersPage;
pub use payment::PaymentPage;
pub use payment_completed::PaymentCompletedPage;
pub use profile::ProfilePage;
pub use reviews::ReviewsPage;
pub use sign_in::SignInPage;
pub use sign_up::SignUpPage;
