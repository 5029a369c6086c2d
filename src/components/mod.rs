//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod field_error;
mod gig_card;
mod gig_carousel;
mod multi_select;
mod navbar;
mod option_selector;
mod star_rating;
mod status_badge;
mod tab_bar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use field_error::{input_class, FieldError};
pub use gig_card::GigCard;
pub use gig_carousel::GigCarousel;
pub use multi_select::MultiSelect;
pub use navbar::Navbar;
pub use option_selector::OptionSelector;
pub use star_rating::{StarInput, Stars};
pub use status_badge::StatusBadge;
pub use tab_bar::TabBar;
