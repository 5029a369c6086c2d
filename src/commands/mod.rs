//! Mock Commands
//!
//! Synchronous stand-ins for the backend calls a real marketplace would
//! make, organized by domain. Each command either applies its local state
//! change and returns the result, or returns the reason it was refused.

mod account;
mod billing;
mod message;
mod order;
mod payment;

pub use account::*;
pub use billing::*;
pub use message::*;
pub use order::*;
pub use payment::*;
