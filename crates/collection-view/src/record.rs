//! Record trait
//!
//! The contract a collection item fulfils to be filtered by a view.

use chrono::NaiveDate;
use std::cmp::Ordering;

/// An item in a displayed collection
pub trait Record {
    /// The type of the record's unique identifier
    type Id: PartialEq + Clone;

    /// Returns the record's unique identifier
    fn id(&self) -> Self::Id;

    /// Fields matched by the free-text search
    fn search_fields(&self) -> Vec<&str>;

    /// Value of an enum-valued field, `None` if the record has no such field
    fn facet(&self, field: &str) -> Option<&str>;

    /// Date used for bucket filtering
    fn date(&self) -> Option<NaiveDate> {
        None
    }

    /// Ordering by a named key. `None` means the key is not supported.
    fn compare_by(&self, _other: &Self, _key: &str) -> Option<Ordering> {
        None
    }
}
