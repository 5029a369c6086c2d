//! Collection View
//!
//! Filter criteria and derived views over small in-memory collections.
//! A view owns an immutable source, a mutable set of criteria, and derives
//! the filtered (optionally sorted) subsequence every time it is read.

mod criteria;
mod date_range;
mod record;
mod view;

pub use criteria::{CriteriaPatch, FacetFilter, FilterCriteria, SortDirection, SortSpec, ALL};
pub use date_range::DateRange;
pub use record::Record;
pub use view::{derive, CollectionView};
