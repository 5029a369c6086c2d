//! Filterable Collection View
//!
//! Immutable source + mutable criteria, derived view recomputed on read.

use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::criteria::{CriteriaPatch, FilterCriteria, SortDirection};
use crate::record::Record;

/// Case-insensitive substring test across the record's searched fields
fn matches_search<R: Record>(record: &R, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };
    let needle = needle.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

fn matches_facets<R: Record>(record: &R, criteria: &FilterCriteria) -> bool {
    criteria
        .facets
        .iter()
        .all(|(field, filter)| filter.matches(record.facet(field)))
}

/// Filter (and optionally sort) `source` against `criteria`.
///
/// Source order is preserved unless `criteria.sort` names a key; the sort is
/// stable, so records comparing equal keep their source order.
pub fn derive<'a, R: Record>(source: &'a [R], criteria: &FilterCriteria, as_of: NaiveDate) -> Vec<&'a R> {
    let needle = criteria.search_text();
    let mut derived: Vec<&R> = source
        .iter()
        .filter(|record| {
            matches_search(*record, needle)
                && matches_facets(*record, criteria)
                && criteria.date_range.contains(record.date(), as_of)
        })
        .collect();

    if let Some(sort) = &criteria.sort {
        derived.sort_by(|a, b| {
            let ord = a.compare_by(b, &sort.key).unwrap_or(Ordering::Equal);
            match sort.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
    derived
}

/// A collection with its active criteria
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionView<R> {
    source: Vec<R>,
    criteria: FilterCriteria,
    as_of: NaiveDate,
}

impl<R: Record> CollectionView<R> {
    /// `as_of` is the reference date for date buckets
    pub fn new(source: Vec<R>, as_of: NaiveDate) -> Self {
        Self { source, criteria: FilterCriteria::default(), as_of }
    }

    pub fn with_criteria(mut self, patch: CriteriaPatch) -> Self {
        self.set_criteria(patch);
        self
    }

    pub fn source(&self) -> &[R] {
        &self.source
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Merge a partial criteria update
    pub fn set_criteria(&mut self, patch: CriteriaPatch) {
        if patch.is_empty() {
            return;
        }
        if let Some(crate::DateRange::Other(value)) = &patch.date_range {
            tracing::warn!(bucket = %value, "unrecognised date bucket, not constraining dates");
        }
        self.criteria.apply(patch);
        tracing::debug!(criteria = ?self.criteria, "criteria updated");
    }

    pub fn reset_criteria(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    /// Whether any filter constraint is active
    pub fn is_filtered(&self) -> bool {
        self.criteria.is_constrained()
    }

    /// The derived view
    pub fn derive(&self) -> Vec<&R> {
        derive(&self.source, &self.criteria, self.as_of)
    }

    /// Owned copy of the derived view
    pub fn snapshot(&self) -> Vec<R>
    where
        R: Clone,
    {
        self.derive().into_iter().cloned().collect()
    }

    pub fn find(&self, id: &R::Id) -> Option<&R> {
        self.source.iter().find(|record| record.id() == *id)
    }

    /// Local in-memory update of one record. Returns false if no record has `id`.
    pub fn update_record(&mut self, id: &R::Id, f: impl FnOnce(&mut R)) -> bool {
        match self.source.iter_mut().find(|record| record.id() == *id) {
            Some(record) => {
                f(record);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SortSpec, ALL};
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Debug, Clone, PartialEq)]
    struct Order {
        id: u32,
        title: String,
        seller: String,
        status: &'static str,
        date: NaiveDate,
        price: u32,
        disputed: bool,
    }

    impl Record for Order {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.title.as_str(), self.seller.as_str()]
        }

        fn facet(&self, field: &str) -> Option<&str> {
            match field {
                "status" => Some(self.status),
                _ => None,
            }
        }

        fn date(&self) -> Option<NaiveDate> {
            Some(self.date)
        }

        fn compare_by(&self, other: &Self, key: &str) -> Option<Ordering> {
            match key {
                "price" => Some(self.price.cmp(&other.price)),
                _ => None,
            }
        }
    }

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn make_order(id: u32, title: &str, status: &'static str, date: NaiveDate, price: u32) -> Order {
        Order {
            id,
            title: title.to_string(),
            seller: format!("Seller {}", id),
            status,
            date,
            price,
            disputed: false,
        }
    }

    fn sample() -> Vec<Order> {
        vec![
            make_order(1, "Social media content", "in-progress", day(3, 15), 95),
            make_order(2, "Professional LOGO design", "completed", day(3, 10), 150),
            make_order(3, "Website copy", "delivered", day(3, 5), 200),
            make_order(4, "Animated videos", "cancelled", day(2, 28), 300),
            make_order(5, "Mobile app", "active", day(2, 20), 800),
        ]
    }

    fn ids(derived: &[&Order]) -> Vec<u32> {
        derived.iter().map(|o| o.id).collect()
    }

    #[test]
    fn test_no_constraint_returns_full_source_in_order() {
        let view = CollectionView::new(sample(), day(3, 20));
        assert_eq!(ids(&view.derive()), vec![1, 2, 3, 4, 5]);
        assert!(!view.is_filtered());
    }

    #[test]
    fn test_status_filter_selects_exactly_one() {
        let view = CollectionView::new(sample(), day(3, 20))
            .with_criteria(CriteriaPatch::new().facet("status", "completed"));
        assert_eq!(ids(&view.derive()), vec![2]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let view = CollectionView::new(sample(), day(3, 20)).with_criteria(CriteriaPatch::new().search("logo"));
        assert_eq!(ids(&view.derive()), vec![2]);

        let view = CollectionView::new(sample(), day(3, 20)).with_criteria(CriteriaPatch::new().search("SELLER 4"));
        assert_eq!(ids(&view.derive()), vec![4]);
    }

    #[test]
    fn test_non_matching_records_are_excluded() {
        let view = CollectionView::new(sample(), day(3, 20)).with_criteria(CriteriaPatch::new().search("zzz"));
        assert!(view.derive().is_empty());
    }

    #[test]
    fn test_constraints_combine_with_and() {
        let view = CollectionView::new(sample(), day(3, 20)).with_criteria(
            CriteriaPatch::new()
                .search("o")
                .facet("status", "delivered")
                .date_range("30days"),
        );
        assert_eq!(ids(&view.derive()), vec![3]);
    }

    #[test]
    fn test_date_bucket() {
        let view = CollectionView::new(sample(), day(3, 20)).with_criteria(CriteriaPatch::new().date_range("30days"));
        // 30 days before 2024-03-20 is 2024-02-19
        assert_eq!(ids(&view.derive()), vec![1, 2, 3, 4, 5]);

        let view = CollectionView::new(sample(), day(3, 31)).with_criteria(CriteriaPatch::new().date_range("30days"));
        assert_eq!(ids(&view.derive()), vec![1, 2, 3]);
    }

    #[test]
    fn test_unknown_bucket_does_not_constrain() {
        let view = CollectionView::new(sample(), day(3, 20)).with_criteria(CriteriaPatch::new().date_range("decade"));
        assert_eq!(view.derive().len(), 5);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_unknown_bucket_logs_warning() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut view = CollectionView::new(sample(), day(3, 20));
            view.set_criteria(CriteriaPatch::new().search("logo"));
            view.set_criteria(CriteriaPatch::new().date_range("decade"));
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("WARN"));
        assert!(output.contains("bucket=decade"));
    }

    #[test]
    fn test_unknown_status_matches_nothing() {
        let view = CollectionView::new(sample(), day(3, 20))
            .with_criteria(CriteriaPatch::new().facet("status", "on-hold"));
        assert!(view.derive().is_empty());
        assert!(view.is_filtered());
    }

    #[test]
    fn test_facet_missing_on_record_fails_constraint() {
        let view = CollectionView::new(sample(), day(3, 20)).with_criteria(CriteriaPatch::new().facet("type", "refund"));
        assert!(view.derive().is_empty());
    }

    #[test]
    fn test_derive_is_idempotent() {
        let view = CollectionView::new(sample(), day(3, 20))
            .with_criteria(CriteriaPatch::new().search("e").facet("status", ALL));
        assert_eq!(view.derive(), view.derive());
    }

    #[test]
    fn test_empty_source_yields_empty_result() {
        let view: CollectionView<Order> = CollectionView::new(Vec::new(), day(3, 20)).with_criteria(
            CriteriaPatch::new().search("logo").facet("status", "completed").date_range("year"),
        );
        assert!(view.derive().is_empty());
        assert!(view.is_empty());
    }

    #[test]
    fn test_sort_is_explicit_and_stable() {
        let mut source = sample();
        source.push(make_order(6, "Banner", "active", day(3, 1), 150));
        let view = CollectionView::new(source, day(3, 20))
            .with_criteria(CriteriaPatch::new().sort(SortSpec::descending("price")));
        assert_eq!(ids(&view.derive()), vec![5, 4, 3, 2, 6, 1]);

        let view = view.with_criteria(CriteriaPatch::new().sort(SortSpec::ascending("unknown-key")));
        assert_eq!(ids(&view.derive()), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_update_record_in_place() {
        let mut view = CollectionView::new(sample(), day(3, 20));
        assert!(view.update_record(&3, |o| o.disputed = true));
        assert!(!view.update_record(&42, |o| o.disputed = true));
        assert!(view.find(&3).unwrap().disputed);
        assert_eq!(view.snapshot().iter().filter(|o| o.disputed).count(), 1);
    }

    #[test]
    fn test_reset_criteria() {
        let mut view = CollectionView::new(sample(), day(3, 20));
        view.set_criteria(CriteriaPatch::new().search("mobile"));
        assert_eq!(view.derive().len(), 1);
        view.reset_criteria();
        assert_eq!(view.derive().len(), 5);
    }
}
