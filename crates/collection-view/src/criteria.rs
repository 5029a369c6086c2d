//! Filter Criteria
//!
//! The active set of user-chosen constraints and partial updates to it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::date_range::DateRange;

/// Sentinel value meaning "no constraint on this field"
pub const ALL: &str = "all";

/// Constraint on one enum-valued field
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FacetFilter {
    #[default]
    All,
    /// Exact match on the field value. Unknown values are kept as-is.
    Only(String),
}

impl FacetFilter {
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == ALL {
            FacetFilter::All
        } else {
            FacetFilter::Only(value.to_string())
        }
    }

    pub fn key(&self) -> &str {
        match self {
            FacetFilter::All => ALL,
            FacetFilter::Only(value) => value,
        }
    }

    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            FacetFilter::All => true,
            FacetFilter::Only(wanted) => value == Some(wanted.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Explicit re-sort request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(key: impl Into<String>) -> Self {
        Self { key: key.into(), direction: SortDirection::Ascending }
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self { key: key.into(), direction: SortDirection::Descending }
    }
}

/// Constraints narrowing a displayed collection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring search
    #[serde(default)]
    pub search: String,
    /// Field name -> enum constraint. Missing fields are unconstrained.
    #[serde(default)]
    pub facets: BTreeMap<String, FacetFilter>,
    #[serde(default)]
    pub date_range: DateRange,
    #[serde(default)]
    pub sort: Option<SortSpec>,
}

impl FilterCriteria {
    /// Current constraint on a field
    pub fn facet(&self, field: &str) -> &FacetFilter {
        const UNCONSTRAINED: &FacetFilter = &FacetFilter::All;
        self.facets.get(field).unwrap_or(UNCONSTRAINED)
    }

    /// Trimmed search text, `None` when it constrains nothing
    pub fn search_text(&self) -> Option<&str> {
        let text = self.search.trim();
        (!text.is_empty()).then_some(text)
    }

    /// Whether any filtering constraint is active (sorting does not count)
    pub fn is_constrained(&self) -> bool {
        self.search_text().is_some()
            || self.facets.values().any(|f| *f != FacetFilter::All)
            || self.date_range.is_bounded()
    }

    /// Merge a partial update
    pub fn apply(&mut self, patch: CriteriaPatch) {
        if let Some(search) = patch.search {
            self.search = search;
        }
        for (field, filter) in patch.facets {
            match filter {
                FacetFilter::All => {
                    self.facets.remove(&field);
                }
                only => {
                    self.facets.insert(field, only);
                }
            }
        }
        if let Some(range) = patch.date_range {
            self.date_range = range;
        }
        if let Some(sort) = patch.sort {
            self.sort = sort;
        }
    }
}

/// Partial update to `FilterCriteria`. Unset parts are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaPatch {
    pub search: Option<String>,
    pub facets: Vec<(String, FacetFilter)>,
    pub date_range: Option<DateRange>,
    /// `Some(None)` clears the sort
    pub sort: Option<Option<SortSpec>>,
}

impl CriteriaPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Constrain `field` to `value`; `"all"` removes the constraint
    pub fn facet(mut self, field: impl Into<String>, value: &str) -> Self {
        self.facets.push((field.into(), FacetFilter::parse(value)));
        self
    }

    pub fn date_range(mut self, range: impl Into<DateRange>) -> Self {
        self.date_range = Some(range.into());
        self
    }

    pub fn sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(Some(sort));
        self
    }

    pub fn clear_sort(mut self) -> Self {
        self.sort = Some(None);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.facets.is_empty() && self.date_range.is_none() && self.sort.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_merges_only_set_parts() {
        let mut criteria = FilterCriteria::default();
        criteria.apply(CriteriaPatch::new().search("logo").facet("status", "completed"));
        criteria.apply(CriteriaPatch::new().date_range("30days"));

        assert_eq!(criteria.search, "logo");
        assert_eq!(criteria.facet("status"), &FacetFilter::Only("completed".into()));
        assert_eq!(criteria.date_range, DateRange::LastDays(30));
        assert!(criteria.sort.is_none());
    }

    #[test]
    fn test_all_sentinel_removes_facet() {
        let mut criteria = FilterCriteria::default();
        criteria.apply(CriteriaPatch::new().facet("type", "refund"));
        assert!(criteria.is_constrained());

        criteria.apply(CriteriaPatch::new().facet("type", ALL));
        assert!(criteria.facets.is_empty());
        assert!(!criteria.is_constrained());
    }

    #[test]
    fn test_unknown_facet_value_passes_through() {
        let mut criteria = FilterCriteria::default();
        criteria.apply(CriteriaPatch::new().facet("status", "on-hold"));
        assert_eq!(criteria.facet("status").key(), "on-hold");
    }

    #[test]
    fn test_whitespace_search_is_unconstrained() {
        let mut criteria = FilterCriteria::default();
        criteria.apply(CriteriaPatch::new().search("   "));
        assert_eq!(criteria.search_text(), None);
        assert!(!criteria.is_constrained());
    }

    #[test]
    fn test_sort_set_and_clear() {
        let mut criteria = FilterCriteria::default();
        criteria.apply(CriteriaPatch::new().sort(SortSpec::descending("rating")));
        assert_eq!(criteria.sort, Some(SortSpec::descending("rating")));
        assert!(!criteria.is_constrained());

        criteria.apply(CriteriaPatch::new().clear_sort());
        assert!(criteria.sort.is_none());
    }

    #[test]
    fn test_criteria_deserializes_with_defaults() {
        let criteria: FilterCriteria = serde_json::from_str(r#"{"search":"mike"}"#).unwrap();
        assert_eq!(criteria.search, "mike");
        assert_eq!(criteria.date_range, DateRange::All);
        assert!(criteria.facets.is_empty());
    }

    #[test]
    fn test_criteria_accepts_select_bucket_keys() {
        let criteria: FilterCriteria = serde_json::from_str(r#"{"date_range":"30days"}"#).unwrap();
        assert_eq!(criteria.date_range, DateRange::LastDays(30));

        let json = serde_json::to_value(&criteria).unwrap();
        assert_eq!(json["date_range"], "30days");
    }
}
