//! Date range buckets relative to a reference date.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A named date window, serialized as its bucket key
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum DateRange {
    /// No constraint
    #[default]
    All,
    /// The `n` days up to and including the reference date
    LastDays(u32),
    /// The reference date's calendar year, up to the reference date
    ThisYear,
    /// A bucket name that is not recognised; constrains nothing
    Other(String),
}

impl DateRange {
    /// Parse a bucket name such as `"all"`, `"30days"` or `"year"`
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        match value {
            "" | "all" => DateRange::All,
            "year" => DateRange::ThisYear,
            _ => match value.strip_suffix("days").map(str::parse::<u32>) {
                Some(Ok(days)) => DateRange::LastDays(days),
                _ => DateRange::Other(value.to_string()),
            },
        }
    }

    /// Bucket name as used by the filter selects
    pub fn key(&self) -> String {
        match self {
            DateRange::All => "all".to_string(),
            DateRange::LastDays(days) => format!("{}days", days),
            DateRange::ThisYear => "year".to_string(),
            DateRange::Other(value) => value.clone(),
        }
    }

    /// Whether this bucket restricts anything
    pub fn is_bounded(&self) -> bool {
        matches!(self, DateRange::LastDays(_) | DateRange::ThisYear)
    }

    /// Check a record date against the bucket
    pub fn contains(&self, date: Option<NaiveDate>, as_of: NaiveDate) -> bool {
        if !self.is_bounded() {
            return true;
        }
        let Some(date) = date else {
            return false;
        };
        if date > as_of {
            return false;
        }
        match self {
            DateRange::LastDays(days) => date >= as_of - Duration::days(i64::from(*days)),
            DateRange::ThisYear => date.year() == as_of.year(),
            _ => true,
        }
    }
}

impl From<&str> for DateRange {
    fn from(value: &str) -> Self {
        DateRange::parse(value)
    }
}

impl From<String> for DateRange {
    fn from(value: String) -> Self {
        DateRange::parse(&value)
    }
}

impl From<DateRange> for String {
    fn from(range: DateRange) -> Self {
        range.key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_known_buckets() {
        assert_eq!(DateRange::parse("all"), DateRange::All);
        assert_eq!(DateRange::parse(""), DateRange::All);
        assert_eq!(DateRange::parse("30days"), DateRange::LastDays(30));
        assert_eq!(DateRange::parse("90days"), DateRange::LastDays(90));
        assert_eq!(DateRange::parse("year"), DateRange::ThisYear);
        assert_eq!(DateRange::parse("fortnight"), DateRange::Other("fortnight".into()));
        assert_eq!(DateRange::parse("xdays"), DateRange::Other("xdays".into()));
    }

    #[test]
    fn test_key_round_trips_through_parse() {
        for key in ["all", "30days", "90days", "year"] {
            assert_eq!(DateRange::parse(key).key(), key);
        }
    }

    #[test]
    fn test_serde_uses_bucket_keys() {
        for key in ["all", "30days", "90days", "year", "decade"] {
            let range = DateRange::parse(key);
            let json = serde_json::to_string(&range).unwrap();
            assert_eq!(json, format!("\"{}\"", key));
            assert_eq!(serde_json::from_str::<DateRange>(&json).unwrap(), range);
        }
        assert_eq!(serde_json::to_string(&DateRange::LastDays(30)).unwrap(), "\"30days\"");
    }

    #[test]
    fn test_last_days_window_is_inclusive() {
        let as_of = day(2024, 3, 20);
        let range = DateRange::LastDays(30);
        assert!(range.contains(Some(day(2024, 3, 20)), as_of));
        assert!(range.contains(Some(day(2024, 2, 19)), as_of));
        assert!(!range.contains(Some(day(2024, 2, 18)), as_of));
        assert!(!range.contains(Some(day(2024, 3, 21)), as_of));
    }

    #[test]
    fn test_this_year() {
        let as_of = day(2024, 3, 20);
        assert!(DateRange::ThisYear.contains(Some(day(2024, 1, 1)), as_of));
        assert!(!DateRange::ThisYear.contains(Some(day(2023, 12, 31)), as_of));
    }

    #[test]
    fn test_unbounded_ranges_accept_missing_dates() {
        let as_of = day(2024, 3, 20);
        assert!(DateRange::All.contains(None, as_of));
        assert!(DateRange::Other("soon".into()).contains(None, as_of));
        assert!(!DateRange::LastDays(90).contains(None, as_of));
    }
}
