//! Record Implementations
//!
//! How each model is searched, faceted, dated and sorted by collection views.

use chrono::NaiveDate;
use collection_view::Record;
use std::cmp::Ordering;

use crate::models::{Conversation, Gig, Order, Review, TopicOption, Transaction};

impl Record for Order {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.order_number.as_str(),
            self.gig_title.as_str(),
            self.seller_name.as_str(),
        ]
    }

    fn facet(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn compare_by(&self, other: &Self, key: &str) -> Option<Ordering> {
        match key {
            "date" => Some(self.date.cmp(&other.date)),
            "price" => self.price.partial_cmp(&other.price),
            _ => None,
        }
    }
}

impl Record for Transaction {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.transaction_id.as_str(),
            self.order_number.as_str(),
            self.service.as_str(),
        ]
    }

    fn facet(&self, field: &str) -> Option<&str> {
        match field {
            "type" => Some(self.kind.as_str()),
            "service" => Some(self.category.as_str()),
            _ => None,
        }
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn compare_by(&self, other: &Self, key: &str) -> Option<Ordering> {
        match key {
            "date" => Some(self.date.cmp(&other.date)),
            "total" => self.total.partial_cmp(&other.total),
            _ => None,
        }
    }
}

impl Record for Gig {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.seller_name.as_str()]
    }

    fn facet(&self, field: &str) -> Option<&str> {
        match field {
            "category" => Some(self.category.as_str()),
            _ => None,
        }
    }

    fn compare_by(&self, other: &Self, key: &str) -> Option<Ordering> {
        match key {
            "popularity" => Some(self.review_count.cmp(&other.review_count)),
            "rating" => self.rating.partial_cmp(&other.rating),
            "price" => Some(self.price.cmp(&other.price)),
            // Catalogue ids are assigned in listing order
            "newest" => Some(self.id.cmp(&other.id)),
            _ => None,
        }
    }
}

impl Record for Review {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.buyer_name.as_str(), self.comment.as_str()]
    }

    fn facet(&self, field: &str) -> Option<&str> {
        match field {
            "stars" => match self.rating {
                1 => Some("1"),
                2 => Some("2"),
                3 => Some("3"),
                4 => Some("4"),
                5 => Some("5"),
                _ => None,
            },
            _ => None,
        }
    }

    fn compare_by(&self, other: &Self, key: &str) -> Option<Ordering> {
        match key {
            "days-ago" => Some(self.days_ago.cmp(&other.days_ago)),
            "rating" => Some(self.rating.cmp(&other.rating)),
            _ => None,
        }
    }
}

impl Record for Conversation {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.seller.name.as_str(), self.gig_title.as_str()]
    }

    fn facet(&self, field: &str) -> Option<&str> {
        match field {
            "unread" => Some(if self.unread_count() > 0 { "yes" } else { "no" }),
            _ => None,
        }
    }
}

impl Record for TopicOption {
    type Id = String;

    fn id(&self) -> String {
        self.value.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.label.as_str()]
    }

    fn facet(&self, _field: &str) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use collection_view::{CollectionView, CriteriaPatch, SortSpec};

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    #[test]
    fn test_orders_status_filter() {
        let view = CollectionView::new(mock::orders(), as_of())
            .with_criteria(CriteriaPatch::new().facet("status", "completed"));
        let derived = view.derive();
        assert_eq!(derived.len(), 1);
        assert_eq!(derived[0].order_number, "ORD-2024-002");
    }

    #[test]
    fn test_orders_search_covers_number_title_and_seller() {
        let search = |text: &str| {
            CollectionView::new(mock::orders(), as_of())
                .with_criteria(CriteriaPatch::new().search(text))
                .snapshot()
                .into_iter()
                .map(|o| o.id)
                .collect::<Vec<_>>()
        };
        assert_eq!(search("logo"), vec![2]);
        assert_eq!(search("ord-2024-004"), vec![4]);
        assert_eq!(search("emma"), vec![3]);
        assert!(search("plumbing").is_empty());
    }

    #[test]
    fn test_transactions_type_and_service_facets() {
        let view = CollectionView::new(mock::transactions(), as_of())
            .with_criteria(CriteriaPatch::new().facet("type", "refund"));
        assert_eq!(view.derive().len(), 1);

        let view = CollectionView::new(mock::transactions(), as_of())
            .with_criteria(CriteriaPatch::new().facet("service", "design"));
        assert!(view.derive().iter().all(|t| t.category.as_str() == "design"));
        assert_eq!(view.derive().len(), 2);
    }

    #[test]
    fn test_transactions_search_logo_matches_service() {
        let view = CollectionView::new(mock::transactions(), as_of())
            .with_criteria(CriteriaPatch::new().search("LOGO"));
        let ids: Vec<u32> = view.derive().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_gigs_sorted_by_popularity() {
        let view = CollectionView::new(mock::gigs(), as_of())
            .with_criteria(CriteriaPatch::new().sort(SortSpec::descending("popularity")));
        let counts: Vec<u32> = view.derive().iter().map(|g| g.review_count).collect();
        let mut sorted = counts.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(counts, sorted);
    }

    #[test]
    fn test_conversation_search() {
        let view = CollectionView::new(mock::conversations(), as_of())
            .with_criteria(CriteriaPatch::new().search("logo"));
        let derived = view.derive();
        assert_eq!(derived.len(), 1);
        assert_eq!(derived[0].seller.name, "Mike Chen");
    }

    #[test]
    fn test_topic_option_search_by_label() {
        let view = CollectionView::new(mock::topic_options(), as_of())
            .with_criteria(CriteriaPatch::new().search("design"));
        let values: Vec<String> = view.derive().iter().map(|t| t.value.clone()).collect();
        assert_eq!(values, vec!["graphic-design", "ui-ux-design"]);
    }

    #[test]
    fn test_review_stars_facet_only_covers_valid_ratings() {
        let review = |id: u32, rating: u8| Review {
            id,
            buyer_name: "Buyer".to_string(),
            rating,
            days_ago: 1,
            comment: String::new(),
        };
        assert_eq!(review(1, 5).facet("stars"), Some("5"));
        assert_eq!(review(2, 0).facet("stars"), None);
        assert_eq!(review(3, 9).facet("stars"), None);

        let view = CollectionView::new(vec![review(1, 5), review(2, 0), review(3, 9)], as_of())
            .with_criteria(CriteriaPatch::new().facet("stars", "5"));
        let ids: Vec<u32> = view.derive().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1]);
    }
}
