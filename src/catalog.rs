//! Catalog Sections
//!
//! Browse carousels and review ordering, each expressed as criteria over a
//! collection view of the gig or review catalogue.

use chrono::NaiveDate;
use collection_view::{CollectionView, CriteriaPatch, SortSpec};

use crate::models::{Gig, GigCategory, Review};

/// One titled carousel on the browse screen
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseSection {
    pub key: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub show_view_all: bool,
    pub gigs: Vec<Gig>,
}

fn section(
    key: &'static str,
    title: &'static str,
    subtitle: Option<&'static str>,
    show_view_all: bool,
    gigs: Vec<Gig>,
) -> BrowseSection {
    BrowseSection { key, title, subtitle, show_view_all, gigs }
}

fn derived(catalog: &[Gig], as_of: NaiveDate, patch: CriteriaPatch) -> Vec<Gig> {
    CollectionView::new(catalog.to_vec(), as_of).with_criteria(patch).snapshot()
}

/// Carousels in display order. Empty sections are left out.
pub fn browse_sections(catalog: &[Gig], as_of: NaiveDate) -> Vec<BrowseSection> {
    let in_category = |category: GigCategory| {
        derived(catalog, as_of, CriteriaPatch::new().facet("category", category.as_str()))
    };

    let sections = vec![
        section(
            "continue",
            "Continue Browsing",
            Some("Pick up where you left off"),
            false,
            catalog.iter().take(3).cloned().collect(),
        ),
        section(
            "popular",
            "Most Popular Gigs",
            Some("Trending services our community loves"),
            true,
            derived(catalog, as_of, CriteriaPatch::new().sort(SortSpec::descending("popularity"))),
        ),
        section(
            "recommended",
            "Recommended for You",
            Some("Personalized picks based on your interests"),
            true,
            catalog.iter().skip(1).take(3).cloned().collect(),
        ),
        section(
            "graphics-design",
            "Top in Graphics & Design",
            None,
            true,
            in_category(GigCategory::GraphicsDesign),
        ),
        section("technology", "Top in Technology", None, true, in_category(GigCategory::Technology)),
        section(
            "recent",
            "Recently Added Gigs",
            Some("Fresh talent and new opportunities"),
            true,
            derived(catalog, as_of, CriteriaPatch::new().sort(SortSpec::descending("newest"))),
        ),
    ];

    sections.into_iter().filter(|s| !s.gigs.is_empty()).collect()
}

/// Review ordering choices: (value, label)
pub const REVIEW_SORT_OPTIONS: &[(&str, &str)] = &[
    ("most-relevant", "Most Relevant"),
    ("most-recent", "Most Recent"),
    ("highest-rated", "Highest Rated"),
    ("lowest-rated", "Lowest Rated"),
];

/// Criteria update for a review sort choice. "Most relevant" keeps catalogue order.
pub fn review_sort_patch(option: &str) -> CriteriaPatch {
    match option {
        "most-recent" => CriteriaPatch::new().sort(SortSpec::ascending("days-ago")),
        "highest-rated" => CriteriaPatch::new().sort(SortSpec::descending("rating")),
        "lowest-rated" => CriteriaPatch::new().sort(SortSpec::ascending("rating")),
        _ => CriteriaPatch::new().clear_sort(),
    }
}

/// Average star rating, `None` for no reviews
pub fn average_rating(reviews: &[Review]) -> Option<f32> {
    if reviews.is_empty() {
        return None;
    }
    let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    Some(total as f32 / reviews.len() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    fn ids(gigs: &[Gig]) -> Vec<u32> {
        gigs.iter().map(|g| g.id).collect()
    }

    fn find<'a>(sections: &'a [BrowseSection], key: &str) -> &'a BrowseSection {
        sections.iter().find(|s| s.key == key).unwrap()
    }

    #[test]
    fn test_browse_sections() {
        let sections = browse_sections(&mock::gigs(), as_of());
        assert_eq!(sections.len(), 6);
        assert_eq!(ids(&find(&sections, "continue").gigs), vec![1, 2, 3]);
        assert_eq!(ids(&find(&sections, "popular").gigs), vec![3, 1, 5, 2, 4]);
        assert_eq!(ids(&find(&sections, "recommended").gigs), vec![2, 3, 4]);
        assert_eq!(ids(&find(&sections, "graphics-design").gigs), vec![1, 4]);
        assert_eq!(ids(&find(&sections, "technology").gigs), vec![3]);
        assert_eq!(ids(&find(&sections, "recent").gigs), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_empty_catalog_has_no_sections() {
        assert!(browse_sections(&[], as_of()).is_empty());
    }

    #[test]
    fn test_category_without_gigs_is_omitted() {
        let catalog: Vec<Gig> = mock::gigs()
            .into_iter()
            .filter(|g| g.category != GigCategory::Technology)
            .collect();
        let sections = browse_sections(&catalog, as_of());
        assert!(sections.iter().all(|s| s.key != "technology"));
    }

    #[test]
    fn test_review_sorting() {
        let order = |option: &str| {
            CollectionView::new(mock::reviews(), as_of())
                .with_criteria(review_sort_patch(option))
                .derive()
                .iter()
                .map(|r| r.id)
                .collect::<Vec<_>>()
        };
        assert_eq!(order("most-relevant"), vec![1, 2, 3, 4, 5]);
        assert_eq!(order("most-recent"), vec![1, 2, 3, 4, 5]);
        assert_eq!(order("highest-rated"), vec![1, 2, 4, 3, 5]);
        assert_eq!(order("lowest-rated"), vec![3, 5, 1, 2, 4]);
    }

    #[test]
    fn test_average_rating() {
        assert_eq!(average_rating(&[]), None);
        let avg = average_rating(&mock::reviews()).unwrap();
        assert!((avg - 4.6).abs() < 1e-6);
    }
}
